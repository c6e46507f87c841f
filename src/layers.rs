pub(crate) mod classify;
pub(crate) mod overlay;
pub(crate) mod widgets;
