pub(crate) mod activity;
pub(crate) mod controller;
pub(crate) mod options;
