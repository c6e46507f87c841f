use std::fmt;
use std::sync::Arc;

use crate::render::plan::{LayerPainter, PathContext};

/// Fixed kind tag an overlay declares at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum OverlayKind {
    /// Highlighted segment of the line.
    Highlight,
    /// Horizontal reference line.
    HorizontalLine,
    /// Area gradient under the line.
    Gradient,
    /// Dot marking a point on the line.
    Dot,
    /// Tooltip attached to a point on the line.
    Tooltip,
}

impl OverlayKind {
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Small set of [`OverlayKind`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KindSet(u8);

impl KindSet {
    /// No kinds.
    pub const EMPTY: Self = Self(0);

    /// Kinds drawn beneath the static path's overlay slot.
    pub const BACKGROUND: Self = Self::of(&[
        OverlayKind::Highlight,
        OverlayKind::HorizontalLine,
        OverlayKind::Gradient,
        OverlayKind::Dot,
        OverlayKind::Tooltip,
    ]);

    /// Kinds drawn above the animated reveal, clipped with it.
    pub const FOREGROUND: Self = Self::of(&[OverlayKind::Highlight, OverlayKind::Dot]);

    /// Build a set from a list of kinds.
    pub const fn of(kinds: &[OverlayKind]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < kinds.len() {
            bits |= kinds[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Copy with `kind` added.
    pub const fn with(self, kind: OverlayKind) -> Self {
        Self(self.0 | kind.bit())
    }

    /// Return `true` when `kind` is in the set.
    pub const fn contains(self, kind: OverlayKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Return `true` when the set has no kinds.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Drawing side of an overlay. Implementations read color and inactive state from the
/// [`PathContext`] of the pass they are drawn in.
pub trait OverlayWidget: fmt::Debug + Send + Sync {
    /// Emit draw ops for one pass.
    fn paint(&self, painter: &mut LayerPainter, ctx: &PathContext);
}

/// Overlay element: an optional kind tag plus the widget that draws it.
///
/// Cloning is cheap; clones share the widget and compare equal.
#[derive(Clone, Debug)]
pub struct Overlay {
    kind: Option<OverlayKind>,
    widget: Arc<dyn OverlayWidget>,
}

impl Overlay {
    /// Tagged overlay.
    pub fn new(kind: OverlayKind, widget: impl OverlayWidget + 'static) -> Self {
        Self {
            kind: Some(kind),
            widget: Arc::new(widget),
        }
    }

    /// Overlay without a recognizable kind. The classifier drops it.
    pub fn untagged(widget: impl OverlayWidget + 'static) -> Self {
        Self {
            kind: None,
            widget: Arc::new(widget),
        }
    }

    /// Declared kind, if any.
    pub fn kind(&self) -> Option<OverlayKind> {
        self.kind
    }

    /// Emit this overlay's draw ops.
    pub fn paint(&self, painter: &mut LayerPainter, ctx: &PathContext) {
        self.widget.paint(painter, ctx);
    }
}

impl PartialEq for Overlay {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && Arc::ptr_eq(&self.widget, &other.widget)
    }
}

/// Possibly nested child collection as authored by the caller.
#[derive(Clone, Debug)]
pub enum Child {
    /// A single overlay.
    Overlay(Overlay),
    /// A nested group, flattened in place.
    Fragment(Vec<Child>),
    /// Placeholder for a conditionally omitted child.
    Empty,
}

impl From<Overlay> for Child {
    fn from(overlay: Overlay) -> Self {
        Self::Overlay(overlay)
    }
}

impl From<Vec<Child>> for Child {
    fn from(children: Vec<Child>) -> Self {
        Self::Fragment(children)
    }
}

/// Shared child collection. Identity, not content, decides when layer groups are rebuilt.
#[derive(Clone, Debug)]
pub struct Children(Arc<[Child]>);

impl Children {
    /// Wrap a child list.
    pub fn new(children: Vec<Child>) -> Self {
        Self(children.into())
    }

    /// No children.
    pub fn none() -> Self {
        Self::new(Vec::new())
    }

    /// Return `true` when both handles point at the same collection.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Borrow the top-level children.
    pub fn as_slice(&self) -> &[Child] {
        &self.0
    }
}

impl FromIterator<Child> for Children {
    fn from_iter<I: IntoIterator<Item = Child>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
