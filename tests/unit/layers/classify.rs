use super::*;
use crate::layers::overlay::{OverlayKind, OverlayWidget};
use crate::render::plan::{LayerPainter, PathContext};

#[derive(Debug)]
struct Blank;

impl OverlayWidget for Blank {
    fn paint(&self, _painter: &mut LayerPainter, _ctx: &PathContext) {}
}

fn tagged(kind: OverlayKind) -> Overlay {
    Overlay::new(kind, Blank)
}

#[test]
fn flatten_preserves_author_order_through_fragments() {
    let a = tagged(OverlayKind::Dot);
    let b = tagged(OverlayKind::Tooltip);
    let c = tagged(OverlayKind::Highlight);
    let children = vec![
        Child::from(a.clone()),
        Child::Empty,
        Child::Fragment(vec![
            Child::from(b.clone()),
            Child::Fragment(vec![Child::from(c.clone())]),
        ]),
    ];
    let flat: Vec<Overlay> = flatten(&children).into_iter().cloned().collect();
    assert_eq!(flat, vec![a, b, c]);
}

#[test]
fn default_sets_duplicate_dot_and_highlight() {
    let dot = tagged(OverlayKind::Dot);
    let line = tagged(OverlayKind::HorizontalLine);
    let hl = tagged(OverlayKind::Highlight);
    let children: Vec<Child> = vec![dot.clone().into(), line.clone().into(), hl.clone().into()];

    let g = classify(&children, KindSet::BACKGROUND, KindSet::FOREGROUND);
    assert_eq!(g.background, vec![dot.clone(), line, hl.clone()]);
    assert_eq!(g.foreground, vec![dot, hl]);
}

#[test]
fn untagged_and_unlisted_kinds_are_dropped() {
    let unknown = Overlay::untagged(Blank);
    let tooltip = tagged(OverlayKind::Tooltip);
    let children: Vec<Child> = vec![unknown.into(), tooltip.clone().into()];

    let g = classify(&children, KindSet::EMPTY, KindSet::of(&[OverlayKind::Dot]));
    assert!(g.background.is_empty());
    assert!(g.foreground.is_empty());

    let g = classify(&children, KindSet::BACKGROUND, KindSet::EMPTY);
    assert_eq!(g.background, vec![tooltip]);
}

#[test]
fn kind_set_membership() {
    let set = KindSet::EMPTY.with(OverlayKind::Gradient);
    assert!(set.contains(OverlayKind::Gradient));
    assert!(!set.contains(OverlayKind::Dot));
    assert!(KindSet::EMPTY.is_empty());
    assert!(KindSet::FOREGROUND.contains(OverlayKind::Highlight));
    assert!(!KindSet::FOREGROUND.contains(OverlayKind::Tooltip));
}

#[test]
fn cache_reclassifies_only_on_new_collection() {
    let children = Children::new(vec![tagged(OverlayKind::Dot).into()]);
    let mut cache = LayerCache::default();

    let first = cache.groups(&children);
    let again = cache.groups(&children.clone());
    assert!(Arc::ptr_eq(&first, &again));

    // Same content, different collection: rebuilt.
    let other = Children::new(children.as_slice().to_vec());
    let rebuilt = cache.groups(&other);
    assert!(!Arc::ptr_eq(&first, &rebuilt));
    assert_eq!(*first, *rebuilt);
}
