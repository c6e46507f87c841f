//! Split caller overlays into the background and foreground slots.

use std::sync::Arc;

use crate::layers::overlay::{Child, Children, KindSet, Overlay};

/// Overlays assigned to each slot, in author order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerGroups {
    /// Drawn above the static full-width path.
    pub background: Vec<Overlay>,
    /// Drawn above the animated gradient path, clipped to the reveal width.
    pub foreground: Vec<Overlay>,
}

/// Flatten nested fragments into one author-ordered sequence, skipping empty slots.
pub fn flatten(children: &[Child]) -> Vec<&Overlay> {
    fn walk<'a>(children: &'a [Child], out: &mut Vec<&'a Overlay>) {
        for child in children {
            match child {
                Child::Overlay(o) => out.push(o),
                Child::Fragment(nested) => walk(nested, out),
                Child::Empty => {}
            }
        }
    }

    let mut out = Vec::new();
    walk(children, &mut out);
    out
}

/// Partition `children` by kind tag.
///
/// A kind present in both sets lands in both groups. Untagged overlays and kinds in
/// neither set are dropped.
pub fn classify(children: &[Child], background: KindSet, foreground: KindSet) -> LayerGroups {
    let mut groups = LayerGroups::default();
    for overlay in flatten(children) {
        let Some(kind) = overlay.kind() else {
            continue;
        };
        if background.contains(kind) {
            groups.background.push(overlay.clone());
        }
        if foreground.contains(kind) {
            groups.foreground.push(overlay.clone());
        }
    }
    groups
}

/// Memoized [`classify`] keyed on child-collection identity.
#[derive(Debug)]
pub struct LayerCache {
    background: KindSet,
    foreground: KindSet,
    source: Option<Children>,
    groups: Arc<LayerGroups>,
}

impl Default for LayerCache {
    fn default() -> Self {
        Self::new(KindSet::BACKGROUND, KindSet::FOREGROUND)
    }
}

impl LayerCache {
    /// Cache with custom kind sets.
    pub fn new(background: KindSet, foreground: KindSet) -> Self {
        Self {
            background,
            foreground,
            source: None,
            groups: Arc::new(LayerGroups::default()),
        }
    }

    /// Groups for `children`, reclassifying only when a different collection is passed.
    pub fn groups(&mut self, children: &Children) -> Arc<LayerGroups> {
        let fresh = self
            .source
            .as_ref()
            .is_some_and(|prev| prev.same_as(children));
        if !fresh {
            let groups = classify(children.as_slice(), self.background, self.foreground);
            tracing::debug!(
                background = groups.background.len(),
                foreground = groups.foreground.len(),
                "classified overlay children"
            );
            self.groups = Arc::new(groups);
            self.source = Some(children.clone());
        }
        Arc::clone(&self.groups)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/classify.rs"]
mod tests;
