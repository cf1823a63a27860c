use super::graph::EdgeKey;

/// Single source of truth for which logical dependency edges are currently
/// highlighted. Owned by the view model and consulted by every edge rendering
/// in the same view, including duplicate renderings of one logical edge.
///
/// Membership is decided by `EdgeKey` value equality, never by which renderer
/// instance asked. The set is always replaced wholesale: hover installs a
/// singleton, leaving installs the empty set. Nothing here is incremental.
#[derive(Debug, Default)]
pub(super) struct HighlightCoordinator {
    highlighted: Vec<EdgeKey>,
}

impl HighlightCoordinator {
    pub(super) fn is_highlighted(&self, edge: &EdgeKey) -> bool {
        self.highlighted.iter().any(|candidate| candidate == edge)
    }

    pub(super) fn set_highlighted(&mut self, edges: Vec<EdgeKey>) {
        self.highlighted = edges;
    }

    pub(super) fn clear(&mut self) {
        self.highlighted.clear();
    }

    pub(super) fn highlighted(&self) -> &[EdgeKey] {
        &self.highlighted
    }
}
