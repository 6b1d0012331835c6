//! Adjacency resolution
//!
//! Ancestors and children are stored as flat identifier lists on each
//! category, so traversal is a single lookup per listed edge.

use tracing::warn;

use super::records::{CategoryId, CategorySnippet};

/// Which edge list is being resolved, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edge {
    Ancestors,
    Children,
}

impl Edge {
    fn as_str(self) -> &'static str {
        match self {
            Edge::Ancestors => "ancestors",
            Edge::Children => "children",
        }
    }
}

/// Resolve `targets` into snippets, keeping their stored order.
///
/// Identifiers that no longer resolve are skipped.
pub(crate) fn resolve_edges<F>(
    owner: CategoryId,
    edge: Edge,
    targets: &[CategoryId],
    mut lookup: F,
) -> Vec<CategorySnippet>
where
    F: FnMut(&CategoryId) -> Option<CategorySnippet>,
{
    targets
        .iter()
        .filter_map(|target| {
            let snippet = lookup(target);

            if snippet.is_none() {
                warn!(
                    category = %owner,
                    edge = edge.as_str(),
                    target = %target,
                    "category edge does not resolve"
                );
            }

            snippet
        })
        .collect()
}
