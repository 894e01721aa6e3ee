use std::collections::HashMap;
use std::hash::Hash;

use crate::frontier::{Prioritized, PriorityFrontier};

// ---------------------------------------------------------------------------
// Per-session node slots
// ---------------------------------------------------------------------------

/// Bookkeeping for one node identity within a search session.
///
/// `g` and `parent` are the session's cost and predecessor maps, stored
/// inline and indexed through the registry.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode<N> {
    pub(crate) location: N,
    /// f = g + h as of the last time this node was queued.
    pub(crate) priority: f32,
    /// Best known cost from the start. `None` until first reached.
    pub(crate) g: Option<f32>,
    /// Slot this node was most cheaply reached from. The start points to
    /// itself.
    pub(crate) parent: usize,
    /// Queued and not yet expanded at its current cost.
    pub(crate) open: bool,
}

/// Frontier handle into the slot arena, ordered by the priority it was
/// queued with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) priority: f32,
}

impl Prioritized for NodeRef {
    fn priority(&self) -> f32 {
        self.priority
    }
}

// ---------------------------------------------------------------------------
// SearchSession
// ---------------------------------------------------------------------------

/// All mutable state of an A* search: node registry, cost and predecessor
/// bookkeeping, frontier, and a neighbor scratch buffer.
///
/// A session is cleared at the start of every search that uses it, so
/// results never depend on earlier searches. Keeping a session around only
/// saves allocations.
pub struct SearchSession<N> {
    pub(crate) registry: HashMap<N, usize>,
    pub(crate) nodes: Vec<SearchNode<N>>,
    pub(crate) frontier: PriorityFrontier<NodeRef>,
    pub(crate) nbuf: Vec<N>,
}

impl<N: Eq + Hash + Clone> SearchSession<N> {
    /// Create an empty session.
    pub fn new() -> Self {
        Self {
            registry: HashMap::new(),
            nodes: Vec::new(),
            frontier: PriorityFrontier::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Drop all per-search state, keeping allocations.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.nodes.clear();
        self.frontier.clear();
        self.nbuf.clear();
    }

    /// Number of distinct nodes registered since the last reset.
    pub fn discovered(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `node` was reached during the last search.
    pub fn is_discovered(&self, node: &N) -> bool {
        self.registry.contains_key(node)
    }

    /// Best known cost of `node` from the start of the last search.
    pub fn cost_of(&self, node: &N) -> Option<f32> {
        self.registry.get(node).and_then(|&i| self.nodes[i].g)
    }

    /// Slot for `node`, creating it on first reference.
    pub(crate) fn resolve(&mut self, node: &N) -> usize {
        if let Some(&idx) = self.registry.get(node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(SearchNode {
            location: node.clone(),
            priority: 0.0,
            g: None,
            parent: idx,
            open: false,
        });
        self.registry.insert(node.clone(), idx);
        idx
    }

    /// Record `g` for slot `idx`, reached from `parent`, and queue it at
    /// `priority`.
    pub(crate) fn open(&mut self, idx: usize, parent: usize, g: f32, priority: f32) {
        let n = &mut self.nodes[idx];
        n.g = Some(g);
        n.priority = priority;
        n.parent = parent;
        n.open = true;
        self.frontier.insert(NodeRef { idx, priority });
    }

    /// Walk predecessors from `idx` back to the self-mapped start and return
    /// the locations in start-to-`idx` order.
    pub(crate) fn path_to(&self, mut idx: usize) -> Vec<N> {
        let mut path = Vec::new();
        loop {
            let n = &self.nodes[idx];
            path.push(n.location.clone());
            if n.parent == idx {
                break;
            }
            idx = n.parent;
        }
        path.reverse();
        path
    }
}

impl<N: Eq + Hash + Clone> Default for SearchSession<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_unique_per_identity() {
        let mut s = SearchSession::new();
        let a = s.resolve(&"a");
        let b = s.resolve(&"b");
        assert_ne!(a, b);
        assert_eq!(s.resolve(&"a"), a);
        assert_eq!(s.discovered(), 2);
        assert_eq!(s.nodes[a].parent, a);
        assert_eq!(s.cost_of(&"a"), None);
    }

    #[test]
    fn path_to_follows_parents() {
        let mut s = SearchSession::new();
        let a = s.resolve(&'a');
        let b = s.resolve(&'b');
        let c = s.resolve(&'c');
        s.open(a, a, 0.0, 0.0);
        s.open(b, a, 1.0, 1.0);
        s.open(c, b, 2.0, 2.0);

        assert_eq!(s.path_to(c), vec!['a', 'b', 'c']);
        assert_eq!(s.path_to(a), vec!['a']);
        assert_eq!(s.cost_of(&'c'), Some(2.0));
        assert_eq!(s.frontier.size(), 3);
    }

    #[test]
    fn reset_clears_everything() {
        let mut s = SearchSession::new();
        let a = s.resolve(&1u32);
        s.open(a, a, 0.0, 4.0);
        s.reset();

        assert_eq!(s.discovered(), 0);
        assert!(!s.is_discovered(&1));
        assert!(s.frontier.is_empty());
        // Fresh slot starts from the defaults again.
        let a = s.resolve(&1);
        assert_eq!(s.nodes[a].priority, 0.0);
        assert_eq!(s.nodes[a].g, None);
    }
}
