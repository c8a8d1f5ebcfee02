//! Search nodes, the per-run node arena, and path reconstruction.
//!
//! Parent links are [`NodeId`] indices into a [`NodeArena`], never references.
//! A child is always pushed after its parent, so every parent id is strictly
//! smaller than its child's id and the parent chain cannot cycle.

use mazewalk_grid::{Action, Coordinate};

/// Index of a node in its run's [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One vertex of the implicit search tree. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub id: NodeId,
    pub state: Coordinate,
    /// `None` for the root.
    pub parent: Option<NodeId>,
    /// The move that reached `state` from the parent. `None` for the root.
    pub action: Option<Action>,
    /// Tree depth (root = 0). Cost-ordered frontiers key on this.
    pub depth: u32,
}

impl SearchNode {
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Root-to-goal path, root excluded.
///
/// `cells[i]` is reached from `cells[i - 1]` (or from the start, for `i == 0`)
/// by `actions[i]`. Both vectors always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub actions: Vec<Action>,
    pub cells: Vec<Coordinate>,
}

impl Solution {
    /// Number of steps from start to goal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when start and goal coincide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Append-only storage for every node created during one run.
///
/// Nodes are retained for the whole run so the solution can be rebuilt by
/// walking parent links back from the goal.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a root node (no parent, no action, depth 0).
    pub fn push_root(&mut self, state: Coordinate) -> SearchNode {
        let node = SearchNode {
            id: NodeId(self.nodes.len()),
            state,
            parent: None,
            action: None,
            depth: 0,
        };
        self.nodes.push(node);
        node
    }

    /// Allocate a child of `parent`, reached by `action`.
    pub fn push_child(
        &mut self,
        parent: &SearchNode,
        state: Coordinate,
        action: Action,
    ) -> SearchNode {
        debug_assert!(parent.id.0 < self.nodes.len(), "parent not in this arena");
        let node = SearchNode {
            id: NodeId(self.nodes.len()),
            state,
            parent: Some(parent.id),
            action: Some(action),
            depth: parent.depth.saturating_add(1),
        };
        self.nodes.push(node);
        node
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.nodes.iter()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Rebuild the path from the root to `id`, excluding the root.
    ///
    /// An unknown `id` yields an empty solution.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Solution {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut cursor = self.get(id);

        while let Some(node) = cursor {
            let (Some(parent), Some(action)) = (node.parent, node.action) else {
                break;
            };
            actions.push(action);
            cells.push(node.state);
            cursor = self.get(parent);
        }

        actions.reverse();
        cells.reverse();
        Solution { actions, cells }
    }
}
