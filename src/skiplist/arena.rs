// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use getset::{
    CopyGetters,
    Getters,
};
use tracing::trace;

/// Stable index of a node inside a [`NodeArena`].
pub(crate) type NodeId = usize;

/// A successor at one level; `None` is the end of that level's chain.
pub(crate) type Link = Option<NodeId>;

/// A stored key plus one forward link per level it participates in. The
/// number of links is fixed at creation.
#[derive(Debug, CopyGetters, Getters)]
pub(crate) struct Node {
    #[getset(get_copy = "pub(crate)")]
    key: i64,
    #[getset(get = "pub(crate)")]
    forward: Vec<Link>,
}

impl Node {
    fn new(key: i64, level: usize) -> Self {
        Node {
            key,
            forward: vec![None; level + 1],
        }
    }

    /// The highest level this node is linked into.
    pub(crate) fn level(&self) -> usize {
        self.forward.len() - 1
    }

    pub(crate) fn set_next(&mut self, level: usize, next: Link) {
        self.forward[level] = next;
    }
}

/// Owns every non-header node. Released slots are kept on a free list and
/// handed out again by later allocations, so ids stay stable and delete-heavy
/// workloads don't grow the backing vector.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Option<Node>>,
    free: Vec<NodeId>,
}

impl NodeArena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of slots ever handed out, live or free.
    #[cfg(test)]
    pub(crate) fn slots(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn alloc(&mut self, key: i64, level: usize) -> NodeId {
        let node = Node::new(key, level);
        match self.free.pop() {
            | Some(id) => {
                trace!(id, key, "reusing released node slot");
                self.slots[id] = Some(node);
                id
            },
            | None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            },
        }
    }

    /// Drop the node at `id` and make its slot available again. The caller
    /// must have unlinked it from every level first.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node> {
        let node = self.slots.get_mut(id)?.take()?;
        self.free.push(id);
        Some(node)
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        match &self.slots[id] {
            | Some(node) => node,
            | None => unreachable!("link points at released node slot {}", id),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.slots[id] {
            | Some(node) => node,
            | None => unreachable!("link points at released node slot {}", id),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::NodeArena;

    #[test]
    fn test_alloc_sizes_forward() {
        let mut arena = NodeArena::default();
        let id = arena.alloc(7, 3);
        let node = arena.node(id);
        assert_eq!(node.key(), 7);
        assert_eq!(node.level(), 3);
        assert_eq!(node.forward().len(), 4);
        assert!(node.forward().iter().all(Option::is_none));
    }

    #[test]
    fn test_release_reuses_slot() {
        let mut arena = NodeArena::with_capacity(4);
        let a = arena.alloc(1, 0);
        let b = arena.alloc(2, 1);
        assert_eq!(arena.len(), 2);

        let released = arena.release(a).unwrap();
        assert_eq!(released.key(), 1);
        assert_eq!(arena.len(), 1);

        let c = arena.alloc(3, 2);
        assert_eq!(c, a);
        assert_eq!(arena.slots(), 2);
        assert_eq!(arena.node(c).key(), 3);
        assert_eq!(arena.node(c).level(), 2);
        assert_eq!(arena.node(b).key(), 2);
    }

    #[test]
    fn test_double_release() {
        let mut arena = NodeArena::default();
        let id = arena.alloc(1, 0);
        assert!(arena.release(id).is_some());
        assert!(arena.release(id).is_none());
        assert!(arena.release(42).is_none());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn test_set_next() {
        let mut arena = NodeArena::default();
        let a = arena.alloc(1, 1);
        let b = arena.alloc(2, 1);
        arena.node_mut(a).set_next(1, Some(b));
        assert_eq!(arena.node(a).forward()[1], Some(b));
        assert_eq!(arena.node(a).forward()[0], None);
    }

    #[test]
    fn test_clear() {
        let mut arena = NodeArena::default();
        arena.alloc(1, 0);
        let id = arena.alloc(2, 0);
        arena.release(id);
        arena.clear();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.slots(), 0);
    }
}
