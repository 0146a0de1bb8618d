use std::collections::{BinaryHeap, HashMap};

use crate::error::EmptySetError;
use crate::node::Node;

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
///
/// Ties on `f` are broken by insertion sequence so that minimum selection
/// is deterministic (first inserted wins).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct NodeRef {
    handle: usize,
    cell: (i32, i32),
    f: i32,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the earliest-inserted entry.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Mutable set of arena nodes keyed by grid cell.
///
/// One instance serves as the frontier (open list) and another as the
/// visited/blocked collection (closed list). Membership is by `(x, y)`
/// only; when two nodes for the same cell are inserted, the first one is
/// retained.
///
/// Removal leaves stale heap entries behind; [`WorkingSet::min`] prunes
/// them lazily by checking each popped entry against the cell index.
/// Scores never change after insertion (there is no relaxation), so heap
/// entries cannot go out of date any other way.
#[derive(Debug, Default)]
pub(crate) struct WorkingSet {
    heap: BinaryHeap<NodeRef>,
    by_cell: HashMap<(i32, i32), usize>,
    seq: u64,
}

impl WorkingSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert the node stored at `handle`. Does not guard against duplicate
    /// cells itself: callers that need first-wins semantics check
    /// [`contains`](Self::contains) beforehand; if a duplicate slips in
    /// anyway, the first mapping is kept and the newcomer is ignored.
    pub(crate) fn add(&mut self, handle: usize, node: &Node) {
        self.heap.push(NodeRef {
            handle,
            cell: (node.x, node.y),
            f: node.f,
            seq: self.seq,
        });
        self.seq += 1;
        self.by_cell.entry((node.x, node.y)).or_insert(handle);
    }

    /// Insert several arena nodes at once.
    pub(crate) fn add_many(&mut self, arena: &[Node], handles: &[usize]) {
        for &h in handles {
            self.add(h, &arena[h]);
        }
    }

    /// Whether a node with the same cell coordinates is present.
    pub(crate) fn contains(&self, node: &Node) -> bool {
        self.by_cell.contains_key(&(node.x, node.y))
    }

    /// Remove the entry for the node's cell. No-op if absent.
    pub(crate) fn remove(&mut self, node: &Node) {
        self.by_cell.remove(&(node.x, node.y));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.by_cell.is_empty()
    }

    /// Empty the set. The set stays usable for further insertions.
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.by_cell.clear();
        self.seq = 0;
    }

    /// Handle of the live entry with the smallest `f` (ties: insertion
    /// order). The entry is **not** removed; callers take it out with
    /// [`remove`](Self::remove) when they are done with it.
    pub(crate) fn min(&mut self) -> Result<usize, EmptySetError> {
        while let Some(top) = self.heap.peek() {
            if self.by_cell.get(&top.cell) == Some(&top.handle) {
                return Ok(top.handle);
            }
            // Stale entry: the cell was removed or remapped after this
            // heap entry was pushed.
            self.heap.pop();
        }
        Err(EmptySetError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: i32, y: i32, f: i32) -> Node {
        let mut n = Node::new(x, y);
        n.f = f;
        n
    }

    fn set_with(arena: &[Node]) -> WorkingSet {
        let mut set = WorkingSet::new();
        for (h, n) in arena.iter().enumerate() {
            set.add(h, n);
        }
        set
    }

    #[test]
    fn membership_is_by_cell_only() {
        let arena = vec![node(1, 1, 7)];
        let set = set_with(&arena);
        // Same cell, different scores: still a member.
        assert!(set.contains(&node(1, 1, 99)));
        assert!(!set.contains(&node(1, 2, 7)));
    }

    #[test]
    fn min_returns_smallest_f_without_removing() {
        let arena = vec![node(0, 0, 5), node(1, 0, 3), node(2, 0, 8)];
        let mut set = set_with(&arena);
        assert_eq!(set.min().unwrap(), 1);
        // Non-destructive: asking again yields the same handle.
        assert_eq!(set.min().unwrap(), 1);
        assert!(set.contains(&arena[1]));
    }

    #[test]
    fn min_ties_break_by_insertion_order() {
        let arena = vec![node(0, 0, 4), node(1, 0, 4), node(2, 0, 4)];
        let mut set = set_with(&arena);
        assert_eq!(set.min().unwrap(), 0);
        set.remove(&arena[0]);
        assert_eq!(set.min().unwrap(), 1);
        set.remove(&arena[1]);
        assert_eq!(set.min().unwrap(), 2);
    }

    #[test]
    fn min_skips_removed_entries() {
        let arena = vec![node(0, 0, 1), node(1, 0, 2)];
        let mut set = set_with(&arena);
        set.remove(&arena[0]);
        assert_eq!(set.min().unwrap(), 1);
    }

    #[test]
    fn min_on_empty_set_errors() {
        let mut set = WorkingSet::new();
        assert_eq!(set.min(), Err(EmptySetError));
        let arena = vec![node(0, 0, 1)];
        set.add(0, &arena[0]);
        set.remove(&arena[0]);
        assert_eq!(set.min(), Err(EmptySetError));
    }

    #[test]
    fn duplicate_cell_keeps_first_entry() {
        let arena = vec![node(2, 2, 9), node(2, 2, 1)];
        let mut set = set_with(&arena);
        // The cheaper second insert does not displace the first.
        assert_eq!(set.min().unwrap(), 0);
    }

    #[test]
    fn remove_is_noop_when_absent() {
        let arena = vec![node(0, 0, 1)];
        let mut set = set_with(&arena);
        set.remove(&node(5, 5, 0));
        assert!(set.contains(&arena[0]));
    }

    #[test]
    fn clear_leaves_set_reusable() {
        let arena = vec![node(0, 0, 1), node(1, 1, 2)];
        let mut set = set_with(&arena);
        assert!(!set.is_empty());
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.min(), Err(EmptySetError));
        set.add(1, &arena[1]);
        assert!(set.contains(&arena[1]));
        assert_eq!(set.min().unwrap(), 1);
    }

    #[test]
    fn add_many_inserts_all() {
        let arena = vec![node(0, 0, 3), node(1, 0, 2), node(2, 0, 1)];
        let mut set = WorkingSet::new();
        set.add_many(&arena, &[0, 1, 2]);
        assert!(set.contains(&arena[0]));
        assert!(set.contains(&arena[1]));
        assert!(set.contains(&arena[2]));
        assert_eq!(set.min().unwrap(), 2);
    }
}
