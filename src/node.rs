use std::fmt;

/// Ancestor handle of a node that has no ancestor (the start of a query).
pub const NO_PARENT: usize = usize::MAX;

/// A single grid cell with its search scores.
///
/// `x` and `y` are the cell coordinates; the grid origin is the **bottom
/// left** corner, so `x` grows right and `y` grows up.
///
/// `weighting` is the extra traversal cost of the cell. A cell with mud or
/// water is heavier than grass or street; the search prefers lighter cells
/// when an equally long route exists. Only nodes supplied through
/// [`Config::weighted_nodes`](crate::Config::weighted_nodes) carry a
/// non-zero weighting; nodes generated during the search leave it at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub x: i32,
    pub y: i32,
    pub weighting: i32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) g: i32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) h: i32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) f: i32,
    #[cfg_attr(feature = "serde", serde(skip, default = "no_parent"))]
    pub(crate) parent: usize,
}

#[cfg(feature = "serde")]
fn no_parent() -> usize {
    NO_PARENT
}

impl Node {
    /// Create a node at `(x, y)` with zero weighting and no ancestor.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            weighting: 0,
            g: 0,
            h: 0,
            f: 0,
            parent: NO_PARENT,
        }
    }

    /// Create a node at `(x, y)` with the given extra traversal cost.
    #[inline]
    pub const fn weighted(x: i32, y: i32, weighting: i32) -> Self {
        Self {
            weighting,
            ..Self::new(x, y)
        }
    }

    /// Accumulated path cost from the start to this node.
    #[inline]
    pub fn g(&self) -> i32 {
        self.g
    }

    /// Heuristic estimate of the remaining cost to the end node.
    #[inline]
    pub fn h(&self) -> i32 {
        self.h
    }

    /// Total estimated cost (`g + h`), the frontier ranking key.
    #[inline]
    pub fn f(&self) -> i32 {
        self.f
    }

    /// Whether `other` occupies the same grid cell. Cost fields and
    /// ancestry are ignored.
    #[inline]
    pub fn same_cell(&self, other: &Node) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node [X:{} Y:{} F:{} G:{} H:{}]",
            self.x, self.y, self.f, self.g, self.h
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_has_no_ancestor() {
        let n = Node::new(3, 7);
        assert_eq!(n.x, 3);
        assert_eq!(n.y, 7);
        assert_eq!(n.weighting, 0);
        assert_eq!(n.parent, NO_PARENT);
    }

    #[test]
    fn weighted_carries_cost() {
        let n = Node::weighted(1, 2, 9);
        assert_eq!(n.weighting, 9);
        assert_eq!(n.g(), 0);
    }

    #[test]
    fn same_cell_ignores_scores() {
        let mut a = Node::new(4, 4);
        let b = Node::new(4, 4);
        a.g = 10;
        a.f = 12;
        assert!(a.same_cell(&b));
        assert!(!a.same_cell(&Node::new(4, 5)));
    }

    #[test]
    fn display_format() {
        let mut n = Node::new(2, 3);
        n.g = 2;
        n.h = 3;
        n.f = 5;
        assert_eq!(n.to_string(), "Node [X:2 Y:3 F:5 G:2 H:3]");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_round_trip() {
        let n = Node::weighted(3, 7, 5);
        let json = serde_json::to_string(&n).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back);
        assert_eq!(back.parent, NO_PARENT);
    }
}
