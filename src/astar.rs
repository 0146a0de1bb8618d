use crate::context::Context;
use crate::distance::manhattan;
use crate::error::{ConfigError, PathError};
use crate::node::{NO_PARENT, Node};
use crate::working_set::WorkingSet;

/// Pass as `max_steps` to disable the step budget.
pub const STEPS_NO_LIMIT: i32 = -1;

/// Static grid description, immutable for the lifetime of a [`PathFinder`].
///
/// `width` and `height` give the size of the grid and must both be at
/// least 2. `invalid_nodes` holds cells that can never be entered, like
/// walls or water. `weighted_nodes` holds cells that can be entered but
/// should be avoided, like mud or mountains; their `weighting` is added to
/// the accumulated cost of any route that crosses them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub width: i32,
    pub height: i32,
    pub invalid_nodes: Vec<Node>,
    pub weighted_nodes: Vec<Node>,
}

/// A* search engine over a fixed-size grid.
///
/// One instance answers one query at a time: the open and closed sets, the
/// node arena and the step counter are per-query state, reset when a query
/// starts and cleared again on every exit path. Sequential reuse of an
/// instance is safe and yields identical results for identical queries;
/// concurrent use of one instance is not supported.
#[derive(Debug)]
pub struct PathFinder {
    config: Config,
    arena: Vec<Node>,
    open: WorkingSet,
    closed: WorkingSet,
    end: Node,
    steps: i32,
}

impl PathFinder {
    /// Create a new `PathFinder` for the given grid configuration.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        if config.width < 2 || config.height < 2 {
            return Err(ConfigError::GridTooSmall {
                width: config.width,
                height: config.height,
            });
        }
        Ok(Self {
            config,
            arena: Vec::new(),
            open: WorkingSet::new(),
            closed: WorkingSet::new(),
            end: Node::new(0, 0),
            steps: 0,
        })
    }

    /// Compute a route from `start` to `end`.
    ///
    /// Returns the route as a node sequence ordered **terminal-first**: the
    /// goal node is at index 0 and the node adjacent to `start` is last.
    /// The start node itself is not part of the sequence. Fails with
    /// [`PathError::NoPath`] when the goal cannot be reached.
    pub fn find_path(
        &mut self,
        ctx: Option<&dyn Context>,
        start: Node,
        end: Node,
    ) -> Result<Vec<Node>, PathError> {
        self.find_path_bounded(ctx, start, end, STEPS_NO_LIMIT)
    }

    /// Like [`find_path`](Self::find_path), but stop after `max_steps`
    /// expansion steps and return the best partial route explored so far,
    /// ending at the node selected on the final step rather than at `end`.
    ///
    /// A `max_steps` of [`STEPS_NO_LIMIT`] (or any non-positive value)
    /// disables the budget.
    pub fn find_path_bounded(
        &mut self,
        ctx: Option<&dyn Context>,
        start: Node,
        end: Node,
        max_steps: i32,
    ) -> Result<Vec<Node>, PathError> {
        log::debug!(
            "path query ({},{}) -> ({},{}) max_steps={max_steps}",
            start.x,
            start.y,
            end.x,
            end.y
        );
        self.reset(end);
        let result = self.search(ctx, start, max_steps);
        self.teardown();
        result
    }

    /// Reset per-query state and seed the closed set with the permanently
    /// invalid cells.
    fn reset(&mut self, end: Node) {
        self.steps = 0;
        self.end = end;
        self.arena.clear();
        self.open.clear();
        self.closed.clear();
        let count = self.config.invalid_nodes.len();
        for i in 0..count {
            self.arena.push(self.config.invalid_nodes[i]);
        }
        let handles: Vec<usize> = (0..count).collect();
        self.closed.add_many(&self.arena, &handles);
    }

    /// Tear down per-query state. Runs on every exit path of a query.
    fn teardown(&mut self) {
        self.arena.clear();
        self.open.clear();
        self.closed.clear();
    }

    fn search(
        &mut self,
        ctx: Option<&dyn Context>,
        start: Node,
        max_steps: i32,
    ) -> Result<Vec<Node>, PathError> {
        // The start node enters the frontier unscored: it is the only
        // member, so it is selected first regardless of its scores.
        let sh = self.arena.len();
        self.arena
            .push(Node::weighted(start.x, start.y, start.weighting));
        self.open.add(sh, &self.arena[sh]);

        while !self.open.is_empty() {
            let current = self.open.min()?;
            let cur_node = self.arena[current];
            self.open.remove(&cur_node);
            self.closed.add(current, &cur_node);
            self.steps += 1;
            log::trace!("step {}: {cur_node}", self.steps);

            if self.is_goal(ctx, &cur_node) {
                return Ok(self.node_path(current));
            }

            if max_steps > 0 && self.steps >= max_steps {
                log::debug!("step budget {max_steps} reached, returning partial path");
                return Ok(self.node_path(current));
            }

            for mut candidate in self.expand(ctx, current) {
                if self.closed.contains(&candidate) {
                    continue;
                }
                self.score(&mut candidate);
                // First-discovered cost wins: a cell already on the
                // frontier is never relaxed, even if this route is cheaper.
                if !self.open.contains(&candidate) {
                    let h = self.arena.len();
                    self.arena.push(candidate);
                    self.open.add(h, &self.arena[h]);
                }
            }
        }

        Err(PathError::NoPath)
    }

    /// Manhattan distance between `a` and `b`. Admissible for unit-cost
    /// 4-directional movement, and still admissible with additive positive
    /// weighting.
    fn heuristic(&self, a: &Node, b: &Node) -> i32 {
        manhattan(a.x, a.y, b.x, b.y)
    }

    /// Whether `node` can be entered: inside the grid, not dynamically
    /// blocked, and not already closed (the permanently invalid cells are
    /// closed before the query starts).
    fn is_accessible(&self, ctx: Option<&dyn Context>, node: &Node) -> bool {
        if node.x < 0
            || node.y < 0
            || node.x > self.config.width - 1
            || node.y > self.config.height - 1
        {
            return false;
        }
        if let Some(ctx) = ctx {
            if ctx.is_blocked(node.x, node.y) {
                return false;
            }
        }
        !self.closed.contains(node)
    }

    /// Whether `node` terminates the query: either the context reports the
    /// goal as reached, or the node sits exactly on the end cell.
    fn is_goal(&self, ctx: Option<&dyn Context>, node: &Node) -> bool {
        if let Some(ctx) = ctx {
            if ctx.is_goal_reached(node.x, node.y) {
                return true;
            }
        }
        node.same_cell(&self.end)
    }

    /// The accessible axis-aligned neighbors of the node at `handle`, each
    /// with its ancestry set. Generation order is fixed (up, down, left,
    /// right); it decides tie-break outcomes in the frontier.
    fn expand(&self, ctx: Option<&dyn Context>, handle: usize) -> Vec<Node> {
        let n = self.arena[handle];
        let cells = [
            (n.x, n.y + 1),
            (n.x, n.y - 1),
            (n.x - 1, n.y),
            (n.x + 1, n.y),
        ];
        let mut neighbors = Vec::with_capacity(4);
        for (x, y) in cells {
            let mut candidate = Node::new(x, y);
            candidate.parent = handle;
            if self.is_accessible(ctx, &candidate) {
                neighbors.push(candidate);
            }
        }
        neighbors
    }

    /// Compute `g`, `h` and `f` for a freshly expanded candidate. Every
    /// configured weighted cell matching the candidate adds its weighting
    /// to `g`; `h` is always measured against the configured end node,
    /// never a fuzzy context goal.
    fn score(&self, node: &mut Node) {
        let base = if node.parent == NO_PARENT {
            0
        } else {
            self.arena[node.parent].g
        };
        node.g = base + 1;
        for weighted in &self.config.weighted_nodes {
            if node.same_cell(weighted) {
                node.g += weighted.weighting;
            }
        }
        node.h = self.heuristic(node, &self.end);
        node.f = node.g + node.h;
    }

    /// Walk the ancestor chain backward from `terminal` and collect the
    /// route, terminal node first. The start node is not emitted, except in
    /// the degenerate case where the terminal *is* the start.
    fn node_path(&self, terminal: usize) -> Vec<Node> {
        let mut path = vec![self.arena[terminal]];
        let mut current = terminal;
        while self.arena[current].parent != NO_PARENT {
            let ancestor = self.arena[current].parent;
            if self.arena[ancestor].parent == NO_PARENT {
                break;
            }
            path.push(self.arena[ancestor]);
            current = ancestor;
        }
        path
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = Config {
            width: 6,
            height: 4,
            invalid_nodes: vec![Node::new(2, 2)],
            weighted_nodes: vec![Node::weighted(3, 1, 7)],
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
