//! A* pathfinding on fixed-size 2D grids.
//!
//! This crate computes shortest (or best-effort) routes between two cells
//! of a rectangular grid with 4-directional movement. It supports:
//!
//! - **Permanently invalid cells**: walls and other obstacles, configured
//!   once per [`PathFinder`].
//! - **Weighted cells**: terrain like mud or mountains that costs extra to
//!   cross and is routed around when an equally long route exists.
//! - **Dynamic blocking and fuzzy goals**: a per-query [`Context`]
//!   capability lets the host veto cells at query time and accept cells
//!   near the goal as terminal.
//! - **Step budgets**: bounded queries return the best partial route
//!   explored so far instead of failing.
//!
//! The grid origin is the bottom-left corner. Returned routes are ordered
//! terminal-first (goal at index 0) and exclude the start cell.
//!
//! Two deliberate deviations from textbook A*: a cell that has entered the
//! closed set is never re-opened, and a frontier cell is never re-scored
//! when a cheaper route to it is discovered later (first-discovered wins).
//! Paths are therefore reproducible but not guaranteed globally optimal
//! under non-uniform weighting.
//!
//! ```
//! use gridpath::{Config, Node, PathFinder};
//!
//! let mut finder = PathFinder::new(Config {
//!     width: 3,
//!     height: 3,
//!     invalid_nodes: vec![],
//!     weighted_nodes: vec![],
//! })?;
//! let path = finder.find_path(None, Node::new(0, 0), Node::new(2, 2))?;
//! assert_eq!(path.len(), 4); // Manhattan distance, start excluded
//! assert_eq!((path[0].x, path[0].y), (2, 2)); // terminal-first
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod astar;
mod context;
mod distance;
mod error;
mod node;
mod working_set;

pub use astar::{Config, PathFinder, STEPS_NO_LIMIT};
pub use context::{Context, FnContext};
pub use distance::manhattan;
pub use error::{ConfigError, EmptySetError, PathError};
pub use node::{NO_PARENT, Node};
