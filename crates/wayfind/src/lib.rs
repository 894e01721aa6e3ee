//! Generic A* shortest-path search over caller-defined implicit graphs.
//!
//! The caller describes the graph through the [`Pather`] / [`AstarPather`]
//! traits (or closures via [`FnPather`]) and asks a [`PathFinder`] for a
//! path between two nodes of any `Eq + Hash + Clone` type.
//!
//! - [`PathFinder::find_path`] returns the path, or `None` when the goal is
//!   unreachable.
//! - [`PathFinder::search`] also returns [`SearchStats`].
//! - [`PathFinder::search_in`] reuses the allocations of a [`SearchSession`].
//!
//! The open set is a [`PriorityFrontier`], a binary min-heap with FIFO
//! tie-breaking that can also be used on its own.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | node type, error type, neighbor enumeration |
//! | [`AstarPather`] : [`Pather`] | heuristic and per-edge cost |

mod astar;
mod config;
mod distance;
mod frontier;
mod session;
mod traits;

pub use astar::{PathFinder, SearchError, SearchOutcome, SearchStats};
pub use config::SearchConfig;
pub use distance::{chebyshev, euclidean, manhattan};
pub use frontier::{EmptyFrontier, Prioritized, PriorityFrontier};
pub use session::SearchSession;
pub use traits::{AstarPather, FnPather, Pather};
