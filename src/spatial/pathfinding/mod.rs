//! Generic best-first (A*) search over caller-supplied graphs.
//!
//! The search never looks at a map directly. Everything it knows comes from a
//! [`SearchGraph`]: step distance, heuristic estimate and neighbor expansion.
//! Two ways to supply one:
//!
//! - **Closures:** [`find_path`] takes `distance`, `heuristic` and `neighbors`
//!   as plain functions
//! - **Trait:** implement [`SearchGraph`] (or use [`GridGraph`] for tile maps)
//!   and call [`find_path_in`]
//!
//! # Example
//!
//! ```rust
//! use bevy::prelude::IVec2;
//! use gridsight::spatial::direction::DIR4_OFFSETS;
//! use gridsight::spatial::pathfinding::find_path;
//!
//! let manhattan = |a: IVec2, b: IVec2| (a - b).abs().element_sum();
//! let path = find_path(
//!     IVec2::ZERO,
//!     IVec2::new(3, 3),
//!     manhattan,
//!     manhattan,
//!     |p: IVec2| DIR4_OFFSETS.map(|d| p + d),
//!     1_000,
//! )
//! .expect("open grid is always reachable");
//!
//! assert_eq!(path.len(), 7);
//! ```
//!
//! # Failure
//!
//! Both an exhausted frontier (target unreachable) and an exhausted iteration
//! budget return `None`. The two are logged differently but cannot be told
//! apart by the caller.

mod astar;
mod graph;
pub mod heuristics;
pub mod neighbors;
mod types;


// ============================================================================
// PUBLIC API
// ============================================================================

pub use astar::{find_path, find_path_in};
pub use graph::{FnGraph, GridGraph, SearchGraph};
pub use types::{Connectivity, GridPath, PathCost};
