//! Sparse, unbounded grid storage for per-cell world data.
//!
//! A sparse grid behaves like a total function from integer coordinates to a
//! value: every cell that was never set reads back as the grid's default.
//! Only explicitly set cells take memory.
//!
//! # Layout
//!
//! - [`SparseGrid2D`]: row (y) → column (x) → value, both levels hashed
//! - [`SparseGrid3D`]: layer (z) → [`SparseGrid2D`]
//!
//! # Reclamation
//!
//! Clearing a cell that leaves its row empty removes the row, and clearing the
//! last cell of a layer removes the layer. [`SparseGrid2D::is_empty`] and
//! [`SparseGrid2D::len`] therefore only ever reflect truly set cells.
//!
//! # Example
//!
//! ```rust
//! use gridsight::spatial::grid::SparseGrid2D;
//!
//! let mut terrain = SparseGrid2D::new(0u8);
//! terrain.set(-40, 1_000_000, 7);
//! assert_eq!(*terrain.get(-40, 1_000_000), 7);
//! assert_eq!(*terrain.get(3, 3), 0);
//!
//! terrain.clear_cell(-40, 1_000_000);
//! assert!(terrain.is_empty());
//! ```
//!
//! # Performance
//!
//! - **Get/Set/ClearCell:** O(1) expected, two `FxHashMap` lookups (three in 3D)
//! - **Get** never allocates; **Set** allocates only for a new row or layer

mod sparse_2d;
mod sparse_3d;

#[cfg(test)]
mod tests;

pub use sparse_2d::SparseGrid2D;
pub use sparse_3d::SparseGrid3D;
