//! Spatial-query kernel for tile maps.
//!
//! - [`grid`]: sparse, unbounded 2D and 3D cell storage
//! - [`pathfinding`]: generic A* over caller-supplied graphs
//! - [`visibility`]: shadowcasting field of view
//! - [`direction`]: dir4/dir8 codes and hexadecant bucketing
//!
//! None of these hold global state. Maps, blocking rules and randomness are
//! passed in by the caller.

pub mod config;
pub mod direction;
pub mod fixed_math;
pub mod grid;
pub mod pathfinding;
pub mod profiling;
pub mod visibility;

pub use config::{SpatialConfig, SpatialConfigPlugin};
