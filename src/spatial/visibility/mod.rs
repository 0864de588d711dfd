//! Field-of-view computation by recursive shadowcasting.
//!
//! The engine knows nothing about maps. It asks the caller whether an offset
//! blocks sight and whether it is beyond the view radius, and reports every
//! visible offset through a callback. [`VisibilityMap`] is the usual sink: a
//! bitset component owned by the viewing entity.
//!
//! # Example
//!
//! ```rust
//! use bevy::prelude::IVec2;
//! use gridsight::spatial::visibility::{RadiusShape, VisibilityMap};
//!
//! let pillar = IVec2::new(0, 2);
//! let mut fov = VisibilityMap::new(6);
//! fov.recompute(IVec2::ZERO, RadiusShape::Circle, |p| p == pillar);
//!
//! assert!(fov.is_visible(0, 2), "the pillar itself is seen");
//! assert!(!fov.is_visible(0, 4), "but hides what is behind it");
//! ```
//!
//! # Use Cases
//!
//! - **Fog of war:** recompute once per viewer per turn after movement
//! - **AI awareness:** test `is_visible_world` for candidate targets
//! - **Lighting:** the same predicates with a light radius instead of a view radius

mod radius;
mod shadowcast;
mod visibility_map;


pub use radius::RadiusShape;
pub use shadowcast::compute_visibility;
pub use visibility_map::VisibilityMap;
