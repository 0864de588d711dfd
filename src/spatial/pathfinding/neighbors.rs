//! Neighbor generation for tile-based searches.
//!
//! Neighbors are produced in direction-code order (clockwise from +Y), which
//! makes the search's first-minimum tie-break deterministic. Callers that
//! want varied paths between equal-cost routes can shuffle the result with
//! their own RNG via [`shuffle_neighbors`].

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::spatial::direction::{is_diagonal_dir8, DIR4_OFFSETS, DIR8_OFFSETS};
use super::types::Connectivity;

/// Open neighbors of `position`.
///
/// With [`Connectivity::Eight`] a diagonal step is rejected when either
/// orthogonal cell it passes between is blocked, unless
/// `allow_corner_cutting` is set.
pub fn grid_neighbors<B>(
    position: IVec2,
    connectivity: Connectivity,
    allow_corner_cutting: bool,
    mut is_blocked: B,
) -> SmallVec<[IVec2; 8]>
where
    B: FnMut(IVec2) -> bool,
{
    let mut result = SmallVec::new();

    match connectivity {
        Connectivity::Four => {
            for offset in DIR4_OFFSETS {
                let next = position + offset;
                if !is_blocked(next) {
                    result.push(next);
                }
            }
        }
        Connectivity::Eight => {
            for (dir, offset) in DIR8_OFFSETS.into_iter().enumerate() {
                let next = position + offset;
                if is_blocked(next) {
                    continue;
                }
                if is_diagonal_dir8(dir) && !allow_corner_cutting {
                    let side_x = position + IVec2::new(offset.x, 0);
                    let side_y = position + IVec2::new(0, offset.y);
                    if is_blocked(side_x) || is_blocked(side_y) {
                        continue;
                    }
                }
                result.push(next);
            }
        }
    }

    result
}

/// Shuffle neighbors in place so equal-cost routes are broken at random.
///
/// The RNG is always supplied by the caller; the kernel keeps no random state.
pub fn shuffle_neighbors<R: Rng + ?Sized>(neighbors: &mut [IVec2], rng: &mut R) {
    neighbors.shuffle(rng);
}
