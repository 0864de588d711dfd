//! Direction codes and angular classification for tile offsets.
//!
//! Two direction codes are used throughout the kernel:
//!
//! - **dir4** in `[0, 4)`: North, East, South, West
//! - **dir8** in `[0, 8)`: North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest
//!
//! Both run clockwise starting at +Y, the same orientation as [`hexadecant`],
//! so converting a vector to a direction is just a re-bucketing of its
//! hexadecant. The offset tables are shared with neighbor generation in
//! [`crate::spatial::pathfinding`].

use bevy::prelude::*;
use std::f64::consts::FRAC_PI_8;


/// Unit offsets for dir4 codes, clockwise from +Y.
pub const DIR4_OFFSETS: [IVec2; 4] = [
    IVec2::new(0, 1),
    IVec2::new(1, 0),
    IVec2::new(0, -1),
    IVec2::new(-1, 0),
];

/// Unit offsets for dir8 codes, clockwise from +Y.
pub const DIR8_OFFSETS: [IVec2; 8] = [
    IVec2::new(0, 1),
    IVec2::new(1, 1),
    IVec2::new(1, 0),
    IVec2::new(1, -1),
    IVec2::new(0, -1),
    IVec2::new(-1, -1),
    IVec2::new(-1, 0),
    IVec2::new(-1, 1),
];

/// Classify an offset into one of 16 equal angular sectors of width π/8.
///
/// Sector 0 starts at +Y and sectors proceed clockwise, so `(0, 1)` is 0,
/// `(1, 0)` is 4, `(0, -1)` is 8 and `(-1, 0)` is 12. The origin behaves like
/// `atan2(0, 0)` and lands in sector 0.
pub fn hexadecant(x: i32, y: i32) -> usize {
    // Clockwise angle from +Y in (-π, π]
    let angle = f64::from(x).atan2(f64::from(y));
    // Both constants are exact powers-of-two scalings of π, so the cardinal
    // axes divide to exact integers.
    let sector = (angle / FRAC_PI_8).floor() as i32;
    sector.rem_euclid(16) as usize
}

/// Unit offset for a dir4 code. Codes wrap, so `4` is North again.
#[inline]
pub fn dir4_to_vec(dir: usize) -> IVec2 {
    DIR4_OFFSETS[dir % 4]
}

/// Unit offset for a dir8 code. Codes wrap, so `8` is North again.
#[inline]
pub fn dir8_to_vec(dir: usize) -> IVec2 {
    DIR8_OFFSETS[dir % 8]
}

/// Nearest dir4 code for an arbitrary vector.
///
/// Each direction owns the four hexadecants centred on its axis.
pub fn vec_to_dir4(v: IVec2) -> usize {
    ((hexadecant(v.x, v.y) + 2) / 4) % 4
}

/// Nearest dir8 code for an arbitrary vector.
///
/// Each direction owns the two hexadecants centred on its axis or diagonal.
pub fn vec_to_dir8(v: IVec2) -> usize {
    ((hexadecant(v.x, v.y) + 1) / 2) % 8
}

#[inline]
pub fn opposite_dir4(dir: usize) -> usize {
    (dir + 2) % 4
}

#[inline]
pub fn opposite_dir8(dir: usize) -> usize {
    (dir + 4) % 8
}

/// Rotate a dir8 code by `steps` eighth-turns; positive is clockwise.
#[inline]
pub fn rotate_dir8(dir: usize, steps: i32) -> usize {
    (dir as i32 + steps).rem_euclid(8) as usize
}

/// True for the four diagonal dir8 codes.
#[inline]
pub fn is_diagonal_dir8(dir: usize) -> bool {
    dir % 2 == 1
}
