use bevy::prelude::*;
use fixedbitset::FixedBitSet;

use super::radius::RadiusShape;
use super::shadowcast::compute_visibility;

/// Per-viewer visibility bitset, centred on the viewer.
///
/// Covers the `(2r + 1)²` square of offsets around the viewer. The visibility
/// engine writes into it through [`VisibilityMap::mark`]; offsets outside the
/// square are ignored.
///
/// The map is a caller-owned buffer: stale bits survive until [`clear`] is
/// called. [`recompute`] clears before writing.
///
/// [`clear`]: VisibilityMap::clear
/// [`recompute`]: VisibilityMap::recompute
#[derive(Component, Clone, Debug)]
pub struct VisibilityMap {
    radius: i32,
    side: usize,
    origin: IVec2,
    bits: FixedBitSet,
}

impl VisibilityMap {
    /// Empty map for a view radius. Negative radii are treated as 0.
    pub fn new(radius: i32) -> Self {
        let radius = radius.max(0);
        let side = radius as usize * 2 + 1;
        Self {
            radius,
            side,
            origin: IVec2::ZERO,
            bits: FixedBitSet::with_capacity(side * side),
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// World position of the viewer at the last [`recompute`](Self::recompute).
    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    fn index(&self, dx: i32, dy: i32) -> Option<usize> {
        if dx.abs() > self.radius || dy.abs() > self.radius {
            return None;
        }
        let col = (dx + self.radius) as usize;
        let row = (dy + self.radius) as usize;
        Some(row * self.side + col)
    }

    /// Mark an origin-relative offset as seen.
    pub fn mark(&mut self, dx: i32, dy: i32) {
        if let Some(idx) = self.index(dx, dy) {
            self.bits.insert(idx);
        }
    }

    pub fn is_visible(&self, dx: i32, dy: i32) -> bool {
        self.index(dx, dy).is_some_and(|idx| self.bits.contains(idx))
    }

    /// Visibility of a world position relative to the stored origin.
    pub fn is_visible_world(&self, pos: IVec2) -> bool {
        let d = pos - self.origin;
        self.is_visible(d.x, d.y)
    }

    /// Number of visible cells.
    pub fn count(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Visible offsets, row by row from the most negative `dy`.
    pub fn iter(&self) -> impl Iterator<Item = IVec2> + '_ {
        let side = self.side;
        let radius = self.radius;
        self.bits.ones().map(move |idx| {
            IVec2::new((idx % side) as i32 - radius, (idx / side) as i32 - radius)
        })
    }

    /// Clear and recompute from `origin`.
    ///
    /// `is_blocked` receives world positions; the translation to offsets is
    /// done here.
    pub fn recompute<B>(&mut self, origin: IVec2, shape: RadiusShape, mut is_blocked: B)
    where
        B: FnMut(IVec2) -> bool,
    {
        self.clear();
        self.origin = origin;

        let radius = self.radius;
        compute_visibility(
            |dx, dy| is_blocked(origin + IVec2::new(dx, dy)),
            |dx, dy| self.mark(dx, dy),
            shape.outside_predicate(radius),
        );
    }
}
