//! Distance estimates between tile positions, in deterministic fixed point.

use bevy::prelude::*;

use crate::spatial::fixed_math::FixedNum;

/// |dx| + |dy|. Admissible for dir4 movement with unit steps.
pub fn manhattan(a: IVec2, b: IVec2) -> FixedNum {
    let d = (a - b).abs();
    FixedNum::from_num(d.x) + FixedNum::from_num(d.y)
}

/// max(|dx|, |dy|). Admissible for dir8 movement where diagonals cost the same as cardinals.
pub fn chebyshev(a: IVec2, b: IVec2) -> FixedNum {
    let d = (a - b).abs();
    FixedNum::from_num(d.x.max(d.y))
}

/// Exact dir8 distance on an open grid with the given step costs.
pub fn octile(a: IVec2, b: IVec2, cardinal_cost: FixedNum, diagonal_cost: FixedNum) -> FixedNum {
    let d = (a - b).abs();
    let diagonal_steps = FixedNum::from_num(d.x.min(d.y));
    let straight_steps = FixedNum::from_num((d.x - d.y).abs());
    diagonal_steps * diagonal_cost + straight_steps * cardinal_cost
}
