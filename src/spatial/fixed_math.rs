//! Deterministic fixed-point numbers for path costs.
//!
//! Grid step costs and heuristics are computed in fixed point so that two
//! machines searching the same map pick the same path, tie for tie.

use fixed::types::I48F16;

/// Fixed-point number type used for path costs.
///
/// Uses I48F16 format: 48 bits for the integer part, 16 bits for the fractional part.
/// This provides a range of approximately ±140 trillion with a precision of ~0.000015.
pub type FixedNum = I48F16;

/// √2 rounded to the I48F16 grid, the usual diagonal step cost.
pub const SQRT_2: FixedNum = FixedNum::SQRT_2;
