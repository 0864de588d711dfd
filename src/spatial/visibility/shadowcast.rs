use smallvec::SmallVec;

use crate::spatial::profiling::profile;

/// Map octant-local `(u, v)` into origin-centred `(dx, dy)`.
///
/// `u` runs along the octant's major axis, `v` is the perpendicular offset
/// with `0 <= v <= u`. Octants run clockwise from +Y.
#[inline]
fn transform_octant(octant: u8, u: i32, v: i32) -> (i32, i32) {
    match octant {
        0 => (v, u),
        1 => (u, v),
        2 => (u, -v),
        3 => (v, -u),
        4 => (-v, -u),
        5 => (-u, -v),
        6 => (-u, v),
        _ => (-v, u),
    }
}

/// A slope interval still to be scanned, starting at row `u`.
#[derive(Clone, Copy, Debug)]
struct ScanSpan {
    octant: u8,
    start_slope: f64,
    end_slope: f64,
    u: i32,
}

/// Mark every cell visible from the origin using recursive shadowcasting.
///
/// All three callbacks work in origin-centred offsets:
///
/// - `is_blocked(dx, dy)`: true if the cell stops sight (the cell itself is still seen)
/// - `mark_seen(dx, dy)`: called for each visible cell, possibly more than once
///   for cells on octant boundaries
/// - `outside_radius(dx, dy)`: true if the cell is beyond the view radius
///
/// `(0, 0)` is always marked first. The result is deterministic for a given
/// predicate pair. Radius shapes should include their axis points whenever
/// they include anything else in that row: a row is abandoned as soon as its
/// on-axis cell is outside the radius.
///
/// # Algorithm
///
/// Each octant starts as the slope interval `[0, 1]` at row 1. Within a row,
/// entering an obstacle queues the part of the interval in front of it for the
/// next row; leaving an obstacle raises the interval's start past it. If the
/// row ends outside an obstacle, the narrowed interval continues to the next
/// row. Spans are kept on an explicit stack rather than the call stack.
#[profile(100)]
pub fn compute_visibility<B, M, R>(mut is_blocked: B, mut mark_seen: M, mut outside_radius: R)
where
    B: FnMut(i32, i32) -> bool,
    M: FnMut(i32, i32),
    R: FnMut(i32, i32) -> bool,
{
    mark_seen(0, 0);

    let mut stack: SmallVec<[ScanSpan; 32]> = SmallVec::new();
    for octant in (0..8u8).rev() {
        stack.push(ScanSpan {
            octant,
            start_slope: 0.0,
            end_slope: 1.0,
            u: 1,
        });
    }

    while let Some(span) = stack.pop() {
        scan_row(span, &mut stack, &mut is_blocked, &mut mark_seen, &mut outside_radius);
    }
}

/// Scan one row of a span, pushing follow-up spans for the next row.
fn scan_row<B, M, R>(
    span: ScanSpan,
    stack: &mut SmallVec<[ScanSpan; 32]>,
    is_blocked: &mut B,
    mark_seen: &mut M,
    outside_radius: &mut R,
) where
    B: FnMut(i32, i32) -> bool,
    M: FnMut(i32, i32),
    R: FnMut(i32, i32) -> bool,
{
    let ScanSpan {
        octant,
        mut start_slope,
        end_slope,
        u,
    } = span;

    let (ax, ay) = transform_octant(octant, u, 0);
    if outside_radius(ax, ay) || end_slope <= start_slope {
        return;
    }

    let uf = f64::from(u);
    let v_min = (uf * start_slope).round() as i32;
    let v_max = (uf * end_slope).ceil() as i32;

    let mut in_obstacle = false;
    for v in v_min..=v_max {
        let vf = f64::from(v);
        let (dx, dy) = transform_octant(octant, u, v);

        if is_blocked(dx, dy) {
            if !in_obstacle {
                stack.push(ScanSpan {
                    octant,
                    start_slope,
                    end_slope: (vf - 0.5) / (uf + 0.5),
                    u: u + 1,
                });
                in_obstacle = true;
            }
        } else if in_obstacle {
            if v > 0 {
                start_slope = start_slope.max((vf - 0.5) / (uf - 0.5));
            }
            in_obstacle = false;
        }

        if start_slope < end_slope && !outside_radius(dx, dy) {
            mark_seen(dx, dy);
        }
    }

    if !in_obstacle {
        stack.push(ScanSpan {
            octant,
            start_slope,
            end_slope,
            u: u + 1,
        });
    }
}
