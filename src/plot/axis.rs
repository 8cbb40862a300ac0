//! Axis helpers: tick thinning and symmetric limits for signed bar panels.

/// Stride between kept x-ticks so roughly `wanted` ticks remain.
///
/// Grids shorter than `wanted` keep every tick. Ties in the stride ratio
/// round to even, matching the slot rounding used elsewhere.
pub fn tick_stride(nsteps: usize, wanted: usize) -> usize {
    if wanted == 0 || nsteps <= wanted {
        return 1;
    }
    let stride = (nsteps as f32 / wanted as f32).round_ties_even() as usize;
    stride.max(1)
}

/// Symmetric y-limit for a panel mixing negative and positive bars.
///
/// Returns `1.5 * max(|most negative|, |most positive|)`, or `None` when
/// both sides are flat zero and the caller should leave the axis to
/// autoscale.
pub fn symmetric_limit(neg: &[f32], pos: &[f32]) -> Option<f32> {
    let neg_extent = neg.iter().fold(0.0_f32, |acc, v| acc.min(*v)).abs();
    let pos_extent = pos.iter().fold(0.0_f32, |acc, v| acc.max(*v)).abs();
    let limit = 1.5 * neg_extent.max(pos_extent);
    if limit == 0.0 { None } else { Some(limit) }
}
