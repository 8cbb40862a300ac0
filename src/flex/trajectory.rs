//! Cumulative energy-exchange trajectory from a baseline power schedule.

use super::error::FlexError;
use super::types::TimeGrid;

/// Integrates a baseline power schedule into a cumulative energy trajectory.
///
/// `trajectory[0]` is always `0.0`; each subsequent entry adds one
/// timestep's energy, `baseline_kw[i] / grid.steps_per_hour` kWh. The final
/// schedule value has no successor slot on the grid and does not contribute.
/// Positive schedule values (import) make the trajectory rise, negative
/// values (export) make it fall.
///
/// Deterministic and stateless: identical inputs yield bit-identical output.
///
/// # Arguments
///
/// * `baseline_kw` - Signed baseline power per timestep (kW), length `grid.count`
/// * `grid` - Time grid the schedule is defined on
///
/// # Errors
///
/// * [`FlexError::InvalidGrid`] if the grid fails validation
/// * [`FlexError::InvalidSchedule`] if `baseline_kw.len() != grid.count`
///
/// # Examples
///
/// ```
/// use flex_viz::flex::{cumulative_trajectory, TimeGrid};
///
/// let grid = TimeGrid::new(4, 4.0);
/// let trajectory = cumulative_trajectory(&[4.0, 4.0, -4.0, 0.0], &grid);
/// assert_eq!(trajectory, Ok(vec![0.0, 1.0, 2.0, 1.0]));
/// ```
pub fn cumulative_trajectory(baseline_kw: &[f32], grid: &TimeGrid) -> Result<Vec<f32>, FlexError> {
    grid.validate()?;
    if baseline_kw.len() != grid.count {
        return Err(FlexError::InvalidSchedule {
            expected: grid.count,
            actual: baseline_kw.len(),
        });
    }

    let mut trajectory = Vec::with_capacity(grid.count);
    trajectory.push(0.0);
    for i in 0..grid.count - 1 {
        let prev = trajectory[i];
        trajectory.push(prev + baseline_kw[i] / grid.steps_per_hour);
    }
    Ok(trajectory)
}
