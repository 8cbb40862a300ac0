//! Grouping calendar-date labels into contiguous runs for axis annotation.

use crate::flex::FlexError;

/// Returns one midpoint index per contiguous run of equal date labels.
///
/// A run boundary sits at every index whose label differs from its
/// predecessor; the first and last indices always bound the outermost runs.
/// Midpoints are real-valued so a two-step run annotates between its ticks;
/// the caller rounds or indexes as needed.
///
/// # Arguments
///
/// * `labels` - Ordered date labels, one per timestep
///
/// # Errors
///
/// Returns [`FlexError::InvalidInput`] if `labels` is empty.
///
/// # Examples
///
/// ```
/// use flex_viz::plot::date_run_midpoints;
///
/// let labels = ["01 Feb", "01 Feb", "02 Feb", "02 Feb", "02 Feb"];
/// let midpoints = date_run_midpoints(&labels).unwrap();
/// assert_eq!(midpoints, vec![1.0, 3.0]);
/// ```
pub fn date_run_midpoints<T: PartialEq>(labels: &[T]) -> Result<Vec<f32>, FlexError> {
    if labels.is_empty() {
        return Err(FlexError::InvalidInput {
            message: "date label sequence is empty".to_string(),
        });
    }

    let mut boundaries = vec![0];
    for i in 1..labels.len() {
        if labels[i] != labels[i - 1] {
            boundaries.push(i);
        }
    }
    boundaries.push(labels.len() - 1);

    Ok(boundaries
        .windows(2)
        .map(|pair| (pair[0] + pair[1]) as f32 / 2.0)
        .collect())
}
