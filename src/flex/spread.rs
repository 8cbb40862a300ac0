//! Spreading one flexibility offer into an overlay branch.

use serde::{Deserialize, Serialize};

use super::error::FlexError;
use super::types::{FlexOffer, Polarity, TimeGrid};

/// One point of an overlay branch: cumulative energy if the offer is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayPoint {
    /// Timestep index the point belongs to.
    pub timestep: usize,
    /// Cumulative exchanged energy at that timestep (kWh).
    pub energy_kwh: f32,
}

/// Trajectory branch showing the effect of activating one offer.
///
/// Anchored at `(timestep, trajectory[timestep])` on the baseline trajectory
/// and extending forward for as many slots as the offer's energy occupies at
/// its offered power. An overlay with no points means the offer either
/// carries no energy or has no remaining horizon to spread into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    /// Timestep the branch is anchored at.
    pub timestep: usize,
    /// Polarity of the underlying offer.
    pub polarity: Polarity,
    /// Branch points, starting one slot after the anchor.
    pub points: Vec<OverlayPoint>,
}

impl Overlay {
    /// Returns an overlay with no points for the given anchor.
    pub fn empty(timestep: usize, polarity: Polarity) -> Self {
        Self {
            timestep,
            polarity,
            points: Vec::new(),
        }
    }

    /// Returns `true` when the branch has no points to draw.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Spreads one polarity of an offer into an overlay branch off the baseline.
///
/// The offer's energy at its offered power occupies
/// `round(steps_per_hour * energy / power)` slots; ties round to even so
/// that half-slot offers land on a stable boundary. Slots extending past
/// the grid horizon are truncated, which is normal clipping behavior and
/// never an error. Each branch point is offset from the baseline trajectory
/// value at its own index, so overlays are independent branches and never a
/// chained recurrence.
///
/// Pure function: no state is kept between invocations, and calls for
/// different offers or polarities are fully independent.
///
/// # Arguments
///
/// * `offer` - The offer to spread
/// * `trajectory` - Baseline cumulative trajectory, length `grid.count`
/// * `grid` - Time grid shared by schedule and offers
/// * `polarity` - Which side of the offer to spread
///
/// # Errors
///
/// * [`FlexError::InvalidGrid`] if the grid fails validation
/// * [`FlexError::InvalidSchedule`] if the trajectory length does not match
///   the grid
/// * [`FlexError::InvalidOffer`] if the offer has nonzero energy but zero
///   power; this is a data-integrity fault in the upstream offer table and
///   is fatal for this offer only
///
/// # Examples
///
/// ```
/// use flex_viz::flex::{spread_offer, FlexOffer, Polarity, TimeGrid};
///
/// let grid = TimeGrid::new(5, 4.0);
/// let trajectory = [0.0, -0.5, -1.0, -1.5, -2.0];
/// let offer = FlexOffer {
///     timestep: 0,
///     neg_power_kw: -2.0,
///     neg_energy_kwh: -0.5,
///     ..FlexOffer::default()
/// };
/// let overlay = spread_offer(&offer, &trajectory, &grid, Polarity::Neg).unwrap();
/// assert_eq!(overlay.points.len(), 1);
/// assert_eq!(overlay.points[0].timestep, 1);
/// assert_eq!(overlay.points[0].energy_kwh, -1.0);
/// ```
pub fn spread_offer(
    offer: &FlexOffer,
    trajectory: &[f32],
    grid: &TimeGrid,
    polarity: Polarity,
) -> Result<Overlay, FlexError> {
    grid.validate()?;
    if trajectory.len() != grid.count {
        return Err(FlexError::InvalidSchedule {
            expected: grid.count,
            actual: trajectory.len(),
        });
    }

    let x = offer.timestep;
    let energy = offer.energy_kwh(polarity);
    let power = offer.power_kw(polarity);

    if energy == 0.0 {
        return Ok(Overlay::empty(x, polarity));
    }
    if power == 0.0 {
        return Err(FlexError::InvalidOffer {
            timestep: x,
            polarity,
        });
    }

    // Round half to even, so a 1.5-slot offer occupies 2 slots and a
    // 2.5-slot offer also occupies 2.
    let slots = (grid.steps_per_hour * energy / power).round_ties_even() as i64;
    let remaining = grid.count.saturating_sub(x + 1) as i64;
    let slots_clipped = slots.min(remaining);
    if slots_clipped <= 0 {
        return Ok(Overlay::empty(x, polarity));
    }

    let increment = energy / slots as f32;
    let mut points = Vec::with_capacity(slots_clipped as usize);
    for y in 1..=slots_clipped as usize {
        points.push(OverlayPoint {
            timestep: x + y,
            energy_kwh: trajectory[x + y] + increment * y as f32,
        });
    }
    Ok(Overlay {
        timestep: x,
        polarity,
        points,
    })
}
