//! Core flexibility types: time grid, offers, and legend categories.

use serde::{Deserialize, Serialize};

use super::error::FlexError;

/// Fixed time grid shared by a baseline schedule and its flexibility offers.
///
/// Owned by the optimization/forecast layer and borrowed by every
/// computation for the duration of one call.
///
/// # Examples
///
/// ```
/// use flex_viz::flex::TimeGrid;
///
/// let grid = TimeGrid::new(96, 4.0);
/// assert_eq!(grid.dt_hours(), 0.25);
/// assert!(grid.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeGrid {
    /// Number of timesteps on the grid.
    pub count: usize,
    /// Number of timesteps per hour (4.0 for a 15-minute grid).
    pub steps_per_hour: f32,
}

impl TimeGrid {
    /// Creates a time grid with `count` steps of `1 / steps_per_hour` hours each.
    pub fn new(count: usize, steps_per_hour: f32) -> Self {
        Self {
            count,
            steps_per_hour,
        }
    }

    /// Duration of one timestep in hours.
    pub fn dt_hours(&self) -> f32 {
        1.0 / self.steps_per_hour
    }

    /// Checks the grid invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FlexError::InvalidGrid`] if `count` is zero or
    /// `steps_per_hour` is not strictly positive.
    pub fn validate(&self) -> Result<(), FlexError> {
        if self.count == 0 {
            return Err(FlexError::InvalidGrid {
                message: "count must be > 0".to_string(),
            });
        }
        if !(self.steps_per_hour > 0.0) {
            return Err(FlexError::InvalidGrid {
                message: format!("steps_per_hour must be > 0, got {}", self.steps_per_hour),
            });
        }
        Ok(())
    }
}

/// Direction of a flexibility offer relative to the baseline schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// Extra export / reduced consumption (power and energy <= 0).
    Neg,
    /// Extra import / increased consumption (power and energy >= 0).
    Pos,
}

impl Polarity {
    /// Both polarities, in the order the per-device pass evaluates them.
    pub const BOTH: [Polarity; 2] = [Polarity::Neg, Polarity::Pos];
}

/// One timestep's flexibility offer for a single device.
///
/// Sign convention: positive = import/consumption, negative = export/supply.
/// The negative and positive sides are tracked separately; energy and power
/// of one side always share a sign (or are both zero). An all-zero offer
/// means no flexibility is available at this timestep.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FlexOffer {
    /// Timestep index on the device's time grid.
    pub timestep: usize,
    /// Offered extra export power (kW, <= 0).
    pub neg_power_kw: f32,
    /// Offered extra export energy (kWh, <= 0).
    pub neg_energy_kwh: f32,
    /// Price for the negative offer (per kWh).
    pub neg_price_per_kwh: f32,
    /// Offered extra import power (kW, >= 0).
    pub pos_power_kw: f32,
    /// Offered extra import energy (kWh, >= 0).
    pub pos_energy_kwh: f32,
    /// Price for the positive offer (per kWh).
    pub pos_price_per_kwh: f32,
}

impl FlexOffer {
    /// Returns an empty offer (no flexibility) at the given timestep.
    pub fn none_at(timestep: usize) -> Self {
        Self {
            timestep,
            ..Self::default()
        }
    }

    /// Offered power for the given polarity (kW).
    pub fn power_kw(&self, polarity: Polarity) -> f32 {
        match polarity {
            Polarity::Neg => self.neg_power_kw,
            Polarity::Pos => self.pos_power_kw,
        }
    }

    /// Offered energy for the given polarity (kWh).
    pub fn energy_kwh(&self, polarity: Polarity) -> f32 {
        match polarity {
            Polarity::Neg => self.neg_energy_kwh,
            Polarity::Pos => self.pos_energy_kwh,
        }
    }

    /// Price for the given polarity (per kWh).
    pub fn price_per_kwh(&self, polarity: Polarity) -> f32 {
        match polarity {
            Polarity::Neg => self.neg_price_per_kwh,
            Polarity::Pos => self.pos_price_per_kwh,
        }
    }
}

/// Which offer polarities are present anywhere in a device's offer set.
///
/// Computed up front over the whole collection so that legend composition
/// does not depend on iteration order or loop-local flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCategories {
    /// At least one offer has nonzero negative energy.
    pub has_neg: bool,
    /// At least one offer has nonzero positive energy.
    pub has_pos: bool,
}

impl ActiveCategories {
    /// Scans an offer collection for nonzero negative/positive offers.
    pub fn from_offers(offers: &[FlexOffer]) -> Self {
        Self {
            has_neg: offers.iter().any(|o| o.neg_energy_kwh < 0.0),
            has_pos: offers.iter().any(|o| o.pos_energy_kwh > 0.0),
        }
    }

    /// Returns `true` when either polarity is present.
    ///
    /// A device with no active category has nothing to overlay and the
    /// caller may skip it entirely.
    pub fn any(&self) -> bool {
        self.has_neg || self.has_pos
    }
}
