//! Shared test fixtures for integration tests.

use flex_viz::flex::{FlexOffer, TimeGrid};

/// Default 15-minute grid covering six hours (24 steps).
pub fn default_grid() -> TimeGrid {
    TimeGrid::new(24, 4.0)
}

/// EV charging schedule on the default grid: 11 kW for the first two hours,
/// idle afterwards.
pub fn ev_baseline_kw(grid: &TimeGrid) -> Vec<f32> {
    (0..grid.count)
        .map(|t| if t < 8 { 11.0 } else { 0.0 })
        .collect()
}

/// Offer table matching [`ev_baseline_kw`]: while charging the EV can back
/// off by one slot's worth of energy (negative flexibility), while idle it
/// can pull two extra slots at full power (positive flexibility).
pub fn ev_offers(grid: &TimeGrid) -> Vec<FlexOffer> {
    (0..grid.count)
        .map(|t| {
            if t < 8 {
                FlexOffer {
                    timestep: t,
                    neg_power_kw: -11.0,
                    neg_energy_kwh: -2.75,
                    neg_price_per_kwh: 0.05,
                    ..FlexOffer::default()
                }
            } else {
                FlexOffer {
                    timestep: t,
                    pos_power_kw: 11.0,
                    pos_energy_kwh: 5.5,
                    pos_price_per_kwh: 0.19,
                    ..FlexOffer::default()
                }
            }
        })
        .collect()
}
