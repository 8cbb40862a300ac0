//! Per-device assembly of trajectory, overlays, and legend categories.

use serde::Serialize;

use super::error::FlexError;
use super::spread::{Overlay, spread_offer};
use super::trajectory::cumulative_trajectory;
use super::types::{ActiveCategories, FlexOffer, Polarity, TimeGrid};

/// Everything the rendering collaborator needs to draw one device.
///
/// Produced by [`build_flex_view`]; overlays are ordered by `(timestep,
/// polarity)` with the negative side first, matching the order offers are
/// evaluated in. Offers that failed their own integrity check are reported
/// in `offer_errors` without affecting any other offer.
#[derive(Debug, Clone, Serialize)]
pub struct FlexView {
    /// Baseline cumulative energy trajectory (kWh), length `grid.count`.
    pub trajectory: Vec<f32>,
    /// Non-empty overlay branches, one per activatable offer polarity.
    pub overlays: Vec<Overlay>,
    /// Which polarities occur anywhere in the offer set, for legend
    /// composition.
    pub categories: ActiveCategories,
    /// Per-offer integrity faults encountered during the pass.
    pub offer_errors: Vec<FlexError>,
}

impl FlexView {
    /// Looks up the overlay anchored at the given timestep and polarity.
    pub fn overlay_at(&self, timestep: usize, polarity: Polarity) -> Option<&Overlay> {
        self.overlays
            .iter()
            .find(|o| o.timestep == timestep && o.polarity == polarity)
    }
}

/// Runs the full flexibility pass for one device.
///
/// Builds the baseline trajectory once, then spreads every offer in both
/// polarities against it. A malformed grid or schedule is fatal for the
/// whole device; a malformed individual offer is recorded in
/// [`FlexView::offer_errors`] and the pass continues with the remaining
/// offers, so one bad table row never suppresses the rest of the
/// visualization.
///
/// # Errors
///
/// Propagates [`FlexError::InvalidGrid`] and [`FlexError::InvalidSchedule`]
/// from trajectory construction.
pub fn build_flex_view(
    offers: &[FlexOffer],
    baseline_kw: &[f32],
    grid: &TimeGrid,
) -> Result<FlexView, FlexError> {
    let trajectory = cumulative_trajectory(baseline_kw, grid)?;
    let categories = ActiveCategories::from_offers(offers);

    let mut overlays = Vec::new();
    let mut offer_errors = Vec::new();
    for offer in offers {
        for polarity in Polarity::BOTH {
            match spread_offer(offer, &trajectory, grid, polarity) {
                Ok(overlay) if !overlay.is_empty() => overlays.push(overlay),
                Ok(_) => {}
                Err(e) => offer_errors.push(e),
            }
        }
    }

    Ok(FlexView {
        trajectory,
        overlays,
        categories,
        offer_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly_grid(count: usize) -> TimeGrid {
        TimeGrid::new(count, 1.0)
    }

    #[test]
    fn pass_collects_both_polarities() {
        let grid = hourly_grid(6);
        let baseline = vec![1.0; 6];
        let offers = vec![
            FlexOffer {
                timestep: 0,
                neg_power_kw: -1.0,
                neg_energy_kwh: -1.0,
                ..FlexOffer::default()
            },
            FlexOffer {
                timestep: 2,
                pos_power_kw: 2.0,
                pos_energy_kwh: 2.0,
                ..FlexOffer::default()
            },
        ];
        let view = build_flex_view(&offers, &baseline, &grid).expect("valid inputs");
        assert_eq!(view.overlays.len(), 2);
        assert!(view.categories.has_neg);
        assert!(view.categories.has_pos);
        assert!(view.offer_errors.is_empty());
        assert!(view.overlay_at(0, Polarity::Neg).is_some());
        assert!(view.overlay_at(2, Polarity::Pos).is_some());
        assert!(view.overlay_at(2, Polarity::Neg).is_none());
    }

    #[test]
    fn empty_offers_are_skipped_silently() {
        let grid = hourly_grid(4);
        let baseline = vec![0.5; 4];
        let offers: Vec<FlexOffer> = (0..4).map(FlexOffer::none_at).collect();
        let view = build_flex_view(&offers, &baseline, &grid).expect("valid inputs");
        assert!(view.overlays.is_empty());
        assert!(view.offer_errors.is_empty());
        assert!(!view.categories.any());
    }

    #[test]
    fn bad_offer_does_not_abort_the_pass() {
        let grid = hourly_grid(6);
        let baseline = vec![1.0; 6];
        let offers = vec![
            // Integrity fault: energy with zero power.
            FlexOffer {
                timestep: 1,
                pos_energy_kwh: 1.0,
                ..FlexOffer::default()
            },
            FlexOffer {
                timestep: 3,
                pos_power_kw: 1.0,
                pos_energy_kwh: 1.0,
                ..FlexOffer::default()
            },
        ];
        let view = build_flex_view(&offers, &baseline, &grid).expect("valid inputs");
        assert_eq!(view.overlays.len(), 1);
        assert_eq!(view.overlays[0].timestep, 3);
        assert_eq!(
            view.offer_errors,
            vec![FlexError::InvalidOffer {
                timestep: 1,
                polarity: Polarity::Pos,
            }]
        );
    }

    #[test]
    fn schedule_mismatch_is_fatal_for_the_device() {
        let grid = hourly_grid(6);
        let baseline = vec![1.0; 5];
        let result = build_flex_view(&[], &baseline, &grid);
        assert!(matches!(result, Err(FlexError::InvalidSchedule { .. })));
    }

    #[test]
    fn trajectory_matches_standalone_builder() {
        let grid = TimeGrid::new(4, 4.0);
        let baseline = vec![4.0, 4.0, -4.0, 0.0];
        let view = build_flex_view(&[], &baseline, &grid).expect("valid inputs");
        assert_eq!(view.trajectory, vec![0.0, 1.0, 2.0, 1.0]);
    }
}
