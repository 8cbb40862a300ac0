//! Flexibility-offer trajectory computation for household energy devices.
//!
//! Given an optimized baseline power schedule and per-timestep signed
//! flexibility offers (EV, PV, ...), this crate derives the cumulative
//! energy-exchange trajectory and the overlay branches showing how
//! activating each offer would bend it. The optimizer producing the
//! schedule and the renderer drawing the curves are external collaborators;
//! everything here is pure computation on plain numeric arrays.

/// Trajectory integration, offer spreading, and the per-device pass.
pub mod flex;
pub mod plot;
