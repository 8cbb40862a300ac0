//! Flexibility-trajectory computation: baseline integration and per-offer
//! overlay branches.

/// Error taxonomy shared by all flexibility computations.
pub mod error;
pub mod spread;
pub mod trajectory;
pub mod types;
/// Per-device assembly pass.
pub mod view;

// Re-export the main types for convenience
pub use error::FlexError;
pub use spread::{Overlay, OverlayPoint, spread_offer};
pub use trajectory::cumulative_trajectory;
pub use types::{ActiveCategories, FlexOffer, Polarity, TimeGrid};
pub use view::{FlexView, build_flex_view};
