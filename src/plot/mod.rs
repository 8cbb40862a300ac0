//! Plot-support numerics consumed by the rendering layer.
//!
//! Nothing in here draws; these helpers compute tick positions, axis limits,
//! and date annotations from the same plain arrays the flexibility pass
//! produces.

pub mod axis;
/// Calendar-date run segmentation for x-axis annotation.
pub mod dates;

pub use axis::{symmetric_limit, tick_stride};
pub use dates::date_run_midpoints;
