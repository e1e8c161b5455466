//! Progress Display Adapters
//!
//! ProgressDisplayの端末向け実装

pub mod indicatif_display;
pub mod line_display;

pub use indicatif_display::IndicatifDisplayFactory;
pub use line_display::LineDisplayFactory;
