//! Chart geometry computation.
//!
//! Pure, deterministic coordinate math consumed by the rendering layer.
//! Nothing here touches the terminal; the TUI widgets and the report
//! exporters both sit on top of these functions.

pub mod gauge;
pub mod radar;

pub use radar::{LabelAnchor, RadarConfig, RadarGeometry};
