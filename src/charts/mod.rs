//! Chart Specifications
//!
//! Builds the two dashboard figures as Plotly-shaped JSON structures. The
//! browser page hands them to the charting library unchanged; no aggregation
//! or derived statistics happen here (trend columns are precomputed upstream
//! in the source data).

mod figure;
mod fiscal;
mod velocity;

pub use figure::{Axis, AxisTitle, Figure, Font, Layout, Margin, Marker, Mode, Title, Trace};
pub use fiscal::fiscal_figure;
pub use velocity::velocity_figure;
