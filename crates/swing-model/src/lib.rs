//! OTR Swing Model
//!
//! Defines the core data contracts shared by ingestion, computation, and
//! presentation:
//! - **Swings:** One canonical `SwingRecord` per sensor row, regardless of export layout
//! - **Levels:** Independent bat-speed and exit-velocity competition tiers
//! - **Metrics:** Metric catalogue, grades, and per-metric results
//! - **Reports:** Session sections and the strike-zone count grid
//!
//! Measurements are in sensor units: mph, degrees, seconds, feet.

pub mod level;
pub mod metric;
pub mod report;
pub mod swing;

pub use level::*;
pub use metric::*;
pub use report::*;
pub use swing::*;
