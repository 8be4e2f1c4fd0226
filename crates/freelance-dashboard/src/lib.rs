//! Presentation view-models for the freelancer analytics dashboard
//!
//! Everything here is pure state and pure functions: the table tracks a
//! pagination cursor, the chart adapters map typed entities onto the
//! label/series structure of the charting layer, and the page orchestrator
//! sequences the fetches and per-section loading flags. No rendering
//! backend is assumed.

#![forbid(unsafe_code)]

pub mod charts;
pub mod page;
pub mod predict;
pub mod table;

pub use charts::ChartView;
pub use page::{DashboardPage, Section};
pub use predict::PredictionForm;
pub use table::{DataTable, TableView};
