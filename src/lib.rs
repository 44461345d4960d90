//! chart-nav: host-agnostic axis navigation core for interactive charts.
//!
//! This crate owns the math and state behind zoom, scroll, pan, and
//! coordinate mapping for a pair of chart axes, leaving rendering and
//! windowing entirely to the embedding application.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartNavigator, NavigatorConfig};
pub use error::{NavError, NavResult};
