//! Parsers for simulation engine result files.
//!
//! This module reads the engine's output metadata and sizing files:
//! the result data dictionary (RDD) listing requestable outputs, and the
//! zone-sizing CSV (ZSZ) with design-day load time series per zone.

pub mod rdd;
pub mod zsz;

pub use rdd::Rdd;
pub use zsz::{ZoneLoadSeries, Zsz};
