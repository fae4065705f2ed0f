//! Batch reporting over scraped housing listings: resolve each listing's
//! geography from its postal code, derive ranking metrics, and render a
//! per-district terminal report of the top candidates.

pub mod config;
pub mod error;
pub mod geo;
pub mod listings;
pub mod report;
pub mod telemetry;
