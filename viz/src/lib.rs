//! Plot rendering and report formatting for black-body photometry.
//!
//! Everything in this crate consumes already-computed sample arrays and
//! magnitude values from the `photometry` crate; no physics lives here.
//! Plots render to PNG through `plotters`, reports are plain fixed-width
//! text.

use thiserror::Error;

/// Errors raised while rendering plots or formatting reports.
#[derive(Debug, Error)]
pub enum VizError {
    /// The renderer was handed nothing to draw.
    #[error("graph has no sampled points to draw")]
    EmptyGraph,

    /// Backend failure from the plotting library.
    #[error("plot rendering failed: {0}")]
    Render(String),

    /// Text formatting failure while building a report.
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Standard Result type for visualization operations.
pub type Result<T> = std::result::Result<T, VizError>;

pub mod graph;
pub mod range_arg;
pub mod report;

pub use graph::{FunctionsGraph, GraphSeries};
pub use range_arg::RangeArg;
pub use report::format_magnitude_table;
