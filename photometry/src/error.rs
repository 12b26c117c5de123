//! Error types for photometric calculations.
//!
//! All validation happens at component boundaries (constructors and
//! evaluation calls), and errors propagate immediately to the caller.
//! Nothing in this crate retries or returns partial results.

use thiserror::Error;

/// Errors raised by constructors and evaluations across the crate.
///
/// Variants fall into two classes: invalid arguments (an input outside the
/// physically meaningful domain of a component) and domain errors (a
/// downstream mathematical operation would be undefined for
/// otherwise-valid-looking inputs).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhotometryError {
    /// Temperature at or below absolute zero, or non-finite.
    #[error("temperature must be strictly positive and finite, got {0} K")]
    NonPositiveTemperature(f64),

    /// Wavelength at or below zero, or non-finite.
    #[error("wavelength must be strictly positive and finite, got {0} m")]
    NonPositiveWavelength(f64),

    #[error("stellar radius must be strictly positive and finite, got {0} m")]
    NonPositiveRadius(f64),

    #[error("observer distance must be strictly positive and finite, got {0} m")]
    NonPositiveDistance(f64),

    /// Waveband selector that is not one of u, b, v, r.
    #[error("unrecognized waveband {0:?}, expected one of u, b, v, r")]
    UnknownWaveband(String),

    /// Sampling increment that would never advance or never terminate.
    #[error("point spacing must be strictly positive, got {0}")]
    NonPositiveSpacing(f64),

    #[error("sampling range start {start} exceeds end {end}")]
    InvertedRange { start: f64, end: f64 },

    #[error("sampling range bounds must be finite, got {start}..{end}")]
    NonFiniteRange { start: f64, end: f64 },

    /// Flux ratio outside the domain of the magnitude logarithm.
    #[error("flux ratio {0} has no defined magnitude")]
    NonPositiveFluxRatio(f64),
}
