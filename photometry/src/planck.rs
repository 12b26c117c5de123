//! Planck's law of black-body radiation.
//!
//! Relates the wavelengths emitted by an ideal black body to their
//! intensities. The exponential term grows extremely fast toward short
//! wavelengths, so evaluation is guarded against non-positive wavelengths
//! rather than silently returning NaN or infinity.

use crate::constants::SI;
use crate::error::PhotometryError;
use crate::function::SampledFunction;

/// Spectral radiance of an ideal black body at a fixed temperature.
///
/// Evaluating at a wavelength `l` (meters) returns
/// `B(l) = 2hc² / (l⁵ · (e^(hc / (l·k·T)) − 1))` in W·sr⁻¹·m⁻³.
///
/// # Example
/// ```
/// use photometry::{PlanckFunction, SampledFunction};
///
/// let sun_like = PlanckFunction::new(5778.0).unwrap();
/// assert!(sun_like.value_at(5.5e-7).unwrap() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanckFunction {
    /// Black-body temperature in Kelvin.
    temperature_k: f64,
}

impl PlanckFunction {
    /// Create a Planck function for a black body at `temperature_k`.
    ///
    /// # Errors
    /// Rejects temperatures that are not strictly positive and finite.
    pub fn new(temperature_k: f64) -> Result<Self, PhotometryError> {
        if !(temperature_k > 0.0) || !temperature_k.is_finite() {
            return Err(PhotometryError::NonPositiveTemperature(temperature_k));
        }
        Ok(Self { temperature_k })
    }

    /// Black-body temperature in Kelvin.
    pub fn temperature_k(&self) -> f64 {
        self.temperature_k
    }
}

impl SampledFunction for PlanckFunction {
    fn value_at(&self, wavelength_m: f64) -> Result<f64, PhotometryError> {
        if !(wavelength_m > 0.0) || !wavelength_m.is_finite() {
            return Err(PhotometryError::NonPositiveWavelength(wavelength_m));
        }

        let numerator = 2.0 * SI::PLANCK_CONSTANT * SI::SPEED_OF_LIGHT * SI::SPEED_OF_LIGHT;
        let exponent = (SI::PLANCK_CONSTANT * SI::SPEED_OF_LIGHT)
            / (wavelength_m * SI::BOLTZMANN_CONSTANT * self.temperature_k);
        let denominator = wavelength_m.powi(5) * (exponent.exp() - 1.0);

        Ok(numerator / denominator)
    }
}
