//! Black-body radiation curves and UBVR photometric magnitudes.
//!
//! Models a star as an ideal black body and derives its spectral radiance
//! (Planck's law) and apparent magnitudes in the Johnson UBVR bands against
//! the Vega zero points. The [`SampledFunction`] trait turns any of the
//! numeric models into (x, y) sample arrays for plotting or tabulation.
//!
//! # Physical Framework
//!
//! All quantities are in SI units:
//! - **Spectral radiance**: W·sr⁻¹·m⁻³ (power per unit area per unit solid
//!   angle per unit wavelength)
//! - **Wavelengths**: meters
//! - **Temperatures**: Kelvin
//!
//! Magnitudes follow Pogson's law relative to Vega's flux through each
//! band's filter, so a magnitude of zero corresponds to Vega and lower
//! values are brighter.
//!
//! # Example
//! ```
//! use photometry::{PlanckFunction, SampledFunction, Star, Waveband, SI};
//!
//! // Radiance curve of a 4000 K black body across the visible range.
//! let planck = PlanckFunction::new(4000.0).unwrap();
//! let samples = planck.sample_over(1e-7, 6e-6, 2e-8).unwrap();
//! assert_eq!(samples.xs.len(), samples.ys.len());
//!
//! // V-band magnitude of a solar-radius star at 10 parsecs.
//! let star = Star::new(SI::SOLAR_RADIUS, 10.0 * SI::PARSEC, 4000.0).unwrap();
//! let v_mag = star.magnitude(Waveband::V).unwrap();
//! assert!((v_mag - 7.0).abs() < 0.1);
//! ```

pub mod constants;
pub mod error;
pub mod function;
pub mod planck;
pub mod star;
pub mod waveband;

pub use constants::SI;
pub use error::PhotometryError;
pub use function::{SampleSet, SampledFunction};
pub use planck::PlanckFunction;
pub use star::{MagnitudeFunction, Star, UbvrMagnitudes};
pub use waveband::Waveband;
