//! Star magnitude model and its sampled-function adapter.
//!
//! Magnitudes come from Pogson's law applied to the ratio of the star's
//! Planck radiance at a band's center wavelength to Vega's zero-point flux
//! in that band. The zero points already encode the calibration of the UBVR
//! system, so no additional surface-area or distance scaling is applied.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::SI;
use crate::error::PhotometryError;
use crate::function::SampledFunction;
use crate::planck::PlanckFunction;
use crate::waveband::Waveband;

/// A star modeled as an ideal black body.
///
/// Stateless after construction: every magnitude query is a pure function
/// of the three fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    radius_m: f64,
    distance_m: f64,
    surface_temperature_k: f64,
}

impl Star {
    /// Create a star from its radius, distance from the observer, and
    /// surface temperature.
    ///
    /// # Arguments
    /// * `radius_m` - Stellar radius in meters
    /// * `distance_m` - Distance from the observer in meters
    /// * `surface_temperature_k` - Surface temperature in Kelvin
    ///
    /// # Errors
    /// Every field must be strictly positive and finite; zero or negative
    /// values are physically meaningless.
    pub fn new(
        radius_m: f64,
        distance_m: f64,
        surface_temperature_k: f64,
    ) -> Result<Self, PhotometryError> {
        if !(radius_m > 0.0) || !radius_m.is_finite() {
            return Err(PhotometryError::NonPositiveRadius(radius_m));
        }
        if !(distance_m > 0.0) || !distance_m.is_finite() {
            return Err(PhotometryError::NonPositiveDistance(distance_m));
        }
        if !(surface_temperature_k > 0.0) || !surface_temperature_k.is_finite() {
            return Err(PhotometryError::NonPositiveTemperature(
                surface_temperature_k,
            ));
        }
        Ok(Self {
            radius_m,
            distance_m,
            surface_temperature_k,
        })
    }

    /// Stellar radius in meters.
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Distance from the observer in meters.
    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    /// Surface temperature in Kelvin.
    pub fn surface_temperature_k(&self) -> f64 {
        self.surface_temperature_k
    }

    /// Apparent magnitude of the star in `band`.
    ///
    /// Pogson's law against the band's Vega zero point:
    /// `m = -2.5 · log10(flux / zero_point)`.
    ///
    /// # Errors
    /// A flux ratio at or below zero (possible only when the radiance
    /// underflows to zero) has no defined magnitude.
    pub fn magnitude(&self, band: Waveband) -> Result<f64, PhotometryError> {
        let planck = PlanckFunction::new(self.surface_temperature_k)?;
        let flux = planck.value_at(band.center_wavelength_m())?;

        let ratio = flux / band.vega_zero_point_flux();
        if !(ratio > 0.0) || !ratio.is_finite() {
            return Err(PhotometryError::NonPositiveFluxRatio(ratio));
        }

        Ok(-2.5 * ratio.log10())
    }

    /// Apparent magnitudes in all four UBVR bands.
    pub fn ubvr_magnitudes(&self) -> Result<UbvrMagnitudes, PhotometryError> {
        Ok(UbvrMagnitudes {
            u: self.magnitude(Waveband::U)?,
            b: self.magnitude(Waveband::B)?,
            v: self.magnitude(Waveband::V)?,
            r: self.magnitude(Waveband::R)?,
        })
    }

    /// Total radiated power under the Stefan-Boltzmann law.
    /// Units: W
    pub fn luminosity(&self) -> f64 {
        let area = 4.0 * PI * self.radius_m * self.radius_m;
        SI::STEFAN_BOLTZMANN_CONSTANT * area * self.surface_temperature_k.powi(4)
    }
}

/// Apparent magnitudes of one star in the four UBVR bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UbvrMagnitudes {
    pub u: f64,
    pub b: f64,
    pub v: f64,
    pub r: f64,
}

/// Band magnitude as a function of temperature, for fixed geometry.
///
/// Fixes radius, distance, and waveband at construction; each evaluation
/// builds a transient [`Star`] at the requested temperature. This lets
/// magnitude-vs-temperature curves flow through the same sampling machinery
/// as the radiance curves.
#[derive(Debug, Clone, PartialEq)]
pub struct MagnitudeFunction {
    radius_m: f64,
    distance_m: f64,
    band: Waveband,
}

impl MagnitudeFunction {
    /// Fix the star's geometry and the band to evaluate in.
    ///
    /// # Errors
    /// Radius and distance must be strictly positive and finite. The
    /// temperature is validated per evaluation.
    pub fn new(radius_m: f64, distance_m: f64, band: Waveband) -> Result<Self, PhotometryError> {
        if !(radius_m > 0.0) || !radius_m.is_finite() {
            return Err(PhotometryError::NonPositiveRadius(radius_m));
        }
        if !(distance_m > 0.0) || !distance_m.is_finite() {
            return Err(PhotometryError::NonPositiveDistance(distance_m));
        }
        Ok(Self {
            radius_m,
            distance_m,
            band,
        })
    }

    /// The waveband this function evaluates in.
    pub fn band(&self) -> Waveband {
        self.band
    }
}

impl SampledFunction for MagnitudeFunction {
    fn value_at(&self, temperature_k: f64) -> Result<f64, PhotometryError> {
        Star::new(self.radius_m, self.distance_m, temperature_k)?.magnitude(self.band)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn ten_parsec_sun(temperature_k: f64) -> Star {
        Star::new(SI::SOLAR_RADIUS, 10.0 * SI::PARSEC, temperature_k).unwrap()
    }

    fn round1(x: f64) -> f64 {
        (x * 10.0).round() / 10.0
    }

    #[test]
    fn test_ubvr_magnitude_reference_table() {
        // Solar-radius star at 10 parsecs, magnitudes to one decimal.
        let expected = [
            (3000.0, [13.1, 11.0, 9.4, 8.4]),
            (4000.0, [9.3, 8.1, 7.0, 6.4]),
            (5000.0, [7.1, 6.3, 5.6, 5.2]),
        ];

        for (temperature, mags) in expected {
            let star = ten_parsec_sun(temperature);
            let got = star.ubvr_magnitudes().unwrap();
            assert_eq!(round1(got.u), mags[0], "U at {temperature} K");
            assert_eq!(round1(got.b), mags[1], "B at {temperature} K");
            assert_eq!(round1(got.v), mags[2], "V at {temperature} K");
            assert_eq!(round1(got.r), mags[3], "R at {temperature} K");
        }
    }

    #[test]
    fn test_ubvr_magnitudes_agree_with_band_queries() {
        let star = ten_parsec_sun(4000.0);
        let all = star.ubvr_magnitudes().unwrap();
        assert_relative_eq!(all.u, star.magnitude(Waveband::U).unwrap());
        assert_relative_eq!(all.v, star.magnitude(Waveband::V).unwrap());
    }

    #[test]
    fn test_hotter_stars_are_brighter() {
        // Lower magnitude means brighter.
        let cool = ten_parsec_sun(3000.0);
        let hot = ten_parsec_sun(5000.0);
        for band in Waveband::ALL {
            assert!(hot.magnitude(band).unwrap() < cool.magnitude(band).unwrap());
        }
    }

    #[test]
    fn test_rejects_non_positive_fields() {
        assert_eq!(
            Star::new(0.0, 1.0, 1.0),
            Err(PhotometryError::NonPositiveRadius(0.0))
        );
        assert_eq!(
            Star::new(1.0, -1.0, 1.0),
            Err(PhotometryError::NonPositiveDistance(-1.0))
        );
        assert_eq!(
            Star::new(1.0, 1.0, 0.0),
            Err(PhotometryError::NonPositiveTemperature(0.0))
        );
        assert!(Star::new(f64::NAN, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_underflowing_flux_is_a_domain_error() {
        // At 1 K the exponential overflows and the radiance underflows to
        // zero, which has no defined magnitude.
        let frozen = ten_parsec_sun(1.0);
        assert!(matches!(
            frozen.magnitude(Waveband::U),
            Err(PhotometryError::NonPositiveFluxRatio(_))
        ));
    }

    #[test]
    fn test_luminosity_scaling() {
        let star = ten_parsec_sun(5778.0);

        // L ∝ T⁴ at fixed radius.
        let hotter = ten_parsec_sun(2.0 * 5778.0);
        assert_relative_eq!(
            hotter.luminosity() / star.luminosity(),
            16.0,
            max_relative = 1e-12
        );

        // L ∝ r² at fixed temperature.
        let bigger = Star::new(2.0 * SI::SOLAR_RADIUS, 10.0 * SI::PARSEC, 5778.0).unwrap();
        assert_relative_eq!(
            bigger.luminosity() / star.luminosity(),
            4.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_magnitude_function_matches_star() {
        let func =
            MagnitudeFunction::new(SI::SOLAR_RADIUS, 10.0 * SI::PARSEC, Waveband::B).unwrap();
        let direct = ten_parsec_sun(4000.0).magnitude(Waveband::B).unwrap();
        assert_relative_eq!(func.value_at(4000.0).unwrap(), direct);
    }

    #[test]
    fn test_magnitude_function_sampling() {
        let func =
            MagnitudeFunction::new(SI::SOLAR_RADIUS, 10.0 * SI::PARSEC, Waveband::U).unwrap();
        let set = func.sample_over(1000.0, 10000.0, 1000.0).unwrap();

        assert_eq!(set.xs.len(), 10);
        // Magnitudes fall monotonically as the star heats up.
        for pair in set.ys.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_magnitude_function_rejects_bad_temperature() {
        let func = MagnitudeFunction::new(1.0, 1.0, Waveband::V).unwrap();
        assert!(func.value_at(0.0).is_err());
        assert!(func.value_at(-40.0).is_err());
    }

    #[test]
    fn test_magnitude_function_rejects_bad_geometry() {
        assert!(MagnitudeFunction::new(0.0, 1.0, Waveband::V).is_err());
        assert!(MagnitudeFunction::new(1.0, f64::INFINITY, Waveband::V).is_err());
    }
}
