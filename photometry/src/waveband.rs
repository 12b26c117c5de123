//! Johnson UBVR waveband selectors and their calibration data.
//!
//! Each band is identified by its filter's effective center wavelength and
//! the flux of Vega through that filter, which serves as the zero point of
//! the magnitude scale in the band.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::SI;
use crate::error::PhotometryError;

/// Standard photometric waveband.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Waveband {
    U,
    B,
    V,
    R,
}

impl Waveband {
    /// All bands, ordered blue to red.
    pub const ALL: [Waveband; 4] = [Waveband::U, Waveband::B, Waveband::V, Waveband::R];

    /// Effective center wavelength of the band's filter.
    /// Units: m
    pub fn center_wavelength_m(&self) -> f64 {
        match self {
            Waveband::U => SI::U_WAVELENGTH,
            Waveband::B => SI::B_WAVELENGTH,
            Waveband::V => SI::V_WAVELENGTH,
            Waveband::R => SI::R_WAVELENGTH,
        }
    }

    /// Flux of Vega through the band's filter, the zero point of the
    /// magnitude scale in this band.
    pub fn vega_zero_point_flux(&self) -> f64 {
        match self {
            Waveband::U => SI::VEGA_U_FLUX,
            Waveband::B => SI::VEGA_B_FLUX,
            Waveband::V => SI::VEGA_V_FLUX,
            Waveband::R => SI::VEGA_R_FLUX,
        }
    }
}

impl fmt::Display for Waveband {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            Waveband::U => "U",
            Waveband::B => "B",
            Waveband::V => "V",
            Waveband::R => "R",
        };
        write!(f, "{}", letter)
    }
}

impl FromStr for Waveband {
    type Err = PhotometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" => Ok(Waveband::U),
            "b" => Ok(Waveband::B),
            "v" => Ok(Waveband::V),
            "r" => Ok(Waveband::R),
            _ => Err(PhotometryError::UnknownWaveband(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_either_case() {
        assert_eq!("u".parse::<Waveband>().unwrap(), Waveband::U);
        assert_eq!("B".parse::<Waveband>().unwrap(), Waveband::B);
        assert_eq!(" v ".parse::<Waveband>().unwrap(), Waveband::V);
        assert_eq!("r".parse::<Waveband>().unwrap(), Waveband::R);
    }

    #[test]
    fn test_parse_rejects_unknown_selector() {
        assert_eq!(
            "x".parse::<Waveband>(),
            Err(PhotometryError::UnknownWaveband("x".to_string()))
        );
        assert!("".parse::<Waveband>().is_err());
        assert!("uv".parse::<Waveband>().is_err());
    }

    #[test]
    fn test_bands_ordered_blue_to_red() {
        let wavelengths: Vec<f64> = Waveband::ALL
            .iter()
            .map(|band| band.center_wavelength_m())
            .collect();
        for pair in wavelengths.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_vega_flux_falls_toward_red() {
        // Vega is an A-type star; its flux through these filters drops
        // monotonically from U to R.
        let fluxes: Vec<f64> = Waveband::ALL
            .iter()
            .map(|band| band.vega_zero_point_flux())
            .collect();
        for pair in fluxes.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for band in Waveband::ALL {
            assert_eq!(band.to_string().parse::<Waveband>().unwrap(), band);
        }
    }
}
