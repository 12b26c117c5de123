//! Physical constants and photometric calibration data.
//!
//! Everything here is compiled-in, read-only data; nothing is loaded from
//! configuration or mutated at runtime.

/// Physical constants in SI units for black-body and magnitude calculations.
///
/// Also carries the reference data of the UBVR photometric system: the
/// effective center wavelength of each filter and the flux of Vega through
/// it, which together define the zero point of the magnitude scale per band.
pub struct SI {}

impl SI {
    /// Boltzmann constant.
    /// Units: J/K
    pub const BOLTZMANN_CONSTANT: f64 = 1.38064852e-23;

    /// Planck constant.
    /// Units: J·s
    pub const PLANCK_CONSTANT: f64 = 6.63607004e-34;

    /// Speed of light in vacuum.
    /// Units: m/s
    pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

    /// Stefan-Boltzmann constant.
    /// Units: W·m⁻²·K⁻⁴
    pub const STEFAN_BOLTZMANN_CONSTANT: f64 = 5.67e-8;

    /// Length of one parsec.
    /// Units: m
    pub const PARSEC: f64 = 3.086e16;

    /// Radius of the Sun.
    /// Units: m
    pub const SOLAR_RADIUS: f64 = 695500e3;

    /// Effective wavelength of the U filter.
    /// Units: m
    pub const U_WAVELENGTH: f64 = 0.35e-6;

    /// Effective wavelength of the B filter.
    /// Units: m
    pub const B_WAVELENGTH: f64 = 0.438e-6;

    /// Effective wavelength of the V filter.
    /// Units: m
    pub const V_WAVELENGTH: f64 = 0.5465e-6;

    /// Effective wavelength of the R filter.
    /// Units: m
    pub const R_WAVELENGTH: f64 = 0.6470e-6;

    /// Flux of Vega through the U filter.
    pub const VEGA_U_FLUX: f64 = 4.172e15;

    /// Flux of Vega through the B filter.
    pub const VEGA_B_FLUX: f64 = 3.332e15;

    /// Flux of Vega through the V filter.
    pub const VEGA_V_FLUX: f64 = 2.127e15;

    /// Flux of Vega through the R filter.
    pub const VEGA_R_FLUX: f64 = 1.426e15;
}
