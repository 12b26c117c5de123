//! Range arguments for parameter sweeps.
//!
//! Clap-compatible `start:stop:step` type used by the plotting binaries to
//! describe sampling ranges.

use std::fmt;
use std::str::FromStr;

/// A forward sweep range: `start:stop:step` with a positive step.
///
/// Matches the sampling contract of the numeric models: the stop value is
/// inclusive and the step must be strictly positive.
///
/// Valid formats: `"1000:10000:10"`, `"1e-7:6e-6:2e-8"`. Rejected:
/// missing components, zero or negative step, start beyond stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeArg {
    start: f64,
    stop: f64,
    step: f64,
}

impl RangeArg {
    /// Initial value of the sweep.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Final value of the sweep (inclusive).
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Increment between values.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// (start, stop, step) tuple for direct unpacking.
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.start, self.stop, self.step)
    }
}

impl FromStr for RangeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err("range must be in format 'start:stop:step'".to_string());
        }

        let start = parts[0]
            .trim()
            .parse::<f64>()
            .map_err(|_| "invalid start value".to_string())?;
        let stop = parts[1]
            .trim()
            .parse::<f64>()
            .map_err(|_| "invalid stop value".to_string())?;
        let step = parts[2]
            .trim()
            .parse::<f64>()
            .map_err(|_| "invalid step value".to_string())?;

        if !(step > 0.0) {
            return Err("step must be positive".to_string());
        }
        if start > stop {
            return Err("start must not exceed stop".to_string());
        }

        Ok(RangeArg { start, stop, step })
    }
}

impl fmt::Display for RangeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.stop, self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ranges() {
        let range: RangeArg = "0.0:10.0:1.0".parse().unwrap();
        assert_eq!(range.as_tuple(), (0.0, 10.0, 1.0));

        let range: RangeArg = "1000:10000:10".parse().unwrap();
        assert_eq!(range.as_tuple(), (1000.0, 10000.0, 10.0));

        // Scientific notation, as used for wavelength sweeps.
        let range: RangeArg = "1e-7:6e-6:2e-8".parse().unwrap();
        assert_eq!(range.as_tuple(), (1e-7, 6e-6, 2e-8));
    }

    #[test]
    fn test_parse_allows_degenerate_range() {
        let range: RangeArg = "5.0:5.0:1.0".parse().unwrap();
        assert_eq!(range.start(), range.stop());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("1.0:2.0".parse::<RangeArg>().is_err());
        assert!("1.0:2.0:3.0:4.0".parse::<RangeArg>().is_err());
        assert!("junk:2.0:1.0".parse::<RangeArg>().is_err());
        assert!("1.0:junk:1.0".parse::<RangeArg>().is_err());
        assert!("1.0:2.0:junk".parse::<RangeArg>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_positive_step() {
        assert!("1.0:2.0:0.0".parse::<RangeArg>().is_err());
        assert!("1.0:2.0:-1.0".parse::<RangeArg>().is_err());
    }

    #[test]
    fn test_parse_rejects_inverted_range() {
        assert!("5.0:1.0:1.0".parse::<RangeArg>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let range: RangeArg = "1.5:10:0.5".parse().unwrap();
        assert_eq!(range.to_string(), "1.5:10:0.5");
        assert_eq!(range.to_string().parse::<RangeArg>().unwrap(), range);
    }
}
