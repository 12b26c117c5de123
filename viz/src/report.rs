//! Fixed-width text report of star magnitudes.

use std::fmt::Write;

use photometry::UbvrMagnitudes;

use crate::Result;

/// Format a temperature → UBVR magnitude table as fixed-width text.
///
/// Pure formatting over already-computed values; the caller decides where
/// the rows come from and where the text goes.
pub fn format_magnitude_table(rows: &[(f64, UbvrMagnitudes)]) -> Result<String> {
    let mut out = String::new();

    writeln!(
        out,
        "{:<15} | {:>5} | {:>5} | {:>5} | {:>5}",
        "Temperature (K)", "U", "B", "V", "R"
    )?;
    writeln!(out, "{}{}", "-".repeat(16), "+-------".repeat(4))?;

    for (temperature_k, mags) in rows {
        writeln!(
            out,
            "{:<15} | {:>5.1} | {:>5.1} | {:>5.1} | {:>5.1}",
            temperature_k, mags.u, mags.b, mags.v, mags.r
        )?;
    }

    Ok(out)
}
