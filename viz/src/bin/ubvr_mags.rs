//! Plot and tabulate UBVR magnitudes of a black-body star.
//!
//! Draws magnitude-vs-temperature curves in the four UBVR bands for a star
//! of fixed radius and distance, then prints a fixed-width magnitude table.

use std::path::Path;

use clap::Parser;
use log::info;
use plotters::prelude::*;

use photometry::{MagnitudeFunction, SampledFunction, Star, Waveband, SI};
use viz::{format_magnitude_table, FunctionsGraph, RangeArg};

#[derive(Parser, Debug)]
#[command(about = "Plot and tabulate UBVR magnitudes of a black-body star")]
struct Args {
    /// Stellar radius in meters
    #[arg(long, default_value_t = SI::SOLAR_RADIUS)]
    radius: f64,

    /// Distance from the observer in parsecs
    #[arg(long, default_value_t = 10.0)]
    distance_pc: f64,

    /// Temperature range in Kelvin (start:stop:step) for the plotted curves
    #[arg(long, default_value = "1000:10000:10")]
    temperature_range: RangeArg,

    /// Temperature step in Kelvin between printed table rows
    #[arg(long, default_value_t = 1000.0)]
    table_step: f64,

    /// Output plot filename
    #[arg(long, default_value = "plots/ubvr_magnitudes.png")]
    output: String,
}

/// Line color per band, matching the usual chart conventions.
fn band_color(band: Waveband) -> RGBColor {
    match band {
        Waveband::U => MAGENTA,
        Waveband::B => BLUE,
        Waveband::V => BLACK,
        Waveband::R => RED,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let distance_m = args.distance_pc * SI::PARSEC;
    let (start, stop, step) = args.temperature_range.as_tuple();

    let mut graph = FunctionsGraph::new("Star UBVR Magnitudes", "Temperature / K", "Magnitude");
    for band in Waveband::ALL {
        let func = MagnitudeFunction::new(args.radius, distance_m, band)?;
        let samples = func.sample_over(start, stop, step)?;
        info!("sampled {} points for the {band} band", samples.len());

        let label = band.to_string();
        graph.add_series(samples, &label, band_color(band));
    }

    if let Some(parent) = Path::new(&args.output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    graph.render_png(Path::new(&args.output), 1600, 1200)?;
    println!("Plot saved to {}", args.output);

    let mut rows = Vec::new();
    let mut temperature = start;
    while temperature <= stop {
        let star = Star::new(args.radius, distance_m, temperature)?;
        rows.push((temperature, star.ubvr_magnitudes()?));
        temperature += args.table_step;
    }
    print!("{}", format_magnitude_table(&rows)?);

    Ok(())
}
