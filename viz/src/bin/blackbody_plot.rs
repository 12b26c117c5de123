//! Plot black-body spectral radiance curves.
//!
//! Draws Planck's law over a wavelength range for one or more black-body
//! temperatures, one curve per temperature, with the x axis displayed in
//! nanometers.

use std::path::Path;

use clap::Parser;
use log::info;
use plotters::prelude::*;

use photometry::{PlanckFunction, SampledFunction};
use viz::{FunctionsGraph, RangeArg};

#[derive(Parser, Debug)]
#[command(about = "Plot black-body radiance curves for a set of temperatures")]
struct Args {
    /// Black-body temperatures in Kelvin
    #[arg(long, value_delimiter = ',', default_value = "3000,4000,5000")]
    temperatures: Vec<f64>,

    /// Wavelength range in meters (start:stop:step)
    #[arg(long, default_value = "1e-7:6e-6:2e-8")]
    wavelength_range: RangeArg,

    /// Output plot filename
    #[arg(long, default_value = "plots/blackbody_flux.png")]
    output: String,
}

const CURVE_COLORS: [RGBColor; 5] = [GREEN, BLUE, RED, MAGENTA, BLACK];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut graph = FunctionsGraph::new("Black Body Flux", "wavelength / nm", "flux / W sr^-1 m^-3")
        .with_unit_factors(1e9, 1.0);

    let (start, stop, step) = args.wavelength_range.as_tuple();
    for (i, &temperature) in args.temperatures.iter().enumerate() {
        let planck = PlanckFunction::new(temperature)?;
        let samples = planck.sample_over(start, stop, step)?;
        info!("sampled {} points for {temperature} K", samples.len());

        let label = format!("{}K", temperature as i64);
        graph.add_series(samples, &label, CURVE_COLORS[i % CURVE_COLORS.len()]);
    }

    if let Some(parent) = Path::new(&args.output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    graph.render_png(Path::new(&args.output), 1600, 1200)?;
    println!("Plot saved to {}", args.output);

    Ok(())
}
