//! Function plot rendering on top of `plotters`.
//!
//! [`FunctionsGraph`] is a sink: it accepts sampled (x, y) arrays plus
//! display metadata and draws a PNG. It knows nothing about where the
//! samples came from.

use std::path::Path;

use plotters::prelude::*;

use photometry::SampleSet;

use crate::{Result, VizError};

/// One plotted curve: samples plus their display metadata.
#[derive(Debug, Clone)]
pub struct GraphSeries {
    /// Sampled (x, y) values to draw.
    pub samples: SampleSet,
    /// Legend label.
    pub label: String,
    /// Line color.
    pub color: RGBColor,
}

/// A PNG line plot of one or more sampled functions.
///
/// Unit factors linearly rescale samples at draw time, e.g. `1e9` on x to
/// display wavelengths sampled in meters as nanometers.
pub struct FunctionsGraph {
    title: String,
    x_label: String,
    y_label: String,
    unit_factor_x: f64,
    unit_factor_y: f64,
    series: Vec<GraphSeries>,
}

impl FunctionsGraph {
    /// Create an empty graph with the given title and axis labels.
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            unit_factor_x: 1.0,
            unit_factor_y: 1.0,
            series: Vec::new(),
        }
    }

    /// Set linear unit-scaling factors applied to x and y at draw time.
    pub fn with_unit_factors(mut self, unit_factor_x: f64, unit_factor_y: f64) -> Self {
        self.unit_factor_x = unit_factor_x;
        self.unit_factor_y = unit_factor_y;
        self
    }

    /// Append a curve to the graph.
    pub fn add_series(&mut self, samples: SampleSet, label: &str, color: RGBColor) {
        self.series.push(GraphSeries {
            samples,
            label: label.to_string(),
            color,
        });
    }

    /// Scaled (x, y) points of one series.
    fn scaled_points(&self, series: &GraphSeries) -> Vec<(f64, f64)> {
        series
            .samples
            .points()
            .map(|(x, y)| (x * self.unit_factor_x, y * self.unit_factor_y))
            .collect()
    }

    /// Draw the graph to a PNG file.
    pub fn render_png(&self, path: &Path, width: u32, height: u32) -> Result<()> {
        let scaled: Vec<(&GraphSeries, Vec<(f64, f64)>)> = self
            .series
            .iter()
            .map(|series| (series, self.scaled_points(series)))
            .collect();

        if scaled.iter().all(|(_, points)| points.is_empty()) {
            return Err(VizError::EmptyGraph);
        }

        // Axis bounds across every series.
        let all_points = || scaled.iter().flat_map(|(_, points)| points.iter());
        let min_x = all_points().map(|&(x, _)| x).fold(f64::INFINITY, f64::min);
        let max_x = all_points()
            .map(|&(x, _)| x)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_y = all_points().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
        let max_y = all_points()
            .map(|&(_, y)| y)
            .fold(f64::NEG_INFINITY, f64::max);

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| VizError::Render(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 40))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(min_x..max_x, min_y..max_y)
            .map_err(|e| VizError::Render(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .draw()
            .map_err(|e| VizError::Render(e.to_string()))?;

        for (series, points) in &scaled {
            let style = ShapeStyle::from(&series.color);
            chart
                .draw_series(LineSeries::new(points.iter().copied(), style))
                .map_err(|e| VizError::Render(e.to_string()))?
                .label(&series.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], style));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| VizError::Render(e.to_string()))?;

        root.present().map_err(|e| VizError::Render(e.to_string()))?;

        Ok(())
    }
}
