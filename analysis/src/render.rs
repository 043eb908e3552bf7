use crate::view::{Layout, Marker, Panel};
use plotters::{coord::Shift, prelude::*};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Nothing to render, no panels were built")]
    NoPanels,
    #[error("Failed to draw chart: {0}")]
    Drawing(String),
}

fn drawing<E: std::error::Error + Send + Sync>(error: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Drawing(error.to_string())
}

// relative padding around the data so edge points aren't cut in half
const MARGIN: f64 = 0.05;

// widest axis whose width still fits into an f64
const LIMIT: f64 = f64::MAX / 2.0;

/// Pad a data range for an axis, the width of the result is always finite
pub(crate) fn padded(range: (f64, f64)) -> (f64, f64) {
    let (min, max) = range;

    if !(max - min).is_finite() {
        warn!(min, max, "Data range overflows, clamping the axis");
        return (min.max(-LIMIT), max.min(LIMIT));
    }

    let span = if max > min {
        max - min
    } else {
        min.abs().max(1.0)
    };
    let low = Some(min - span * MARGIN)
        .filter(|low| low.is_finite())
        .unwrap_or(min);
    let high = Some(max + span * MARGIN)
        .filter(|high| high.is_finite())
        .unwrap_or(max);

    if (high - low).is_finite() {
        (low, high)
    } else {
        (min, max)
    }
}

/// Render the panels as scatterplots into an SVG file at `path`
///
/// Panels fill the grid of `layout` row by row, panels past the grid are
/// dropped with a warning.
#[instrument(level = "debug", skip(panels))]
pub fn render_svg(panels: &[Panel], layout: Layout, path: &Path) -> Result<(), RenderError> {
    if panels.is_empty() {
        return Err(RenderError::NoPanels);
    }

    let cells = layout.rows * layout.columns;
    if panels.len() > cells {
        warn!(
            "Only {cells} of {} panels fit into a {}x{} grid",
            panels.len(),
            layout.rows,
            layout.columns
        );
    }

    let backend = SVGBackend::new(path, (layout.width, layout.height));
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let areas = root.split_evenly((layout.rows, layout.columns));
    for (panel, area) in panels.iter().zip(areas.iter()) {
        draw_panel(panel, area)?;
    }

    root.present().map_err(drawing)?;
    info!(path = ?path, panels = panels.len(), "Wrote chart");

    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    panel: &Panel,
    area: &DrawingArea<DB, Shift>,
) -> Result<(), RenderError> {
    let (x_range, y_range) = match panel.bounds() {
        Some((x, y)) => (padded(x), padded(y)),
        None => {
            debug!(panel = %panel.title, "Panel has no finite points");
            ((0.0, 1.0), (0.0, 1.0))
        }
    };

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)
        .map_err(drawing)?;

    chart
        .configure_mesh()
        .x_desc("n")
        .y_desc(panel.y_label.as_str())
        .draw()
        .map_err(drawing)?;

    for (index, series) in panel.series.iter().enumerate() {
        let style = Palette99::pick(index).filled();
        let points = series
            .points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite());

        match series.marker {
            Marker::Circle => chart
                .draw_series(points.map(|point| Circle::new(point, 4, style)))
                .map_err(drawing)?
                .label(series.label.as_str())
                .legend(move |(x, y)| Circle::new((x, y), 4, style)),
            Marker::Triangle => chart
                .draw_series(points.map(|point| TriangleMarker::new(point, 5, style)))
                .map_err(drawing)?
                .label(series.label.as_str())
                .legend(move |(x, y)| TriangleMarker::new((x, y), 5, style)),
        };
    }

    if !panel.series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(drawing)?;
    }

    Ok(())
}
