/// Figure rendering pipeline: Figure → PNG bytes or SVG text via plotters.

use std::fmt;
use std::ops::Range;

use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::register_font;

use crate::config::{RenderConfig, StyleOptions};
use crate::error::{RenderError, RenderResult};
use crate::plot::figure::Figure;
use crate::plot::ticks::AxisTicks;
use crate::plot::types::*;

/// Font used for titles, captions and tick labels, registered under the
/// configured family name.
const FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Render a figure to a PNG image.
pub fn render_png(figure: &Figure) -> RenderResult<RenderedFigure> {
    let (width, height) = figure.size();
    let mut buf = vec![0u8; rgb_buffer_len(width, height)];

    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        draw_figure(figure, &root)?;
        root.present().map_err(backend("present"))?;
    }

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;
    log::debug!("rendered {}x{} PNG, {} bytes", width, height, png_bytes.len());

    Ok(RenderedFigure {
        png_bytes,
        width,
        height,
    })
}

/// Render a figure to an SVG document.
pub fn render_svg(figure: &Figure) -> RenderResult<String> {
    let (width, height) = figure.size();
    let mut svg = String::new();

    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        draw_figure(figure, &root)?;
        root.present().map_err(backend("present"))?;
    }

    log::debug!("rendered {}x{} SVG", width, height);
    Ok(svg)
}

fn backend<E: fmt::Display>(stage: &'static str) -> impl Fn(E) -> RenderError {
    move |e| RenderError::Backend(format!("{}: {}", stage, e))
}

/// Bytes needed for an RGB pixel buffer of the given size.
fn rgb_buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

fn register_family(family: &str) -> RenderResult<()> {
    register_font(family, FontStyle::Normal, FONT_BYTES)
        .map_err(|_| RenderError::Backend(format!("font: cannot load font for '{}'", family)))
}

fn text_style(config: &RenderConfig, size: u32) -> TextStyle<'_> {
    (config.font_family.as_str(), size as f64)
        .into_font()
        .color(&config.label_rgb())
}

fn draw_figure<DB: DrawingBackend>(figure: &Figure, root: &DrawingArea<DB, Shift>) -> RenderResult<()> {
    let config = &figure.config;
    register_family(&config.font_family)?;
    root.fill(&config.background_color()).map_err(backend("fill"))?;

    let body = match &figure.title {
        Some(title) => root
            .titled(title, text_style(config, config.font_size + 4))
            .map_err(backend("title"))?,
        None => root.clone(),
    };

    for (panel, area) in figure.panels.iter().zip(panel_areas(&body, figure)) {
        draw_panel(panel, &area, config, &figure.style)?;
    }
    Ok(())
}

/// One drawing area per panel, separated by the configured spacing.
fn panel_areas<DB: DrawingBackend>(body: &DrawingArea<DB, Shift>, figure: &Figure) -> Vec<DrawingArea<DB, Shift>> {
    if figure.panels.len() < 2 {
        return vec![body.clone()];
    }
    let spacing = figure.config.spacing;
    let (w, h) = body.dim_in_pixel();
    match figure.orientation {
        Orientation::SideBySide => {
            let panel = w.saturating_sub(spacing) / 2;
            let (left, rest) = body.split_horizontally(panel as i32);
            let (_, right) = rest.split_horizontally(spacing as i32);
            vec![left, right]
        }
        Orientation::Stacked => {
            let panel = h.saturating_sub(spacing) / 2;
            let (top, rest) = body.split_vertically(panel as i32);
            let (_, bottom) = rest.split_vertically(spacing as i32);
            vec![top, bottom]
        }
    }
}

fn draw_panel<DB: DrawingBackend>(
    panel: &Panel,
    area: &DrawingArea<DB, Shift>,
    config: &RenderConfig,
    style: &StyleOptions,
) -> RenderResult<()> {
    let area = match &panel.caption {
        Some(caption) => area
            .titled(caption, text_style(config, config.font_size))
            .map_err(backend("caption"))?,
        None => area.clone(),
    };

    // Plotting area left after margins and label areas.
    let (w, h) = area.dim_in_pixel();
    let chrome = 2 * config.margin + config.label_area;
    let bounds = panel.bounds.equal_aspect(w.saturating_sub(chrome), h.saturating_sub(chrome));
    let (x0, x1) = bounds.x;
    let (y0, y1) = bounds.y;

    let x_ticks = panel
        .x_ticks
        .clone()
        .unwrap_or_else(|| AxisTicks::auto(x0, x1, config.tick_count));
    let y_ticks = panel
        .y_ticks
        .clone()
        .unwrap_or_else(|| AxisTicks::auto(y0, y1, config.tick_count));

    let mut chart = ChartBuilder::on(&area)
        .margin(config.margin as i32)
        .x_label_area_size(config.label_area as i32)
        .y_label_area_size(config.label_area as i32)
        .build_cartesian_2d(TickAxis::new(bounds.x, &x_ticks), TickAxis::new(bounds.y, &y_ticks))
        .map_err(backend("chart build"))?;

    let axis = config.axis_rgb();
    let x_fmt = |v: &f64| x_ticks.label(*v);
    let y_fmt = |v: &f64| y_ticks.label(*v);

    let mut mesh = chart.configure_mesh();
    mesh.axis_style(axis)
        .bold_line_style(axis.mix(0.3))
        .light_line_style(axis.mix(0.1))
        .label_style(text_style(config, config.font_size))
        .axis_desc_style(text_style(config, config.font_size))
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt);
    if !config.show_mesh {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(backend("mesh"))?;

    let opacity = style.opacity.clamp(0.0, 1.0);
    for series in &panel.series {
        let stroke = series.color.mix(opacity).stroke_width(style.line_width);
        for segment in series.segments() {
            chart
                .draw_series(LineSeries::new(segment.iter().copied(), stroke))
                .map_err(backend("draw series"))?;
        }
    }

    Ok(())
}

/// A float axis whose grid lines and labels sit at fixed tick positions.
#[derive(Clone)]
struct TickAxis {
    inner: RangedCoordf64,
    major: Vec<f64>,
    minor: Vec<f64>,
}

impl TickAxis {
    fn new((min, max): (f64, f64), ticks: &AxisTicks) -> Self {
        Self {
            inner: (min..max).into(),
            major: ticks.major_points(min, max),
            minor: ticks.minor_points(min, max),
        }
    }
}

impl Ranged for TickAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        if hint.weight().allow_light_points() {
            self.minor.clone()
        } else {
            self.major.clone()
        }
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

/// Encode a raw RGB pixel buffer to PNG.
fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> RenderResult<Vec<u8>> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new(&mut png);
    encoder.write_image(rgb, width, height, image::ExtendedColorType::Rgb8)?;
    Ok(png)
}
