//! Building figures from curve sets: color assignment, mapping, panel layout.

use plotters::style::RGBColor;

use crate::config::{RenderConfig, StyleOptions};
use crate::curves::CurveSet;
use crate::error::{RenderError, RenderResult};
use crate::mapping::{image_of, ComplexMap};
use crate::plot::colors::curve_colors;
use crate::plot::render::{render_png, render_svg};
use crate::plot::types::*;

/// Panels ready to be drawn, open to caller adjustments before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub panels: Vec<Panel>,
    pub orientation: Orientation,
    pub title: Option<String>,
    pub style: StyleOptions,
    pub config: RenderConfig,
}

impl Figure {
    pub fn panel(&self, role: PanelRole) -> Option<&Panel> {
        self.panels.iter().find(|p| p.role == role)
    }

    pub fn panel_mut(&mut self, role: PanelRole) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.role == role)
    }

    pub fn domain(&self) -> Option<&Panel> {
        self.panel(PanelRole::Domain)
    }

    pub fn image(&self) -> Option<&Panel> {
        self.panel(PanelRole::Image)
    }

    pub fn domain_mut(&mut self) -> Option<&mut Panel> {
        self.panel_mut(PanelRole::Domain)
    }

    pub fn image_mut(&mut self) -> Option<&mut Panel> {
        self.panel_mut(PanelRole::Image)
    }

    /// Output size in pixels.
    pub fn size(&self) -> (u32, u32) {
        let c = &self.config;
        let title = if self.title.is_some() { c.title_area } else { 0 };
        match (self.panels.len(), self.orientation) {
            (0 | 1, _) => (c.panel_width, c.panel_height + title),
            (_, Orientation::SideBySide) => (2 * c.panel_width + c.spacing, c.panel_height + title),
            (_, Orientation::Stacked) => (c.panel_width, 2 * c.panel_height + c.spacing + title),
        }
    }

    pub fn render_png(&self) -> RenderResult<RenderedFigure> {
        render_png(self)
    }

    pub fn render_svg(&self) -> RenderResult<String> {
        render_svg(self)
    }
}

/// Turns curve sets into figures using a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct MapRenderer {
    config: RenderConfig,
}

impl MapRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Plot `curves` and, when `map` is given, their images under it.
    ///
    /// Without a mapping only the domain is drawn. With one, the domain panel
    /// is added when the layout asks for it. Non-finite image points are
    /// dropped; the first mapping error aborts the call.
    pub fn plot(
        &self,
        curves: &CurveSet,
        map: Option<&dyn ComplexMap>,
        options: &PlotOptions,
    ) -> RenderResult<Figure> {
        let colors = curve_colors(curves, options.color_mode);
        let labels = &options.labels;
        let both = map.is_some() && matches!(options.layout, Layout::WithDomain(_));

        let mut panels = Vec::with_capacity(2);
        if map.is_none() || both {
            let (x_label, y_label) = labels.domain_axes();
            let series = domain_series(curves, &colors);
            let caption = both.then(|| format!("{}-plane", labels.variable));
            panels.push(self.panel(PanelRole::Domain, series, x_label, y_label, caption));
        }
        if let Some(map) = map {
            let (x_label, y_label) = labels.image_axes();
            let series = image_series(curves, map, &colors)?;
            let caption = both.then(|| format!("{}({})", labels.function, labels.variable));
            panels.push(self.panel(PanelRole::Image, series, x_label, y_label, caption));
        }

        let orientation = match options.layout {
            Layout::WithDomain(orientation) => orientation,
            Layout::ImageOnly => Orientation::SideBySide,
        };
        log::debug!(
            "figure: {} panel(s), {} curves",
            panels.len(),
            curves.curve_count()
        );

        Ok(Figure {
            panels,
            orientation,
            title: labels.title.clone(),
            style: options.style.unwrap_or(self.config.style),
            config: self.config.clone(),
        })
    }

    fn panel(
        &self,
        role: PanelRole,
        series: Vec<Series>,
        x_label: String,
        y_label: String,
        caption: Option<String>,
    ) -> Panel {
        let bounds = Bounds::from_points(
            series.iter().flat_map(|s| s.points.iter()),
            self.config.padding,
            self.config.view_limit,
        );
        Panel {
            role,
            series,
            bounds,
            x_label,
            y_label,
            caption,
            x_ticks: None,
            y_ticks: None,
        }
    }
}

fn domain_series(curves: &CurveSet, colors: &[RGBColor]) -> Vec<Series> {
    curves
        .iter()
        .zip(colors)
        .map(|(curve, &color)| Series::new(color, curve.coords()))
        .collect()
}

fn image_series(curves: &CurveSet, map: &dyn ComplexMap, colors: &[RGBColor]) -> RenderResult<Vec<Series>> {
    let mut series = Vec::with_capacity(colors.len());
    let mut dropped = 0;

    for (index, (curve, &color)) in curves.iter().zip(colors).enumerate() {
        let image = image_of(map, curve).map_err(|e| RenderError::Map {
            curve: index,
            index: e.index,
            point: e.point,
            source: e.error,
        })?;
        dropped += image.dropped;
        series.push(Series {
            color,
            points: image.curve.coords(),
            breaks: image.breaks,
        });
    }

    if dropped > 0 {
        log::debug!("image: {} non-finite points dropped", dropped);
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{Curve, GridSpec};
    use crate::mapping::{map_fn, try_map_fn, Identity};
    use num_complex::Complex64;

    fn grid() -> CurveSet {
        GridSpec::new((-1.0, 1.0), (-1.0, 1.0)).with_step(0.5).with_points(5).generate()
    }

    #[test]
    fn test_no_map_draws_domain_only() {
        let figure = MapRenderer::default().plot(&grid(), None, &PlotOptions::default()).unwrap();
        assert_eq!(figure.panels.len(), 1);
        let domain = figure.domain().unwrap();
        assert_eq!(domain.series.len(), 8);
        assert_eq!(domain.x_label, "Re(z)");
        assert!(figure.image().is_none());
    }

    #[test]
    fn test_image_only_layout() {
        let square = map_fn(|z: Complex64| z * z);
        let figure = MapRenderer::default()
            .plot(&grid(), Some(&square), &PlotOptions::default())
            .unwrap();
        assert_eq!(figure.panels.len(), 1);
        let image = figure.image().unwrap();
        assert_eq!(image.x_label, "Re(f(z))");
        assert_eq!(image.y_label, "Im(f(z))");
        assert!(image.caption.is_none());
    }

    #[test]
    fn test_with_domain_layout() {
        let options = PlotOptions {
            layout: Layout::WithDomain(Orientation::Stacked),
            labels: Labels::default().with_symbols("exp", "w").with_title("exp"),
            ..PlotOptions::default()
        };
        let exp = map_fn(|z: Complex64| z.exp());
        let figure = MapRenderer::default().plot(&grid(), Some(&exp), &options).unwrap();
        assert_eq!(figure.panels.len(), 2);
        assert_eq!(figure.panels[0].role, PanelRole::Domain);
        assert_eq!(figure.panels[1].role, PanelRole::Image);
        assert_eq!(figure.panels[1].x_label, "Re(exp(w))");
        assert_eq!(figure.panels[0].caption.as_deref(), Some("w-plane"));
        assert_eq!(figure.title.as_deref(), Some("exp"));
        let c = &figure.config;
        assert_eq!(figure.size(), (c.panel_width, 2 * c.panel_height + c.spacing + c.title_area));
    }

    #[test]
    fn test_identity_reproduces_domain() {
        let curves = grid();
        let figure = MapRenderer::default()
            .plot(&curves, Some(&Identity), &PlotOptions::default())
            .unwrap();
        let image = figure.image().unwrap();
        for (series, curve) in image.series.iter().zip(curves.iter()) {
            assert_eq!(series.points, curve.coords());
        }
    }

    #[test]
    fn test_group_colors_follow_curves() {
        let figure = MapRenderer::default().plot(&grid(), None, &PlotOptions::default()).unwrap();
        let series = &figure.domain().unwrap().series;
        assert_eq!(series[0].color, RGBColor(0, 0, 255));
        assert_eq!(series[4].color, RGBColor(255, 0, 0));
    }

    #[test]
    fn test_pole_leaves_gap() {
        let curves = CurveSet::Flat(vec![Curve::new(vec![
            Complex64::new(-1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        ])]);
        let inv = map_fn(|z: Complex64| 1.0 / z);
        let figure = MapRenderer::default()
            .plot(&curves, Some(&inv), &PlotOptions::default())
            .unwrap();
        let series = &figure.image().unwrap().series[0];
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.segments().len(), 2);
    }

    #[test]
    fn test_map_error_aborts() {
        let strict = try_map_fn(|z: Complex64| {
            if z.re > 0.9 && z.im > 0.9 {
                Err("corner")
            } else {
                Ok(z)
            }
        });
        let err = MapRenderer::default()
            .plot(&grid(), Some(&strict), &PlotOptions::default())
            .unwrap_err();
        match err {
            RenderError::Map { curve, index, source, .. } => {
                // top horizontal line, last point
                assert_eq!(curve, 3);
                assert_eq!(index, 4);
                assert_eq!(source.message, "corner");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_style_override() {
        let options = PlotOptions {
            style: Some(StyleOptions { line_width: 3, opacity: 0.5 }),
            ..PlotOptions::default()
        };
        let figure = MapRenderer::default().plot(&grid(), None, &options).unwrap();
        assert_eq!(figure.style.line_width, 3);
        let figure = MapRenderer::default().plot(&grid(), None, &PlotOptions::default()).unwrap();
        assert_eq!(figure.style.line_width, 1);
    }

    #[test]
    fn test_panel_mut_for_ticks() {
        let mut figure = MapRenderer::default().plot(&grid(), None, &PlotOptions::default()).unwrap();
        let domain = figure.domain_mut().unwrap();
        domain.set_ticks(Some(crate::plot::ticks::AxisTicks::multiples_of_pi(2)), None);
        assert!(figure.domain().unwrap().x_ticks.is_some());
    }
}
