/// Figure, panel and plotting option types.

use plotters::style::RGBColor;

use crate::config::StyleOptions;
use crate::plot::ticks::AxisTicks;

/// Which panels to draw when a mapping is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Only the image under the mapping.
    #[default]
    ImageOnly,
    /// The untransformed domain next to the image.
    WithDomain(Orientation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    SideBySide,
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// One color band per group; a rainbow for flat sets.
    #[default]
    PerGroup,
    /// Rainbow over all curves regardless of grouping.
    PerCurve,
}

/// Title and the symbols substituted into axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    pub title: Option<String>,
    /// Function symbol, `f` in `Re(f(z))`.
    pub function: String,
    /// Variable symbol, `z` in `Re(z)`.
    pub variable: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: None,
            function: "f".to_string(),
            variable: "z".to_string(),
        }
    }
}

impl Labels {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_symbols(mut self, function: impl Into<String>, variable: impl Into<String>) -> Self {
        self.function = function.into();
        self.variable = variable.into();
        self
    }

    /// `("Re(z)", "Im(z)")`
    pub fn domain_axes(&self) -> (String, String) {
        (format!("Re({})", self.variable), format!("Im({})", self.variable))
    }

    /// `("Re(f(z))", "Im(f(z))")`
    pub fn image_axes(&self) -> (String, String) {
        let w = format!("{}({})", self.function, self.variable);
        (format!("Re({})", w), format!("Im({})", w))
    }
}

/// Per-call plotting options.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotOptions {
    pub layout: Layout,
    pub color_mode: ColorMode,
    pub labels: Labels,
    /// Overrides the renderer's default line style.
    pub style: Option<StyleOptions>,
}

/// One plotted curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub color: RGBColor,
    /// Plotted coordinates, non-finite points already removed.
    pub points: Vec<(f64, f64)>,
    /// Indices into `points` where a new segment starts after removed points.
    pub breaks: Vec<usize>,
}

impl Series {
    pub fn new(color: RGBColor, points: Vec<(f64, f64)>) -> Self {
        Self { color, points, breaks: Vec::new() }
    }

    /// Continuous runs of points, split at `breaks`.
    pub fn segments(&self) -> Vec<&[(f64, f64)]> {
        let mut segments = Vec::new();
        let mut start = 0;
        for &b in &self.breaks {
            if b > start && b <= self.points.len() {
                segments.push(&self.points[start..b]);
                start = b;
            }
        }
        if start < self.points.len() {
            segments.push(&self.points[start..]);
        }
        segments
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRole {
    Domain,
    Image,
}

/// Data extent of a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Default for Bounds {
    fn default() -> Self {
        Self { x: (-1.0, 1.0), y: (-1.0, 1.0) }
    }
}

impl Bounds {
    /// Extent of all finite points, padded by `padding` of the span on each side
    /// and clamped to `±limit`.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a (f64, f64)>, padding: f64, limit: f64) -> Self {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);
        for &(px, py) in points {
            if px.is_finite() && py.is_finite() {
                x = (x.0.min(px), x.1.max(px));
                y = (y.0.min(py), y.1.max(py));
            }
        }
        if !x.0.is_finite() || !y.0.is_finite() {
            return Self::default();
        }
        Self {
            x: pad_axis(x, padding, limit),
            y: pad_axis(y, padding, limit),
        }
    }

    pub fn width(&self) -> f64 {
        self.x.1 - self.x.0
    }

    pub fn height(&self) -> f64 {
        self.y.1 - self.y.0
    }

    /// Widen one axis so a `width_px` by `height_px` area shows both axes at
    /// the same scale. The center stays fixed.
    pub fn equal_aspect(&self, width_px: u32, height_px: u32) -> Self {
        if width_px == 0 || height_px == 0 {
            return *self;
        }
        let (w, h) = (width_px as f64, height_px as f64);
        let scale = (self.width() / w).max(self.height() / h);
        let (cx, cy) = ((self.x.0 + self.x.1) / 2.0, (self.y.0 + self.y.1) / 2.0);
        let (half_w, half_h) = (scale * w / 2.0, scale * h / 2.0);
        Self {
            x: (cx - half_w, cx + half_w),
            y: (cy - half_h, cy + half_h),
        }
    }
}

fn pad_axis((min, max): (f64, f64), padding: f64, limit: f64) -> (f64, f64) {
    let (min, max) = (min.max(-limit), max.min(limit));
    if min > max {
        return (-1.0, 1.0);
    }
    if (max - min).abs() < 1e-10 {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * padding;
    (min - pad, max + pad)
}

/// One coordinate system of a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub role: PanelRole,
    pub series: Vec<Series>,
    pub bounds: Bounds,
    pub x_label: String,
    pub y_label: String,
    pub caption: Option<String>,
    /// Tick spacing and labels; automatic when `None`.
    pub x_ticks: Option<AxisTicks>,
    pub y_ticks: Option<AxisTicks>,
}

impl Panel {
    pub fn set_ticks(&mut self, x: Option<AxisTicks>, y: Option<AxisTicks>) {
        self.x_ticks = x;
        self.y_ticks = y;
    }
}

/// A rendered figure image.
#[derive(Debug, Clone)]
pub struct RenderedFigure {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}
