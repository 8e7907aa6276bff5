use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

use crate::error::RenderResult;

/// Line style applied to every plotted curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// Stroke width in pixels.
    pub line_width: u32,
    /// Curve opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self { line_width: 1, opacity: 1.0 }
    }
}

/// Renderer configuration. Every field is optional in TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Size of one panel in pixels.
    pub panel_width: u32,
    pub panel_height: u32,
    /// Gap between the domain and image panels.
    pub spacing: u32,
    /// Margin around each chart.
    pub margin: u32,
    /// Room for tick labels and axis descriptions.
    pub label_area: u32,
    /// Extra height for the figure title.
    pub title_area: u32,
    /// Fraction of the data span added on each side of a panel.
    pub padding: f64,
    /// Points beyond `±view_limit` do not widen a panel's bounds.
    pub view_limit: f64,
    pub background: [u8; 3],
    pub axis_color: [u8; 3],
    pub label_color: [u8; 3],
    pub show_mesh: bool,
    pub font_family: String,
    pub font_size: u32,
    /// Approximate number of major ticks on automatic axes.
    pub tick_count: usize,
    pub style: StyleOptions,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            panel_width: 500,
            panel_height: 500,
            spacing: 20,
            margin: 10,
            label_area: 40,
            title_area: 30,
            padding: 0.05,
            view_limit: 1000.0,
            background: [255, 255, 255],
            axis_color: [88, 91, 112],
            label_color: [30, 30, 46],
            show_mesh: true,
            font_family: "sans-serif".to_string(),
            font_size: 14,
            tick_count: 5,
            style: StyleOptions::default(),
        }
    }
}

impl RenderConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> RenderResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn background_color(&self) -> RGBColor {
        to_rgb(self.background)
    }

    pub fn axis_rgb(&self) -> RGBColor {
        to_rgb(self.axis_color)
    }

    pub fn label_rgb(&self) -> RGBColor {
        to_rgb(self.label_color)
    }
}

fn to_rgb([r, g, b]: [u8; 3]) -> RGBColor {
    RGBColor(r, g, b)
}
