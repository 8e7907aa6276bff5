pub mod colors;
pub mod figure;
pub mod render;
pub mod ticks;
pub mod types;

pub use figure::{Figure, MapRenderer};
pub use render::{render_png, render_svg};
pub use ticks::{AxisTicks, LabelStyle, MultipleFormatter};
pub use types::{
    Bounds, ColorMode, Labels, Layout, Orientation, Panel, PanelRole, PlotOptions, RenderedFigure, Series,
};
