//! # conformap
//!
//! Families of curves in the complex plane and their images under complex
//! mappings.
//!
//! Curve sets come from [`GridSpec`] (horizontal and vertical lines) or
//! [`PolarSpec`] (rays and circles). A [`MapRenderer`] applies a mapping to
//! every sample point, drops non-finite results, colors the curves by group,
//! and lays out the domain and image panels of a [`Figure`], which renders to
//! PNG or SVG through `plotters`.
//!
//! ```rust,ignore
//! use conformap::{map_fn, GridSpec, Layout, MapRenderer, Orientation, PlotOptions};
//! use num_complex::Complex64;
//!
//! let grid = GridSpec::new((-1.0, 1.0), (-1.0, 1.0)).with_step(0.1).generate();
//! let options = PlotOptions {
//!     layout: Layout::WithDomain(Orientation::SideBySide),
//!     ..PlotOptions::default()
//! };
//! let square = map_fn(|z: Complex64| z * z);
//! let figure = MapRenderer::default().plot(&grid, Some(&square), &options)?;
//! let png = figure.render_png()?.png_bytes;
//! ```

pub mod config;
pub mod curves;
pub mod error;
pub mod mapping;
pub mod plot;

pub use config::{RenderConfig, StyleOptions};
pub use curves::{Curve, CurveGroup, CurveSet, GridSpec, PolarSpec, Spacing};
pub use error::{MapError, RenderError, RenderResult};
pub use mapping::{image_of, map_fn, try_map_fn, ComplexMap, Identity};
pub use plot::{
    AxisTicks, ColorMode, Figure, Labels, Layout, MapRenderer, MultipleFormatter, Orientation, PlotOptions,
};
