pub mod grid;
pub mod polar;
pub mod sample;
pub mod types;

pub use grid::GridSpec;
pub use polar::PolarSpec;
pub use sample::{linspace, Spacing, MAX_LINES};
pub use types::{Curve, CurveGroup, CurveSet};
