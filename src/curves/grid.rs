/// Rectangular grid line families.

use num_complex::Complex64;

use crate::curves::sample::{linspace, Spacing};
use crate::curves::types::{Curve, CurveGroup, CurveSet};

/// Default number of sample points per line.
pub const DEFAULT_GRID_POINTS: usize = 100;
/// Default distance between grid lines.
pub const DEFAULT_GRID_STEP: f64 = 0.1;

/// Parameters for a family of horizontal and vertical lines.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
    /// Spacing of the vertical lines (offsets along the real axis).
    pub x_spacing: Spacing,
    /// Spacing of the horizontal lines (offsets along the imaginary axis).
    pub y_spacing: Spacing,
    pub nb_pts: usize,
    /// Keep horizontal and vertical lines as two groups.
    pub separate: bool,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            xlim: (-1.0, 1.0),
            ylim: (-1.0, 1.0),
            x_spacing: Spacing::Step(DEFAULT_GRID_STEP),
            y_spacing: Spacing::Step(DEFAULT_GRID_STEP),
            nb_pts: DEFAULT_GRID_POINTS,
            separate: true,
        }
    }
}

impl GridSpec {
    pub fn new(xlim: (f64, f64), ylim: (f64, f64)) -> Self {
        Self { xlim, ylim, ..Self::default() }
    }

    /// Same step along both axes.
    pub fn with_step(mut self, step: f64) -> Self {
        self.x_spacing = Spacing::Step(step);
        self.y_spacing = Spacing::Step(step);
        self
    }

    /// Same explicit line count along both axes.
    pub fn with_count(mut self, count: usize) -> Self {
        self.x_spacing = Spacing::Count(count);
        self.y_spacing = Spacing::Count(count);
        self
    }

    pub fn with_spacing(mut self, x: Spacing, y: Spacing) -> Self {
        self.x_spacing = x;
        self.y_spacing = y;
        self
    }

    pub fn with_points(mut self, nb_pts: usize) -> Self {
        self.nb_pts = nb_pts;
        self
    }

    pub fn separate(mut self, separate: bool) -> Self {
        self.separate = separate;
        self
    }

    /// Number of vertical lines.
    pub fn nx(&self) -> usize {
        self.x_spacing.line_count(self.xlim)
    }

    /// Number of horizontal lines.
    pub fn ny(&self) -> usize {
        self.y_spacing.line_count(self.ylim)
    }

    /// Horizontal lines, bottom to top.
    pub fn horizontal(&self) -> CurveGroup {
        let xs = linspace(self.xlim.0, self.xlim.1, self.nb_pts);
        let curves = linspace(self.ylim.0, self.ylim.1, self.ny())
            .into_iter()
            .map(|y| Curve::new(xs.iter().map(|&x| Complex64::new(x, y)).collect()))
            .collect();
        CurveGroup::new("horizontal", curves)
    }

    /// Vertical lines, left to right.
    pub fn vertical(&self) -> CurveGroup {
        let ys = linspace(self.ylim.0, self.ylim.1, self.nb_pts);
        let curves = linspace(self.xlim.0, self.xlim.1, self.nx())
            .into_iter()
            .map(|x| Curve::new(ys.iter().map(|&y| Complex64::new(x, y)).collect()))
            .collect();
        CurveGroup::new("vertical", curves)
    }

    pub fn generate(&self) -> CurveSet {
        let horz = self.horizontal();
        let vert = self.vertical();
        log::debug!(
            "grid: {} horizontal, {} vertical lines of {} points",
            horz.len(),
            vert.len(),
            self.nb_pts
        );
        CurveSet::from_groups(horz, vert, self.separate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::sample::MAX_LINES;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_half_step_grid() {
        let set = GridSpec::new((-1.0, 1.0), (-1.0, 1.0)).with_step(0.5).with_points(5).generate();
        let groups = set.groups().unwrap();
        assert_eq!(groups[0].len(), 4);
        assert_eq!(groups[1].len(), 4);
        for curve in groups[0].curves.iter().chain(groups[1].curves.iter()) {
            assert_eq!(curve.len(), 5);
        }
        for curve in &groups[0].curves {
            assert!(close(curve.first().unwrap().re, -1.0));
            assert!(close(curve.last().unwrap().re, 1.0));
        }
        for curve in &groups[1].curves {
            assert!(close(curve.first().unwrap().im, -1.0));
            assert!(close(curve.last().unwrap().im, 1.0));
        }
    }

    #[test]
    fn test_offsets_span_range() {
        let spec = GridSpec::new((0.0, 2.0), (-3.0, 3.0)).with_count(3).with_points(4);
        let horz = spec.horizontal();
        let offsets: Vec<f64> = horz.curves.iter().map(|c| c.points[0].im).collect();
        assert_eq!(offsets, vec![-3.0, 0.0, 3.0]);
        for curve in &horz.curves {
            let im = curve.points[0].im;
            assert!(curve.points.iter().all(|z| z.im == im));
        }
        let vert = spec.vertical();
        let offsets: Vec<f64> = vert.curves.iter().map(|c| c.points[0].re).collect();
        assert_eq!(offsets, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_flat_concatenates() {
        let set = GridSpec::default().with_step(0.5).separate(false).generate();
        match set {
            CurveSet::Flat(curves) => {
                assert_eq!(curves.len(), 8);
                // horizontal lines come first
                assert!(curves[0].points.iter().all(|z| z.im == -1.0));
            }
            CurveSet::Grouped(_) => panic!("expected flat set"),
        }
    }

    #[test]
    fn test_distinct_axis_spacing() {
        let spec = GridSpec::default().with_spacing(Spacing::Count(2), Spacing::Step(0.25));
        assert_eq!(spec.nx(), 2);
        assert_eq!(spec.ny(), 8);
    }

    #[test]
    fn test_degenerate_axis_is_empty() {
        let spec = GridSpec::new((1.0, -1.0), (-1.0, 1.0)).with_step(0.5);
        let set = spec.generate();
        let groups = set.groups().unwrap();
        assert_eq!(groups[0].len(), 4);
        assert!(groups[1].is_empty());
    }

    #[test]
    fn test_default_grid() {
        let spec = GridSpec::default();
        assert_eq!(spec.nx(), 20);
        assert_eq!(spec.ny(), 20);
        assert_eq!(spec.generate().curve_count(), 40);
    }

    #[test]
    fn test_tiny_step_is_capped() {
        let spec = GridSpec::default().with_spacing(Spacing::Step(1e-300), Spacing::Count(1)).with_points(2);
        assert_eq!(spec.nx(), MAX_LINES);
        assert_eq!(spec.vertical().len(), MAX_LINES);
    }
}
