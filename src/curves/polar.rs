/// Polar line families: rays from the origin and concentric arcs.

use std::f64::consts::{PI, TAU};

use num_complex::Complex64;

use crate::curves::grid::DEFAULT_GRID_POINTS;
use crate::curves::sample::{linspace, linspace_open, Spacing};
use crate::curves::types::{Curve, CurveGroup, CurveSet};

/// Parameters for a family of rays and circular arcs.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarSpec {
    pub rlim: (f64, f64),
    /// Angle range in radians.
    pub angle_lim: (f64, f64),
    pub r_spacing: Spacing,
    pub angle_spacing: Spacing,
    pub nb_pts: usize,
    /// Keep rays and circles as two groups.
    pub separate: bool,
}

impl Default for PolarSpec {
    fn default() -> Self {
        Self {
            rlim: (0.0, 1.0),
            angle_lim: (0.0, TAU),
            r_spacing: Spacing::Step(0.1),
            angle_spacing: Spacing::Step(PI / 12.0),
            nb_pts: DEFAULT_GRID_POINTS,
            separate: true,
        }
    }
}

impl PolarSpec {
    pub fn new(rlim: (f64, f64), angle_lim: (f64, f64)) -> Self {
        Self { rlim, angle_lim, ..Self::default() }
    }

    pub fn with_r_step(mut self, step: f64) -> Self {
        self.r_spacing = Spacing::Step(step);
        self
    }

    pub fn with_angle_step(mut self, step: f64) -> Self {
        self.angle_spacing = Spacing::Step(step);
        self
    }

    pub fn with_spacing(mut self, r: Spacing, angle: Spacing) -> Self {
        self.r_spacing = r;
        self.angle_spacing = angle;
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

    /// Number of circles.
    pub fn nr(&self) -> usize {
        self.r_spacing.line_count(self.rlim)
    }

    /// Number of rays.
    pub fn nt(&self) -> usize {
        self.angle_spacing.line_count(self.angle_lim)
    }

    /// Ray angles. The upper bound is excluded so a full turn has no duplicate ray.
    pub fn ray_angles(&self) -> Vec<f64> {
        linspace_open(self.angle_lim.0, self.angle_lim.1, self.nt())
    }

    /// Circle radii, both bounds included.
    pub fn radii(&self) -> Vec<f64> {
        linspace(self.rlim.0, self.rlim.1, self.nr())
    }

    pub fn rays(&self) -> CurveGroup {
        let rs = linspace(self.rlim.0, self.rlim.1, self.nb_pts);
        let curves = self
            .ray_angles()
            .into_iter()
            .map(|theta| {
                let dir = Complex64::from_polar(1.0, theta);
                Curve::new(rs.iter().map(|&r| dir * r).collect())
            })
            .collect();
        CurveGroup::new("rays", curves)
    }

    pub fn circles(&self) -> CurveGroup {
        let thetas = linspace(self.angle_lim.0, self.angle_lim.1, self.nb_pts);
        let curves = self
            .radii()
            .into_iter()
            .map(|r| Curve::new(thetas.iter().map(|&t| Complex64::from_polar(r, t)).collect()))
            .collect();
        CurveGroup::new("circles", curves)
    }

    pub fn generate(&self) -> CurveSet {
        let rays = self.rays();
        let circles = self.circles();
        log::debug!(
            "polar: {} rays, {} circles of {} points",
            rays.len(),
            circles.len(),
            self.nb_pts
        );
        CurveSet::from_groups(rays, circles, self.separate)
    }
}
