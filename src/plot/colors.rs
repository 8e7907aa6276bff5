/// Colormaps and per-curve color assignment.

use plotters::style::RGBColor;

use crate::curves::CurveSet;
use crate::plot::types::ColorMode;

/// Fixed colormaps sampled on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    /// Blue through white to red.
    Bwr,
    /// Purple through green to red.
    Rainbow,
}

impl Colormap {
    pub fn at(&self, t: f64) -> RGBColor {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Colormap::Bwr => {
                if t <= 0.5 {
                    let s = t * 2.0;
                    rgb(s, s, 1.0)
                } else {
                    let s = (1.0 - t) * 2.0;
                    rgb(1.0, s, s)
                }
            }
            Colormap::Rainbow => {
                let r = (2.0 * t - 0.5).abs();
                let g = (std::f64::consts::PI * t).sin();
                let b = (std::f64::consts::FRAC_PI_2 * t).cos();
                rgb(r, g, b)
            }
        }
    }
}

fn rgb(r: f64, g: f64, b: f64) -> RGBColor {
    let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    RGBColor(to_u8(r), to_u8(g), to_u8(b))
}

/// Move `color` toward white by `amount` in `[0, 1]`.
pub fn lighten(color: RGBColor, amount: f64) -> RGBColor {
    let amount = amount.clamp(0.0, 1.0);
    let mix = |c: u8| {
        let c = c as f64;
        (c + (255.0 - c) * amount).round() as u8
    };
    RGBColor(mix(color.0), mix(color.1), mix(color.2))
}

/// Position of item `k` among `n`, spread over `[0, 1]`.
pub fn fraction(k: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        k as f64 / (n - 1) as f64
    }
}

/// Maximum lightening applied to the last curve of a group.
const GROUP_SHADE: f64 = 0.5;

/// One color per curve, in `CurveSet::iter` order.
pub fn curve_colors(curves: &CurveSet, mode: ColorMode) -> Vec<RGBColor> {
    match (curves, mode) {
        (CurveSet::Grouped(groups), ColorMode::PerGroup) => {
            let mut colors = Vec::with_capacity(curves.curve_count());
            for (g, group) in groups.iter().enumerate() {
                let band = Colormap::Bwr.at(fraction(g, groups.len()));
                let n = group.len();
                colors.extend((0..n).map(|k| lighten(band, GROUP_SHADE * fraction(k, n))));
            }
            colors
        }
        _ => {
            let n = curves.curve_count();
            (0..n).map(|k| Colormap::Rainbow.at(fraction(k, n))).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::{Curve, CurveGroup};
    use num_complex::Complex64;

    fn curves(n: usize) -> Vec<Curve> {
        (0..n).map(|i| Curve::new(vec![Complex64::new(i as f64, 0.0)])).collect()
    }

    #[test]
    fn test_bwr_ends() {
        assert_eq!(Colormap::Bwr.at(0.0), RGBColor(0, 0, 255));
        assert_eq!(Colormap::Bwr.at(0.5), RGBColor(255, 255, 255));
        assert_eq!(Colormap::Bwr.at(1.0), RGBColor(255, 0, 0));
    }

    #[test]
    fn test_rainbow_ends() {
        assert_eq!(Colormap::Rainbow.at(0.0), RGBColor(128, 0, 255));
        assert_eq!(Colormap::Rainbow.at(1.0), RGBColor(255, 0, 0));
    }

    #[test]
    fn test_lighten() {
        assert_eq!(lighten(RGBColor(0, 0, 255), 0.0), RGBColor(0, 0, 255));
        assert_eq!(lighten(RGBColor(0, 0, 255), 1.0), RGBColor(255, 255, 255));
    }

    #[test]
    fn test_grouped_colors() {
        let set = CurveSet::Grouped([
            CurveGroup::new("a", curves(3)),
            CurveGroup::new("b", curves(2)),
        ]);
        let colors = curve_colors(&set, ColorMode::PerGroup);
        assert_eq!(colors.len(), 5);
        // first curve of each group carries the pure band color
        assert_eq!(colors[0], RGBColor(0, 0, 255));
        assert_eq!(colors[3], RGBColor(255, 0, 0));
        // shades within a group get lighter
        assert!(colors[1].0 > colors[0].0);
        assert!(colors[2].0 > colors[1].0);
        assert_eq!(colors[2], lighten(RGBColor(0, 0, 255), 0.5));
    }

    #[test]
    fn test_flat_colors_spread() {
        let set = CurveSet::Flat(curves(4));
        let colors = curve_colors(&set, ColorMode::PerGroup);
        assert_eq!(colors[0], Colormap::Rainbow.at(0.0));
        assert_eq!(colors[3], Colormap::Rainbow.at(1.0));
    }

    #[test]
    fn test_per_curve_ignores_groups() {
        let set = CurveSet::Grouped([
            CurveGroup::new("a", curves(2)),
            CurveGroup::new("b", curves(2)),
        ]);
        let colors = curve_colors(&set, ColorMode::PerCurve);
        let flat = curve_colors(&set.clone().flatten(), ColorMode::PerGroup);
        assert_eq!(colors, flat);
    }

    #[test]
    fn test_single_curve() {
        let set = CurveSet::Flat(curves(1));
        assert_eq!(curve_colors(&set, ColorMode::PerGroup), vec![Colormap::Rainbow.at(0.0)]);
    }
}
