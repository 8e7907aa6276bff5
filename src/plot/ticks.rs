/// Axis tick positions and labels, including multiples of a constant such as π.

use std::f64::consts::PI;

/// How a multiple label is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// `π/2`, `-3π/4`
    #[default]
    Plain,
    /// `$\frac{\pi}{2}$`
    Latex,
}

/// Formats values as reduced fractions of a constant.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleFormatter {
    pub denominator: i64,
    pub number: f64,
    /// Symbol used in plain labels.
    pub symbol: String,
    /// Symbol used in LaTeX labels.
    pub latex: String,
    pub style: LabelStyle,
}

impl Default for MultipleFormatter {
    fn default() -> Self {
        Self::pi(2)
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

impl MultipleFormatter {
    pub fn new(denominator: i64, number: f64, symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            denominator,
            number,
            latex: symbol.clone(),
            symbol,
            style: LabelStyle::Plain,
        }
    }

    /// Multiples of π with granularity `1/denominator`.
    pub fn pi(denominator: i64) -> Self {
        Self {
            latex: "\\pi".to_string(),
            ..Self::new(denominator, PI, "π")
        }
    }

    pub fn with_style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }

    /// Nearest `num/den` approximation of `x / number`, reduced.
    pub fn fraction(&self, x: f64) -> (i64, i64) {
        let den = self.denominator;
        let num = (den as f64 * x / self.number).round() as i64;
        let com = gcd(num, den);
        if com == 0 {
            return (0, 1);
        }
        let (num, den) = (num / com, den / com);
        if den < 0 {
            (-num, -den)
        } else {
            (num, den)
        }
    }

    pub fn format(&self, x: f64) -> String {
        let (num, den) = self.fraction(x);
        match self.style {
            LabelStyle::Plain => plain_label(num, den, &self.symbol),
            LabelStyle::Latex => latex_label(num, den, &self.latex),
        }
    }
}

fn plain_label(num: i64, den: i64, sym: &str) -> String {
    let numerator = match num {
        0 => return "0".to_string(),
        1 => sym.to_string(),
        -1 => format!("-{}", sym),
        n => format!("{}{}", n, sym),
    };
    if den == 1 {
        numerator
    } else {
        format!("{}/{}", numerator, den)
    }
}

fn latex_label(num: i64, den: i64, sym: &str) -> String {
    if den == 1 {
        match num {
            0 => "$0$".to_string(),
            1 => format!("${}$", sym),
            -1 => format!("$-{}$", sym),
            n => format!("${}{}$", n, sym),
        }
    } else {
        match num {
            1 => format!("$\\frac{{{}}}{{{}}}$", sym, den),
            -1 => format!("$\\frac{{-{}}}{{{}}}$", sym, den),
            n => format!("$\\frac{{{}{}}}{{{}}}$", n, sym, den),
        }
    }
}

/// Major and minor tick spacing for one axis, with an optional label formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTicks {
    pub major: f64,
    pub minor: f64,
    pub formatter: Option<MultipleFormatter>,
}

impl AxisTicks {
    pub fn new(major: f64, minor: f64) -> Self {
        Self { major, minor, formatter: None }
    }

    /// Major ticks every `π/denominator`, minor ticks halfway between, π labels.
    pub fn multiples_of_pi(denominator: i64) -> Self {
        let major = PI / denominator as f64;
        Self {
            major,
            minor: major / 2.0,
            formatter: Some(MultipleFormatter::pi(denominator)),
        }
    }

    pub fn with_formatter(mut self, formatter: MultipleFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Spacing chosen for roughly `desired` labels over `(min, max)`.
    pub fn auto(min: f64, max: f64, desired: usize) -> Self {
        let major = nice_step(max - min, desired);
        Self::new(major, major / 5.0)
    }

    pub fn major_points(&self, min: f64, max: f64) -> Vec<f64> {
        multiples_within(self.major, min, max)
    }

    pub fn minor_points(&self, min: f64, max: f64) -> Vec<f64> {
        multiples_within(self.minor, min, max)
    }

    pub fn label(&self, value: f64) -> String {
        match &self.formatter {
            Some(formatter) => formatter.format(value),
            None => format_tick(value),
        }
    }
}

/// Every multiple of `step` in `[min, max]`.
fn multiples_within(step: f64, min: f64, max: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) || !(min.is_finite() && max.is_finite()) || max < min {
        return Vec::new();
    }
    let eps = step * 1e-9;
    let first = ((min - eps) / step).ceil() as i64;
    let last = ((max + eps) / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

fn nice_step(span: f64, desired: usize) -> f64 {
    if !(span.is_finite() && span > f64::EPSILON) {
        return 1.0;
    }
    let desired = desired.max(2) as f64;
    nice_number(span / (desired - 1.0))
}

fn nice_number(value: f64) -> f64 {
    let exponent = value.abs().log10().floor();
    let fraction = value / 10f64.powf(exponent);
    let nice_fraction = if fraction < 1.5 {
        1.0
    } else if fraction < 3.0 {
        2.0
    } else if fraction < 7.0 {
        5.0
    } else {
        10.0
    };
    nice_fraction * 10f64.powf(exponent)
}

/// Plain numeric label with trailing zeros removed.
pub fn format_tick(value: f64) -> String {
    if value.abs() < 1e-9 {
        return "0".to_string();
    }
    let mut text = format!("{:.3}", value);
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_pi() {
        let f = MultipleFormatter::pi(2);
        assert_eq!(f.fraction(PI / 2.0), (1, 2));
        assert_eq!(f.format(PI / 2.0), "π/2");
    }

    #[test]
    fn test_integer_multiples() {
        let f = MultipleFormatter::pi(2);
        assert_eq!(f.format(0.0), "0");
        assert_eq!(f.format(PI), "π");
        assert_eq!(f.format(-PI), "-π");
        assert_eq!(f.format(2.0 * PI), "2π");
        assert_eq!(f.format(-3.0 * PI), "-3π");
    }

    #[test]
    fn test_fractions_reduce() {
        let f = MultipleFormatter::pi(4);
        assert_eq!(f.format(PI / 2.0), "π/2");
        assert_eq!(f.format(-PI / 4.0), "-π/4");
        assert_eq!(f.format(3.0 * PI / 4.0), "3π/4");
        assert_eq!(f.format(-3.0 * PI / 2.0), "-3π/2");
    }

    #[test]
    fn test_rounds_to_nearest() {
        let f = MultipleFormatter::pi(2);
        assert_eq!(f.format(1.6), "π/2");
        assert_eq!(f.format(0.2), "0");
    }

    #[test]
    fn test_latex_labels() {
        let f = MultipleFormatter::pi(2).with_style(LabelStyle::Latex);
        assert_eq!(f.format(0.0), "$0$");
        assert_eq!(f.format(PI), "$\\pi$");
        assert_eq!(f.format(-PI), "$-\\pi$");
        assert_eq!(f.format(PI / 2.0), "$\\frac{\\pi}{2}$");
        assert_eq!(f.format(-PI / 2.0), "$\\frac{-\\pi}{2}$");
        assert_eq!(f.format(3.0 * PI / 2.0), "$\\frac{3\\pi}{2}$");
    }

    #[test]
    fn test_other_constant() {
        let f = MultipleFormatter::new(3, std::f64::consts::E, "e");
        assert_eq!(f.format(2.0 * std::f64::consts::E / 3.0), "2e/3");
    }

    #[test]
    fn test_pi_tick_points() {
        let ticks = AxisTicks::multiples_of_pi(2);
        let major = ticks.major_points(-PI, PI);
        assert_eq!(major.len(), 5);
        let labels: Vec<String> = major.iter().map(|&v| ticks.label(v)).collect();
        assert_eq!(labels, vec!["-π", "-π/2", "0", "π/2", "π"]);
        assert_eq!(ticks.minor_points(-PI, PI).len(), 9);
    }

    #[test]
    fn test_auto_ticks() {
        let ticks = AxisTicks::auto(-1.0, 1.0, 5);
        assert!((ticks.major - 0.5).abs() < 1e-12);
        assert_eq!(ticks.major_points(-1.0, 1.0).len(), 5);
        assert_eq!(ticks.label(0.5), "0.5");
    }

    #[test]
    fn test_degenerate_points() {
        let ticks = AxisTicks::new(0.0, 0.0);
        assert!(ticks.major_points(-1.0, 1.0).is_empty());
        assert!(AxisTicks::new(1.0, 0.5).major_points(2.0, 1.0).is_empty());
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(2.0), "2");
        assert_eq!(format_tick(-0.25), "-0.25");
        assert_eq!(format_tick(1.23456), "1.235");
    }
}
