/// Evenly spaced sampling helpers and line-count resolution.

use serde::{Deserialize, Serialize};

/// Upper bound on the number of lines in one family.
pub const MAX_LINES: usize = 10_000;

/// How many lines to draw along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    /// Distance between neighbouring lines; count is `round(span / step)`.
    Step(f64),
    /// Explicit number of lines.
    Count(usize),
}

impl Spacing {
    /// Number of lines over `(min, max)`, capped at [`MAX_LINES`]. Zero when
    /// the step gives a non-positive or non-finite count.
    pub fn line_count(&self, (min, max): (f64, f64)) -> usize {
        let n = match *self {
            Spacing::Count(n) => n,
            Spacing::Step(step) => {
                let n = ((max - min) / step).round();
                if !(n.is_finite() && n > 0.0) {
                    return 0;
                }
                // saturating cast
                n as usize
            }
        };
        if n > MAX_LINES {
            log::warn!("{} lines requested, capping at {}", n, MAX_LINES);
            return MAX_LINES;
        }
        n
    }
}

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// `n` evenly spaced values starting at `start`, stopping short of `end`.
pub fn linspace_open(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let step = (end - start) / n as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}
