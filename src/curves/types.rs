/// Curve and curve collection types.

use num_complex::Complex64;

/// An ordered sequence of complex sample points.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub points: Vec<Complex64>,
}

impl Curve {
    pub fn new(points: Vec<Complex64>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Complex64> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Complex64> {
        self.points.last().copied()
    }

    /// Real/imaginary coordinate pairs, in order.
    pub fn coords(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|z| (z.re, z.im)).collect()
    }
}

impl From<Vec<Complex64>> for Curve {
    fn from(points: Vec<Complex64>) -> Self {
        Self::new(points)
    }
}

/// Curves sharing a geometric role, e.g. all horizontal grid lines.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveGroup {
    pub name: String,
    pub curves: Vec<Curve>,
}

impl CurveGroup {
    pub fn new(name: impl Into<String>, curves: Vec<Curve>) -> Self {
        Self { name: name.into(), curves }
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

/// A curve collection: one flat sequence, or exactly two ordered groups.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveSet {
    Flat(Vec<Curve>),
    Grouped([CurveGroup; 2]),
}

impl CurveSet {
    /// Build from two groups, keeping them apart or concatenating them.
    pub fn from_groups(first: CurveGroup, second: CurveGroup, separate: bool) -> Self {
        if separate {
            CurveSet::Grouped([first, second])
        } else {
            let mut curves = first.curves;
            curves.extend(second.curves);
            CurveSet::Flat(curves)
        }
    }

    /// Total number of curves across all groups.
    pub fn curve_count(&self) -> usize {
        match self {
            CurveSet::Flat(curves) => curves.len(),
            CurveSet::Grouped(groups) => groups.iter().map(CurveGroup::len).sum(),
        }
    }

    /// All curves in order, ignoring grouping.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &Curve> + '_> {
        match self {
            CurveSet::Flat(curves) => Box::new(curves.iter()),
            CurveSet::Grouped(groups) => Box::new(groups.iter().flat_map(|g| g.curves.iter())),
        }
    }

    /// Drop the grouping, keeping curve order.
    pub fn flatten(self) -> Self {
        match self {
            CurveSet::Flat(_) => self,
            CurveSet::Grouped([first, second]) => CurveSet::from_groups(first, second, false),
        }
    }

    pub fn groups(&self) -> Option<&[CurveGroup; 2]> {
        match self {
            CurveSet::Grouped(groups) => Some(groups),
            CurveSet::Flat(_) => None,
        }
    }
}

impl From<Vec<Curve>> for CurveSet {
    fn from(curves: Vec<Curve>) -> Self {
        CurveSet::Flat(curves)
    }
}
