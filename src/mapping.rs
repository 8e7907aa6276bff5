//! Complex mappings and their pointwise application to curves.
//!
//! A mapping may produce non-finite values (poles, overflow); those points are
//! dropped from the image. A mapping that returns an error stops the whole
//! computation.

use num_complex::Complex64;

use crate::curves::Curve;
use crate::error::MapError;

/// A function from the complex plane to itself.
pub trait ComplexMap {
    fn apply(&self, z: Complex64) -> Result<Complex64, MapError>;
}

/// The identity map.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl ComplexMap for Identity {
    fn apply(&self, z: Complex64) -> Result<Complex64, MapError> {
        Ok(z)
    }
}

/// Wraps an infallible closure.
pub struct FnMap<F>(pub F);

impl<F> ComplexMap for FnMap<F>
where
    F: Fn(Complex64) -> Complex64,
{
    fn apply(&self, z: Complex64) -> Result<Complex64, MapError> {
        Ok((self.0)(z))
    }
}

/// Wraps a fallible closure.
pub struct TryFnMap<F>(pub F);

impl<F, E> ComplexMap for TryFnMap<F>
where
    F: Fn(Complex64) -> Result<Complex64, E>,
    E: Into<MapError>,
{
    fn apply(&self, z: Complex64) -> Result<Complex64, MapError> {
        (self.0)(z).map_err(Into::into)
    }
}

pub fn map_fn<F>(f: F) -> FnMap<F>
where
    F: Fn(Complex64) -> Complex64,
{
    FnMap(f)
}

pub fn try_map_fn<F, E>(f: F) -> TryFnMap<F>
where
    F: Fn(Complex64) -> Result<Complex64, E>,
    E: Into<MapError>,
{
    TryFnMap(f)
}

impl<M: ComplexMap + ?Sized> ComplexMap for &M {
    fn apply(&self, z: Complex64) -> Result<Complex64, MapError> {
        (**self).apply(z)
    }
}

impl<M: ComplexMap + ?Sized> ComplexMap for Box<M> {
    fn apply(&self, z: Complex64) -> Result<Complex64, MapError> {
        (**self).apply(z)
    }
}

/// Image of one curve with non-finite points removed.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCurve {
    pub curve: Curve,
    /// Number of points whose image was NaN or infinite.
    pub dropped: usize,
    /// Indices into `curve.points` that follow one or more dropped points.
    pub breaks: Vec<usize>,
}

/// The mapping failed at `index` of the input curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PointError {
    pub index: usize,
    pub point: Complex64,
    pub error: MapError,
}

pub fn is_finite(z: Complex64) -> bool {
    z.re.is_finite() && z.im.is_finite()
}

/// Apply `map` to every point of `curve`, in order.
pub fn image_of<M: ComplexMap + ?Sized>(map: &M, curve: &Curve) -> Result<ImageCurve, PointError> {
    let mut points = Vec::with_capacity(curve.len());
    let mut breaks = Vec::new();
    let mut dropped = 0;
    let mut gap = false;

    for (index, &z) in curve.points.iter().enumerate() {
        let w = map
            .apply(z)
            .map_err(|error| PointError { index, point: z, error })?;
        if is_finite(w) {
            if gap && !points.is_empty() {
                breaks.push(points.len());
            }
            gap = false;
            points.push(w);
        } else {
            dropped += 1;
            gap = true;
        }
    }

    if dropped > 0 {
        log::debug!("dropped {} of {} non-finite image points", dropped, curve.len());
    }
    Ok(ImageCurve { curve: Curve::new(points), dropped, breaks })
}
