use crate::error::{Error, Result};
use crate::{DistanceCalculator, PointInterface};

/// Straight-line distance, the square root of the summed squared differences.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

/// Sum of absolute differences.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manhattan;

/// Largest absolute difference over all properties.
#[derive(Clone, Copy, Debug, Default)]
pub struct Chebyshev;

fn paired_values<'a, P: PointInterface>(
    a: &'a P,
    b: &'a P,
) -> Result<impl Iterator<Item = (f64, f64)> + 'a> {
    let (a, b) = (a.values(), b.values());
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().copied().zip(b.iter().copied()))
}

impl<P: PointInterface> DistanceCalculator<P> for Euclidean {
    type Error = Error;

    fn distance(&self, a: &P, b: &P) -> Result<f64> {
        Ok(paired_values(a, b)?
            .map(|(x, y)| {
                let c = x - y;
                c * c
            })
            .sum::<f64>()
            .sqrt())
    }
}

impl<P: PointInterface> DistanceCalculator<P> for Manhattan {
    type Error = Error;

    fn distance(&self, a: &P, b: &P) -> Result<f64> {
        Ok(paired_values(a, b)?.map(|(x, y)| (x - y).abs()).sum())
    }
}

impl<P: PointInterface> DistanceCalculator<P> for Chebyshev {
    type Error = Error;

    fn distance(&self, a: &P, b: &P) -> Result<f64> {
        Ok(paired_values(a, b)?
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max))
    }
}
