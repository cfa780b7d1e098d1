use std::convert::Infallible;

/// Traits that a distance metric should implement for use by `PointInterface::avg_distance_to_bucket`.
///
/// A metric is expected to be symmetric and deterministic. It returns a non-negative dissimilarity for
/// two points of matching dimensionality; what it does for mismatched points is up to the metric,
/// typically an error of its own `Error` type which the caller receives unchanged.
///
/// # Examples
///
/// ```ignore
/// struct Hamming;
/// impl DistanceCalculator<Point> for Hamming {
///     type Error = Infallible;
///     fn distance(&self, a: &Point, b: &Point) -> Result<f64, Self::Error> {
///         Ok(a.values()
///             .iter()
///             .zip(b.values())
///             .filter(|(x, y)| x != y)
///             .count() as f64)
///     }
/// }
/// ```
pub trait DistanceCalculator<P: ?Sized> {
    type Error;

    fn distance(&self, a: &P, b: &P) -> Result<f64, Self::Error>;
}

/// Any plain closure over two points is a metric that never fails.
impl<P, F> DistanceCalculator<P> for F
where
    P: ?Sized,
    F: Fn(&P, &P) -> f64,
{
    type Error = Infallible;

    fn distance(&self, a: &P, b: &P) -> Result<f64, Self::Error> {
        Ok(self(a, b))
    }
}
