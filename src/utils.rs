use rand::rngs::SmallRng;
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::Point;

/// Parses points from a JSON array of number arrays, e.g. `[[1.0, 2.0], [3.0, 4.0]]`.
pub fn points_from_json(json: &str) -> Result<Vec<Point>> {
    let points: Vec<Point> = serde_json::from_str(json)?;
    debug!(count = points.len(), "loaded points from json");
    Ok(points)
}

/// Writes points as a JSON array of number arrays.
///
/// JSON has no NaN or infinity, so a point holding one is rejected with `Error::InvalidArgument`.
pub fn points_to_json(points: &[Point]) -> Result<String> {
    if let Some(index) = points
        .iter()
        .position(|p| p.values().iter().any(|v| !v.is_finite()))
    {
        return Err(Error::InvalidArgument(format!(
            "point {} holds a non-finite value: {:?}",
            index,
            points[index].values()
        )));
    }
    Ok(serde_json::to_string(points)?)
}

/// Synthetic points with every value drawn uniformly from `[0, 1)`.
pub fn random_points(rng: &mut SmallRng, count: usize, num_properties: usize) -> Vec<Point> {
    (0..count)
        .map(|_| (0..num_properties).map(|_| rng.gen::<f64>()).collect())
        .collect()
}
