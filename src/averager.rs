use rayon::prelude::*;
use tracing::debug;

use crate::{DistanceCalculator, PointInterface};

/// BucketAverager binds a metric and a default distance for repeated bucket distance queries.
///
// - `metric` measures the distance between two points of the bucket.
// - `default_distance` is returned for a point that has no other point in its bucket, e.g. a singleton cluster.
///
#[derive(Clone, Debug)]
pub struct BucketAverager<M> {
    metric: M,
    default_distance: f64,
}

pub const DEFAULT_DISTANCE: f64 = 0.0;

impl<M> BucketAverager<M> {
    pub fn new(metric: M) -> Self {
        Self {
            metric,
            default_distance: DEFAULT_DISTANCE,
        }
    }

    pub fn set_default_distance(mut self, default_distance: f64) -> Self {
        self.default_distance = default_distance;
        self
    }

    pub fn get_default_distance(&self) -> f64 {
        self.default_distance
    }

    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Average distance of `point` to the other points in `bucket`.
    pub fn avg_distance<'a, P, I>(&self, point: &'a P, bucket: I) -> Result<f64, M::Error>
    where
        P: PointInterface + 'a,
        I: IntoIterator<Item = &'a P>,
        M: DistanceCalculator<P>,
    {
        point.avg_distance_to_bucket(bucket, &self.metric, self.default_distance)
    }

    ///
    /// For every member of `bucket`, its average distance to the rest of the bucket.
    ///
    /// Members are evaluated in parallel; the output follows the bucket order. Each average is summed
    /// in bucket order, so the values match `avg_distance` bit for bit. If any member fails, the error
    /// of the earliest failing member is returned.
    ///
    pub fn avg_distances<P>(&self, bucket: &[P]) -> Result<Vec<f64>, M::Error>
    where
        P: PointInterface + Sync,
        M: DistanceCalculator<P> + Sync,
        M::Error: Send,
    {
        debug!(bucket_len = bucket.len(), "averaging bucket distances");

        let distances: Vec<Result<f64, M::Error>> = bucket
            .par_iter()
            .map(|point| point.avg_distance_to_bucket(bucket, &self.metric, self.default_distance))
            .collect();

        distances.into_iter().collect()
    }
}
