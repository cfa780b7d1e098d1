/*
    Formica describes points in feature space and how close a point sits to a bucket of other points.
    The metric is supplied by the caller; clustering on top of it lives elsewhere.
*/

pub mod averager;
pub mod error;
pub mod metrics;
pub mod point;
pub mod traits;
pub mod utils;


pub use crate::averager::BucketAverager;
pub use crate::error::{Error, Result};
pub use crate::metrics::{Chebyshev, Euclidean, Manhattan};
pub use crate::point::Point;
pub use crate::traits::DistanceCalculator;
pub use crate::traits::PointInterface;
