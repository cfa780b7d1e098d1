mod metric;
mod point;

pub use self::metric::DistanceCalculator;
pub use self::point::PointInterface;
