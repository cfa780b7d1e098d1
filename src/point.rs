use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::PointInterface;

/// Point is a dense, immutable position in feature space.
///
/// Equality compares values. Bucket distances never use it: they tell points apart by instance,
/// so a clone counts as another point.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct Point {
    values: Box<[f64]>,
}

impl Point {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values: values.into_boxed_slice(),
        }
    }

    /// A point with `num_properties` dimensions, every value initialized at 0.0.
    pub fn zeros(num_properties: usize) -> Self {
        Self::new(vec![0.0; num_properties])
    }

    ///
    /// Like `zeros`, for a dimensionality that arrives signed, e.g. from configuration.
    ///
    /// A negative `num_properties` is rejected with `Error::InvalidArgument`.
    ///
    pub fn with_num_properties(num_properties: i64) -> Result<Self> {
        if num_properties < 0 {
            return Err(Error::InvalidArgument(format!(
                "number of properties must not be negative, got {}",
                num_properties
            )));
        }
        let num_properties = usize::try_from(num_properties).map_err(|_| {
            Error::InvalidArgument(format!(
                "number of properties {} does not fit in usize",
                num_properties
            ))
        })?;
        Ok(Self::zeros(num_properties))
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values.into_vec()
    }
}

impl PointInterface for Point {
    fn values(&self) -> &[f64] {
        Point::values(self)
    }
}

impl From<Vec<f64>> for Point {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Point {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl FromIterator<f64> for Point {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
