use tracing::trace;

use super::DistanceCalculator;

/// Traits that a point type should implement to take part in bucket distances.
///
/// Only `values` is required. Dense and sparse representations alike expose their properties as a slice.
///
/// # Examples
///
/// ```ignore
/// #[derive(Serialize, Deserialize, Clone, Debug)]
/// struct Pixel([f64; 3]);
/// impl PointInterface for Pixel {
///     fn values(&self) -> &[f64] {
///         &self.0
///     }
/// }
/// ```
///
/// # Zero-sized types
///
/// Points are told apart by address, and every instance of a zero-sized type shares one. Such an
/// implementor would be indistinguishable from itself in a bucket, so `avg_distance_to_bucket` refuses
/// to compile for it. Give the type a field, even one that only identifies the point.
///
/// ```compile_fail
/// use formica::PointInterface;
///
/// struct Origin;
/// impl PointInterface for Origin {
///     fn values(&self) -> &[f64] {
///         &[]
///     }
/// }
///
/// let bucket = vec![Origin, Origin, Origin];
/// let constant = |_: &Origin, _: &Origin| 1.0;
/// let _ = bucket[0].avg_distance_to_bucket(&bucket, &constant, -1.0);
/// ```
pub trait PointInterface {
    /// The property values of this point.
    fn values(&self) -> &[f64];

    /// The number of properties, or dimensions, this point represents.
    fn num_properties(&self) -> usize {
        self.values().len()
    }

    ///
    /// Average distance of this point to the other points in `bucket`, measured with `metric`.
    ///
    /// Elements that are this very instance are skipped; a distinct point with equal values is not.
    /// Duplicate references are counted once per occurrence. The bucket is walked in the order given,
    /// which fixes the floating-point summation order.
    ///
    /// Returns `default_distance` unchanged when no element contributed, i.e. the bucket is empty
    /// or holds only this point. The first error from `metric` is returned as is.
    ///
    fn avg_distance_to_bucket<'a, I, M>(
        &'a self,
        bucket: I,
        metric: &M,
        default_distance: f64,
    ) -> Result<f64, M::Error>
    where
        Self: Sized + 'a,
        I: IntoIterator<Item = &'a Self>,
        M: DistanceCalculator<Self> + ?Sized,
    {
        const { assert!(std::mem::size_of::<Self>() != 0, "zero-sized points have no identity") };

        let mut total_distance = 0.0;
        let mut distances_count: usize = 0;

        for other in bucket {
            if !std::ptr::eq(self, other) {
                total_distance += metric.distance(self, other)?;
                distances_count += 1;
            }
        }

        if distances_count > 0 {
            Ok(total_distance / distances_count as f64)
        } else {
            trace!(default_distance, "no other points in bucket, using default distance");
            Ok(default_distance)
        }
    }
}
