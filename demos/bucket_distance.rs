use formica::utils::{points_from_json, random_points};
use formica::{BucketAverager, Euclidean, Manhattan, Point, PointInterface};

use rand::rngs::SmallRng;
use rand::SeedableRng;

fn main() -> formica::Result<()> {
    let seed: u64 = 11923543545843533243;
    let mut rng = SmallRng::seed_from_u64(seed);

    let p = Point::new(vec![1.0, 2.0]);
    let bucket = points_from_json("[[3.0, 4.0], [5.0, 6.0]]")?;

    let avg = p.avg_distance_to_bucket(&bucket, &Euclidean, -1.0)?;
    println!("euclidean avg distance of {:?}: {}", p.values(), avg);

    let empty: Vec<Point> = Vec::new();
    let avg = p.avg_distance_to_bucket(&empty, &Euclidean, 7.5)?;
    println!("empty bucket falls back to: {}", avg);

    let points = random_points(&mut rng, 1000, 16);
    let averager = BucketAverager::new(Manhattan).set_default_distance(-1.0);
    let distances = averager.avg_distances(&points)?;
    let mean = distances.iter().sum::<f64>() / distances.len() as f64;
    println!("mean manhattan avg distance over {} points: {}", points.len(), mean);

    Ok(())
}
