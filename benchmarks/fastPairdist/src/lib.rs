//! Reproducible point-pair generators shared by the distance benchmarks.

use rand::prelude::*;
use rand_distr::{Normal, Uniform};

/// Four coordinate arrays: `(x1, y1, x2, y2)`.
pub type PointPairs = (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>);

/// Points drawn uniformly from the unit square.
pub fn generate_uniform_pairs(size: usize, seed: u64) -> PointPairs {
    let mut rng = StdRng::seed_from_u64(seed);
    let unit = Uniform::new(0.0, 1.0).unwrap();

    let mut draw = || (0..size).map(|_| unit.sample(&mut rng)).collect::<Vec<f64>>();
    (draw(), draw(), draw(), draw())
}

/// Particle positions in consecutive frames: each second point is the first
/// one displaced by a small Gaussian step.
pub fn generate_tracking_pairs(size: usize, seed: u64) -> PointPairs {
    let mut rng = StdRng::seed_from_u64(seed);
    let position = Uniform::new(0.0, 512.0).unwrap();
    let step = Normal::new(0.0, 1.5).unwrap();

    let x1: Vec<f64> = (0..size).map(|_| position.sample(&mut rng)).collect();
    let y1: Vec<f64> = (0..size).map(|_| position.sample(&mut rng)).collect();
    let x2 = x1.iter().map(|&x| x + step.sample(&mut rng)).collect();
    let y2 = y1.iter().map(|&y| y + step.sample(&mut rng)).collect();
    (x1, y1, x2, y2)
}

/// Coordinates spanning many orders of magnitude, including values whose
/// squares overflow.
pub fn generate_wide_range_pairs(size: usize, seed: u64) -> PointPairs {
    let mut rng = StdRng::seed_from_u64(seed);
    let exponent = Uniform::new(-300.0, 300.0).unwrap();

    let mut draw = || {
        (0..size)
            .map(|_| {
                let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
                sign * 10f64.powf(exponent.sample(&mut rng))
            })
            .collect::<Vec<f64>>()
    };
    (draw(), draw(), draw(), draw())
}
