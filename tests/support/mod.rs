#![allow(dead_code)]

pub mod config_env;

use churnboard::dashboard::Dataset;
use rand::{SeedableRng, rngs::StdRng};

/// Dataset with a reproducible scatter sample.
pub fn seeded_dataset(points: usize) -> Dataset {
    Dataset::load(&mut StdRng::seed_from_u64(42), points)
}
