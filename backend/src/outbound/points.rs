//! Random points source backed by `rand`.

use std::sync::{Mutex, PoisonError};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::domain::ports::PointsSource;
use crate::domain::{CLAIM_POINTS_MAX, CLAIM_POINTS_MIN, ClaimPoints};

/// Uniform draw over the accepted claim range.
#[derive(Debug)]
pub struct RandomPointsSource {
    rng: Mutex<SmallRng>,
}

impl RandomPointsSource {
    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPointsSource {
    fn default() -> Self {
        Self {
            rng: Mutex::new(SmallRng::from_entropy()),
        }
    }
}

impl PointsSource for RandomPointsSource {
    fn draw(&self) -> ClaimPoints {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        ClaimPoints::clamped(rng.gen_range(CLAIM_POINTS_MIN..=CLAIM_POINTS_MAX))
    }
}
