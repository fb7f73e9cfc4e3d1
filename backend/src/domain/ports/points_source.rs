//! Port supplying the points awarded by a claim.

use crate::domain::ClaimPoints;

/// Source of claim awards. Production draws uniformly from the accepted
/// range; tests substitute a fixed sequence.
#[cfg_attr(test, mockall::automock)]
pub trait PointsSource: Send + Sync {
    /// Draw the award for one claim.
    fn draw(&self) -> ClaimPoints;
}

/// Points source that always awards the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedPointsSource(pub ClaimPoints);

impl PointsSource for FixedPointsSource {
    fn draw(&self) -> ClaimPoints {
        self.0
    }
}
