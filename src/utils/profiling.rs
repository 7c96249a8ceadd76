use std::ops::AddAssign;

use crate::collision::CollisionOutcome;

/// Counters gathered while an `update` call runs its fixed steps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpdateStats {
    pub steps: usize,
    pub pairs_tested: usize,
    pub collisions: usize,
    pub unsupported_pairs: usize,
    /// Whole steps discarded by the per-update step cap.
    pub dropped_steps: usize,
}

impl UpdateStats {
    pub fn record(&mut self, outcome: CollisionOutcome) {
        self.pairs_tested += 1;
        match outcome {
            CollisionOutcome::Collided => self.collisions += 1,
            CollisionOutcome::Unsupported => self.unsupported_pairs += 1,
            CollisionOutcome::Separated => {}
        }
    }
}

impl AddAssign for UpdateStats {
    fn add_assign(&mut self, other: Self) {
        self.steps += other.steps;
        self.pairs_tested += other.pairs_tested;
        self.collisions += other.collisions;
        self.unsupported_pairs += other.unsupported_pairs;
        self.dropped_steps += other.dropped_steps;
    }
}
