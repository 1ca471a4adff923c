// Tick Types

use soroban_sdk::contracttype;

/// A closed-open tick interval `[lower, upper)` owned by a position
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TickRange {
    pub lower: i32,
    pub upper: i32,
}

impl TickRange {
    pub fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    /// Whether `tick` sits inside the range (lower inclusive, upper exclusive)
    pub fn contains(&self, tick: i32) -> bool {
        tick >= self.lower && tick < self.upper
    }
}
