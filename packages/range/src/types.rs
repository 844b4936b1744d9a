// Range Types

use soroban_sdk::contracttype;

/// A tick band `[tick_lower, tick_upper)` usable as position bounds
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TickRange {
    /// Inclusive lower bound, a multiple of the pool tick spacing
    pub tick_lower: i32,
    /// Exclusive upper bound, a multiple of the pool tick spacing
    pub tick_upper: i32,
}

impl TickRange {
    /// True when `tick` lies inside the band
    pub fn contains(&self, tick: i32) -> bool {
        self.tick_lower <= tick && tick < self.tick_upper
    }

    pub fn width_in_ticks(&self) -> i32 {
        self.tick_upper - self.tick_lower
    }
}

/// Range construction failure
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RangeError {
    /// Width at or above MAX_WIDTH
    RangeTooWide,
    /// Tick spacing not positive, or too large to fit one band in the tick space
    InvalidTickSpacing,
    /// Current tick outside [MIN_TICK, MAX_TICK]
    TickOutOfRange,
}
