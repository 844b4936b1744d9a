#![no_std]

pub mod calculator;
pub mod types;

pub use calculator::{compute_range, floor_to_spacing, is_valid_range, max_usable_tick, min_usable_tick};
pub use types::{RangeError, TickRange};

// Re-export from math
pub use rangekeeper_math::constants::MAX_WIDTH;
