#![no_std]

pub mod solver;
pub mod types;

pub use solver::{cross_products, deviation_bps, has_excess_token0, quote_at_price, solve_required_ratio};
pub use types::RequiredRatio;
