#![no_std]

pub mod planner;
pub mod types;

pub use planner::{apply_haircut, apply_plan, min_amount_out, plan_rebalance};
pub use types::{RebalanceError, RebalanceParams, RebalancePlan};
