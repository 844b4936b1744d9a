use soroban_sdk::contracttype;
use rangekeeper_math::MathError;

/// Swap that brings a supplied pair to the required ratio
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RebalancePlan {
    /// False when the pair is already within tolerance
    pub is_needed: bool,
    /// true: sell token0 for token1; false: sell token1 for token0
    pub zero_for_one: bool,
    /// Amount of the excess token to sell
    pub amount_in: u128,
    /// Spot value of `amount_in` in the other token, before fees
    pub expected_out: u128,
    /// Output floor passed to the pool: expected_out less fee and slippage
    pub min_amount_out: u128,
    /// Deviation of the supplied pair from the ratio, in bps
    pub deviation_bps: u32,
}

impl RebalancePlan {
    pub fn skip(deviation_bps: u32) -> Self {
        Self {
            is_needed: false,
            zero_for_one: false,
            amount_in: 0,
            expected_out: 0,
            min_amount_out: 0,
            deviation_bps,
        }
    }
}

/// Tunables for planning a rebalance
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RebalanceParams {
    /// Pool fee charged on the input, in bps
    pub fee_bps: u32,
    /// Deviations at or below this are left alone, in bps
    pub tolerance_bps: u32,
    /// Accepted shortfall below the fee-adjusted quote, in bps
    pub slippage_bps: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RebalanceError {
    Math(MathError),
    InvalidFee,
    InvalidParams,
}

impl From<MathError> for RebalanceError {
    fn from(err: MathError) -> Self {
        RebalanceError::Math(err)
    }
}
