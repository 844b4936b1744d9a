// Ratio Types

use soroban_sdk::contracttype;

/// Token proportions a range demands at the current price.
///
/// `ratio0` and `ratio1` are the token0 and token1 amounts that back
/// REFERENCE_LIQUIDITY across the range, so only their proportion matters.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RequiredRatio {
    /// token0 leg, in token0 smallest units
    pub ratio0: u128,
    /// token1 leg, in token1 smallest units
    pub ratio1: u128,
    /// token0 leg valued in token1 at the current price
    pub ratio0_value: u128,
}

impl RequiredRatio {
    /// Range lies entirely above the price: only token0 is accepted
    pub fn is_token0_only(&self) -> bool {
        self.ratio1 == 0
    }

    /// Range lies entirely below the price: only token1 is accepted
    pub fn is_token1_only(&self) -> bool {
        self.ratio0 == 0
    }
}
