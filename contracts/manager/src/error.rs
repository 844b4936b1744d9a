//! Manager error types

use soroban_sdk::contracterror;
use rangekeeper_math::MathError;
use rangekeeper_range::RangeError;
use rangekeeper_rebalance::RebalanceError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ManagerError {
    // Lifecycle
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    Reentrant = 4,

    // Input
    ZeroAmounts = 10,
    InvalidAmount = 11,
    RangeTooWide = 12,

    // Caller funds
    InsufficientBalance = 20,
    InsufficientApproval = 21,

    // Pool and price
    StalePrice = 30,
    InvalidPool = 31,
    InvalidDecimals = 32,
    MathOverflow = 33,

    // Execution
    SwapSlippage = 40,
    MintBelowMinimum = 41,
    CustodyMismatch = 42,
}

impl From<MathError> for ManagerError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InvalidDecimals => ManagerError::InvalidDecimals,
            MathError::PriceOutOfRange => ManagerError::StalePrice,
            _ => ManagerError::MathOverflow,
        }
    }
}

impl From<RangeError> for ManagerError {
    fn from(err: RangeError) -> Self {
        match err {
            RangeError::RangeTooWide => ManagerError::RangeTooWide,
            RangeError::InvalidTickSpacing => ManagerError::InvalidPool,
            RangeError::TickOutOfRange => ManagerError::StalePrice,
        }
    }
}

impl From<RebalanceError> for ManagerError {
    fn from(err: RebalanceError) -> Self {
        match err {
            RebalanceError::Math(math) => math.into(),
            RebalanceError::InvalidFee => ManagerError::InvalidPool,
            RebalanceError::InvalidParams => ManagerError::InvalidConfig,
        }
    }
}
