// Error handling for the spot pool
//
// Typed errors via contracterror, grouped by concern in numeric ranges.

use soroban_sdk::contracterror;
use rangekeeper_math::MathError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    // Initialization errors (100-199)
    /// Pool has already been initialized
    AlreadyInitialized = 100,
    /// Pool has not been initialized
    NotInitialized = 101,

    // Configuration errors (200-299)
    /// Invalid fee: must be 1-9999 bps
    InvalidFee = 200,
    /// Invalid tick spacing: must be positive
    InvalidTickSpacing = 201,
    /// Initial sqrt price outside the tick space
    InvalidPrice = 202,
    /// Execution haircut above 10000 bps
    InvalidHaircut = 203,

    // Token errors (300-399)
    /// Invalid token for this pool
    InvalidToken = 300,
    /// Both pool tokens are the same contract
    SameToken = 301,

    // Swap errors (500-599)
    /// Swap amount must be positive
    InvalidAmount = 500,
    /// Output below the caller's minimum
    SlippageExceeded = 501,
    /// Output rounds to zero
    OutputDust = 502,
    /// Pool does not hold enough of the output token
    InsufficientReserves = 503,

    // Authorization errors (600-699)
    /// Only the pool admin can perform this action
    Unauthorized = 600,

    // Math errors (700-799)
    /// Division by zero
    DivisionByZero = 700,
    /// Arithmetic overflow
    Overflow = 701,
}

impl From<MathError> for PoolError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DivisionByZero => PoolError::DivisionByZero,
            _ => PoolError::Overflow,
        }
    }
}
