// Position registry error module

use soroban_sdk::contracterror;
use rangekeeper_math::MathError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PositionError {
    // Input errors (100-199)
    InvalidAmount = 100,
    InvalidTickRange = 101,

    // Pool errors (200-299)
    InvalidPool = 200,
    InvalidPrice = 201,

    // Liquidity errors (300-399)
    ZeroLiquidity = 300,
    SlippageExceeded = 301,

    // Math errors (700-799)
    Overflow = 700,
}

impl From<MathError> for PositionError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::TickOutOfRange => PositionError::InvalidTickRange,
            MathError::PriceOutOfRange => PositionError::InvalidPrice,
            _ => PositionError::Overflow,
        }
    }
}
