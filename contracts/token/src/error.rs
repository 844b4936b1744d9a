//! Token error types

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TokenError {
    // Initialization
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Amounts
    NegativeAmount = 10,
    InsufficientBalance = 11,
    InsufficientAllowance = 12,
    InvalidExpiration = 13,
    Overflow = 14,
}
