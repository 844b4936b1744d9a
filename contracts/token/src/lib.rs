#![no_std]

//! # RangeKeeper Test Token
//!
//! Standard Soroban token with a decimals value chosen at initialization.
//! The built-in Stellar asset contract always reports 7 decimals, which
//! cannot model 18/6 or 18/8 pairs.
//!
//! ## Functions:
//! - Admin (2): initialize, mint
//! - Token interface: allowance, approve, balance, transfer, transfer_from,
//!   burn, burn_from, decimals, name, symbol

use soroban_sdk::{
    contract, contractimpl, panic_with_error,
    token::{self, TokenInterface as _},
    Address, Env, String,
};

mod error;
mod events;
mod storage;

pub use error::TokenError;
use events::*;
use storage::*;

#[contract]
pub struct TestToken;

fn check_nonnegative(env: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(env, TokenError::NegativeAmount);
    }
}

fn unwrap_or_panic<T>(env: &Env, result: Result<T, TokenError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic_with_error!(env, err),
    }
}

#[contractimpl]
impl TestToken {
    pub fn initialize(
        env: Env,
        admin: Address,
        decimals: u32,
        name: String,
        symbol: String,
    ) -> Result<(), TokenError> {
        if has_admin(&env) {
            return Err(TokenError::AlreadyInitialized);
        }
        write_admin(&env, &admin);
        write_metadata(&env, &TokenMetadata { decimals, name, symbol });
        Ok(())
    }

    /// Mint new units to `to` (admin only)
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), TokenError> {
        if amount < 0 {
            return Err(TokenError::NegativeAmount);
        }
        let admin = read_admin(&env)?;
        admin.require_auth();

        env.storage().instance().extend_ttl(17_280, 518_400);
        receive_balance(&env, &to, amount)?;
        emit_mint(&env, &admin, &to, amount);
        Ok(())
    }
}

#[contractimpl]
impl token::TokenInterface for TestToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&env, &from, &spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative(&env, amount);

        unwrap_or_panic(&env, write_allowance(&env, &from, &spender, amount, expiration_ledger));
        emit_approve(&env, &from, &spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative(&env, amount);

        unwrap_or_panic(&env, spend_balance(&env, &from, amount));
        unwrap_or_panic(&env, receive_balance(&env, &to, amount));
        emit_transfer(&env, &from, &to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative(&env, amount);

        unwrap_or_panic(&env, spend_allowance(&env, &from, &spender, amount));
        unwrap_or_panic(&env, spend_balance(&env, &from, amount));
        unwrap_or_panic(&env, receive_balance(&env, &to, amount));
        emit_transfer(&env, &from, &to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        check_nonnegative(&env, amount);

        unwrap_or_panic(&env, spend_balance(&env, &from, amount));
        emit_burn(&env, &from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative(&env, amount);

        unwrap_or_panic(&env, spend_allowance(&env, &from, &spender, amount));
        unwrap_or_panic(&env, spend_balance(&env, &from, amount));
        emit_burn(&env, &from, amount);
    }

    fn decimals(env: Env) -> u32 {
        unwrap_or_panic(&env, read_metadata(&env)).decimals
    }

    fn name(env: Env) -> String {
        unwrap_or_panic(&env, read_metadata(&env)).name
    }

    fn symbol(env: Env) -> String {
        unwrap_or_panic(&env, read_metadata(&env)).symbol
    }
}
