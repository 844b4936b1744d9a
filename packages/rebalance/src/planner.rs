// Rebalance planning: how much of the excess token to swap

use soroban_sdk::{Env, U256};
use rangekeeper_math::{
    constants::{BPS_DENOMINATOR, MAX_FEE_BPS},
    div_u256, mul_div, MathError,
};
use rangekeeper_ratio::{cross_products, deviation_bps, quote_at_price, RequiredRatio};
use crate::types::{RebalanceError, RebalanceParams, RebalancePlan};

/// Apply a bps haircut: amount * (10000 - bps) / 10000
#[inline]
pub fn apply_haircut(env: &Env, amount: u128, bps: u32) -> Result<u128, RebalanceError> {
    let keep = BPS_DENOMINATOR
        .checked_sub(bps as u128)
        .ok_or(RebalanceError::InvalidParams)?;
    Ok(mul_div(env, amount, keep, BPS_DENOMINATOR)?)
}

/// Minimum acceptable swap output for a spot-value quote
pub fn min_amount_out(
    env: &Env,
    expected_out: u128,
    fee_bps: u32,
    slippage_bps: u32,
) -> Result<u128, RebalanceError> {
    let after_fee = apply_haircut(env, expected_out, fee_bps)?;
    apply_haircut(env, after_fee, slippage_bps)
}

fn validate(params: &RebalanceParams) -> Result<(), RebalanceError> {
    if params.fee_bps >= MAX_FEE_BPS {
        return Err(RebalanceError::InvalidFee);
    }
    let max = BPS_DENOMINATOR as u32;
    if params.tolerance_bps > max || params.slippage_bps >= max {
        return Err(RebalanceError::InvalidParams);
    }
    Ok(())
}

/// Plan the swap that moves (amount0, amount1) onto `ratio`.
///
/// Selling x of token0 at price P leaves (a0 - x, a1 + x·P·(1-f)); solving
/// (a0 - x)·r1 = (a1 + x·P·(1-f))·r0 gives
///     x = (a0·r1 - a1·r0) / (r1 + r0·P·(1-f)).
/// The token1 side is the mirror, evaluated in token1 value terms:
///     x = (a1·r0·P - a0·P·r1) / (r0·P + r1·(1-f)).
pub fn plan_rebalance(
    env: &Env,
    amount0: u128,
    amount1: u128,
    ratio: &RequiredRatio,
    sqrt_price_x96: u128,
    params: &RebalanceParams,
) -> Result<RebalancePlan, RebalanceError> {
    validate(params)?;

    let deviation = deviation_bps(env, ratio, amount0, amount1)?;
    if deviation <= params.tolerance_bps {
        return Ok(RebalancePlan::skip(deviation));
    }

    let (lhs, rhs) = cross_products(env, ratio, amount0, amount1);
    let zero_for_one = lhs > rhs;

    let swap_amount = if zero_for_one {
        let numerator = lhs.sub(&rhs);
        let denominator = ratio
            .ratio1
            .checked_add(apply_haircut(env, ratio.ratio0_value, params.fee_bps)?)
            .ok_or(RebalanceError::Math(MathError::Overflow))?;
        div_u256(env, &numerator, denominator, false)?.min(amount0)
    } else {
        let amount0_value = quote_at_price(env, amount0, sqrt_price_x96, true)?;
        let want = U256::from_u128(env, amount1).mul(&U256::from_u128(env, ratio.ratio0_value));
        let have = U256::from_u128(env, amount0_value).mul(&U256::from_u128(env, ratio.ratio1));
        if want <= have {
            return Ok(RebalancePlan::skip(deviation));
        }
        let denominator = ratio
            .ratio0_value
            .checked_add(apply_haircut(env, ratio.ratio1, params.fee_bps)?)
            .ok_or(RebalanceError::Math(MathError::Overflow))?;
        div_u256(env, &want.sub(&have), denominator, false)?.min(amount1)
    };

    let expected_out = quote_at_price(env, swap_amount, sqrt_price_x96, zero_for_one)?;
    let floor = min_amount_out(env, expected_out, params.fee_bps, params.slippage_bps)?;

    // Nothing would come back from the pool: keep the pair as supplied
    if swap_amount == 0 || apply_haircut(env, expected_out, params.fee_bps)? == 0 {
        return Ok(RebalancePlan::skip(deviation));
    }

    Ok(RebalancePlan {
        is_needed: true,
        zero_for_one,
        amount_in: swap_amount,
        expected_out,
        min_amount_out: floor,
        deviation_bps: deviation,
    })
}

/// Amounts held after executing `plan` with an actual output of `amount_out`
pub fn apply_plan(
    plan: &RebalancePlan,
    amount0: u128,
    amount1: u128,
    amount_out: u128,
) -> Result<(u128, u128), RebalanceError> {
    let overflow = RebalanceError::Math(MathError::Overflow);
    if !plan.is_needed {
        return Ok((amount0, amount1));
    }

    if plan.zero_for_one {
        Ok((
            amount0.checked_sub(plan.amount_in).ok_or(overflow)?,
            amount1.checked_add(amount_out).ok_or(overflow)?,
        ))
    } else {
        Ok((
            amount0.checked_add(amount_out).ok_or(overflow)?,
            amount1.checked_sub(plan.amount_in).ok_or(overflow)?,
        ))
    }
}
