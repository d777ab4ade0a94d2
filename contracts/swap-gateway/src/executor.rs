use soroban_sdk::{token, Address, Env};

use crate::errors::SwapError;
use crate::events::SwapCompleted;
use crate::interfaces::{ExactInputSingleParams, SwapRouterClient};
use crate::route;
use crate::storage::SwapperConfig;
use crate::wrap::{self, wrapped_balance};

pub struct SwapRequest {
    pub target_token: Address,
    pub amount_in: i128,
    pub min_amount_out: i128,
    pub beneficiary: Address,
}

/// Runs wrap, route, swap, verify and pay-out for one request. The caller
/// holds the reentrancy guard and has checked the pause flag. Any error
/// aborts the invocation, so no balance change survives a failed step.
pub fn execute(env: &Env, config: &SwapperConfig, request: &SwapRequest) -> Result<i128, SwapError> {
    if request.amount_in <= 0 || request.min_amount_out < 0 {
        return Err(SwapError::InvalidAmount);
    }
    if request.target_token == config.wrap_token || request.target_token == config.native_token {
        return Err(SwapError::InvalidTargetToken);
    }
    let gateway = env.current_contract_address();

    token::Client::new(env, &config.native_token).transfer(
        &request.beneficiary,
        &gateway,
        &request.amount_in,
    );
    let wrapped = wrap::wrap(env, config, request.amount_in)?;

    let route = route::choose(env, config, &request.target_token, wrapped.wrapped_amount)?;
    if route.quoted_amount_out < request.min_amount_out {
        return Err(SwapError::SlippageExceeded);
    }

    let target_before = target_balance(env, &request.target_token, &gateway)?;
    set_router_allowance(env, config, wrapped.wrapped_amount)?;
    let params = ExactInputSingleParams {
        token_in: config.wrap_token.clone(),
        token_out: request.target_token.clone(),
        fee: route.fee_tier,
        recipient: gateway.clone(),
        amount_in: wrapped.wrapped_amount,
        amount_out_minimum: request.min_amount_out,
    };
    // The quote already covers the minimum, so a reverting router is not a
    // slippage failure.
    let claimed = match SwapRouterClient::new(env, &config.router).try_exact_input_single(&gateway, &params) {
        Ok(Ok(amount_out)) => amount_out,
        _ => return Err(SwapError::RouterSwapFailed),
    };
    let target_after = target_balance(env, &request.target_token, &gateway)?;

    let received = target_after
        .checked_sub(target_before)
        .ok_or(SwapError::InvalidTargetAmountReceived)?;
    if received != claimed {
        return Err(SwapError::InvalidTargetAmountReceived);
    }

    set_router_allowance(env, config, 0)?;
    if wrapped_balance(env, &config.wrap_token, &gateway)? != wrapped.balance_before {
        return Err(SwapError::InvalidWrappedAmountSpent);
    }

    // Nothing delivered is a router fault even when the caller accepts any
    // amount.
    if received <= 0 {
        return Err(SwapError::InvalidTargetAmountReceived);
    }
    if received < request.min_amount_out {
        return Err(SwapError::SlippageExceeded);
    }

    token::Client::new(env, &request.target_token).transfer(&gateway, &request.beneficiary, &received);

    SwapCompleted {
        target_token: request.target_token.clone(),
        caller: request.beneficiary.clone(),
        amount_in: request.amount_in,
        amount_out: received,
    }
    .publish(env);
    Ok(received)
}

fn target_balance(env: &Env, target_token: &Address, owner: &Address) -> Result<i128, SwapError> {
    match token::Client::new(env, target_token).try_balance(owner) {
        Ok(Ok(balance)) => Ok(balance),
        _ => Err(SwapError::BalanceUnavailable),
    }
}

// Allowance lives only for the current ledger and is zeroed after the swap.
fn set_router_allowance(env: &Env, config: &SwapperConfig, amount: i128) -> Result<(), SwapError> {
    let gateway = env.current_contract_address();
    let live_until_ledger = env.ledger().sequence();
    match token::Client::new(env, &config.wrap_token).try_approve(
        &gateway,
        &config.router,
        &amount,
        &live_until_ledger,
    ) {
        Ok(Ok(())) => Ok(()),
        _ => Err(SwapError::AllowanceFailed),
    }
}
