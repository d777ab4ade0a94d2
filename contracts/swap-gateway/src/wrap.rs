use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{token, Address, Env, IntoVal, Symbol, Vec};

use crate::errors::SwapError;
use crate::interfaces::WrappedNativeClient;
use crate::storage::SwapperConfig;

pub struct WrapOutcome {
    /// Wrapped balance held by the gateway before the deposit.
    pub balance_before: i128,
    pub wrapped_amount: i128,
}

/// Converts `amount_in` of the native asset held by the gateway into wrapped
/// balance and checks the wrapper credited exactly that much.
pub fn wrap(env: &Env, config: &SwapperConfig, amount_in: i128) -> Result<WrapOutcome, SwapError> {
    if amount_in <= 0 {
        return Err(SwapError::InvalidAmount);
    }
    let gateway = env.current_contract_address();
    let balance_before = wrapped_balance(env, &config.wrap_token, &gateway)?;

    authorize_native_transfer(env, &config.native_token, &gateway, &config.wrap_token, amount_in);
    match WrappedNativeClient::new(env, &config.wrap_token).try_deposit(&gateway, &amount_in) {
        Ok(Ok(())) => {}
        _ => return Err(SwapError::WrapFailed),
    }

    let balance_after = wrapped_balance(env, &config.wrap_token, &gateway)?;
    let received = balance_after
        .checked_sub(balance_before)
        .ok_or(SwapError::InvalidWrappedAmountReceived)?;
    if received != amount_in {
        return Err(SwapError::InvalidWrappedAmountReceived);
    }
    Ok(WrapOutcome {
        balance_before,
        wrapped_amount: received,
    })
}

pub fn wrapped_balance(env: &Env, wrap_token: &Address, owner: &Address) -> Result<i128, SwapError> {
    match token::Client::new(env, wrap_token).try_balance(owner) {
        Ok(Ok(balance)) => Ok(balance),
        _ => Err(SwapError::BalanceUnavailable),
    }
}

// The wrapper, not the gateway, invokes the native transfer, so the gateway
// pre-authorizes exactly that one pull.
fn authorize_native_transfer(
    env: &Env,
    native_token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) {
    let args = (from.clone(), to.clone(), amount).into_val(env);
    let ctx = ContractContext {
        contract: native_token.clone(),
        fn_name: Symbol::new(env, "transfer"),
        args,
    };
    let mut auths = Vec::new(env);
    auths.push_back(InvokerContractAuthEntry::Contract(SubContractInvocation {
        context: ctx,
        sub_invocations: Vec::new(env),
    }));
    env.authorize_as_current_contract(auths);
}
