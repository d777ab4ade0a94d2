//! Clients for the external contracts the gateway talks to. None of them are
//! trusted: every value they return is checked against observed balances.

use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Wrapping token for the native asset. `deposit` pulls `amount` of the
/// native asset from `from` and credits the same amount of wrapped balance.
/// Balances and allowances go through the standard token interface.
#[contractclient(name = "WrappedNativeClient")]
pub trait WrappedNative {
    fn deposit(env: Env, from: Address, amount: i128);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExactInputSingleParams {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub recipient: Address,
    pub amount_in: i128,
    pub amount_out_minimum: i128,
}

/// AMM entry point. Draws `amount_in` of `token_in` from `sender` through the
/// allowance granted beforehand and returns the amount sent to `recipient`.
#[contractclient(name = "SwapRouterClient")]
pub trait SwapRouter {
    fn exact_input_single(env: Env, sender: Address, params: ExactInputSingleParams) -> i128;
}

/// Read-only price oracle. Expected to fail when no pool exists for the tier.
#[contractclient(name = "QuoterClient")]
pub trait Quoter {
    fn quote_exact_input_single(
        env: Env,
        token_in: Address,
        token_out: Address,
        fee: u32,
        amount_in: i128,
    ) -> i128;
}
