use soroban_sdk::{log, Address, Env};

use crate::constants::FEE_TIERS;
use crate::errors::SwapError;
use crate::interfaces::QuoterClient;
use crate::storage::{CandidateRoute, SwapperConfig};

/// Picks the fee tier for a swap of `amount_in` wrapped token into
/// `target_token`. Only read-only quoter calls are made. A fixed tier still
/// needs a quote, so the returned route always carries a positive
/// `quoted_amount_out`.
pub fn choose(
    env: &Env,
    config: &SwapperConfig,
    target_token: &Address,
    amount_in: i128,
) -> Result<CandidateRoute, SwapError> {
    if amount_in <= 0 {
        return Err(SwapError::InvalidAmount);
    }
    if let Some(fee_tier) = config.fixed_fee_tier {
        let quoted_amount_out =
            quote(env, config, target_token, fee_tier, amount_in).ok_or(SwapError::NoRoute)?;
        return Ok(CandidateRoute {
            fee_tier,
            quoted_amount_out,
        });
    }

    let candidates = FEE_TIERS.map(|fee| (fee, quote(env, config, target_token, fee, amount_in)));
    best_route(&candidates).ok_or(SwapError::NoRoute)
}

/// Highest quote wins; equal quotes go to the lower fee tier. Missing and
/// non-positive quotes never win.
pub fn best_route(candidates: &[(u32, Option<i128>)]) -> Option<CandidateRoute> {
    let mut best: Option<CandidateRoute> = None;
    for &(fee_tier, quote) in candidates {
        let Some(quoted_amount_out) = quote.filter(|q| *q > 0) else {
            continue;
        };
        let better = match &best {
            None => true,
            Some(current) => {
                quoted_amount_out > current.quoted_amount_out
                    || (quoted_amount_out == current.quoted_amount_out
                        && fee_tier < current.fee_tier)
            }
        };
        if better {
            best = Some(CandidateRoute {
                fee_tier,
                quoted_amount_out,
            });
        }
    }
    best
}

fn quote(
    env: &Env,
    config: &SwapperConfig,
    target_token: &Address,
    fee_tier: u32,
    amount_in: i128,
) -> Option<i128> {
    match QuoterClient::new(env, &config.quoter).try_quote_exact_input_single(
        &config.wrap_token,
        target_token,
        &fee_tier,
        &amount_in,
    ) {
        Ok(Ok(amount_out)) if amount_out > 0 => Some(amount_out),
        _ => {
            log!(env, "no quote for fee tier", fee_tier);
            None
        }
    }
}
