use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

use crate::access::{self, require_active, require_owner};
use crate::constants::{FEE_TIERS, INIT_OWNER};
use crate::errors::SwapError;
use crate::events::*;
use crate::executor::{self, SwapRequest};
use crate::guard::ReentrancyGuard;
use crate::route;
use crate::storage::*;

/// Custodial native-to-token swap gateway.
///
/// Takes the native asset from a caller, wraps it, swaps the wrapped balance
/// through an external AMM router on the best-quoted fee tier and pays the
/// output token back to the caller within a single invocation. The wrapper,
/// router and quoter are treated as untrusted: every amount they report is
/// checked against the gateway's own balance deltas.
#[contract]
pub struct SwapGateway;

#[contractimpl]
impl SwapGateway {
    pub fn initialize(
        env: Env,
        owner: Address,
        native_token: Address,
        wrap_token: Address,
        router: Address,
        quoter: Address,
    ) -> Result<(), SwapError> {
        if is_initialized(&env) {
            return Err(SwapError::AlreadyInitialized);
        }
        if let Some(expected) = INIT_OWNER {
            if owner != Address::from_string(&String::from_str(&env, expected)) {
                return Err(SwapError::UnexpectedOwner);
            }
        }
        owner.require_auth();
        write_address(&env, &DataKey::Owner, &owner);
        write_address(&env, &DataKey::WrapToken, &wrap_token);
        write_address(&env, &DataKey::Router, &router);
        set_paused(&env, false);
        write_address(&env, &DataKey::Quoter, &quoter);
        write_address(&env, &DataKey::NativeToken, &native_token);
        mark_initialized(&env);
        bump_instance_ttl(&env);
        Ok(())
    }

    /// Swaps `amount_in` of the native asset owned by `caller` into
    /// `target_token` and returns the amount delivered to `caller`, which is
    /// never below `min_amount_out`.
    pub fn swap(
        env: Env,
        caller: Address,
        target_token: Address,
        amount_in: i128,
        min_amount_out: i128,
    ) -> Result<i128, SwapError> {
        bump_instance_ttl(&env);
        let config = load_config(&env)?;
        require_active(&env)?;
        caller.require_auth();
        let _guard = ReentrancyGuard::acquire(&env)?;
        let request = SwapRequest {
            target_token,
            amount_in,
            min_amount_out,
            beneficiary: caller,
        };
        executor::execute(&env, &config, &request)
    }

    /// Route the next swap of `amount_in` would take, without executing it.
    pub fn quote_best_route(
        env: Env,
        target_token: Address,
        amount_in: i128,
    ) -> Result<CandidateRoute, SwapError> {
        let config = load_config(&env)?;
        route::choose(&env, &config, &target_token, amount_in)
    }

    pub fn update_router(env: Env, owner: Address, new_router: Address) -> Result<(), SwapError> {
        bump_instance_ttl(&env);
        require_owner(&env, &owner)?;
        let old_router = read_address(&env, &DataKey::Router)?;
        write_address(&env, &DataKey::Router, &new_router);
        RouterUpdated {
            old_router,
            new_router,
        }
        .publish(&env);
        Ok(())
    }

    pub fn update_wrap_token(
        env: Env,
        owner: Address,
        new_wrap_token: Address,
    ) -> Result<(), SwapError> {
        bump_instance_ttl(&env);
        require_owner(&env, &owner)?;
        let old_wrap_token = read_address(&env, &DataKey::WrapToken)?;
        write_address(&env, &DataKey::WrapToken, &new_wrap_token);
        WrapTokenUpdated {
            old_wrap_token,
            new_wrap_token,
        }
        .publish(&env);
        Ok(())
    }

    pub fn update_quoter(env: Env, owner: Address, new_quoter: Address) -> Result<(), SwapError> {
        bump_instance_ttl(&env);
        require_owner(&env, &owner)?;
        let old_quoter = read_address(&env, &DataKey::Quoter)?;
        write_address(&env, &DataKey::Quoter, &new_quoter);
        QuoterUpdated {
            old_quoter,
            new_quoter,
        }
        .publish(&env);
        Ok(())
    }

    /// Pins every swap to one fee tier, or restores best-tier selection with
    /// `None`.
    pub fn set_fixed_fee_tier(
        env: Env,
        owner: Address,
        fee_tier: Option<u32>,
    ) -> Result<(), SwapError> {
        bump_instance_ttl(&env);
        require_owner(&env, &owner)?;
        if let Some(fee) = fee_tier {
            if !FEE_TIERS.contains(&fee) {
                return Err(SwapError::InvalidFeeTier);
            }
        }
        let old_fee_tier = fixed_fee_tier(&env);
        set_fixed_fee_tier(&env, fee_tier);
        FixedFeeTierUpdated {
            old_fee_tier,
            new_fee_tier: fee_tier,
        }
        .publish(&env);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        owner: Address,
        new_owner: Address,
    ) -> Result<(), SwapError> {
        bump_instance_ttl(&env);
        require_owner(&env, &owner)?;
        new_owner.require_auth();
        write_address(&env, &DataKey::Owner, &new_owner);
        OwnershipTransferred {
            previous_owner: owner,
            new_owner,
        }
        .publish(&env);
        Ok(())
    }

    pub fn pause(env: Env, owner: Address) -> Result<(), SwapError> {
        bump_instance_ttl(&env);
        access::pause(&env, &owner)
    }

    pub fn unpause(env: Env, owner: Address) -> Result<(), SwapError> {
        bump_instance_ttl(&env);
        access::unpause(&env, &owner)
    }

    pub fn owner(env: Env) -> Result<Address, SwapError> {
        read_address(&env, &DataKey::Owner)
    }

    pub fn router(env: Env) -> Result<Address, SwapError> {
        read_address(&env, &DataKey::Router)
    }

    pub fn wrap_token(env: Env) -> Result<Address, SwapError> {
        read_address(&env, &DataKey::WrapToken)
    }

    pub fn quoter(env: Env) -> Result<Address, SwapError> {
        read_address(&env, &DataKey::Quoter)
    }

    pub fn native_token(env: Env) -> Result<Address, SwapError> {
        read_address(&env, &DataKey::NativeToken)
    }

    pub fn paused(env: Env) -> bool {
        is_paused(&env)
    }

    pub fn fixed_fee_tier(env: Env) -> Option<u32> {
        fixed_fee_tier(&env)
    }

    pub fn is_locked(env: Env) -> bool {
        ReentrancyGuard::is_held(&env)
    }

    pub fn config(env: Env) -> Result<SwapperConfig, SwapError> {
        load_config(&env)
    }

    pub fn bump_ttl(env: Env) {
        bump_instance_ttl(&env);
    }

    pub fn upgrade_wasm(
        env: Env,
        owner: Address,
        new_wasm_hash: BytesN<32>,
    ) -> Result<(), SwapError> {
        bump_instance_ttl(&env);
        require_owner(&env, &owner)?;
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }
}
