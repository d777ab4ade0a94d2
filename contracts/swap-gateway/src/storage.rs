use soroban_sdk::{contracttype, Address, Env};

use crate::constants::{TTL_EXTEND_TO, TTL_THRESHOLD};
use crate::errors::SwapError;

// Variant order is the storage layout. Append new keys at the end only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    WrapToken,
    Router,
    Paused,
    Quoter,
    NativeToken,
    Initialized,
    Locked,
    FixedFeeTier,
}

/// Snapshot of the gateway configuration, read once per call and passed by
/// reference to the wrap, route and execute steps.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapperConfig {
    pub owner: Address,
    pub native_token: Address,
    pub wrap_token: Address,
    pub router: Address,
    pub quoter: Address,
    pub paused: bool,
    pub fixed_fee_tier: Option<u32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateRoute {
    pub fee_tier: u32,
    pub quoted_amount_out: i128,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<_, bool>(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn mark_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn read_address(env: &Env, key: &DataKey) -> Result<Address, SwapError> {
    env.storage()
        .instance()
        .get(key)
        .ok_or(SwapError::NotInitialized)
}

pub fn write_address(env: &Env, key: &DataKey, address: &Address) {
    env.storage().instance().set(key, address);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<_, bool>(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn fixed_fee_tier(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::FixedFeeTier)
}

pub fn set_fixed_fee_tier(env: &Env, fee_tier: Option<u32>) {
    match fee_tier {
        Some(fee) => env.storage().instance().set(&DataKey::FixedFeeTier, &fee),
        None => env.storage().instance().remove(&DataKey::FixedFeeTier),
    }
}

pub fn load_config(env: &Env) -> Result<SwapperConfig, SwapError> {
    if !is_initialized(env) {
        return Err(SwapError::NotInitialized);
    }
    Ok(SwapperConfig {
        owner: read_address(env, &DataKey::Owner)?,
        native_token: read_address(env, &DataKey::NativeToken)?,
        wrap_token: read_address(env, &DataKey::WrapToken)?,
        router: read_address(env, &DataKey::Router)?,
        quoter: read_address(env, &DataKey::Quoter)?,
        paused: is_paused(env),
        fixed_fee_tier: fixed_fee_tier(env),
    })
}

pub fn bump_instance_ttl(env: &Env) {
    if is_initialized(env) {
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}
