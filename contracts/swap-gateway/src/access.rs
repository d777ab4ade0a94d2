use soroban_sdk::{log, Address, Env};

use crate::errors::SwapError;
use crate::events::{Paused, Unpaused};
use crate::storage::{is_paused, read_address, set_paused, DataKey};

/// Fails unless `caller` is the stored owner and has authorized the call.
/// Checked before any admin mutation.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), SwapError> {
    let owner = read_address(env, &DataKey::Owner)?;
    if owner != *caller {
        log!(env, "unauthorized caller", caller.clone());
        return Err(SwapError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

pub fn require_active(env: &Env) -> Result<(), SwapError> {
    if is_paused(env) {
        return Err(SwapError::Paused);
    }
    Ok(())
}

pub fn pause(env: &Env, owner: &Address) -> Result<(), SwapError> {
    require_owner(env, owner)?;
    require_active(env)?;
    set_paused(env, true);
    Paused {
        account: owner.clone(),
    }
    .publish(env);
    Ok(())
}

pub fn unpause(env: &Env, owner: &Address) -> Result<(), SwapError> {
    require_owner(env, owner)?;
    if !is_paused(env) {
        return Err(SwapError::NotPaused);
    }
    set_paused(env, false);
    Unpaused {
        account: owner.clone(),
    }
    .publish(env);
    Ok(())
}
