use soroban_sdk::Env;

use crate::errors::SwapError;
use crate::storage::DataKey;

/// Scoped hold on the gateway's reentrancy flag.
///
/// The flag is set by [`ReentrancyGuard::acquire`] and cleared when the guard
/// is dropped, so every return path out of the guarded region releases it,
/// including early `?` returns. A trap aborts the invocation and the host
/// discards the flag together with every other write.
pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    pub fn acquire(env: &Env) -> Result<Self, SwapError> {
        if Self::is_held(env) {
            return Err(SwapError::Reentrancy);
        }
        env.storage().instance().set(&DataKey::Locked, &true);
        Ok(Self { env: env.clone() })
    }

    pub fn is_held(env: &Env) -> bool {
        env.storage()
            .instance()
            .get::<_, bool>(&DataKey::Locked)
            .unwrap_or(false)
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&DataKey::Locked);
    }
}
