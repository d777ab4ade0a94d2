/// Candidate pool fee tiers, in hundredths of a basis point, ascending.
/// Ties between equal quotes resolve to the earlier (cheaper) tier.
pub const FEE_TIERS: [u32; 3] = [500, 3_000, 10_000];

pub const TTL_THRESHOLD: u32 = 100_000;
pub const TTL_EXTEND_TO: u32 = 200_000;

/// When set at build time, only this address may call `initialize`.
#[cfg(not(test))]
pub const INIT_OWNER: Option<&str> = option_env!("SWAP_GATEWAY_INIT_OWNER");
#[cfg(test)]
pub const INIT_OWNER: Option<&str> = None;
