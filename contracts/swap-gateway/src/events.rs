use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouterUpdated {
    pub old_router: Address,
    pub new_router: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WrapTokenUpdated {
    pub old_wrap_token: Address,
    pub new_wrap_token: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuoterUpdated {
    pub old_quoter: Address,
    pub new_quoter: Address,
}

/// `None` means best-tier selection across all candidates.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedFeeTierUpdated {
    pub old_fee_tier: Option<u32>,
    pub new_fee_tier: Option<u32>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    #[topic]
    pub previous_owner: Address,
    #[topic]
    pub new_owner: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Paused {
    #[topic]
    pub account: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unpaused {
    #[topic]
    pub account: Address,
}

/// Emitted once per completed swap with the amount actually delivered.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapCompleted {
    #[topic]
    pub target_token: Address,
    #[topic]
    pub caller: Address,
    pub amount_in: i128,
    pub amount_out: i128,
}
