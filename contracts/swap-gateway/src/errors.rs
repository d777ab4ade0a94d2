use soroban_sdk::contracterror;

/// Failure reasons surfaced to callers. Codes are part of the public ABI and
/// must never be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SwapError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    UnexpectedOwner = 4,
    Paused = 5,
    NotPaused = 6,
    Reentrancy = 7,
    InvalidAmount = 8,
    InvalidTargetToken = 9,
    InvalidFeeTier = 10,
    NoRoute = 11,
    WrapFailed = 12,
    InvalidWrappedAmountReceived = 13,
    RouterSwapFailed = 14,
    InvalidTargetAmountReceived = 15,
    InvalidWrappedAmountSpent = 16,
    SlippageExceeded = 17,
    AllowanceFailed = 18,
    BalanceUnavailable = 19,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Authorization,
    Operational,
    Reentrancy,
    Validation,
    /// An external contract reported or delivered an amount other than the
    /// one it claimed.
    Integrity,
    Slippage,
}

impl SwapError {
    /// `RouterSwapFailed` is an integrity failure, not slippage: the router is
    /// only called once a positive quote at or above the caller's minimum has
    /// been observed in the same invocation.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SwapError::Unauthorized | SwapError::UnexpectedOwner => ErrorKind::Authorization,
            SwapError::NotInitialized | SwapError::Paused | SwapError::NotPaused => {
                ErrorKind::Operational
            }
            SwapError::Reentrancy => ErrorKind::Reentrancy,
            SwapError::AlreadyInitialized
            | SwapError::InvalidAmount
            | SwapError::InvalidTargetToken
            | SwapError::InvalidFeeTier
            | SwapError::NoRoute => ErrorKind::Validation,
            SwapError::WrapFailed
            | SwapError::InvalidWrappedAmountReceived
            | SwapError::RouterSwapFailed
            | SwapError::InvalidTargetAmountReceived
            | SwapError::InvalidWrappedAmountSpent
            | SwapError::AllowanceFailed
            | SwapError::BalanceUnavailable => ErrorKind::Integrity,
            SwapError::SlippageExceeded => ErrorKind::Slippage,
        }
    }
}
