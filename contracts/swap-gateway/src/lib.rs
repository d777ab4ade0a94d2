#![no_std]

mod access;
mod constants;
mod contract;
mod errors;
mod events;
mod executor;
mod guard;
mod interfaces;
mod route;
mod storage;
mod wrap;

pub use crate::constants::FEE_TIERS;
pub use crate::contract::{SwapGateway, SwapGatewayClient};
pub use crate::errors::{ErrorKind, SwapError};
pub use crate::events::*;
pub use crate::interfaces::*;
pub use crate::storage::{CandidateRoute, SwapperConfig};
