#![no_std]

//! A single launchpad sale.
//!
//! The sale is deployed empty by the factory and then moves through
//! configuration, a registration window, consecutive purchase rounds and
//! portion vesting. Registration and purchases carry off-chain signatures
//! checked by [`signature`].

mod contract;
mod errors;
mod events;
mod interfaces;
mod schedule;
pub mod signature;
mod storage;
mod types;


pub use contract::{SaleContract, SaleContractClient};
pub use errors::SaleError;
pub use types::{
    Participation, Registration, Round, Sale, SaleParams, SalePhase, VestingInfo,
    MIN_PORTION_VESTING_PRECISION, ONE,
};
