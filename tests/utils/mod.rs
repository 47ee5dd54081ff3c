/// Testing utilities for the launchpad contracts
pub mod assertions;
pub mod fixtures;
pub mod signing;

pub use fixtures::*;
pub use signing::*;

/// Common test constants
pub mod constants {
    pub const ONE: i128 = sale::ONE;
    pub const T0: u64 = 10_000;
    pub const SALE_END: u64 = T0 + 1_000;
    pub const UNLOCK: u64 = T0 + 1_500;
    pub const REG_START: u64 = T0 + 100;
    pub const REG_END: u64 = T0 + 400;
    pub const ROUND_1: u64 = T0 + 500;
    pub const ROUND_2: u64 = T0 + 700;
    pub const ROUND_3: u64 = T0 + 900;
    pub const PRICE: i128 = 10;
    pub const TO_SELL: i128 = 20_000 * ONE;
    pub const DEPOSIT: i128 = 20;
    pub const PRECISION: u32 = 1_000;
    pub const USER_FUNDS: i128 = 10_000;
}
