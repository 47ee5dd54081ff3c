use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StakingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    SaleNotRecognised = 3,
    SaleAlreadyRegistered = 4,
    InvalidStakingRoundId = 5,
    NotAdmin = 6,
}
