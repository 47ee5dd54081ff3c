use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAdmin = 3,
    ContractNotEligible = 4,
    SaleOwnerAlreadySet = 5,
    TokenAlreadySet = 6,
    InvalidPagination = 7,
}
