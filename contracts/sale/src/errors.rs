use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    // Lifecycle
    AlreadyInitialized = 1,
    NotInitialized = 2,
    SaleAlreadyCreated = 3,
    SaleNotCreated = 4,

    // Authorization
    NotAdmin = 10,
    NotSaleOwner = 11,
    InvalidSignature = 12,
    InvalidSignatureLength = 13,
    InvalidSignatureFormat = 14,

    // Configuration
    InvalidSaleParams = 20,
    InvalidVestingPrecision = 21,
    InvalidStakingRoundId = 22,
    RegistrationAlreadySet = 23,
    RegistrationNotSet = 24,
    InvalidRegistrationTime = 25,
    RegistrationOverlapsRounds = 26,
    RoundsAlreadySet = 27,
    RoundsNotSet = 28,
    InvalidRoundsInput = 29,
    ArrayLengthMismatch = 30,
    InvalidCap = 31,
    InvalidPrice = 32,
    InvalidTimeShift = 33,
    FirstRoundStarted = 34,
    RoundNotFound = 35,
    FactoryRejected = 36,

    // Deposit and registration
    TokensAlreadyDeposited = 40,
    DepositTooLate = 41,
    RegistrationClosed = 42,
    InvalidRoundId = 43,
    DepositMismatch = 44,
    AlreadyRegistered = 45,

    // Participation
    WrongRound = 50,
    AlreadyParticipated = 51,
    TokensNotDeposited = 52,
    ExceedsMaxParticipation = 53,
    ExceedsAllowance = 54,
    ZeroPurchase = 55,
    RoundCapExceeded = 56,
    SoldOut = 57,

    // Vesting and settlement
    VestingAlreadySet = 60,
    VestingNotSet = 61,
    InvalidVestingParams = 62,
    PortionNotFound = 63,
    TokensNotUnlocked = 64,
    PortionAlreadyWithdrawn = 65,
    SaleNotEnded = 66,
    AlreadyWithdrawn = 67,

    ArithmeticOverflow = 70,
}
