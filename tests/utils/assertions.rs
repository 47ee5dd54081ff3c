/// Custom assertions for contract testing

/// Assert a `try_*` client call failed with the given contract error
#[macro_export]
macro_rules! assert_contract_error {
    ($result:expr, $expected_error:expr) => {
        assert_eq!($result, Err(Ok($expected_error)), "Contract error mismatch")
    };
    ($result:expr, $expected_error:expr, $($msg:tt)*) => {
        assert_eq!($result, Err(Ok($expected_error)), $($msg)*)
    };
}
