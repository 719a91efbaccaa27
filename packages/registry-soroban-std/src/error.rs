/// Return with an error if a condition is not met.
///
/// Simplifies the pattern of checking for a condition and returning with an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr $(,)?) => {
        if !$cond {
            return Err($e);
        }
    };
}

/// Assert that an [`Option`] is [`Some`]
///
/// If the provided expression evaluates to [`Some`], then the
/// macro returns the value contained within the [`Some`]. If
/// the [`Option`] is [`None`] then the macro will [`panic`]
/// with a message that includes the expression
#[macro_export]
macro_rules! assert_some {
    ( $x:expr ) => {
        match $x {
            core::option::Option::Some(s) => s,
            core::option::Option::None => {
                panic!("Expected value when calling {}, got None", stringify!($x));
            }
        }
    };
}

/// Assert that a client `try_` invocation failed with the given contract error.
///
/// Auth failures and malformed error codes surface as invoke errors and are
/// reported separately from a mismatched contract error.
#[macro_export]
macro_rules! assert_contract_err {
    ( $x:expr, $e:expr ) => {
        match $x {
            std::result::Result::Err(std::result::Result::Ok(err)) => {
                if err != $e {
                    panic!("Expected error {}, got {:?} instead", stringify!($e), err)
                }
            }
            std::result::Result::Err(std::result::Result::Err(err)) => {
                panic!(
                    "Expected contract error {} when calling {}, got invoke error {:?}",
                    stringify!($e),
                    stringify!($x),
                    err
                )
            }
            std::result::Result::Ok(v) => {
                panic!(
                    "Expected error {} when calling {}, got {:?} instead",
                    stringify!($e),
                    stringify!($x),
                    v
                );
            }
        }
    };
}
