#![cfg(any(test, feature = "testutils"))]
extern crate std;

use soroban_sdk::{
    testutils::{AuthorizedFunction, AuthorizedInvocation, Events},
    vec, Address, Env, IntoVal, Symbol, Val, Vec,
};

/// Asserts invocation auth of a contract from a single caller.
pub fn assert_invocation<T>(
    env: &Env,
    caller: &Address,
    contract_id: &Address,
    function_name: &str,
    args: T,
) where
    T: IntoVal<Env, Vec<Val>>,
{
    assert_eq!(
        env.auths(),
        std::vec![(
            caller.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    contract_id.clone(),
                    Symbol::new(env, function_name),
                    args.into_val(env),
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
}

/// Asserts that the event at `event_index` in the environment's emitted events is the expected event.
/// If `event_index` is negative, the length of events will be added to it, i.e it'll be indexed from the end.
pub fn assert_emitted_event<U, V>(
    env: &Env,
    mut event_index: i32,
    contract_id: &Address,
    topics: U,
    data: V,
) where
    U: IntoVal<Env, Vec<Val>>,
    V: IntoVal<Env, Val>,
{
    let events = env.events().all();
    if event_index.is_negative() {
        event_index += events.len() as i32;
    }

    assert!(
        event_index < events.len() as i32,
        "event {} not found, only {} events were emitted",
        event_index + 1,
        events.len()
    );

    let event = events.get(event_index as u32).unwrap();

    assert_eq!(event.0, contract_id.clone());
    assert_eq!(event.1, topics.into_val(env));
    assert_eq!(vec![env, event.2], vec![env, data.into_val(env)]);
}

pub fn assert_last_emitted_event<U, V>(env: &Env, contract_id: &Address, topics: U, data: V)
where
    U: IntoVal<Env, Vec<Val>>,
    V: IntoVal<Env, Val>,
{
    assert_emitted_event(env, -1, contract_id, topics, data);
}

/// Asserts that a client `try_` invocation succeeds when authorized by `caller` alone.
#[macro_export]
macro_rules! assert_invoke_auth_ok {
    ($caller:expr, $client:ident . $method:ident ( $($arg:expr),* $(,)? )) => {{
        use soroban_sdk::IntoVal as _;

        let mock_auth = soroban_sdk::testutils::MockAuth {
            address: &$caller,
            invoke: &soroban_sdk::testutils::MockAuthInvoke {
                contract: &$client.address,
                fn_name: stringify!($method).trim_start_matches("try_"),
                args: ($($arg.clone(),)*).into_val(&$client.env),
                sub_invokes: &[],
            },
        };

        match $client.mock_auths(&[mock_auth]).$method($($arg),*) {
            std::result::Result::Ok(_) => (),
            std::result::Result::Err(err) => {
                panic!(
                    "Expected {} to succeed for caller, got {:?}",
                    stringify!($method),
                    err
                )
            }
        }
    }};
}

/// Asserts that a client `try_` invocation fails auth when authorized by `caller` alone.
#[macro_export]
macro_rules! assert_invoke_auth_err {
    ($caller:expr, $client:ident . $method:ident ( $($arg:expr),* $(,)? )) => {{
        use soroban_sdk::IntoVal as _;

        let mock_auth = soroban_sdk::testutils::MockAuth {
            address: &$caller,
            invoke: &soroban_sdk::testutils::MockAuthInvoke {
                contract: &$client.address,
                fn_name: stringify!($method).trim_start_matches("try_"),
                args: ($($arg.clone(),)*).into_val(&$client.env),
                sub_invokes: &[],
            },
        };

        match $client.mock_auths(&[mock_auth]).$method($($arg),*) {
            std::result::Result::Err(_) => (),
            std::result::Result::Ok(v) => {
                panic!(
                    "Expected auth failure calling {}, got {:?}",
                    stringify!($method),
                    v
                )
            }
        }
    }};
}
