use client_registry::Credentials;
use proptest::prelude::*;

/// Strategy for generating registry names
///
/// Includes the empty string: names are literal keys, never rejected.
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{0,16}"
}

/// Strategy for generating endpoint hostnames
pub fn endpoint_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,11}\\.example\\.com"
}

/// Strategy for generating Credentials instances
pub fn credentials_strategy() -> impl Strategy<Value = Credentials> {
    (
        endpoint_strategy(),
        prop::option::of(1024u16..49152),
        "[a-z]{1,12}",
        "[a-zA-Z0-9]{8,24}",
        any::<bool>(),
    )
        .prop_map(|(endpoint, port, username, password, insecure)| Credentials {
            endpoint,
            port,
            username,
            password,
            insecure,
        })
}
