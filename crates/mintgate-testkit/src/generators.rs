//! Proptest generators for property-based testing.

use proptest::prelude::*;

/// Generate a well-formed owner address, e.g. `alice@mint-a.test`.
pub fn owner() -> impl Strategy<Value = String> {
    ("[a-z0-9]{1,12}", "[a-z0-9\\-]{1,12}\\.[a-z]{2,4}")
        .prop_map(|(local, host)| format!("{local}@{host}"))
}

/// Generate a well-formed identifier of the given kind.
pub fn identifier(kind: &'static str) -> impl Strategy<Value = String> {
    (owner(), "[a-zA-Z0-9]{1,16}").prop_map(move |(owner, token)| {
        format!("{owner}[{kind}_{token}]")
    })
}

/// Generate a path of well-formed offer identifiers.
pub fn path(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(identifier("offer"), 0..=max_len)
}

/// Generate an in-bounds amount.
pub fn amount() -> impl Strategy<Value = u128> {
    any::<u128>()
}

/// Generate a well-formed price string with its expected sides.
pub fn price() -> impl Strategy<Value = (String, u128, u128)> {
    (any::<u128>(), any::<u128>()).prop_map(|(base, quote)| {
        (format!("{base}/{quote}"), base, quote)
    })
}

/// Generate an accepted hop value.
pub fn hop() -> impl Strategy<Value = i8> {
    0i8..=127
}

/// Generate a structurally valid secret: exactly 16 bytes, any printable
/// content.
pub fn secret() -> impl Strategy<Value = String> {
    "[ -~]{16}"
}
