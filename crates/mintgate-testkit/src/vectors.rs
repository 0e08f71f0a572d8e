//! Golden validator vectors.
//!
//! Known inputs with their expected outcomes, shared by every consumer
//! that needs to agree on the boundary grammar. A vector either must be
//! accepted (`expect_code: None`) or must fail with the given stable code.

use mintgate_core::{validate_amount, validate_hop, validate_id, validate_price, validate_secret};

/// Which validator a vector exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    Price,
    Amount,
    Hop,
    Secret,
    Id,
}

/// A known validator input with its expected outcome.
#[derive(Debug, Clone)]
pub struct ValidatorVector {
    pub name: &'static str,
    pub kind: VectorKind,
    pub input: &'static str,
    /// Expected error code, or `None` when the input must be accepted.
    pub expect_code: Option<&'static str>,
}

/// All golden vectors.
pub fn all_vectors() -> Vec<ValidatorVector> {
    use VectorKind::*;

    vec![
        // Prices.
        v("price_simple", Price, "3/4", None),
        v("price_zero_sides", Price, "0/0", None),
        v(
            "price_max_base",
            Price,
            "340282366920938463463374607431768211455/1",
            None,
        ),
        v("price_dash", Price, "3-4", Some("price_invalid")),
        v("price_negative", Price, "-1/2", Some("price_invalid")),
        v("price_missing_base", Price, "/5", Some("price_invalid")),
        v("price_missing_quote", Price, "5/", Some("price_invalid")),
        v(
            "price_base_overflow",
            Price,
            "340282366920938463463374607431768211456/1",
            Some("price_invalid"),
        ),
        v(
            "price_quote_overflow",
            Price,
            "1/340282366920938463463374607431768211456",
            Some("price_invalid"),
        ),
        // Amounts.
        v("amount_zero", Amount, "0", None),
        v(
            "amount_max",
            Amount,
            "340282366920938463463374607431768211455",
            None,
        ),
        v("amount_negative", Amount, "-1", Some("amount_invalid")),
        v(
            "amount_overflow",
            Amount,
            "340282366920938463463374607431768211456",
            Some("amount_invalid"),
        ),
        v("amount_not_a_number", Amount, "12x4", Some("amount_invalid")),
        // Hops.
        v("hop_min", Hop, "0", None),
        v("hop_max", Hop, "127", None),
        v("hop_negative", Hop, "-1", Some("hop_invalid")),
        v("hop_overflow", Hop, "128", Some("hop_invalid")),
        // Secrets.
        v("secret_16_bytes", Secret, "0123456789abcdef", None),
        v("secret_15_bytes", Secret, "0123456789abcde", Some("secret_invalid")),
        v(
            "secret_17_bytes",
            Secret,
            "0123456789abcdefg",
            Some("secret_invalid"),
        ),
        // Identifiers.
        v("id_offer", Id, "alice@example.org[offer_7f3a]", None),
        v(
            "id_dotted_host",
            Id,
            "kgodel@princetown.edu[transaction_abc123]",
            None,
        ),
        v("id_no_brackets", Id, "alice@example.org", Some("id_invalid")),
        v("id_no_at", Id, "aliceexample.org[offer_7f3a]", Some("id_invalid")),
        v("id_empty_token", Id, "alice@example.org[offer_]", Some("id_invalid")),
    ]
}

fn v(
    name: &'static str,
    kind: VectorKind,
    input: &'static str,
    expect_code: Option<&'static str>,
) -> ValidatorVector {
    ValidatorVector {
        name,
        kind,
        input,
        expect_code,
    }
}

/// Run the matching validator against one vector.
pub fn check_vector(vector: &ValidatorVector) -> Result<(), String> {
    let outcome: Option<&'static str> = match vector.kind {
        VectorKind::Price => validate_price(vector.input).err().map(|e| e.code()),
        VectorKind::Amount => validate_amount(vector.input).err().map(|e| e.code()),
        VectorKind::Hop => validate_hop(vector.input).err().map(|e| e.code()),
        VectorKind::Secret => validate_secret(vector.input).err().map(|e| e.code()),
        VectorKind::Id => validate_id(vector.input).err().map(|e| e.code()),
    };

    if outcome == vector.expect_code {
        Ok(())
    } else {
        Err(format!(
            "{}: input {:?} expected {:?}, got {:?}",
            vector.name, vector.input, vector.expect_code, outcome
        ))
    }
}

/// Check every golden vector, collecting all failures.
pub fn verify_all_vectors() -> Result<(), Vec<String>> {
    let failures: Vec<String> = all_vectors()
        .iter()
        .filter_map(|vector| check_vector(vector).err())
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}
