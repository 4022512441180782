//! # Quantity Parsing
//!
//! Validates Kubernetes resource quantity strings ("256Mi", "1.5Gi", "500m", "1e3").
//!
//! Grammar:
//!
//! ```text
//! <quantity> ::= <sign>? <number> <suffix>
//! <number>   ::= <digits> | <digits>.<digits>? | .<digits>
//! <suffix>   ::= "" | Ki | Mi | Gi | Ti | Pi | Ei | m | k | M | G | T | P | E | (e|E)<sign>?<digits>
//! ```

use std::sync::LazyLock;

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use regex::Regex;
use thiserror::Error;

// Exponent is tried before the bare decimal suffixes so "1E3" is 1000, not an error
static QUANTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[KMGTPE]i|[eE][+-]?\d+|[mkMGTPE])?$")
        .expect("Failed to compile QUANTITY_PATTERN - this should never happen")
});

/// Errors returned by [`parse_quantity`]
#[derive(Debug, Error)]
pub enum QuantityError {
    #[error("quantity cannot be empty")]
    Empty,
    #[error("quantity '{0}' must match the Kubernetes quantity format (e.g. '256Mi', '1Gi', '500m')")]
    InvalidFormat(String),
}

/// Parse a Kubernetes quantity string
///
/// Whitespace is not trimmed: `" 1Gi"` is rejected, as the API server would.
pub fn parse_quantity(raw: &str) -> Result<Quantity, QuantityError> {
    if raw.is_empty() {
        return Err(QuantityError::Empty);
    }

    if !QUANTITY_PATTERN.is_match(raw) {
        return Err(QuantityError::InvalidFormat(raw.to_string()));
    }

    Ok(Quantity(raw.to_string()))
}

/// Parse `raw`, falling back to `fallback` when it is empty or malformed
///
/// Fallbacks are compiled-in constants and are expected to be valid; one that
/// is not is returned verbatim.
pub fn resolve_quantity(raw: &str, fallback: &str) -> Quantity {
    match parse_quantity(raw) {
        Ok(quantity) => quantity,
        Err(e) => {
            tracing::debug!(
                value = raw,
                fallback,
                error = %e,
                "Invalid quantity, using fallback"
            );
            parse_quantity(fallback).unwrap_or_else(|_| Quantity(fallback.to_string()))
        }
    }
}
