//! Catalog-specific error types.
//!
//! All of these are fatal: they indicate a data-consistency problem that
//! must abort the load, so every variant carries the offending
//! identifier or field.

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate {kind} identifier '{identifier}' with conflicting content")]
    DuplicateIdentifier {
        identifier: String,
        kind: &'static str,
    },

    #[error("Unknown {kind} identifier '{identifier}'")]
    UnknownIdentifier {
        identifier: String,
        kind: &'static str,
    },

    #[error("Structural invariant violated for '{identifier}': {what}")]
    StructuralInvariant { identifier: String, what: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: f64,
        reason: &'static str,
    },
}

pub(crate) fn check_positive_finite(
    field: impl Into<String>,
    value: f64,
) -> Result<(), CatalogError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CatalogError::InvalidValue {
            field: field.into(),
            value,
            reason: "must be positive and finite",
        });
    }
    Ok(())
}

pub(crate) fn check_finite(field: impl Into<String>, value: f64) -> Result<(), CatalogError> {
    if !value.is_finite() {
        return Err(CatalogError::InvalidValue {
            field: field.into(),
            value,
            reason: "must be finite",
        });
    }
    Ok(())
}
