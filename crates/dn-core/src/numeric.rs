use crate::DnError;

/// Floating point type used throughout the system
pub type Real = f64;

/// Check that a snapping tolerance is usable.
///
/// Zero is legal (exact-match clustering only); negative or non-finite
/// values are rejected before any geometric work starts.
pub fn validate_tolerance(tolerance: Real) -> Result<Real, DnError> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err(DnError::InvalidTolerance { value: tolerance })
    }
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, DnError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DnError::NonFinite { what, value: v })
    }
}
