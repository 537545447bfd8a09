// src/domain/resistance/invariants.rs

use super::entity::ResistanceResult;
use crate::domain::{DomainError, DomainResult};

/// Validates all ResistanceResult invariants
/// These are the absolute rules that must hold for a decoded record to be valid
pub fn validate_result(result: &ResistanceResult) -> DomainResult<()> {
    validate_nonnegative(result)?;
    validate_range(result)?;
    validate_digits(result)?;
    Ok(())
}

/// Resistance and tolerance are never negative
fn validate_nonnegative(result: &ResistanceResult) -> DomainResult<()> {
    if result.ohms < 0.0 {
        return Err(DomainError::InvariantViolation(format!(
            "Nominal resistance cannot be negative: {}",
            result.ohms
        )));
    }
    if result.tolerance_percent < 0.0 {
        return Err(DomainError::InvariantViolation(format!(
            "Tolerance cannot be negative: {}",
            result.tolerance_percent
        )));
    }
    Ok(())
}

/// The tolerance range always brackets the nominal value
fn validate_range(result: &ResistanceResult) -> DomainResult<()> {
    if result.min > result.ohms || result.ohms > result.max {
        return Err(DomainError::InvariantViolation(format!(
            "Range [{}, {}] does not bracket nominal {}",
            result.min, result.max, result.ohms
        )));
    }
    Ok(())
}

/// The digit string holds 2 or 3 decimal digits
fn validate_digits(result: &ResistanceResult) -> DomainResult<()> {
    let len = result.digits.len();
    if !(2..=3).contains(&len) || !result.digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::InvariantViolation(format!(
            "Malformed digit string: {:?}",
            result.digits
        )));
    }
    Ok(())
}

/// Invariants that must hold true for ResistanceResult:
///
/// 1. ohms >= 0 and tolerance_percent >= 0
/// 2. min <= ohms <= max
/// 3. digits is 2 or 3 decimal digits matching the band count
/// 4. tempco fields are populated together or absent together, except a
///    supplied color with no defined coefficient (ppm absent, color kept)
/// 5. Records are immutable once constructed
