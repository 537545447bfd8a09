// src/domain/color/invariants.rs

use super::tables::{
    digit_of, multiplier_exponent, multiplier_of, tempco_of, tolerance_of, DIGIT_COLORS,
    MULTIPLIER_COLORS, TEMPCO_COLORS, TOLERANCE_COLORS,
};
use crate::domain::{DomainError, DomainResult};

/// Validates the consistency of the color tables against each other.
/// The tables are compile-time constants, so this only needs to run in tests
/// or at startup sanity checks.
pub fn validate_tables() -> DomainResult<()> {
    validate_digit_multiplier_alignment()?;
    validate_multiplier_factors()?;
    validate_tolerance_vocabulary()?;
    validate_tempco_vocabulary()?;
    Ok(())
}

/// Every digit color doubles as a power-of-ten multiplier: 10^digit
fn validate_digit_multiplier_alignment() -> DomainResult<()> {
    for color in DIGIT_COLORS {
        let digit = digit_of(color)?;
        let exponent = multiplier_exponent(color)?;
        if exponent != i32::from(digit) {
            return Err(DomainError::InvariantViolation(format!(
                "Digit color {} maps to exponent {} instead of {}",
                color, exponent, digit
            )));
        }
    }
    Ok(())
}

/// Every multiplier factor is an exact power of ten scaled by at most 1/100
fn validate_multiplier_factors() -> DomainResult<()> {
    for color in MULTIPLIER_COLORS {
        let factor = multiplier_of(color)?;
        let exponent = multiplier_exponent(color)?;
        if !(-2..=9).contains(&exponent) {
            return Err(DomainError::InvariantViolation(format!(
                "Multiplier exponent for {} out of range: {}",
                color, exponent
            )));
        }
        let reconstructed = 10f64.powi(exponent);
        if (factor - reconstructed).abs() > factor * 1e-12 {
            return Err(DomainError::InvariantViolation(format!(
                "Multiplier for {} is not a power of ten: {}",
                color, factor
            )));
        }
    }
    Ok(())
}

/// Every tolerance entry is a positive percentage
fn validate_tolerance_vocabulary() -> DomainResult<()> {
    for color in TOLERANCE_COLORS {
        let percent = tolerance_of(color)?;
        if percent <= 0.0 {
            return Err(DomainError::InvariantViolation(format!(
                "Tolerance for {} must be positive, got {}",
                color, percent
            )));
        }
    }
    Ok(())
}

/// Tempco colors are a subset of the digit colors with positive coefficients
fn validate_tempco_vocabulary() -> DomainResult<()> {
    for color in TEMPCO_COLORS {
        if digit_of(color).is_err() {
            return Err(DomainError::InvariantViolation(format!(
                "Tempco color {} is not a digit color",
                color
            )));
        }
        let ppm = tempco_of(color)?;
        if ppm <= 0 {
            return Err(DomainError::InvariantViolation(format!(
                "Tempco for {} must be positive, got {}",
                color, ppm
            )));
        }
    }
    Ok(())
}

/// Invariants that must hold true for the color tables:
///
/// 1. Every key is a lowercase name from the closed vocabulary
/// 2. Digit values cover 0..=9 exactly once, in table order
/// 3. Digit colors reused as multipliers mean 10^digit
/// 4. Prata and ouro are the only fractional multipliers (1/100, 1/10)
/// 5. Tolerances are positive percentages; "sem cor" is the 20% sentinel
/// 6. Only six colors carry a temperature coefficient

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_consistent() {
        assert!(validate_tables().is_ok());
    }

    #[test]
    fn test_digit_colors_are_distinct() {
        for (i, a) in DIGIT_COLORS.iter().enumerate() {
            for b in &DIGIT_COLORS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
