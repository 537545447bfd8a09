// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod color;
pub mod resistance;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Color Tables
pub use color::{
    digit_of, is_known_color, multiplier_exponent, multiplier_of, tempco_of, tolerance_of,
    validate_tables, DIGIT_COLORS, MULTIPLIER_COLORS, TEMPCO_COLORS, TOLERANCE_COLORS,
};

// Resistance Domain
pub use resistance::{
    compute_resistance, format_ohms, validate_result, BandCount, ResistanceResult,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of the color-code contract and invariants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Invalid band count: {0} (expected 4, 5 or 6)")]
    InvalidBandCount(u8),

    #[error("Insufficient bands: got {got}, need at least {need}")]
    InsufficientBands { got: usize, need: usize },

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
