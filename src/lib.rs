// src/lib.rs
// ResistorHub - Resistor color-code calculator core
//
// Architecture:
// - Domain-centric: decoding and formatting live in domain/ (pure, stateless)
// - Explicit: lookups return tagged results, no implicit key errors
// - Application Layer: transport boundary (DTOs, commands, error translation)
// - Rendering, templating and routing are external collaborators that call
//   the application layer with parsed inputs and consume the result record

// ============================================================================
// SEALED FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain (Sealed)
// ============================================================================

pub use domain::{
    compute_resistance,
    digit_of,
    format_ohms,
    is_known_color,
    multiplier_exponent,
    multiplier_of,
    tempco_of,
    tolerance_of,
    validate_result,
    validate_tables,
    // Compute Engine
    BandCount,
    // Errors
    DomainError,
    DomainResult,
    ResistanceResult,
    // Color Tables
    DIGIT_COLORS,
    MULTIPLIER_COLORS,
    TEMPCO_COLORS,
    TOLERANCE_COLORS,
};

// ============================================================================
// PUBLIC API - Error Types (Sealed)
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Services (Sealed)
// ============================================================================

pub use services::{CalculateResistanceRequest, ColorPalette, ResistanceService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;
