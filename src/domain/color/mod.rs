// src/domain/color/mod.rs

pub mod invariants;
pub mod tables;

pub use invariants::validate_tables;
pub use tables::{
    digit_of, is_known_color, multiplier_exponent, multiplier_of, tempco_of, tolerance_of,
    DIGIT_COLORS, MULTIPLIER_COLORS, TEMPCO_COLORS, TOLERANCE_COLORS,
};
