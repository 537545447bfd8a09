// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are the wire contract: field names match the original query
//   parameters and JSON response and must not be renamed
// - DTOs NEVER leak domain invariants
// - Conversion FROM domain records only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::ResistanceResult;
use crate::services::ColorPalette;

// ============================================================================
// CALCULATION DTOs
// ============================================================================

/// Raw calculation request as it arrives from the client: a band count and
/// up to six positional color parameters (c0..c5). The first three default
/// to "preto"; the optional tail may be omitted or carry placeholder tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResistanceDto {
    #[serde(default = "default_bands")]
    pub bands: u8,
    #[serde(default = "default_digit_color")]
    pub c0: String,
    #[serde(default = "default_digit_color")]
    pub c1: String,
    #[serde(default = "default_digit_color")]
    pub c2: String,
    #[serde(default)]
    pub c3: Option<String>,
    #[serde(default)]
    pub c4: Option<String>,
    #[serde(default)]
    pub c5: Option<String>,
}

fn default_bands() -> u8 {
    4
}

fn default_digit_color() -> String {
    "preto".to_string()
}

/// Decoded resistance record, JSON-shaped for clients and renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResistanceResultDto {
    pub ohms: f64,
    pub text_value: String,
    pub tolerance_percent: f64,
    pub tolerance_color: String,
    pub min: f64,
    pub max: f64,
    pub min_text: String,
    pub max_text: String,
    pub digits: String,
    pub multiplier_color: String,
    pub multiplier_exponent: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempco_ppm: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempco_color: Option<String>,
}

impl From<ResistanceResult> for ResistanceResultDto {
    fn from(result: ResistanceResult) -> Self {
        Self {
            ohms: result.ohms,
            text_value: result.text_value,
            tolerance_percent: result.tolerance_percent,
            tolerance_color: result.tolerance_color,
            min: result.min,
            max: result.max,
            min_text: result.min_text,
            max_text: result.max_text,
            digits: result.digits,
            multiplier_color: result.multiplier_color,
            multiplier_exponent: result.multiplier_exponent,
            tempco_ppm: result.tempco_ppm,
            tempco_color: result.tempco_color,
        }
    }
}

// ============================================================================
// PALETTE DTOs
// ============================================================================

/// Selector contents per band role, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPaletteDto {
    pub digit: Vec<String>,
    pub multiplier: Vec<String>,
    pub tolerance: Vec<String>,
    pub tempco: Vec<String>,
}

impl From<ColorPalette> for ColorPaletteDto {
    fn from(palette: ColorPalette) -> Self {
        Self {
            digit: palette.digit,
            multiplier: palette.multiplier,
            tolerance: palette.tolerance,
            tempco: palette.tempco,
        }
    }
}
