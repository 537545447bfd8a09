// src/domain/resistance/entity.rs

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Number of color bands on the resistor body.
/// Determines how many significant digits precede the multiplier band and
/// which optional bands may follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandCount {
    Four,
    Five,
    Six,
}

impl BandCount {
    /// Significant digits encoded before the multiplier band
    pub fn significant_digits(&self) -> usize {
        match self {
            BandCount::Four => 2,
            BandCount::Five | BandCount::Six => 3,
        }
    }

    /// Positional bands that must be present: digits plus the multiplier
    pub fn required_bands(&self) -> usize {
        self.significant_digits() + 1
    }

    /// Documented tolerance applied when the tolerance band is absent:
    /// ±5% (ouro) for 4 bands, ±1% (marrom) for 5 and 6 bands
    pub fn default_tolerance(&self) -> (f64, &'static str) {
        match self {
            BandCount::Four => (5.0, "ouro"),
            BandCount::Five | BandCount::Six => (1.0, "marrom"),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            BandCount::Four => 4,
            BandCount::Five => 5,
            BandCount::Six => 6,
        }
    }
}

impl TryFrom<u8> for BandCount {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(BandCount::Four),
            5 => Ok(BandCount::Five),
            6 => Ok(BandCount::Six),
            other => Err(DomainError::InvalidBandCount(other)),
        }
    }
}

impl std::fmt::Display for BandCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Decoded resistance record for one band selection.
/// Constructed fresh per computation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistanceResult {
    /// Nominal resistance in ohms
    pub ohms: f64,

    /// Nominal value formatted with a metric-prefix unit
    pub text_value: String,

    /// Tolerance as a percentage of the nominal value
    pub tolerance_percent: f64,

    /// Color encoding the tolerance (the documented default when absent)
    pub tolerance_color: String,

    /// Lower bound of the tolerance range, in ohms
    pub min: f64,

    /// Upper bound of the tolerance range, in ohms
    pub max: f64,

    /// Formatted lower bound
    pub min_text: String,

    /// Formatted upper bound
    pub max_text: String,

    /// Concatenated significant digits (e.g. "47"), kept for diagnostics
    /// and band rendering
    pub digits: String,

    /// Color of the multiplier band
    pub multiplier_color: String,

    /// Base-10 exponent implied by the multiplier factor
    pub multiplier_exponent: i32,

    /// Temperature coefficient in ppm/K. Only populated for 6-band
    /// selections whose tempco color defines a coefficient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempco_ppm: Option<i32>,

    /// Color of the tempco band, when one was supplied (6 bands only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempco_color: Option<String>,
}
