// src/services/resistance_service.rs
use crate::domain::color::{DIGIT_COLORS, MULTIPLIER_COLORS, TEMPCO_COLORS, TOLERANCE_COLORS};
use crate::domain::resistance::{compute_resistance, validate_result, ResistanceResult};
use crate::error::AppResult;
use serde::{Deserialize, Serialize};

/// Input for one decoding request: the band count and the raw, ordered
/// color selection as assembled by the request layer.
#[derive(Debug, Clone)]
pub struct CalculateResistanceRequest {
    pub bands: u8,
    pub colors: Vec<String>,
}

/// Role-ordered color lists for populating band selectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPalette {
    pub digit: Vec<String>,
    pub multiplier: Vec<String>,
    pub tolerance: Vec<String>,
    pub tempco: Vec<String>,
}

/// Stateless decoding service. The color tables it consults are compile-time
/// constants, so any number of calls may run concurrently.
pub struct ResistanceService;

impl ResistanceService {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a band selection and checks the result invariants.
    pub fn calculate(&self, request: CalculateResistanceRequest) -> AppResult<ResistanceResult> {
        let result = compute_resistance(request.bands, &request.colors)?;
        validate_result(&result)?;
        Ok(result)
    }

    /// Color vocabulary per band role, in selector display order.
    pub fn palette(&self) -> ColorPalette {
        ColorPalette {
            digit: to_owned(&DIGIT_COLORS),
            multiplier: to_owned(&MULTIPLIER_COLORS),
            tolerance: to_owned(&TOLERANCE_COLORS),
            tempco: to_owned(&TEMPCO_COLORS),
        }
    }
}

impl Default for ResistanceService {
    fn default() -> Self {
        Self::new()
    }
}

fn to_owned(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|color| color.to_string()).collect()
}
