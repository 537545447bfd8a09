// src/application/commands/resistance_commands.rs
//
// Resistance Command Handlers
//
// RULES:
// - Accept DTOs
// - Call sealed services
// - Return DTOs
// - Never contain business logic

use crate::application::{
    dto::{CalculateResistanceDto, ColorPaletteDto, ResistanceResultDto},
    error_handling::ToErrorResponse,
    state::AppState,
};
use crate::services::CalculateResistanceRequest;

/// Decode a band selection into a resistance record.
/// Assembles the positional color list from the c0..c5 parameters: the
/// optional tail entries are only consumed when the band count reaches their
/// position, so a leftover c5 from a previous 6-band request cannot leak
/// into a 4-band one.
pub fn calculate_resistance(
    dto: CalculateResistanceDto,
    state: &AppState,
) -> Result<ResistanceResultDto, String> {
    let mut colors = vec![dto.c0, dto.c1, dto.c2];
    if dto.bands >= 4 {
        if let Some(c3) = dto.c3 {
            colors.push(c3);
        }
    }
    if dto.bands >= 5 {
        if let Some(c4) = dto.c4 {
            colors.push(c4);
        }
    }
    if dto.bands == 6 {
        if let Some(c5) = dto.c5 {
            colors.push(c5);
        }
    }

    log::debug!("calculate_resistance: bands={} colors={:?}", dto.bands, colors);

    let result = state
        .resistance_service
        .calculate(CalculateResistanceRequest {
            bands: dto.bands,
            colors,
        })
        .to_error_response()?;

    Ok(ResistanceResultDto::from(result))
}

/// Color vocabulary per band role, for populating selectors
pub fn get_color_palette(state: &AppState) -> Result<ColorPaletteDto, String> {
    Ok(ColorPaletteDto::from(state.resistance_service.palette()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(bands: u8, slots: [&str; 6]) -> CalculateResistanceDto {
        let opt = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };
        CalculateResistanceDto {
            bands,
            c0: slots[0].to_string(),
            c1: slots[1].to_string(),
            c2: slots[2].to_string(),
            c3: opt(slots[3]),
            c4: opt(slots[4]),
            c5: opt(slots[5]),
        }
    }

    #[test]
    fn test_four_band_request() {
        let state = AppState::new();
        let result = calculate_resistance(
            dto(4, ["amarelo", "violeta", "marrom", "ouro", "", ""]),
            &state,
        )
        .unwrap();

        assert_eq!(result.ohms, 470.0);
        assert_eq!(result.text_value, "470 Ω");
        assert_eq!(result.tolerance_percent, 5.0);
    }

    #[test]
    fn test_stale_tail_parameters_are_ignored() {
        // A 4-band request with leftover c4/c5 selections from a previous
        // 6-band interaction must not see them
        let state = AppState::new();
        let result = calculate_resistance(
            dto(4, ["amarelo", "violeta", "marrom", "", "verde", "vermelho"]),
            &state,
        )
        .unwrap();

        assert_eq!(result.tolerance_color, "ouro");
        assert!(result.tempco_ppm.is_none());
    }

    #[test]
    fn test_six_band_request_with_placeholders() {
        let state = AppState::new();
        let result = calculate_resistance(
            dto(
                6,
                ["marrom", "preto", "preto", "vermelho", "(padrão)", "vermelho"],
            ),
            &state,
        )
        .unwrap();

        assert_eq!(result.text_value, "10.0 kΩ");
        assert_eq!(result.tolerance_color, "marrom");
        assert_eq!(result.tempco_ppm, Some(50));
    }

    #[test]
    fn test_error_payload_is_client_visible_json() {
        let state = AppState::new();
        let err = calculate_resistance(
            dto(4, ["rosa", "preto", "preto", "", "", ""]),
            &state,
        )
        .unwrap_err();

        assert!(err.contains("\"error_type\":\"validation\""));
        assert!(err.contains("Unknown color: rosa"));
    }

    #[test]
    fn test_palette_command() {
        let state = AppState::new();
        let palette = get_color_palette(&state).unwrap();
        assert_eq!(palette.digit.len(), 10);
        assert_eq!(palette.multiplier[1], "ouro");
    }
}
