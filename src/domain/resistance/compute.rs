// src/domain/resistance/compute.rs
//
// Compute Engine - decodes an ordered band selection into a resistance record
//
// RULES:
// - Pure and stateless: one synchronous computation per call, no logging
// - Defaults apply only to absent optional bands, never to invalid ones
// - Any precondition violation aborts immediately with a DomainError

use super::entity::{BandCount, ResistanceResult};
use super::format::format_ohms;
use crate::domain::color::tables;
use crate::domain::{DomainError, DomainResult};

/// Selection tokens that mean "band not specified". The UI sends these for
/// untouched optional selectors; they are equivalent to an omitted band.
const PLACEHOLDERS: [&str; 2] = ["(padrão)", "(nenhum)"];

/// Lowercases every entry; blanks and placeholder tokens become None but
/// keep their slot, so position still determines each band's role.
fn normalize(colors: &[String]) -> Vec<Option<String>> {
    colors
        .iter()
        .map(|color| {
            let color = color.trim().to_lowercase();
            if color.is_empty() || PLACEHOLDERS.contains(&color.as_str()) {
                None
            } else {
                Some(color)
            }
        })
        .collect()
}

/// Decodes a 4-, 5- or 6-band color selection.
///
/// Band roles by position:
/// - 4 bands: digit, digit, multiplier, tolerance?
/// - 5 bands: digit, digit, digit, multiplier, tolerance?
/// - 6 bands: digit, digit, digit, multiplier, tolerance?, tempco?
///
/// Optional slots may be omitted or hold a placeholder; an absent tolerance
/// falls back to the documented default for the band count, an absent tempco
/// stays absent. A blank in a required slot counts as a missing band.
pub fn compute_resistance(bands: u8, colors: &[String]) -> DomainResult<ResistanceResult> {
    let band_count = BandCount::try_from(bands)?;
    let slots = normalize(colors);

    let required = band_count.required_bands();
    let required_colors: Vec<String> = slots
        .iter()
        .take(required)
        .filter_map(|slot| slot.clone())
        .collect();
    if required_colors.len() < required {
        return Err(DomainError::InsufficientBands {
            got: required_colors.len(),
            need: required,
        });
    }

    let digit_bands = &required_colors[..band_count.significant_digits()];
    let multiplier_color = &required_colors[band_count.significant_digits()];
    let tolerance_band = slots.get(required).and_then(|slot| slot.clone());
    let tempco_band = match band_count {
        BandCount::Six => slots.get(required + 1).and_then(|slot| slot.clone()),
        _ => None,
    };

    // Significant digits, composed in band order
    let mut digits = String::with_capacity(digit_bands.len());
    let mut base: u64 = 0;
    for color in digit_bands {
        let digit = tables::digit_of(color)?;
        digits.push(char::from(b'0' + digit));
        base = base * 10 + u64::from(digit);
    }

    let ohms = base as f64 * tables::multiplier_of(multiplier_color)?;

    let (tolerance_percent, tolerance_color) = match tolerance_band {
        Some(color) => (tables::tolerance_of(&color)?, color),
        None => {
            let (percent, color) = band_count.default_tolerance();
            (percent, color.to_string())
        }
    };

    let min = ohms * (1.0 - tolerance_percent / 100.0);
    let max = ohms * (1.0 + tolerance_percent / 100.0);

    // A supplied tempco color without a defined coefficient is reported as
    // unavailable, not rejected, as long as the color itself is known
    let (tempco_ppm, tempco_color) = match tempco_band {
        Some(color) => match tables::tempco_of(&color) {
            Ok(ppm) => (Some(ppm), Some(color)),
            Err(_) if tables::is_known_color(&color) => (None, Some(color)),
            Err(err) => return Err(err),
        },
        None => (None, None),
    };

    Ok(ResistanceResult {
        ohms,
        text_value: format_ohms(ohms),
        tolerance_percent,
        tolerance_color,
        min,
        max,
        min_text: format_ohms(min),
        max_text: format_ohms(max),
        digits,
        multiplier_color: multiplier_color.clone(),
        multiplier_exponent: tables::multiplier_exponent(multiplier_color)?,
        tempco_ppm,
        tempco_color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_four_band_with_default_tolerance() {
        let result =
            compute_resistance(4, &colors(&["amarelo", "violeta", "marrom"])).unwrap();

        assert_eq!(result.ohms, 470.0);
        assert_eq!(result.text_value, "470 Ω");
        assert_eq!(result.digits, "47");
        assert_eq!(result.multiplier_color, "marrom");
        assert_eq!(result.multiplier_exponent, 1);
        assert_eq!(result.tolerance_percent, 5.0);
        assert_eq!(result.tolerance_color, "ouro");
        assert!(close(result.min, 446.5));
        assert!(close(result.max, 493.5));
        assert!(result.tempco_ppm.is_none());
        assert!(result.tempco_color.is_none());
    }

    #[test]
    fn test_four_band_with_explicit_tolerance() {
        let result =
            compute_resistance(4, &colors(&["marrom", "preto", "laranja", "prata"])).unwrap();

        assert_eq!(result.ohms, 10_000.0);
        assert_eq!(result.text_value, "10.0 kΩ");
        assert_eq!(result.tolerance_percent, 10.0);
        assert_eq!(result.tolerance_color, "prata");
        assert!(close(result.min, 9_000.0));
        assert!(close(result.max, 11_000.0));
    }

    #[test]
    fn test_five_band() {
        let result = compute_resistance(
            5,
            &colors(&["marrom", "preto", "preto", "vermelho", "marrom"]),
        )
        .unwrap();

        assert_eq!(result.digits, "100");
        assert_eq!(result.ohms, 10_000.0);
        assert_eq!(result.text_value, "10.0 kΩ");
        assert_eq!(result.tolerance_percent, 1.0);
        assert_eq!(result.tolerance_color, "marrom");
        assert_eq!(result.multiplier_exponent, 2);
    }

    #[test]
    fn test_six_band_with_tempco_and_placeholder_tolerance() {
        let result = compute_resistance(
            6,
            &colors(&["marrom", "preto", "preto", "vermelho", "(padrão)", "vermelho"]),
        )
        .unwrap();

        // Tolerance placeholder falls back to the 5/6-band default
        assert_eq!(result.tolerance_percent, 1.0);
        assert_eq!(result.tolerance_color, "marrom");
        assert_eq!(result.tempco_ppm, Some(50));
        assert_eq!(result.tempco_color, Some("vermelho".to_string()));
    }

    #[test]
    fn test_six_band_without_tempco_stays_absent() {
        let result = compute_resistance(
            6,
            &colors(&["marrom", "preto", "preto", "vermelho", "ouro"]),
        )
        .unwrap();

        assert_eq!(result.tolerance_percent, 5.0);
        assert!(result.tempco_ppm.is_none());
        assert!(result.tempco_color.is_none());
    }

    #[test]
    fn test_six_band_tempco_without_coefficient_is_reported_unavailable() {
        // Preto is a valid color everywhere else but defines no coefficient
        let result = compute_resistance(
            6,
            &colors(&["marrom", "preto", "preto", "vermelho", "ouro", "preto"]),
        )
        .unwrap();

        assert_eq!(result.tempco_ppm, None);
        assert_eq!(result.tempco_color, Some("preto".to_string()));
    }

    #[test]
    fn test_six_band_unknown_tempco_color_fails() {
        let err = compute_resistance(
            6,
            &colors(&["marrom", "preto", "preto", "vermelho", "ouro", "rosa"]),
        )
        .unwrap_err();

        assert_eq!(err, DomainError::UnknownColor("rosa".to_string()));
    }

    #[test]
    fn test_case_and_whitespace_normalization() {
        let result =
            compute_resistance(4, &colors(&["  Amarelo ", "VIOLETA", "Marrom"])).unwrap();
        assert_eq!(result.ohms, 470.0);
    }

    #[test]
    fn test_blank_optional_bands_mean_absent() {
        let result = compute_resistance(
            4,
            &colors(&["amarelo", "violeta", "preto", "", "(nenhum)"]),
        )
        .unwrap();
        assert_eq!(result.tolerance_color, "ouro");
        assert_eq!(result.tolerance_percent, 5.0);
    }

    #[test]
    fn test_fractional_multiplier() {
        let result = compute_resistance(4, &colors(&["amarelo", "violeta", "ouro"])).unwrap();
        assert!(close(result.ohms, 4.7));
        assert_eq!(result.text_value, "4.70 Ω");
        assert_eq!(result.multiplier_exponent, -1);
    }

    #[test]
    fn test_unknown_digit_color_fails() {
        let err = compute_resistance(4, &colors(&["rosa", "preto", "preto"])).unwrap_err();
        assert_eq!(err, DomainError::UnknownColor("rosa".to_string()));
    }

    #[test]
    fn test_unknown_tolerance_color_fails() {
        let err =
            compute_resistance(4, &colors(&["amarelo", "violeta", "preto", "branco"]))
                .unwrap_err();
        assert_eq!(err, DomainError::UnknownColor("branco".to_string()));
    }

    #[test]
    fn test_invalid_band_count_fails() {
        let err = compute_resistance(7, &colors(&["preto", "preto", "preto", "preto"]))
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidBandCount(7));
    }

    #[test]
    fn test_insufficient_bands_fails() {
        let err = compute_resistance(4, &colors(&["amarelo", "violeta"])).unwrap_err();
        assert_eq!(err, DomainError::InsufficientBands { got: 2, need: 3 });
    }

    #[test]
    fn test_blank_required_band_counts_as_missing() {
        // A blank in a required slot is a missing band, not a shifted one
        let err =
            compute_resistance(5, &colors(&["marrom", "", "preto", "vermelho"])).unwrap_err();
        assert_eq!(err, DomainError::InsufficientBands { got: 3, need: 4 });
    }

    #[test]
    fn test_range_brackets_nominal_value() {
        let selections: Vec<(u8, Vec<String>)> = vec![
            (4, colors(&["amarelo", "violeta", "preto"])),
            (4, colors(&["marrom", "preto", "verde", "sem cor"])),
            (5, colors(&["vermelho", "vermelho", "preto", "marrom", "verde"])),
            (6, colors(&["laranja", "laranja", "preto", "preto", "cinza", "azul"])),
        ];
        for (bands, selection) in selections {
            let result = compute_resistance(bands, &selection).unwrap();
            assert!(result.min <= result.ohms, "min should not exceed nominal");
            assert!(result.ohms <= result.max, "max should not undercut nominal");
        }
    }
}
