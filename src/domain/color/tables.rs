// src/domain/color/tables.rs
//
// Color Tables - the IEC 60062 band color vocabulary
//
// RULES:
// - Keys are lowercase Portuguese color names; they are the wire contract
//   shared with query parameters and JSON payloads and must not be renamed
// - Every lookup is total: absence is a tagged DomainError, never a panic
// - Tables are fixed at compile time and never mutated

use crate::domain::{DomainError, DomainResult};

/// The ten digit colors, ordered by their digit value (0..=9).
pub const DIGIT_COLORS: [&str; 10] = [
    "preto", "marrom", "vermelho", "laranja", "amarelo", "verde", "azul", "violeta", "cinza",
    "branco",
];

/// Multiplier colors in UI order: the two fractional factors first, then the
/// digit colors reused as powers of ten.
pub const MULTIPLIER_COLORS: [&str; 12] = [
    "prata", "ouro", "preto", "marrom", "vermelho", "laranja", "amarelo", "verde", "azul",
    "violeta", "cinza", "branco",
];

/// Tolerance colors in UI order, widest tolerance first.
pub const TOLERANCE_COLORS: [&str; 9] = [
    "sem cor", "prata", "ouro", "marrom", "vermelho", "verde", "azul", "violeta", "cinza",
];

/// The only colors that carry a temperature coefficient.
pub const TEMPCO_COLORS: [&str; 6] = ["marrom", "vermelho", "laranja", "amarelo", "azul", "violeta"];

/// Digit value (0..=9) of a significant-digit band.
pub fn digit_of(name: &str) -> DomainResult<u8> {
    let digit = match name {
        "preto" => 0,
        "marrom" => 1,
        "vermelho" => 2,
        "laranja" => 3,
        "amarelo" => 4,
        "verde" => 5,
        "azul" => 6,
        "violeta" => 7,
        "cinza" => 8,
        "branco" => 9,
        _ => return Err(DomainError::UnknownColor(name.to_string())),
    };
    Ok(digit)
}

/// Decimal factor of a multiplier band.
/// Prata and ouro are the fractional factors; the digit colors map to 10^digit.
pub fn multiplier_of(name: &str) -> DomainResult<f64> {
    let factor = match name {
        "prata" => 0.01,
        "ouro" => 0.1,
        other => 10f64.powi(i32::from(digit_of(other)?)),
    };
    Ok(factor)
}

/// Base-10 exponent implied by a multiplier band.
/// Every multiplier factor is an exact power of ten, so the rounded log10
/// recovers the exponent losslessly (prata = -2, ouro = -1, branco = 9).
pub fn multiplier_exponent(name: &str) -> DomainResult<i32> {
    let factor = multiplier_of(name)?;
    Ok(factor.log10().round() as i32)
}

/// Tolerance percentage of a tolerance band.
/// "sem cor" is the sentinel for an unbanded ±20% resistor.
pub fn tolerance_of(name: &str) -> DomainResult<f64> {
    let percent = match name {
        "sem cor" => 20.0,
        "prata" => 10.0,
        "ouro" => 5.0,
        "marrom" => 1.0,
        "vermelho" => 2.0,
        "verde" => 0.5,
        "azul" => 0.25,
        "violeta" => 0.10,
        "cinza" => 0.05,
        _ => return Err(DomainError::UnknownColor(name.to_string())),
    };
    Ok(percent)
}

/// Temperature coefficient (ppm/K) of a tempco band.
/// Only six colors carry a coefficient; every other name is outside this
/// table, even when it is a valid color elsewhere.
pub fn tempco_of(name: &str) -> DomainResult<i32> {
    let ppm = match name {
        "marrom" => 100,
        "vermelho" => 50,
        "laranja" => 15,
        "amarelo" => 25,
        "azul" => 10,
        "violeta" => 5,
        _ => return Err(DomainError::UnknownColor(name.to_string())),
    };
    Ok(ppm)
}

/// Whether the name belongs to the overall band vocabulary (any table).
pub fn is_known_color(name: &str) -> bool {
    digit_of(name).is_ok() || matches!(name, "prata" | "ouro" | "sem cor")
}
