// src/domain/resistance/format.rs

/// Metric-prefix units, largest first. Ω is the fallback for values below
/// every threshold, including 0 and fractional ohms.
const UNITS: [(&str, f64); 4] = [("GΩ", 1e9), ("MΩ", 1e6), ("kΩ", 1e3), ("Ω", 1.0)];

/// Renders a nonnegative ohm value as a human-readable string.
///
/// The unit is the largest whose factor the value reaches; the scaled value
/// picks its precision tier from magnitude: >= 100 no decimals, >= 10 one
/// decimal, otherwise two. Number and unit are joined by a single space.
pub fn format_ohms(value: f64) -> String {
    let (unit, factor) = UNITS
        .iter()
        .copied()
        .find(|&(_, factor)| value >= factor)
        .unwrap_or(("Ω", 1.0));

    let scaled = value / factor;
    if scaled >= 100.0 {
        format!("{:.0} {}", scaled, unit)
    } else if scaled >= 10.0 {
        format!("{:.1} {}", scaled, unit)
    } else {
        format!("{:.2} {}", scaled, unit)
    }
}
