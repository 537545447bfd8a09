// src/main.rs

use resistorhub::application::commands::{calculate_resistance, get_color_palette};
use resistorhub::application::dto::CalculateResistanceDto;
use resistorhub::application::state::AppState;

const USAGE: &str = "usage:
  resistorhub <bands> <color>...   decode a 4/5/6-band selection
  resistorhub palette              list the color vocabulary per band role

example:
  resistorhub 4 amarelo violeta marrom ouro";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new();
    let mut args = std::env::args().skip(1);

    let first = match args.next() {
        Some(arg) => arg,
        None => {
            eprintln!("{}", USAGE);
            return Ok(());
        }
    };

    if first == "palette" {
        let palette = get_color_palette(&state)?;
        println!("{}", serde_json::to_string_pretty(&palette)?);
        return Ok(());
    }

    let bands: u8 = first
        .parse()
        .map_err(|_| format!("invalid band count: {}\n{}", first, USAGE))?;

    let mut slots = args;
    let dto = CalculateResistanceDto {
        bands,
        c0: slots.next().unwrap_or_else(|| "preto".to_string()),
        c1: slots.next().unwrap_or_else(|| "preto".to_string()),
        c2: slots.next().unwrap_or_else(|| "preto".to_string()),
        c3: slots.next(),
        c4: slots.next(),
        c5: slots.next(),
    };

    let result = calculate_resistance(dto, &state)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
