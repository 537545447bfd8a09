// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod resistance_service;


// Re-export all services and their types
pub use resistance_service::{CalculateResistanceRequest, ColorPalette, ResistanceService};
