// src/domain/resistance/mod.rs

pub mod compute;
pub mod entity;
pub mod format;
pub mod invariants;

pub use compute::compute_resistance;
pub use entity::{BandCount, ResistanceResult};
pub use format::format_ohms;
pub use invariants::validate_result;
