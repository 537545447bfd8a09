// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the sealed domain and services
// - It is the boundary a transport (HTTP route, CLI) plugs into
// - It translates between wire DTOs and domain records
// - It owns error-to-client translation; the domain never does

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
