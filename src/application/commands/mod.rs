// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between a transport and Services
// - Commands accept DTOs, return DTOs
// - Commands handle error conversion for the transport
// - Commands NEVER contain business logic

pub mod resistance_commands;

pub use resistance_commands::*;
