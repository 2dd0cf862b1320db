//! # Tudo Fresco CLI
//!
//! Command-line front-end for the marketplace client.
//!
//! This crate contains:
//! - Argument parsing (`clap`)
//! - Application context (dependency injection)
//! - Command handlers and output rendering
//!
//! ## Architecture
//! - Depends on `domain`, `core` and `infra`
//! - Wires the token store, the gateway and the typed services together

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

pub use cli::Cli;
pub use context::AppContext;
