//! # Tudo Fresco Domain
//!
//! Business domain types and models for the Tudo Fresco marketplace client.
//!
//! This crate contains:
//! - Session types (access levels, decoded claims)
//! - The backend response envelope
//! - Marketplace models (users, stores, products, demands, reel posts)
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other Tudo Fresco crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
