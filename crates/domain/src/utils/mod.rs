//! Small pure helpers shared by services and the CLI

pub mod cnpj;

pub use cnpj::{format_cnpj, normalize_cnpj};
