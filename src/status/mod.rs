// src/status/mod.rs
mod tokens;

pub use tokens::{Status, StatusTokens};
