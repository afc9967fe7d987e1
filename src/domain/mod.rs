//! Core domain types and logic.

pub mod holding;
pub mod target;
pub mod annualized;
pub mod inputs;
pub mod evaluation;
pub mod error;
