//! Command implementations.

pub mod dump;
pub mod import;
