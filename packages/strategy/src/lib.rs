#![no_std]

pub mod types;
pub mod validation;

pub use types::VaultParams;
pub use validation::*;
