pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod gate;
pub mod output;
pub mod scanner;

pub use error::{Result, StyleGateError};
pub use scanner::collect;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GATE_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
