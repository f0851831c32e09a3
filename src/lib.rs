pub mod annotator;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod oracle;
pub mod output;
pub mod rules;
pub mod segmenter;

pub use error::{ProseGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
