//! Command Line Interface for the Yomigana furigana generator.

pub mod args;
pub mod commands;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
