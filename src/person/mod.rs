pub mod types;
pub mod interval_set;
pub mod options;
pub mod commands;
pub mod dialog;
pub mod config;

#[cfg(test)]
mod tests;

// Re-export the main types for easy access
pub use types::*;
pub use interval_set::*;
pub use options::*;
pub use commands::*;
pub use dialog::*;
pub use config::*;
