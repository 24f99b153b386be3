//! Command-line interface module.

mod args;
pub mod common;
pub mod export;
pub mod init;
pub mod validate;

pub use args::{Cli, Commands, ExportArgs, ValidateArgs};
