//! Command-line interface module.

mod args;
pub mod embed;
mod output;
pub mod zones;

pub use args::{Cli, Commands, EmbedArgs};
