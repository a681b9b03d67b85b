pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use commands::*;
pub use output::*;
pub use error::*;
