// Shared helpers

pub mod date;

pub use date::*;
