// Core data models for Pipeview
// Immutable values handed to a single render

pub mod status;
pub mod pipeline;

pub use status::*;
pub use pipeline::*;
