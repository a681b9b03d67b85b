//! Pipeview - Render a static summary of a proxy deployment pipeline
//!
//! This library provides the core functionality for Pipeview, including:
//! - Data models for stage statuses and pipeline inputs
//! - Derivation of the aggregate environment and overall outcome
//! - Summary composition (status icons, step cards, header and footer)
//! - Text, HTML and JSON writers
//! - CLI command parsing, rc file configuration and input documents
//!
//! # Example
//!
//! ```
//! use pipeview::demo::sample_input;
//! use pipeview::render::{build_summary, format_summary_text, TextOptions, DEFAULT_TITLE};
//!
//! let view = build_summary(&sample_input(), DEFAULT_TITLE);
//! let text = format_summary_text(&view, &TextOptions::default());
//! assert!(text.contains("Deployment In Progress"));
//! ```

pub mod models;
pub mod render;
pub mod cli;
pub mod config;
pub mod demo;
pub mod utils;
