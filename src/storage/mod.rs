//! File system storage operations
//!
//! This module handles the file I/O at both ends of a pipeline:
//! - Plain text source files
//! - Pretty JSON destination files

mod json_writer;
mod text;

pub use json_writer::{JsonFileLoader, render_json};
pub use text::FileExtractor;
