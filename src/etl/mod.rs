//! Core ETL (Extract, Transform, Load) abstractions
//!
//! This module provides the trait definitions for the three pipeline roles
//! and the [`Pipeline`] facade that runs them in order.

mod error;
mod extract;
mod load;
mod pipeline;
mod transform;

pub use error::EtlError;
pub use extract::Extractor;
pub use load::Loader;
pub use pipeline::{Pipeline, PipelineState, Stage};
pub use transform::Transformer;
