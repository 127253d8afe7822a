//! keycount
//!
//! Counts repeated first fields of a comma-delimited text file with a small
//! extract/transform/load facade, plus a decorated request controller.

pub mod controller;
pub mod etl;
pub mod storage;
pub mod transform;

// Re-exports for convenience
pub use controller::{Controller, Request, Response, TelemetryDecorator, UserController};
pub use etl::{EtlError, Extractor, Loader, Pipeline, PipelineState, Stage, Transformer};
pub use storage::{FileExtractor, JsonFileLoader};
pub use transform::{CountBase, CountTable, KeyCounter};

/// Build the standard file-to-file counting pipeline
pub fn file_pipeline(
    input: impl AsRef<std::path::Path>,
    output: impl AsRef<std::path::Path>,
    base: CountBase,
) -> Pipeline<FileExtractor, KeyCounter, JsonFileLoader> {
    Pipeline::new(
        FileExtractor::new(input),
        KeyCounter::with_base(base),
        JsonFileLoader::new(output),
    )
}
