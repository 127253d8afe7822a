//! Pretty JSON output for count tables

use crate::etl::{EtlError, Loader};
use crate::transform::CountTable;

use eyre::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Render a count table as JSON with 4-space indentation.
///
/// Keys keep their insertion order. No newline follows the closing brace.
///
/// # Example
///
/// ```
/// use keycount::{CountTable, storage::render_json};
///
/// let table: CountTable = [("a", 1), ("b", 0)].into_iter().collect();
/// let output = render_json(&table).unwrap();
/// assert_eq!(output, "{\n    \"a\": 1,\n    \"b\": 0\n}");
/// ```
pub fn render_json(table: &CountTable) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    table
        .serialize(&mut serializer)
        .context("Failed to serialize count table")?;
    Ok(String::from_utf8(buffer)?)
}

/// Write a count table to a JSON file
pub struct JsonFileLoader {
    path: PathBuf,
}

impl JsonFileLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Replace the file's content with `content`
    async fn write(&self, content: &str) -> Result<(), EtlError> {
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| EtlError::destination_unwritable(&self.path, e))
    }
}

// Implement Loader trait for writing JSON files

impl Loader for JsonFileLoader {
    type Input = CountTable;

    async fn load(&self, input: Self::Input) -> Result<usize> {
        let json = render_json(&input)?;
        log::debug!("Writing {} bytes to {}", json.len(), self.path.display());
        self.write(&json).await?;
        log::info!("Wrote {} keys to {}", input.len(), self.path.display());
        Ok(input.len())
    }
}
