//! Extractor trait for reading raw data from a source

use eyre::Result;

/// Extractor trait for extracting data from a source
///
/// Implementors define how to pull a value out of sources like:
/// - File systems
/// - In-memory fixtures (test doubles)
///
/// # Example
/// ```no_run
/// use keycount::etl::Extractor;
/// use eyre::Result;
///
/// struct StaticExtractor(&'static str);
///
/// impl Extractor for StaticExtractor {
///     type Output = String;
///
///     async fn extract(&self) -> Result<Self::Output> {
///         Ok(self.0.to_string())
///     }
/// }
/// ```
pub trait Extractor: Send + Sync {
    /// The type of value extracted
    type Output: Send;

    /// Extract the value from the source
    ///
    /// # Errors
    /// Returns an error if the source cannot be read
    fn extract(&self) -> impl std::future::Future<Output = Result<Self::Output>> + Send;
}
