//! Loader trait for writing data to destinations

use eyre::Result;

/// Loader trait for loading data to a destination
///
/// # Example
/// ```no_run
/// use keycount::etl::Loader;
/// use keycount::CountTable;
/// use eyre::Result;
///
/// struct StdoutLoader;
///
/// impl Loader for StdoutLoader {
///     type Input = CountTable;
///
///     async fn load(&self, input: Self::Input) -> Result<usize> {
///         println!("{}", serde_json::to_string(&input)?);
///         Ok(input.len())
///     }
/// }
/// ```
pub trait Loader: Send + Sync {
    /// The type of value to load
    type Input: Send;

    /// Load the value to the destination
    ///
    /// Returns the number of entries written
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written
    fn load(&self, input: Self::Input) -> impl std::future::Future<Output = Result<usize>> + Send;
}
