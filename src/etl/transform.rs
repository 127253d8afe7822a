//! Transformer trait for data transformation

use eyre::Result;

/// Transformer trait for turning extracted data into loadable data
///
/// Transformers are synchronous: they never touch I/O.
///
/// # Example
/// ```no_run
/// use keycount::etl::Transformer;
/// use eyre::Result;
///
/// struct LineCounter;
///
/// impl Transformer for LineCounter {
///     type Input = String;
///     type Output = usize;
///
///     fn transform(&self, input: Self::Input) -> Result<Self::Output> {
///         Ok(input.lines().count())
///     }
/// }
/// ```
pub trait Transformer: Send + Sync {
    /// Input type
    type Input: Send;

    /// Output type after transformation
    type Output: Send;

    /// Transform a single value
    ///
    /// # Errors
    /// Returns an error if transformation fails (validation, conversion, etc.)
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;
}
