//! First-field counting transformer
//!
//! Turns comma-delimited text into a [`CountTable`] keyed by each line's
//! first field.

use super::CountTable;
use crate::etl::Transformer;
use eyre::Result;

/// Value recorded for a key the first time it is seen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountBase {
    /// First occurrence records 0, so a count is the number of repeats.
    /// Matches the output format of earlier releases.
    #[default]
    Zero,
    /// First occurrence records 1, so a count is the number of occurrences
    One,
}

impl CountBase {
    fn initial(self) -> u64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

/// Transformer that counts the first comma-delimited field of every line
///
/// Blank (whitespace-only) lines are skipped. A line without a comma is
/// keyed by the whole line. Keys are not trimmed.
///
/// # Example
/// ```
/// use keycount::etl::Transformer;
/// use keycount::KeyCounter;
///
/// let table = KeyCounter::new()
///     .transform("a,1\nb,2\na,3\n\n".to_string())
///     .unwrap();
///
/// assert_eq!(table.get("a"), Some(1));
/// assert_eq!(table.get("b"), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyCounter {
    base: CountBase,
}

impl KeyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: CountBase) -> Self {
        Self { base }
    }

    /// Count keys in `text`. Never fails.
    pub fn count(&self, text: &str) -> CountTable {
        let initial = self.base.initial();
        let mut table = CountTable::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let key = line.split_once(',').map_or(line, |(first, _)| first);
            table.record(key, initial);
        }

        log::debug!("Counted {} distinct keys", table.len());
        table
    }
}

impl Transformer for KeyCounter {
    type Input = String;
    type Output = CountTable;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        Ok(self.count(&input))
    }
}
