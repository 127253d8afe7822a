//! Transform implementations
//!
//! Concrete transformers and the data they produce.

mod count_table;
mod key_counter;

pub use count_table::CountTable;
pub use key_counter::{CountBase, KeyCounter};
