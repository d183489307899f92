//! Count the words in a text and report the most frequent, ranked by count.
//!
//! Words are accumulated in [`RedBlackTree`], an arena-backed ordered map,
//! then drained in key order and stable-sorted by count so that words with
//! equal counts are reported alphabetically.
//!
//! ```
//! use commonwords::Pipeline;
//!
//! let report = Pipeline::default().run(b"The cat sat. The CAT sat!");
//!
//! let got = report
//!     .ranked()
//!     .iter()
//!     .map(|v| (v.word.as_str(), v.count))
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(got, [("cat", 2), ("sat", 2), ("the", 2)]);
//! ```

mod aggregate;
mod entry;
mod error;
mod input;
mod iter;
mod node;
mod pipeline;
mod rank;
mod report;
mod tokenizer;
mod tree;

#[cfg(test)]
mod test_utils;

pub use aggregate::*;
pub use entry::*;
pub use error::*;
pub use input::*;
pub use iter::*;
pub use pipeline::*;
pub use rank::*;
pub use report::*;
pub use tokenizer::*;
pub use tree::{Position, RedBlackTree};
