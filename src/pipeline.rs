use std::path::Path;

use log::info;

use crate::{count_words, rank, Error, InputBuffer, Report};

/// The number of ranked words reported when no limit is given.
pub const DEFAULT_LIMIT: usize = 10;

/// A configured word-count run: tokenize, count, rank and truncate to the
/// top `limit` words.
///
/// # Examples
///
/// ```
/// use commonwords::Pipeline;
///
/// let report = Pipeline::new(2).run(b"The cat sat. The CAT sat! The end.");
///
/// assert_eq!(report.unique_words(), 4);
/// assert_eq!(report.ranked()[0].word, "the");
/// assert_eq!(report.ranked().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipeline {
    limit: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl Pipeline {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Count and rank the words in `bytes`.
    ///
    /// Input with no words produces an empty report rather than an error.
    pub fn run(&self, bytes: &[u8]) -> Report {
        let counts = count_words(bytes);
        let unique_words = counts.len();

        // The tree is consumed (and freed) once the pairs are materialised.
        let mut ranked = rank(counts);
        ranked.truncate(self.limit);

        Report::new(unique_words, ranked)
    }

    /// Map the file at `path` and count the words within it.
    ///
    /// The mapping is released before this call returns, whether or not it
    /// succeeds.
    pub fn run_path(&self, path: impl AsRef<Path>) -> Result<Report, Error> {
        let path = path.as_ref();
        let input = InputBuffer::open(path)?;
        let report = self.run(&input);

        info!(
            "{}: {} unique words, reporting {}",
            path.display(),
            report.unique_words(),
            report.ranked().len()
        );

        Ok(report)
    }
}

/// Parse a report limit, which must be a non-negative integer.
///
/// # Errors
///
/// Returns [`Error::InvalidLimit`] for anything else, including negative
/// numbers.
pub fn parse_limit(s: &str) -> Result<usize, Error> {
    s.parse().map_err(|_| Error::InvalidLimit(s.to_string()))
}
