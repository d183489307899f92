use std::io::Write;

use crate::{Error, WordCount};

/// The result of a word count: the number of distinct words, and the most
/// frequent of them in rank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    unique_words: usize,
    ranked: Vec<WordCount>,
}

impl Report {
    pub(crate) fn new(unique_words: usize, ranked: Vec<WordCount>) -> Self {
        debug_assert!(ranked.len() <= unique_words);
        Self {
            unique_words,
            ranked,
        }
    }

    /// The number of distinct words in the input.
    pub fn unique_words(&self) -> usize {
        self.unique_words
    }

    /// The reported words, most frequent first.
    pub fn ranked(&self) -> &[WordCount] {
        &self.ranked
    }

    /// Render the report to `w` and flush it.
    ///
    /// ```text
    /// Total unique words: 12
    ///  1. the    4
    ///  2. cat    2
    ///  ...
    /// 10. zebra  1
    /// ```
    ///
    /// The rank column is right-aligned to the widest rank, and the word
    /// column left-aligned to the longest reported word.
    pub fn write_to<W: Write>(&self, mut w: W) -> Result<(), Error> {
        writeln!(w, "Total unique words: {}", self.unique_words)?;

        let rank_width = self.ranked.len().to_string().len();
        let word_width = self
            .ranked
            .iter()
            .map(|v| v.word.len())
            .max()
            .unwrap_or_default();

        for (i, v) in self.ranked.iter().enumerate() {
            writeln!(
                w,
                "{:>rank_width$}. {:<word_width$} {}",
                i + 1,
                v.word,
                v.count
            )?;
        }

        w.flush()?;
        Ok(())
    }
}
