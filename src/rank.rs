use log::debug;

use crate::RedBlackTree;

/// A word and the number of times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl From<(String, u64)> for WordCount {
    fn from((word, count): (String, u64)) -> Self {
        Self { word, count }
    }
}

/// Drain `counts` into a sequence ordered by count, most frequent first.
///
/// Words with equal counts appear in ascending lexicographic order: the tree
/// yields words in key order and the sort is stable.
pub fn rank(counts: RedBlackTree<String, u64>) -> Vec<WordCount> {
    let mut ranked = counts
        .into_iter()
        .map(WordCount::from)
        .collect::<Vec<_>>();

    // slice::sort_by is stable.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    debug!("ranked {} words", ranked.len());

    ranked
}
