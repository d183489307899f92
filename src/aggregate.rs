use log::debug;

use crate::{RedBlackTree, Tokens};

/// Tokenize `bytes` and count the occurrences of each distinct word.
///
/// The returned tree holds exactly one entry per distinct word, mapped to the
/// number of times it appeared (always at least 1).
pub fn count_words(bytes: &[u8]) -> RedBlackTree<String, u64> {
    let mut counts = RedBlackTree::new();
    let mut n_tokens = 0_u64;

    for word in Tokens::new(bytes) {
        // Repeat occurrences update the count in place; only a new word
        // changes the shape of the tree.
        counts.entry(word).and_modify(|v| *v += 1).or_insert(1);
        n_tokens += 1;
    }

    debug!(
        "counted {} tokens, {} distinct words in {} bytes",
        n_tokens,
        counts.len(),
        bytes.len()
    );

    counts
}
