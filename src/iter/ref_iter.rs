use std::iter::FusedIterator;

use crate::{tree::Position, RedBlackTree};

/// An in-order iterator over the `(key, value)` pairs of a [`RedBlackTree`].
///
/// Created by [`RedBlackTree::iter()`]. Each step moves to the in-order
/// successor by following child and parent links, so no auxiliary stack is
/// needed.
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    tree: &'a RedBlackTree<K, V>,
    next: Option<Position>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(tree: &'a RedBlackTree<K, V>) -> Self {
        Self {
            tree,
            next: tree.first(),
            remaining: tree.len(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.next?;

        self.next = self.tree.next(pos);
        self.remaining -= 1;

        Some((self.tree.key_at(pos), self.tree.value_at(pos)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}
