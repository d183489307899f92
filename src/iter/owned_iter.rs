use std::iter::FusedIterator;

use crate::node::{Arena, NodeId};

/// An iterator of owned `(key, value)` pairs in ascending key order, as the
/// underlying tree `into_iter()` impl.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(nodes: Arena<K, V>, root: NodeId) -> Self {
        // Record the in-order sequence of node IDs before the arena is
        // consumed.
        let mut order = Vec::with_capacity(nodes.len());
        let mut ptr = nodes.leftmost(root);
        while !ptr.is_nil() {
            order.push(ptr);
            ptr = nodes.successor(ptr);
        }

        // Then move each node out of its arena slot, in that order.
        let mut slots = nodes
            .into_nodes()
            .into_iter()
            .map(Some)
            .collect::<Vec<_>>();

        let inner = order
            .into_iter()
            .filter_map(|id| slots[id.index()].take())
            .map(|n| n.into_tuple())
            .collect::<Vec<_>>()
            .into_iter();

        Self { inner }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
