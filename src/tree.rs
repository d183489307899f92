use std::{borrow::Borrow, cmp::Ordering};

use crate::{
    entry::Entry,
    iter::{IntoIter, Iter},
    node::{rebalance_after_insert, Arena, NodeId},
};

/// A handle to an entry within a [`RedBlackTree`].
///
/// Returned by [`RedBlackTree::find()`] and [`RedBlackTree::insert()`], and
/// usable for O(1) access to the entry's key and value. Entries are never
/// removed, so a [`Position`] remains valid across subsequent inserts into
/// the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(pub(crate) NodeId);

/// An ordered map backed by a red-black tree.
///
/// Nodes live in an arena owned by the tree and link to each other by index;
/// parent links are non-owning back-references used for in-order traversal
/// and bottom-up rebalancing.
///
/// Keys are unique and immutable once inserted. Removal is not supported.
#[derive(Debug, Clone)]
pub struct RedBlackTree<K, V> {
    nodes: Arena<K, V>,
    root: NodeId,
}

impl<K, V> Default for RedBlackTree<K, V> {
    fn default() -> Self {
        Self {
            nodes: Arena::default(),
            root: NodeId::NIL,
        }
    }
}

impl<K, V> RedBlackTree<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    /// Return the position of the smallest key, or [`None`] if the tree is
    /// empty.
    pub fn first(&self) -> Option<Position> {
        if self.root.is_nil() {
            return None;
        }
        Some(Position(self.nodes.leftmost(self.root)))
    }

    /// Return the position of the in-order successor of `pos`, or [`None`] if
    /// `pos` holds the largest key.
    ///
    /// # Panics
    ///
    /// Panics if `pos` was not produced by this tree.
    pub fn next(&self, pos: Position) -> Option<Position> {
        let id = self.nodes.successor(pos.0);
        (!id.is_nil()).then_some(Position(id))
    }

    /// # Panics
    ///
    /// Panics if `pos` was not produced by this tree.
    pub fn key_at(&self, pos: Position) -> &K {
        self.nodes.node(pos.0).key()
    }

    /// # Panics
    ///
    /// Panics if `pos` was not produced by this tree.
    pub fn value_at(&self, pos: Position) -> &V {
        self.nodes.node(pos.0).value()
    }

    /// Mutable access to the value at `pos`.
    ///
    /// Updating a value never changes the shape of the tree.
    ///
    /// # Panics
    ///
    /// Panics if `pos` was not produced by this tree.
    pub fn value_at_mut(&mut self, pos: Position) -> &mut V {
        self.nodes.node_mut(pos.0).value_mut()
    }

    /// Iterate over the `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    #[cfg(test)]
    pub(crate) fn root_id(&self) -> NodeId {
        self.root
    }

    #[cfg(test)]
    pub(crate) fn node(&self, id: NodeId) -> &crate::node::Node<K, V> {
        self.nodes.node(id)
    }
}

impl<K, V> RedBlackTree<K, V>
where
    K: Ord,
{
    /// Descend the tree to locate `key`, returning its [`Position`] if
    /// present.
    pub fn find<Q>(&self, key: &Q) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut ptr = self.root;

        while !ptr.is_nil() {
            let n = self.nodes.node(ptr);
            ptr = match key.cmp(n.key().borrow()) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(Position(ptr)),
                Ordering::Greater => n.right(),
            };
        }

        None
    }

    /// Insert a new `key` mapping to `value`.
    ///
    /// Returns the [`Position`] of the new entry. If `key` is already present
    /// the tree is left unchanged, `key` and `value` are dropped and the
    /// position of the existing entry is returned as the error.
    pub fn insert(&mut self, key: K, value: V) -> Result<Position, Position> {
        // Descend to the leaf position for "key", tracking the parent it will
        // be linked to.
        let mut parent = NodeId::NIL;
        let mut side = Ordering::Equal;
        let mut ptr = self.root;

        while !ptr.is_nil() {
            let n = self.nodes.node(ptr);
            side = key.cmp(n.key());
            parent = ptr;
            ptr = match side {
                Ordering::Less => n.left(),
                Ordering::Equal => return Err(Position(ptr)),
                Ordering::Greater => n.right(),
            };
        }

        let id = self.nodes.attach(key, value, parent, side);
        if parent.is_nil() {
            self.root = id;
        }

        rebalance_after_insert(&mut self.nodes, &mut self.root, id);

        Ok(Position(id))
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(|pos| self.value_at(pos))
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let pos = self.find(key)?;
        Some(self.value_at_mut(pos))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Gets the given key's corresponding entry in the tree for in-place
    /// manipulation.
    ///
    /// # Examples
    ///
    /// ```
    /// use commonwords::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<&str, u64> = RedBlackTree::default();
    ///
    /// for word in ["the", "cat", "the"] {
    ///     *tree.entry(word).or_insert(0) += 1;
    /// }
    ///
    /// assert_eq!(tree.get("the"), Some(&2));
    /// assert_eq!(tree.get("cat"), Some(&1));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        Entry::new(key, self)
    }
}

impl<'a, K, V> IntoIterator for &'a RedBlackTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for RedBlackTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Consume the tree, yielding the owned `(key, value)` pairs in ascending
    /// key order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.nodes, self.root)
    }
}

impl<K, V> Extend<(K, V)> for RedBlackTree<K, V>
where
    K: Ord,
{
    /// Insert all pairs from `iter`; a pair with a key already in the tree is
    /// rejected, so the first value seen for each key wins.
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            let _ = self.insert(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for RedBlackTree<K, V>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}
