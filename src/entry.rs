use std::mem;

use crate::{tree::Position, RedBlackTree};

/// A view into a single entry in a [`RedBlackTree`], which may either be
/// vacant or occupied.
///
/// This `enum` is constructed from the [`entry`] method on [`RedBlackTree`].
///
/// [`entry`]: RedBlackTree::entry
#[derive(Debug)]
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

/// A view into a vacant entry in a [`RedBlackTree`].
/// It is part of the [`Entry`] enum.
#[derive(Debug)]
pub struct VacantEntry<'a, K, V> {
    key: K,
    tree: &'a mut RedBlackTree<K, V>,
}

/// A view into an occupied entry in a [`RedBlackTree`].
/// It is part of the [`Entry`] enum.
///
/// The entry holds the [`Position`] found during the lookup, so reads and
/// updates through it do not search the tree again.
#[derive(Debug)]
pub struct OccupiedEntry<'a, K, V> {
    pos: Position,
    tree: &'a mut RedBlackTree<K, V>,
}

impl<'a, K, V> VacantEntry<'a, K, V>
where
    K: Ord,
{
    /// Gets a reference to the key that would be used when inserting a value
    /// through the VacantEntry.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take ownership of the key.
    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }

    /// Sets the value of the entry with the VacantEntry's key, and returns a
    /// mutable reference to it.
    #[inline]
    pub fn insert(self, value: V) -> &'a mut V {
        let pos = match self.tree.insert(self.key, value) {
            Ok(pos) => pos,
            // The exclusive borrow of the tree held since the lookup means the
            // key cannot have been inserted in the meantime.
            Err(_) => unreachable!("vacant entry key present in tree"),
        };
        self.tree.value_at_mut(pos)
    }
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key in the entry.
    #[inline]
    pub fn key(&self) -> &K {
        self.tree.key_at(self.pos)
    }

    /// The position of this entry in the tree.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Gets a reference to the value in the entry.
    #[inline]
    pub fn get(&self) -> &V {
        self.tree.value_at(self.pos)
    }

    /// Gets a mutable reference to the value in the entry.
    #[inline]
    pub fn get_mut(&mut self) -> &mut V {
        self.tree.value_at_mut(self.pos)
    }

    /// Converts the entry into a mutable reference to its value.
    #[inline]
    pub fn into_mut(self) -> &'a mut V {
        self.tree.value_at_mut(self.pos)
    }

    /// Sets the value of the entry, and returns the entry's old value.
    #[inline]
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    K: Ord,
{
    /// Create a new Entry for the given key and tree.
    pub(crate) fn new(key: K, tree: &'a mut RedBlackTree<K, V>) -> Self {
        match tree.find(&key) {
            Some(pos) => Entry::Occupied(OccupiedEntry { pos, tree }),
            None => Entry::Vacant(VacantEntry { key, tree }),
        }
    }

    /// Returns a reference to this entry's key.
    ///
    /// # Examples
    ///
    /// ```
    /// use commonwords::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<&str, u64> = RedBlackTree::default();
    /// assert_eq!(tree.entry("bananas").key(), &"bananas");
    /// ```
    #[inline]
    pub fn key(&self) -> &K {
        match self {
            Entry::Vacant(entry) => entry.key(),
            Entry::Occupied(entry) => entry.key(),
        }
    }

    /// Ensures a value is in the entry by inserting the default if empty,
    /// and returns a mutable reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use commonwords::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<&str, u64> = RedBlackTree::default();
    ///
    /// tree.entry("bananas").or_insert(42);
    /// assert_eq!(tree.get("bananas"), Some(&42));
    ///
    /// *tree.entry("bananas").or_insert(100) += 1;
    /// assert_eq!(tree.get("bananas"), Some(&43));
    /// ```
    #[inline]
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the default
    /// function if empty, and returns a mutable reference to the value in the
    /// entry.
    #[inline]
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Ensures a value is in the entry by inserting, if empty, the result of
    /// the default function. This method allows for generating key-derived
    /// values for insertion by providing the default function a reference to
    /// the key that was moved during the `.entry(key)` method call.
    ///
    /// # Examples
    ///
    /// ```
    /// use commonwords::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<&str, usize> = RedBlackTree::default();
    ///
    /// tree.entry("bananas").or_insert_with_key(|key| key.len());
    ///
    /// assert_eq!(tree.get("bananas"), Some(&7));
    /// ```
    #[inline]
    pub fn or_insert_with_key<F: FnOnce(&K) -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let value = default(entry.key());
                entry.insert(value)
            }
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts into the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use commonwords::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<&str, u64> = RedBlackTree::default();
    ///
    /// tree.entry("bananas")
    ///     .and_modify(|v| *v += 1)
    ///     .or_insert(1);
    /// assert_eq!(tree.get("bananas"), Some(&1));
    ///
    /// tree.entry("bananas")
    ///     .and_modify(|v| *v += 1)
    ///     .or_insert(1);
    /// assert_eq!(tree.get("bananas"), Some(&2));
    /// ```
    #[inline]
    pub fn and_modify<F: FnOnce(&mut V)>(mut self, f: F) -> Self {
        match &mut self {
            Entry::Occupied(entry) => {
                f(entry.get_mut());
            }
            Entry::Vacant(_) => {}
        }
        self
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    K: Ord,
    V: Default,
{
    /// Ensures a value is in the entry by inserting the default value if empty,
    /// and returns a mutable reference to the value in the entry.
    #[inline]
    pub fn or_default(self) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(V::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_or_insert() {
        let mut tree: RedBlackTree<&str, i32> = RedBlackTree::default();

        // Insert via vacant entry
        tree.entry("bananas").or_insert(42);
        assert_eq!(tree.get("bananas"), Some(&42));

        // Entry is now occupied, should not change
        tree.entry("bananas").or_insert(100);
        assert_eq!(tree.get("bananas"), Some(&42));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_entry_or_insert_with() {
        let mut tree: RedBlackTree<&str, String> = RedBlackTree::default();

        tree.entry("bananas").or_insert_with(|| "hello".to_string());
        assert_eq!(tree.get("bananas"), Some(&"hello".to_string()));

        // Should not call the closure again
        tree.entry("bananas")
            .or_insert_with(|| panic!("closure called for occupied entry"));
        assert_eq!(tree.get("bananas"), Some(&"hello".to_string()));
    }

    #[test]
    fn test_entry_or_insert_with_key() {
        let mut tree: RedBlackTree<String, usize> = RedBlackTree::default();

        tree.entry("platanos".to_string())
            .or_insert_with_key(|key| key.len());
        assert_eq!(tree.get("platanos"), Some(&8));
    }

    #[test]
    fn test_entry_and_modify() {
        let mut tree: RedBlackTree<&str, u32> = RedBlackTree::default();

        // On vacant, and_modify should not do anything
        tree.entry("bananas").and_modify(|v| *v += 1).or_insert(42);
        assert_eq!(tree.get("bananas"), Some(&42));

        // On occupied, and_modify should modify the value
        tree.entry("bananas").and_modify(|v| *v += 1).or_insert(100);
        assert_eq!(tree.get("bananas"), Some(&43));
    }

    #[test]
    fn test_entry_or_default() {
        let mut tree: RedBlackTree<&str, Option<u32>> = RedBlackTree::default();

        tree.entry("bananas").or_default();
        assert_eq!(tree.get("bananas"), Some(&None));
    }

    #[test]
    fn test_entry_key() {
        let mut tree: RedBlackTree<&str, i32> = RedBlackTree::default();
        tree.insert("platanos", 1).unwrap();

        assert_eq!(tree.entry("bananas").key(), &"bananas");
        assert_eq!(tree.entry("platanos").key(), &"platanos");
    }

    #[test]
    fn test_vacant_entry_into_key() {
        let mut tree: RedBlackTree<&str, i32> = RedBlackTree::default();

        match tree.entry("bananas") {
            Entry::Vacant(vacant) => {
                assert_eq!(vacant.into_key(), "bananas");
            }
            Entry::Occupied(_) => panic!("Expected vacant entry"),
        }

        assert!(tree.is_empty());
    }

    #[test]
    fn test_occupied_entry_insert() {
        let mut tree: RedBlackTree<&str, i32> = RedBlackTree::default();
        let pos = tree.insert("bananas", 42).unwrap();

        match tree.entry("bananas") {
            Entry::Occupied(mut occupied) => {
                assert_eq!(occupied.position(), pos);
                let old = occupied.insert(100);
                assert_eq!(old, 42);
                assert_eq!(occupied.get(), &100);
            }
            Entry::Vacant(_) => panic!("Expected occupied entry"),
        }

        assert_eq!(tree.get("bananas"), Some(&100));
    }
}
