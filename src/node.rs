use std::cmp::Ordering;

/// An index into the node arena of a [`RedBlackTree`].
///
/// [`RedBlackTree`]: crate::RedBlackTree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The sentinel terminating every leaf path, and the parent of the root.
    ///
    /// The sentinel is always [`Color::Black`].
    pub(crate) const NIL: Self = Self(usize::MAX);

    pub(crate) fn is_nil(self) -> bool {
        self == Self::NIL
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    /// Child links, owned by this node.
    left: NodeId,
    right: NodeId,

    /// Non-owning back-link to the parent, or [`NodeId::NIL`] for the root.
    parent: NodeId,

    color: Color,

    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub(crate) fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn left(&self) -> NodeId {
        self.left
    }

    pub(crate) fn right(&self) -> NodeId {
        self.right
    }

    pub(crate) fn parent(&self) -> NodeId {
        self.parent
    }

    /// Explode this [`Node`] into the key and value it contains.
    pub(crate) fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// The storage backing a tree: every [`Node`] lives in a single [`Vec`] and
/// is addressed by a stable [`NodeId`].
///
/// Nodes are never removed, so a [`NodeId`] handed out by
/// [`Arena::attach()`] remains valid for the lifetime of the arena.
#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
    nodes: Vec<Node<K, V>>,
}

impl<K, V> Default for Arena<K, V> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<K, V> Arena<K, V> {
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a new red leaf holding `key` and `value`, linking it as the
    /// `side` child of `parent`.
    ///
    /// If `parent` is [`NodeId::NIL`] the new node is unlinked, and the
    /// caller is responsible for making it the root.
    pub(crate) fn attach(&mut self, key: K, value: V, parent: NodeId, side: Ordering) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            left: NodeId::NIL,
            right: NodeId::NIL,
            parent,
            color: Color::Red,
            key,
            value,
        });

        if !parent.is_nil() {
            match side {
                Ordering::Less => self.node_mut(parent).left = id,
                Ordering::Greater => self.node_mut(parent).right = id,
                Ordering::Equal => unreachable!("duplicate keys are never attached"),
            }
        }

        id
    }

    /// # Panics
    ///
    /// Panics if `id` is the sentinel or does not belong to this arena.
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.index()]
    }

    /// The color of `id`, treating the sentinel as black.
    pub(crate) fn color(&self, id: NodeId) -> Color {
        if id.is_nil() {
            return Color::Black;
        }
        self.node(id).color()
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        debug_assert!(!id.is_nil(), "the sentinel is always black");
        self.node_mut(id).color = color;
    }

    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.node(id).left()
    }

    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.node(id).right()
    }

    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.node(id).parent()
    }

    /// Descend the left edge of the subtree rooted at `id`.
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while !id.is_nil() {
            let left = self.left(id);
            if left.is_nil() {
                break;
            }
            id = left;
        }
        id
    }

    /// Return the in-order successor of `id`, or [`NodeId::NIL`] if `id`
    /// holds the largest key.
    ///
    /// If `id` has a right subtree, the successor is the left-most node in
    /// it. Otherwise ascend until the walk arrives at a parent from its left
    /// child.
    pub(crate) fn successor(&self, id: NodeId) -> NodeId {
        let right = self.right(id);
        if !right.is_nil() {
            return self.leftmost(right);
        }

        let mut child = id;
        let mut parent = self.parent(id);
        while !parent.is_nil() && child == self.right(parent) {
            child = parent;
            parent = self.parent(parent);
        }
        parent
    }

    /// Consume the arena, returning the nodes indexed by [`NodeId::index()`].
    pub(crate) fn into_nodes(self) -> Vec<Node<K, V>> {
        self.nodes
    }

    /// Replace the `old` child link of `parent` with `new`, or the `root`
    /// if `parent` is the sentinel.
    fn replace_child(&mut self, root: &mut NodeId, parent: NodeId, old: NodeId, new: NodeId) {
        if parent.is_nil() {
            *root = new;
        } else if self.left(parent) == old {
            self.node_mut(parent).left = new;
        } else {
            debug_assert_eq!(self.right(parent), old);
            self.node_mut(parent).right = new;
        }
    }
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// The parent links of `x`, `P` and subtree `2` are updated, and `P` takes
/// the place of `x` in its parent (or becomes the new `root`).
///
/// # Panics
///
/// Panics if `x` has no right child (cannot be rotated).
pub(crate) fn rotate_left<K, V>(nodes: &mut Arena<K, V>, root: &mut NodeId, x: NodeId) {
    let p = nodes.right(x);
    assert!(!p.is_nil(), "left rotation requires a right child");

    let inner = nodes.left(p);
    nodes.node_mut(x).right = inner;
    if !inner.is_nil() {
        nodes.node_mut(inner).parent = x;
    }

    let parent = nodes.parent(x);
    nodes.node_mut(p).parent = parent;
    nodes.replace_child(root, parent, x, p);

    nodes.node_mut(p).left = x;
    nodes.node_mut(x).parent = p;
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left child (cannot be rotated).
pub(crate) fn rotate_right<K, V>(nodes: &mut Arena<K, V>, root: &mut NodeId, y: NodeId) {
    let p = nodes.left(y);
    assert!(!p.is_nil(), "right rotation requires a left child");

    let inner = nodes.right(p);
    nodes.node_mut(y).left = inner;
    if !inner.is_nil() {
        nodes.node_mut(inner).parent = y;
    }

    let parent = nodes.parent(y);
    nodes.node_mut(p).parent = parent;
    nodes.replace_child(root, parent, y, p);

    nodes.node_mut(p).right = y;
    nodes.node_mut(y).parent = p;
}

/// Restore the red-black properties after attaching the red leaf `z`.
///
/// Walks up from `z` while its parent is red, resolving each red-red
/// violation by either recoloring (red uncle) or rotating (black uncle),
/// then forces the root black.
pub(crate) fn rebalance_after_insert<K, V>(nodes: &mut Arena<K, V>, root: &mut NodeId, z: NodeId) {
    let mut z = z;

    while nodes.color(nodes.parent(z)) == Color::Red {
        let parent = nodes.parent(z);

        // A red parent is never the root, so the grandparent always exists.
        let grandparent = nodes.parent(parent);
        debug_assert!(!grandparent.is_nil());

        if parent == nodes.left(grandparent) {
            let uncle = nodes.right(grandparent);

            if nodes.color(uncle) == Color::Red {
                // Push the blackness of the grandparent down one level and
                // continue from the grandparent.
                nodes.set_color(parent, Color::Black);
                nodes.set_color(uncle, Color::Black);
                nodes.set_color(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            if z == nodes.right(parent) {
                // Triangle: rotate into a line.
                z = parent;
                rotate_left(nodes, root, z);
            }

            // Line.
            let parent = nodes.parent(z);
            let grandparent = nodes.parent(parent);
            nodes.set_color(parent, Color::Black);
            nodes.set_color(grandparent, Color::Red);
            rotate_right(nodes, root, grandparent);
        } else {
            let uncle = nodes.left(grandparent);

            if nodes.color(uncle) == Color::Red {
                nodes.set_color(parent, Color::Black);
                nodes.set_color(uncle, Color::Black);
                nodes.set_color(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            if z == nodes.left(parent) {
                z = parent;
                rotate_right(nodes, root, z);
            }

            let parent = nodes.parent(z);
            let grandparent = nodes.parent(parent);
            nodes.set_color(parent, Color::Black);
            nodes.set_color(grandparent, Color::Red);
            rotate_left(nodes, root, grandparent);
        }
    }

    let r = *root;
    nodes.set_color(r, Color::Black);
}
