use std::fmt;

use crate::node::{Color, Id, LEFT, RIGHT};
use crate::tree::RbTree;

/// Read-only handle to one node of an [`RbTree`].
pub struct NodeRef<'a, K> {
    tree: &'a RbTree<K>,
    id: Id,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    fn at(tree: &'a RbTree<K>, id: Id) -> Option<Self> {
        if id.is_nil() {
            None
        } else {
            Some(Self { tree, id })
        }
    }

    pub fn key(self) -> &'a K {
        &self.tree.node(self.id).key
    }

    pub fn color(self) -> Color {
        self.tree.node(self.id).color
    }

    pub fn is_red(self) -> bool {
        self.color() == Color::Red
    }

    pub fn left(self) -> Option<Self> {
        Self::at(self.tree, self.tree.child(self.id, LEFT))
    }

    pub fn right(self) -> Option<Self> {
        Self::at(self.tree, self.tree.child(self.id, RIGHT))
    }

    pub fn parent(self) -> Option<Self> {
        Self::at(self.tree, self.tree.parent(self.id))
    }

    /// `false` for the root and for right children.
    pub fn is_left_child(self) -> bool {
        self.tree.is_left_child(self.id)
    }

    /// Next node in key order.
    pub fn successor(self) -> Option<Self> {
        Self::at(self.tree, self.tree.successor(self.id))
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}

impl<K> RbTree<K> {
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        NodeRef::at(self, self.root)
    }
}
