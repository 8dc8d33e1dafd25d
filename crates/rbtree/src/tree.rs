use std::fmt;
use std::iter::FusedIterator;

use crate::node::{Color, Id, LEFT, Node, RIGHT, id};

/// Red-black tree over unique ordered keys.
///
/// Nodes live in an arena and refer to each other by index, so parent links
/// are plain indices rather than owning pointers.
#[derive(Clone)]
pub struct RbTree<K> {
    pub(crate) nodes: Vec<Node<K>>,
    pub(crate) root: Id,
}

impl<K> RbTree<K> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: Id::NIL,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = Id::NIL;
    }

    /// Height of the tree: 0 when empty, 1 for a lone root.
    pub fn max_depth(&self) -> usize {
        self.depth_below(self.root)
    }

    fn depth_below(&self, x: Id) -> usize {
        if x.is_nil() {
            return 0;
        }
        let [l, r] = self.node(x).ch;
        self.depth_below(l).max(self.depth_below(r)) + 1
    }

    /// In-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_, K> {
        let next = if self.root.is_nil() {
            Id::NIL
        } else {
            self.leftmost(self.root)
        };
        Iter {
            tree: self,
            next,
            remaining: self.len(),
        }
    }

    pub fn first(&self) -> Option<&K> {
        if self.root.is_nil() {
            return None;
        }
        Some(&self.node(self.leftmost(self.root)).key)
    }

    pub fn last(&self) -> Option<&K> {
        if self.root.is_nil() {
            return None;
        }
        let mut x = self.root;
        while !self.child(x, RIGHT).is_nil() {
            x = self.child(x, RIGHT);
        }
        Some(&self.node(x).key)
    }

    #[inline(always)]
    pub(crate) fn node(&self, x: Id) -> &Node<K> {
        debug_assert!(!x.is_nil());
        &self.nodes[x.idx()]
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, x: Id) -> &mut Node<K> {
        debug_assert!(!x.is_nil());
        &mut self.nodes[x.idx()]
    }

    /// Absent children count as black.
    #[inline(always)]
    pub(crate) fn color(&self, x: Id) -> Color {
        if x.is_nil() {
            Color::Black
        } else {
            self.node(x).color
        }
    }

    #[inline(always)]
    pub(crate) fn is_red(&self, x: Id) -> bool {
        self.color(x) == Color::Red
    }

    #[inline(always)]
    pub(crate) fn parent(&self, x: Id) -> Id {
        self.node(x).p
    }

    #[inline(always)]
    pub(crate) fn child(&self, x: Id, dir: usize) -> Id {
        self.node(x).ch[dir]
    }

    /// Which slot of its parent `x` occupies. `x` must not be the root.
    pub(crate) fn side_of(&self, x: Id) -> usize {
        let p = self.parent(x);
        debug_assert!(!p.is_nil());
        usize::from(self.node(p).ch[RIGHT] == x)
    }

    pub(crate) fn is_left_child(&self, x: Id) -> bool {
        let p = self.parent(x);
        !p.is_nil() && self.node(p).ch[LEFT] == x
    }

    /// Puts `new` where `old` hangs under `p`, or at the root when `p` is nil.
    pub(crate) fn replace_child(&mut self, p: Id, old: Id, new: Id) {
        if p.is_nil() {
            self.root = new;
        } else if self.node(p).ch[LEFT] == old {
            self.node_mut(p).ch[LEFT] = new;
        } else {
            debug_assert_eq!(self.node(p).ch[RIGHT], old);
            self.node_mut(p).ch[RIGHT] = new;
        }
        if !new.is_nil() {
            self.node_mut(new).p = p;
        }
    }

    pub(crate) fn leftmost(&self, mut x: Id) -> Id {
        while !self.child(x, LEFT).is_nil() {
            x = self.child(x, LEFT);
        }
        x
    }

    /// In-order successor of `x`, or nil for the last node.
    pub(crate) fn successor(&self, x: Id) -> Id {
        let r = self.child(x, RIGHT);
        if !r.is_nil() {
            return self.leftmost(r);
        }
        let mut x = x;
        let mut p = self.parent(x);
        while !p.is_nil() && self.child(p, RIGHT) == x {
            x = p;
            p = self.parent(p);
        }
        p
    }

    pub(crate) fn alloc(&mut self, key: K) -> Id {
        let x = id(self.nodes.len());
        self.nodes.push(Node::new(key));
        x
    }

    /// Drops an unlinked node from the arena and hands back its key.
    ///
    /// The last arena slot is moved into the hole, so every `Id` other than
    /// the root is invalidated by this call.
    pub(crate) fn release(&mut self, x: Id) -> Option<K> {
        debug_assert!(!self.nodes.is_empty());
        let last = id(self.nodes.len() - 1);
        if x != last {
            self.nodes.swap(x.idx(), last.idx());
            let (p, ch) = {
                let moved = self.node(x);
                (moved.p, moved.ch)
            };
            if p.is_nil() {
                debug_assert_eq!(self.root, last);
                self.root = x;
            } else if self.node(p).ch[LEFT] == last {
                self.node_mut(p).ch[LEFT] = x;
            } else {
                self.node_mut(p).ch[RIGHT] = x;
            }
            for c in ch {
                if !c.is_nil() {
                    self.node_mut(c).p = x;
                }
            }
        }
        self.nodes.pop().map(|node| node.key)
    }

    /// Swaps the keys stored at two distinct nodes, leaving shape and colors.
    pub(crate) fn swap_keys(&mut self, a: Id, b: Id) {
        debug_assert_ne!(a, b);
        let (lo, hi) = if a.idx() < b.idx() {
            (a.idx(), b.idx())
        } else {
            (b.idx(), a.idx())
        };
        let (head, tail) = self.nodes.split_at_mut(hi);
        std::mem::swap(&mut head[lo].key, &mut tail[0].key);
    }
}

impl<K: Ord> RbTree<K> {
    pub fn contains(&self, key: &K) -> bool {
        !self.find(key).is_nil()
    }

    pub(crate) fn find(&self, key: &K) -> Id {
        let mut x = self.root;
        while !x.is_nil() {
            let node = self.node(x);
            x = match key.cmp(&node.key) {
                std::cmp::Ordering::Less => node.ch[LEFT],
                std::cmp::Ordering::Greater => node.ch[RIGHT],
                std::cmp::Ordering::Equal => return x,
            };
        }
        Id::NIL
    }
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// In-order iterator returned by [`RbTree::iter`].
pub struct Iter<'a, K> {
    tree: &'a RbTree<K>,
    next: Id,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_nil() {
            return None;
        }
        let x = self.next;
        self.next = self.tree.successor(x);
        self.remaining -= 1;
        Some(&self.tree.node(x).key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

impl<'a, K> IntoIterator for &'a RbTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
