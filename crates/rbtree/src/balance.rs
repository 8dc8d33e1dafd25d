//! Rotations and recolorings shared by insertion and deletion.

use crate::node::{Color, Id, LEFT};
use crate::tree::RbTree;

impl<K> RbTree<K> {
    /// Rotates `x` down towards `dir`; its child on the other side rises into
    /// `x`'s place. A child that becomes the root is forced black.
    ///
    /// # Panics
    ///
    /// If `x` has no child opposite `dir`. That can only happen when the case
    /// analysis of the caller is wrong.
    pub(crate) fn rotate(&mut self, x: Id, dir: usize) {
        let c = self.child(x, dir ^ 1);
        assert!(
            !c.is_nil(),
            "{} requires a {} child",
            if dir == LEFT { "rotate_left" } else { "rotate_right" },
            if dir == LEFT { "right" } else { "left" },
        );
        let p = self.parent(x);
        let inner = self.child(c, dir);

        self.replace_child(p, x, c);

        self.node_mut(c).ch[dir] = x;
        self.node_mut(x).p = c;

        self.node_mut(x).ch[dir ^ 1] = inner;
        if !inner.is_nil() {
            self.node_mut(inner).p = x;
        }

        if p.is_nil() {
            self.node_mut(c).color = Color::Black;
        }
    }

    #[inline]
    pub(crate) fn flip(&mut self, x: Id) {
        let node = self.node_mut(x);
        node.color = node.color.flipped();
    }

    /// Black node with two red children: push the red up one level.
    /// The root keeps its black color.
    pub(crate) fn recolor_on_split(&mut self, x: Id) {
        let [l, r] = self.node(x).ch;
        debug_assert_eq!(self.color(x), Color::Black);
        debug_assert!(self.is_red(l) && self.is_red(r));
        self.node_mut(l).color = Color::Black;
        self.node_mut(r).color = Color::Black;
        if x != self.root {
            self.node_mut(x).color = Color::Red;
        }
    }

    pub(crate) fn is_split_candidate(&self, x: Id) -> bool {
        let [l, r] = self.node(x).ch;
        !self.is_red(x) && self.is_red(l) && self.is_red(r)
    }

    /// Repairs a red `c` under a red parent. The grandparent is black and the
    /// parent's sibling is not red.
    pub(crate) fn resolve_red_red(&mut self, c: Id) {
        let p = self.parent(c);
        let g = self.parent(p);
        debug_assert!(self.is_red(c) && self.is_red(p));
        debug_assert!(!g.is_nil(), "a red node is never the root");

        let p_dir = self.side_of(p);
        let c_dir = self.side_of(c);
        if p_dir == c_dir {
            log::trace!("red-red: outer grandchild, single rotation");
            self.flip(p);
            self.flip(g);
            self.rotate(g, p_dir ^ 1);
        } else {
            log::trace!("red-red: inner grandchild, double rotation");
            self.flip(c);
            self.flip(g);
            self.rotate(p, p_dir);
            self.rotate(g, p_dir ^ 1);
        }
    }
}
