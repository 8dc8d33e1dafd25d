use crate::node::{Color, Id, LEFT, RIGHT};
use crate::tree::RbTree;

/// Red nephews of a black sibling, seen from the side that lost a black node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Nephews {
    /// The near nephew is red (the far one may be red too).
    Inner,
    /// Only the far nephew is red.
    Outer,
    /// Neither nephew is red.
    Bare,
}

/// Local shape around a black-height deficit, one variant per repair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Repair {
    /// The sibling is red, so the parent is black.
    RedSibling,
    RedParent(Nephews),
    BlackParent(Nephews),
}

impl<K: Ord> RbTree<K> {
    /// Removes `key`. Returns whether it was present.
    pub fn delete(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes `key` and returns the stored key, if present.
    ///
    /// A node with a right subtree trades keys with its in-order successor,
    /// which is then removed in its place.
    pub fn take(&mut self, key: &K) -> Option<K> {
        let x = self.find(key);
        if x.is_nil() {
            log::debug!("delete missed");
            return None;
        }
        let target = if self.child(x, RIGHT).is_nil() {
            x
        } else {
            let s = self.leftmost(self.child(x, RIGHT));
            self.swap_keys(x, s);
            s
        };
        self.detach(target);
        self.release(target)
    }
}

impl<K> RbTree<K> {
    /// Unlinks a node with at most one child and restores the invariants.
    fn detach(&mut self, t: Id) {
        let [l, r] = self.node(t).ch;
        debug_assert!(l.is_nil() || r.is_nil());
        let p = self.parent(t);
        let child = if l.is_nil() { r } else { l };

        if !child.is_nil() {
            // A lone child under a valid tree is a red leaf below a black node.
            debug_assert!(self.is_red(child) && !self.is_red(t));
            self.replace_child(p, t, child);
            self.node_mut(child).color = Color::Black;
        } else if self.is_red(t) || p.is_nil() {
            self.replace_child(p, t, Id::NIL);
        } else {
            let dir = self.side_of(t);
            self.replace_child(p, t, Id::NIL);
            self.fix_deficit(p, dir);
        }
        let node = self.node_mut(t);
        node.p = Id::NIL;
        node.ch = [Id::NIL, Id::NIL];
    }

    /// Classifies the neighbourhood of a deficit in slot `dir` of `p`.
    pub(crate) fn classify(&self, p: Id, dir: usize) -> Repair {
        let b = self.child(p, dir ^ 1);
        assert!(!b.is_nil(), "a black-height deficit always has a sibling");
        if self.is_red(b) {
            return Repair::RedSibling;
        }
        let nephews = if self.is_red(self.child(b, dir)) {
            Nephews::Inner
        } else if self.is_red(self.child(b, dir ^ 1)) {
            Nephews::Outer
        } else {
            Nephews::Bare
        };
        if self.is_red(p) {
            Repair::RedParent(nephews)
        } else {
            Repair::BlackParent(nephews)
        }
    }

    /// The subtree in slot `dir` of `p` is one black node short of its
    /// sibling. Rotations move towards `dir`; `b` is the sibling.
    fn fix_deficit(&mut self, mut p: Id, mut dir: usize) {
        loop {
            let repair = self.classify(p, dir);
            log::trace!(
                "rebalance {:?} on the {} side",
                repair,
                if dir == LEFT { "left" } else { "right" }
            );
            let b = self.child(p, dir ^ 1);
            match repair {
                Repair::RedSibling => {
                    self.flip(b);
                    self.flip(p);
                    self.rotate(p, dir);
                }
                Repair::RedParent(Nephews::Inner) => {
                    self.flip(p);
                    self.rotate(b, dir ^ 1);
                    self.rotate(p, dir);
                    return;
                }
                Repair::RedParent(Nephews::Outer) => {
                    self.rotate(p, dir);
                    return;
                }
                Repair::RedParent(Nephews::Bare) => {
                    self.flip(p);
                    self.flip(b);
                    return;
                }
                Repair::BlackParent(Nephews::Inner) => {
                    let near = self.child(b, dir);
                    self.flip(near);
                    self.rotate(b, dir ^ 1);
                    self.rotate(p, dir);
                    return;
                }
                Repair::BlackParent(Nephews::Outer) => {
                    let far = self.child(b, dir ^ 1);
                    self.flip(far);
                    self.rotate(p, dir);
                    return;
                }
                Repair::BlackParent(Nephews::Bare) => {
                    // The whole subtree at `p` is now short; push the
                    // deficit up one level.
                    self.flip(b);
                    let g = self.parent(p);
                    if g.is_nil() {
                        return;
                    }
                    dir = self.side_of(p);
                    p = g;
                }
            }
        }
    }
}
