use crate::error::DuplicateKeyError;
use crate::node::{Color, LEFT, RIGHT};
use crate::tree::RbTree;

impl<K: Ord> RbTree<K> {
    /// Inserts `key`, rebalancing top-down on the way to the attachment point.
    ///
    /// Every black node with two red children met on the way is split, so the
    /// new red leaf never lands under a node whose sibling is red. A duplicate
    /// is rejected after any splits already made; those keep all invariants.
    pub fn insert(&mut self, key: K) -> Result<(), DuplicateKeyError<K>> {
        if self.root.is_nil() {
            let x = self.alloc(key);
            self.node_mut(x).color = Color::Black;
            self.root = x;
            return Ok(());
        }

        let mut cur = self.root;
        let dir = loop {
            if self.is_split_candidate(cur) {
                self.recolor_on_split(cur);
                let p = self.parent(cur);
                if self.is_red(cur) && self.is_red(p) {
                    self.resolve_red_red(cur);
                }
            }

            let dir = match key.cmp(&self.node(cur).key) {
                std::cmp::Ordering::Less => LEFT,
                std::cmp::Ordering::Greater => RIGHT,
                std::cmp::Ordering::Equal => {
                    log::debug!("insert rejected a duplicate key");
                    return Err(DuplicateKeyError::new(key));
                }
            };
            let next = self.child(cur, dir);
            if next.is_nil() {
                break dir;
            }
            cur = next;
        };

        let x = self.alloc(key);
        self.node_mut(cur).ch[dir] = x;
        self.node_mut(x).p = cur;
        if self.is_red(cur) {
            self.resolve_red_red(x);
        }
        Ok(())
    }
}
