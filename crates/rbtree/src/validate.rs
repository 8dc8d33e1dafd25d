use crate::error::InvariantViolation;
use crate::node::{Id, LEFT, RIGHT};
use crate::tree::RbTree;

impl<K: Ord> RbTree<K> {
    /// Checks every structural invariant and returns the black height
    /// (black nodes on any root-to-leaf path, the root included).
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        if self.root.is_nil() {
            if self.is_empty() {
                return Ok(0);
            }
            return Err(InvariantViolation::Unreachable {
                reachable: 0,
                allocated: self.len(),
            });
        }
        if self.is_red(self.root) {
            return Err(InvariantViolation::RedRoot);
        }
        if !self.parent(self.root).is_nil() {
            return Err(InvariantViolation::BrokenParentLink { depth: 0 });
        }
        let mut reachable = 0;
        let black_height = self.check_subtree(self.root, 0, None, None, &mut reachable)?;
        if reachable != self.len() {
            return Err(InvariantViolation::Unreachable {
                reachable,
                allocated: self.len(),
            });
        }
        Ok(black_height)
    }

    fn check_subtree(
        &self,
        x: Id,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
        reachable: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        if x.is_nil() {
            return Ok(0);
        }
        *reachable += 1;
        let node = self.node(x);
        if lower.is_some_and(|lo| node.key <= *lo) || upper.is_some_and(|hi| node.key >= *hi) {
            return Err(InvariantViolation::OutOfOrder { depth });
        }
        for c in node.ch {
            if c.is_nil() {
                continue;
            }
            if self.parent(c) != x {
                return Err(InvariantViolation::BrokenParentLink { depth: depth + 1 });
            }
            if self.is_red(x) && self.is_red(c) {
                return Err(InvariantViolation::RedChildOfRed { depth });
            }
        }
        let left = self.check_subtree(node.ch[LEFT], depth + 1, lower, Some(&node.key), reachable)?;
        let right =
            self.check_subtree(node.ch[RIGHT], depth + 1, Some(&node.key), upper, reachable)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { depth, left, right });
        }
        Ok(left + usize::from(!self.is_red(x)))
    }
}
