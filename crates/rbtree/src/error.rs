use thiserror::Error;

/// Returned by [`RbTree::insert`](crate::RbTree::insert) when the key is
/// already present. The rejected key is handed back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key {key:?} is already present")]
pub struct DuplicateKeyError<K> {
    key: K,
}

impl<K> DuplicateKeyError<K> {
    pub(crate) fn new(key: K) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_key(self) -> K {
        self.key
    }
}

/// First broken invariant found by [`RbTree::validate`](crate::RbTree::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("the root is red")]
    RedRoot,
    #[error("red node at depth {depth} has a red child")]
    RedChildOfRed { depth: usize },
    #[error("black height differs below depth {depth}: {left} on the left, {right} on the right")]
    BlackHeightMismatch {
        depth: usize,
        left: usize,
        right: usize,
    },
    #[error("keys out of order at depth {depth}")]
    OutOfOrder { depth: usize },
    #[error("parent link of the node at depth {depth} does not point back")]
    BrokenParentLink { depth: usize },
    #[error("{reachable} nodes reachable from the root, {allocated} allocated")]
    Unreachable { reachable: usize, allocated: usize },
}
