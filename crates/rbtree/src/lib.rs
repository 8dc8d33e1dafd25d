//! Red-black tree over unique ordered keys.
//!
//! Insertion splits full nodes top-down on the way to the new leaf; deletion
//! removes a node with at most one child (trading keys with the in-order
//! successor when needed) and repairs the black height bottom-up.
//!
//! ```
//! use rbtree::{Color, RbTree};
//!
//! let mut tree = RbTree::new();
//! for k in [10, 20, 30] {
//!     tree.insert(k).unwrap();
//! }
//! let root = tree.root().unwrap();
//! assert_eq!((*root.key(), root.color()), (20, Color::Black));
//! assert!(tree.insert(20).is_err());
//! assert!(tree.delete(&20));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 30]);
//! ```

mod balance;
mod cursor;
mod error;
mod insert;
mod node;
mod remove;
mod render;
mod tree;
mod validate;

#[cfg(test)]
mod testing;

pub use cursor::NodeRef;
pub use error::{DuplicateKeyError, InvariantViolation};
pub use node::Color;
pub use tree::{Iter, RbTree};
