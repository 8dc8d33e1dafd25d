//! Helpers for the unit tests: hand-built trees and structural snapshots.

use crate::node::{Color, Id};
use crate::tree::RbTree;

/// Builds a tree by plain BST insertion of `nodes` in the given (pre)order,
/// with the colors exactly as listed. No balancing is performed.
pub(crate) fn shape(nodes: &[(i64, Color)]) -> RbTree<i64> {
    let mut tree = RbTree::new();
    for &(key, color) in nodes {
        let x = tree.alloc(key);
        tree.node_mut(x).color = color;
        if tree.root.is_nil() {
            tree.root = x;
            continue;
        }
        let mut cur = tree.root;
        loop {
            let dir = usize::from(key > tree.node(cur).key);
            let next = tree.child(cur, dir);
            if next.is_nil() {
                tree.node_mut(cur).ch[dir] = x;
                tree.node_mut(x).p = cur;
                break;
            }
            cur = next;
        }
    }
    tree
}

/// Pre-order `(key, color, parent key)` triples.
pub(crate) fn snapshot(tree: &RbTree<i64>) -> Vec<(i64, Color, Option<i64>)> {
    let mut out = Vec::with_capacity(tree.len());
    let mut stack = vec![tree.root];
    while let Some(x) = stack.pop() {
        if x.is_nil() {
            continue;
        }
        let node = tree.node(x);
        let parent = if node.p == Id::NIL {
            None
        } else {
            Some(tree.node(node.p).key)
        };
        out.push((node.key, node.color, parent));
        stack.push(node.ch[1]);
        stack.push(node.ch[0]);
    }
    out
}

pub(crate) fn keys(tree: &RbTree<i64>) -> Vec<i64> {
    tree.iter().copied().collect()
}

pub(crate) fn init_logger() {
    let _ = simplelog::TestLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
    );
}

mod tests {
    use super::*;

    #[test]
    fn logger_installs_once_and_tolerates_reinit() {
        init_logger();
        init_logger();
        assert!(log::log_enabled!(log::Level::Debug));
        let mut tree = shape(&[(2, Color::Black), (1, Color::Red)]);
        assert!(tree.insert(1).is_err());
        assert_eq!(keys(&tree), vec![1, 2]);
    }
}
