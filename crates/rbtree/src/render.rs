//! Level-order dump for debugging.

use std::fmt;

use crate::node::{Color, Id};
use crate::tree::RbTree;

impl<K> RbTree<K> {
    /// Rows of the tree from the root down. Absent children of a row show up
    /// as `None` in the next one; the dump ends with the first row below
    /// which nothing is present.
    ///
    /// Row `i` has `2^i` entries, so this is only meant for small trees. Use
    /// [`levels_to`](Self::levels_to) to bound the output.
    pub fn levels(&self) -> Vec<Vec<Option<(&K, Color)>>> {
        self.levels_to(usize::MAX)
    }

    /// Like [`levels`](Self::levels), stopping after at most `max_rows` rows.
    pub fn levels_to(&self, max_rows: usize) -> Vec<Vec<Option<(&K, Color)>>> {
        let mut rows = Vec::new();
        if self.root.is_nil() || max_rows == 0 {
            return rows;
        }
        let mut level = vec![self.root];
        loop {
            let mut next = Vec::with_capacity(level.len() * 2);
            let mut row = Vec::with_capacity(level.len());
            let mut more = false;
            for &x in &level {
                if x.is_nil() {
                    row.push(None);
                    next.extend([Id::NIL, Id::NIL]);
                } else {
                    let node = self.node(x);
                    row.push(Some((&node.key, node.color)));
                    next.extend(node.ch);
                    more |= node.ch.iter().any(|c| !c.is_nil());
                }
            }
            rows.push(row);
            if !more || rows.len() == max_rows {
                return rows;
            }
            level = next;
        }
    }
}

/// One row per level, `<key><R|B>` per node and `--` for an absent child.
/// A precision caps the number of rows: `format!("{tree:.3}")`.
impl<K: fmt::Display> fmt::Display for RbTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_rows = f.precision().unwrap_or(usize::MAX);
        for row in self.levels_to(max_rows) {
            let mut first = true;
            for entry in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                match entry {
                    Some((key, color)) => write!(f, "{key}{color}")?,
                    None => f.write_str("--")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
