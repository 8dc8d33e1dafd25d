use std::fmt;

pub(crate) const LEFT: usize = 0;
pub(crate) const RIGHT: usize = 1;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Id(u32);

impl Id {
    pub(crate) const NIL: Self = Self(u32::MAX);

    #[inline(always)]
    pub(crate) fn is_nil(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline(always)]
    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

#[inline(always)]
pub(crate) fn id(v: usize) -> Id {
    debug_assert!(v < u32::MAX as usize);
    Id(v as u32)
}

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub(crate) fn flipped(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// `'R'` or `'B'`, as printed by the renderer.
    pub fn tag(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) ch: [Id; 2],
    pub(crate) p: Id,
    pub(crate) color: Color,
    pub(crate) key: K,
}

impl<K> Node<K> {
    /// Fresh nodes are red and unlinked.
    pub(crate) fn new(key: K) -> Self {
        Self {
            ch: [Id::NIL, Id::NIL],
            p: Id::NIL,
            color: Color::Red,
            key,
        }
    }
}
