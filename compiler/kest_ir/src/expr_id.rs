//! Expression IDs and ranges for the flat expression tree.

use std::fmt;

/// Index into an `ExprArena`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Sentinel for an absent expression (e.g. an `if` without `else`).
    pub const INVALID: ExprId = ExprId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_present(self) -> bool {
        self.0 != u32::MAX
    }

    /// `Some(self)` unless this is the sentinel.
    #[inline]
    pub const fn present(self) -> Option<ExprId> {
        if self.is_present() {
            Some(self)
        } else {
            None
        }
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_present() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// A contiguous run in one of the arena's side tables.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ListRange {
    pub start: u32,
    pub len: u32,
}

impl ListRange {
    pub const EMPTY: ListRange = ListRange { start: 0, len: 0 };

    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        ListRange { start, len }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Index range into the side table. Saturates rather than overflowing
    /// for ranges that were never produced by an arena.
    #[inline]
    pub fn as_range(self) -> std::ops::Range<usize> {
        let start = self.start as usize;
        start..start.saturating_add(self.len as usize)
    }
}
