//! Interned string identifier.

use std::fmt;

/// Interned string identifier.
///
/// A `Name` is an index into a `StringInterner`. Two names are equal iff the
/// strings they were interned from are equal, so tag and field comparisons
/// are a single integer compare.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);
    /// Pre-interned `true` tag.
    pub const TRUE: Name = Name(1);
    /// Pre-interned `false` tag.
    pub const FALSE: Name = Name(2);
    /// Pre-interned `some` tag (present optional).
    pub const SOME: Name = Name(3);
    /// Pre-interned `none` tag (absent optional).
    pub const NONE: Name = Name(4);
    /// Pre-interned `ok` tag.
    pub const OK: Name = Name(5);
    /// Pre-interned `error` tag.
    pub const ERROR: Name = Name(6);

    /// Strings interned at construction, in `Name` index order.
    pub(crate) const PRE_INTERNED: [&'static str; 7] =
        ["", "true", "false", "some", "none", "ok", "error"];

    /// Create from raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into interner storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
