//! Text stored as UTF-16 code units and indexed by code point.
//!
//! Equality is code-unit equality. Every position-based operation counts
//! characters: a surrogate pair is one character, and a lone surrogate is
//! also one character (its own code unit value).

use std::fmt;

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Text {
    units: Vec<u16>,
}

impl Text {
    pub fn new(s: &str) -> Self {
        Text {
            units: s.encode_utf16().collect(),
        }
    }

    /// Build from raw code units; unpaired surrogates are kept as-is.
    pub fn from_units(units: Vec<u16>) -> Self {
        Text { units }
    }

    pub fn units(&self) -> &[u16] {
        &self.units
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of characters (not code units).
    pub fn size(&self) -> usize {
        char::decode_utf16(self.units.iter().copied()).count()
    }

    /// Code point of the `n`th character.
    ///
    /// Non-negative `n` counts from the start (0-based); negative `n` counts
    /// from the end (`-1` is the last character). Out of range in either
    /// direction is `None`.
    pub fn char_code_at(&self, n: i64) -> Option<u32> {
        let start = if n >= 0 {
            let mut pos = 0;
            for _ in 0..n.unsigned_abs() {
                pos = self.next_char_start(pos)?;
            }
            pos
        } else {
            let mut pos = self.units.len();
            for _ in 0..n.unsigned_abs() {
                pos = self.prev_char_start(pos)?;
            }
            pos
        };
        self.code_point_at(start)
    }

    /// Start of the character after the one at `pos`.
    fn next_char_start(&self, pos: usize) -> Option<usize> {
        let unit = *self.units.get(pos)?;
        let width = if HIGH_SURROGATES.contains(&unit) && self.is_low_at(pos.checked_add(1)?) {
            2
        } else {
            1
        };
        pos.checked_add(width)
    }

    /// Start of the character ending just before `pos`.
    fn prev_char_start(&self, pos: usize) -> Option<usize> {
        let last = pos.checked_sub(1)?;
        let unit = *self.units.get(last)?;
        if LOW_SURROGATES.contains(&unit) {
            if let Some(high) = last.checked_sub(1) {
                if self.is_high_at(high) {
                    return Some(high);
                }
            }
        }
        Some(last)
    }

    fn code_point_at(&self, pos: usize) -> Option<u32> {
        let unit = *self.units.get(pos)?;
        if HIGH_SURROGATES.contains(&unit) {
            if let Some(&low) = pos.checked_add(1).and_then(|p| self.units.get(p)) {
                if let Some(Ok(c)) = char::decode_utf16([unit, low]).next() {
                    return Some(u32::from(c));
                }
            }
        }
        Some(u32::from(unit))
    }

    fn is_low_at(&self, pos: usize) -> bool {
        self.units
            .get(pos)
            .is_some_and(|u| LOW_SURROGATES.contains(u))
    }

    fn is_high_at(&self, pos: usize) -> bool {
        self.units
            .get(pos)
            .is_some_and(|u| HIGH_SURROGATES.contains(u))
    }

    /// A new text holding `self` followed by `other`.
    #[must_use]
    pub fn concat(&self, other: &Text) -> Text {
        let mut units = Vec::with_capacity(self.units.len().saturating_add(other.units.len()));
        units.extend_from_slice(&self.units);
        units.extend_from_slice(&other.units);
        Text { units }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.units.iter().copied()) {
            write!(f, "{}", c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::new(s)
    }
}
