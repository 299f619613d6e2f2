//! Dense discriminant codes for declared enums.
//!
//! A declared enum's variants are ordered by name and each variant's code is
//! its position in that order. Codes are therefore pairwise distinct within
//! one enum and do not depend on declaration order, so every compilation of
//! the same declaration assigns the same codes.

use std::fmt;

use crate::{Name, StringInterner};

/// Index of an enum layout in an `EnumRegistry`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct EnumId(u32);

impl EnumId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        EnumId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for EnumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumId({})", self.0)
    }
}

/// Error building an enum layout from a declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("enum `{enum_name}` declares variant `{variant}` more than once")]
    DuplicateVariant { enum_name: String, variant: String },
    #[error("enum `{enum_name}` declares no variants")]
    Empty { enum_name: String },
    #[error("enum `{enum_name}` has {count} variants, more than a discriminant code can hold")]
    TooManyVariants { enum_name: String, count: usize },
}

/// One declared variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VariantDef {
    pub name: Name,
    /// Number of payload values the variant carries.
    pub arity: usize,
}

/// Variant table of one declared enum, sorted by variant name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumLayout {
    name: Name,
    variants: Vec<VariantDef>,
}

impl EnumLayout {
    /// Build a layout from `(variant name, payload arity)` pairs.
    pub fn new(
        name: Name,
        variants: impl IntoIterator<Item = (Name, usize)>,
        interner: &StringInterner,
    ) -> Result<Self, LayoutError> {
        let mut variants: Vec<VariantDef> = variants
            .into_iter()
            .map(|(name, arity)| VariantDef { name, arity })
            .collect();

        if variants.is_empty() {
            return Err(LayoutError::Empty {
                enum_name: interner.lookup(name).to_owned(),
            });
        }
        if u32::try_from(variants.len()).is_err() {
            return Err(LayoutError::TooManyVariants {
                enum_name: interner.lookup(name).to_owned(),
                count: variants.len(),
            });
        }

        variants.sort_by(|a, b| interner.lookup(a.name).cmp(interner.lookup(b.name)));
        if let Some(pair) = variants.windows(2).find(|w| w[0].name == w[1].name) {
            return Err(LayoutError::DuplicateVariant {
                enum_name: interner.lookup(name).to_owned(),
                variant: interner.lookup(pair[0].name).to_owned(),
            });
        }

        tracing::trace!(
            enum_name = interner.lookup(name),
            variants = variants.len(),
            "enum layout assigned"
        );
        Ok(EnumLayout { name, variants })
    }

    pub fn name(&self) -> Name {
        self.name
    }

    /// Variants in code order.
    pub fn variants(&self) -> &[VariantDef] {
        &self.variants
    }

    /// Dense code for a variant name.
    pub fn code_of(&self, variant: Name) -> Option<u32> {
        let index = self.variants.iter().position(|v| v.name == variant)?;
        u32::try_from(index).ok()
    }

    pub fn variant(&self, code: u32) -> Option<&VariantDef> {
        self.variants.get(code as usize)
    }

    /// True when no variant carries a payload, so each value is just its code.
    pub fn is_payload_free(&self) -> bool {
        self.variants.iter().all(|v| v.arity == 0)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// All enum layouts declared by one program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumRegistry {
    layouts: Vec<EnumLayout>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, layout: EnumLayout) -> EnumId {
        let index = u32::try_from(self.layouts.len())
            .unwrap_or_else(|_| panic!("enum registry exceeded u32 capacity"));
        self.layouts.push(layout);
        EnumId::new(index)
    }

    pub fn get(&self, id: EnumId) -> Option<&EnumLayout> {
        self.layouts.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
