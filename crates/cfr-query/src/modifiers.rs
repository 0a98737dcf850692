//! Modifier lookups.

use bitflags::bitflags;
use cfr_syntax::{Modifier, ModifierKind};

/// True when any modifier in the list has `kind`.
#[inline]
pub fn has_modifier(modifiers: &[Modifier], kind: ModifierKind) -> bool {
    modifiers.iter().any(|modifier| modifier.kind == kind)
}

#[inline]
pub fn is_async(modifiers: &[Modifier]) -> bool {
    has_modifier(modifiers, ModifierKind::Async)
}

#[inline]
pub fn is_static(modifiers: &[Modifier]) -> bool {
    has_modifier(modifiers, ModifierKind::Static)
}

#[inline]
pub fn is_partial(modifiers: &[Modifier]) -> bool {
    has_modifier(modifiers, ModifierKind::Partial)
}

#[inline]
pub fn is_abstract(modifiers: &[Modifier]) -> bool {
    has_modifier(modifiers, ModifierKind::Abstract)
}

#[inline]
pub fn is_readonly(modifiers: &[Modifier]) -> bool {
    has_modifier(modifiers, ModifierKind::ReadOnly)
}

bitflags! {
    /// Set summary of a modifier list, for callers testing several kinds.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const INTERNAL = 1 << 3;
        const FILE = 1 << 4;
        const STATIC = 1 << 5;
        const ASYNC = 1 << 6;
        const PARTIAL = 1 << 7;
        const ABSTRACT = 1 << 8;
        const VIRTUAL = 1 << 9;
        const OVERRIDE = 1 << 10;
        const SEALED = 1 << 11;
        const NEW = 1 << 12;
        const EXTERN = 1 << 13;
        const UNSAFE = 1 << 14;
        const READONLY = 1 << 15;
        const CONST = 1 << 16;
        const VOLATILE = 1 << 17;
        const REQUIRED = 1 << 18;

        const ACCESSIBILITY = Self::PUBLIC.bits()
            | Self::PRIVATE.bits()
            | Self::PROTECTED.bits()
            | Self::INTERNAL.bits()
            | Self::FILE.bits();
    }
}

impl ModifierFlags {
    pub const fn from_kind(kind: ModifierKind) -> Self {
        match kind {
            ModifierKind::Public => Self::PUBLIC,
            ModifierKind::Private => Self::PRIVATE,
            ModifierKind::Protected => Self::PROTECTED,
            ModifierKind::Internal => Self::INTERNAL,
            ModifierKind::File => Self::FILE,
            ModifierKind::Static => Self::STATIC,
            ModifierKind::Async => Self::ASYNC,
            ModifierKind::Partial => Self::PARTIAL,
            ModifierKind::Abstract => Self::ABSTRACT,
            ModifierKind::Virtual => Self::VIRTUAL,
            ModifierKind::Override => Self::OVERRIDE,
            ModifierKind::Sealed => Self::SEALED,
            ModifierKind::New => Self::NEW,
            ModifierKind::Extern => Self::EXTERN,
            ModifierKind::Unsafe => Self::UNSAFE,
            ModifierKind::ReadOnly => Self::READONLY,
            ModifierKind::Const => Self::CONST,
            ModifierKind::Volatile => Self::VOLATILE,
            ModifierKind::Required => Self::REQUIRED,
        }
    }

    pub fn from_modifiers(modifiers: &[Modifier]) -> Self {
        modifiers
            .iter()
            .fold(Self::empty(), |flags, modifier| {
                flags | Self::from_kind(modifier.kind)
            })
    }
}
