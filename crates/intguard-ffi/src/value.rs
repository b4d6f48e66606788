// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Value types shared by every exported function.

use intguard_core::cast::cast;
use intguard_core::dest::Destination;
use intguard_core::error::ArithError;
use intguard_core::kind::IntegerKind;
use intguard_core::operand::TypedOperand;
use intguard_core::platform::{KindAlias, PlatformModel};

/// FFI-compatible integer kind.
///
/// The first eight variants are the canonical kinds. The rest name C types and
/// are resolved to a canonical kind with the data model this library was
/// compiled for.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntguardKind {
    U8 = 0,
    S8 = 1,
    U16 = 2,
    S16 = 3,
    U32 = 4,
    S32 = 5,
    U64 = 6,
    S64 = 7,
    Char = 16,
    SignedChar = 17,
    UnsignedChar = 18,
    Short = 19,
    UnsignedShort = 20,
    Int = 21,
    UnsignedInt = 22,
    Long = 23,
    UnsignedLong = 24,
    LongLong = 25,
    UnsignedLongLong = 26,
    Size = 27,
    SignedSize = 28,
}

impl IntguardKind {
    /// Returns the C type alias this variant names, if it is not canonical.
    #[inline]
    pub fn alias(self) -> Option<KindAlias> {
        match self {
            Self::Char => Some(KindAlias::Char),
            Self::SignedChar => Some(KindAlias::SignedChar),
            Self::UnsignedChar => Some(KindAlias::UnsignedChar),
            Self::Short => Some(KindAlias::Short),
            Self::UnsignedShort => Some(KindAlias::UnsignedShort),
            Self::Int => Some(KindAlias::Int),
            Self::UnsignedInt => Some(KindAlias::UnsignedInt),
            Self::Long => Some(KindAlias::Long),
            Self::UnsignedLong => Some(KindAlias::UnsignedLong),
            Self::LongLong => Some(KindAlias::LongLong),
            Self::UnsignedLongLong => Some(KindAlias::UnsignedLongLong),
            Self::Size => Some(KindAlias::Size),
            Self::SignedSize => Some(KindAlias::SignedSize),
            _ => None,
        }
    }

    /// Resolves to a canonical kind using the host platform model.
    #[inline]
    pub fn resolve(self) -> IntegerKind {
        const HOST: PlatformModel = PlatformModel::host();
        match self {
            Self::U8 => IntegerKind::U8,
            Self::S8 => IntegerKind::S8,
            Self::U16 => IntegerKind::U16,
            Self::S16 => IntegerKind::S16,
            Self::U32 => IntegerKind::U32,
            Self::S32 => IntegerKind::S32,
            Self::U64 => IntegerKind::U64,
            Self::S64 => IntegerKind::S64,
            Self::Char => HOST.resolve(KindAlias::Char),
            Self::SignedChar => HOST.resolve(KindAlias::SignedChar),
            Self::UnsignedChar => HOST.resolve(KindAlias::UnsignedChar),
            Self::Short => HOST.resolve(KindAlias::Short),
            Self::UnsignedShort => HOST.resolve(KindAlias::UnsignedShort),
            Self::Int => HOST.resolve(KindAlias::Int),
            Self::UnsignedInt => HOST.resolve(KindAlias::UnsignedInt),
            Self::Long => HOST.resolve(KindAlias::Long),
            Self::UnsignedLong => HOST.resolve(KindAlias::UnsignedLong),
            Self::LongLong => HOST.resolve(KindAlias::LongLong),
            Self::UnsignedLongLong => HOST.resolve(KindAlias::UnsignedLongLong),
            Self::Size => HOST.resolve(KindAlias::Size),
            Self::SignedSize => HOST.resolve(KindAlias::SignedSize),
        }
    }
}

impl From<IntegerKind> for IntguardKind {
    #[inline]
    fn from(kind: IntegerKind) -> Self {
        match kind {
            IntegerKind::U8 => Self::U8,
            IntegerKind::S8 => Self::S8,
            IntegerKind::U16 => Self::U16,
            IntegerKind::S16 => Self::S16,
            IntegerKind::U32 => Self::U32,
            IntegerKind::S32 => Self::S32,
            IntegerKind::U64 => Self::U64,
            IntegerKind::S64 => Self::S64,
        }
    }
}

impl std::fmt::Display for IntguardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.alias() {
            Some(alias) => write!(f, "{:?} ({})", alias, self.resolve()),
            None => write!(f, "{}", self.resolve()),
        }
    }
}

/// An integer value passed across the C boundary.
///
/// `bits` holds the value widened to 64 bits the way C widens it: sign-extended
/// for signed kinds, zero-extended for unsigned ones. When used as a
/// destination, only `kind` is read and `bits` is overwritten on success.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntguardValue {
    pub kind: IntguardKind,
    pub bits: u64,
}

impl IntguardValue {
    #[inline]
    pub fn new(kind: IntguardKind, bits: u64) -> Self {
        Self { kind, bits }
    }

    /// Decodes the value.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is not a widened value of `kind`. `caller` names the
    /// exported function in the panic message.
    #[inline]
    pub fn to_operand(self, caller: &str) -> TypedOperand {
        match TypedOperand::from_bits(self.kind.resolve(), self.bits) {
            Some(operand) => operand,
            None => panic!(
                "called `{}` with bits {:#x} that do not encode a value of kind {}",
                caller, self.bits, self.kind
            ),
        }
    }
}

impl From<TypedOperand> for IntguardValue {
    #[inline]
    fn from(operand: TypedOperand) -> Self {
        Self::new(operand.kind().into(), operand.to_bits())
    }
}

impl Destination for IntguardValue {
    #[inline]
    fn kind(&self) -> IntegerKind {
        self.kind.resolve()
    }

    /// # Panics
    ///
    /// Panics if the current bits do not encode a value of the slot's kind.
    #[inline]
    fn load(&self) -> TypedOperand {
        self.to_operand("load")
    }

    #[inline]
    fn store(&mut self, value: TypedOperand) -> Result<(), ArithError> {
        self.bits = cast(value, self.kind.resolve())?.to_bits();
        Ok(())
    }
}
