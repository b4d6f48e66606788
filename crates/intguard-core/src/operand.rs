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

//! Kind-tagged integer values.
//!
//! A `TypedOperand` is a value snapshot paired with the kind it was declared
//! with. The value is held widened to `i128`, which is strictly wider than every
//! supported kind, and always lies inside the kind's range. Casting never
//! mutates an operand; it produces a new one.

use crate::kind::IntegerKind;
use crate::num::primitive::Primitive;
use crate::platform::{KindAlias, PlatformModel};

/// An integer value tagged with its declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypedOperand {
    kind: IntegerKind,
    value: i128,
}

impl TypedOperand {
    /// Creates a new operand.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not representable in `kind`. A mismatch between the
    /// declared kind and the value is a caller bug, not a runtime condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::kind::IntegerKind;
    /// # use intguard_core::operand::TypedOperand;
    /// let op = TypedOperand::new(IntegerKind::S16, -300);
    /// assert_eq!(op.value(), -300);
    /// ```
    #[inline]
    pub fn new(kind: IntegerKind, value: i128) -> Self {
        assert!(
            kind.contains(value),
            "called `TypedOperand::new` with value {} outside the range of {}",
            value,
            kind
        );
        Self { kind, value }
    }

    /// Creates a new operand if `value` is representable in `kind`.
    #[inline]
    pub fn try_new(kind: IntegerKind, value: i128) -> Option<Self> {
        kind.contains(value).then_some(Self { kind, value })
    }

    /// Creates an operand without checking the range in release builds.
    ///
    /// The caller must ensure `value` is representable in `kind`.
    #[inline]
    pub(crate) fn new_unchecked(kind: IntegerKind, value: i128) -> Self {
        debug_assert!(
            kind.contains(value),
            "called `TypedOperand::new_unchecked` with value {} outside the range of {}",
            value,
            kind
        );
        Self { kind, value }
    }

    /// Decodes a value passed as 64 raw bits, the way a C caller widens any
    /// integer argument: signed kinds are read as two's complement `i64`,
    /// unsigned kinds as `u64`.
    ///
    /// Returns `None` if the decoded value does not fit `kind`, i.e. the bits were
    /// not produced by widening a value of that kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::kind::IntegerKind;
    /// # use intguard_core::operand::TypedOperand;
    /// let op = TypedOperand::from_bits(IntegerKind::S8, (-5i64) as u64).unwrap();
    /// assert_eq!(op.value(), -5);
    /// assert!(TypedOperand::from_bits(IntegerKind::U8, 256).is_none());
    /// ```
    #[inline]
    pub fn from_bits(kind: IntegerKind, bits: u64) -> Option<Self> {
        let value = if kind.is_signed() {
            bits as i64 as i128
        } else {
            bits as i128
        };
        Self::try_new(kind, value)
    }

    /// Creates an operand whose kind is named by a platform alias.
    ///
    /// Returns `None` if `value` does not fit the resolved kind.
    #[inline]
    pub fn from_alias(alias: KindAlias, value: i128, platform: &PlatformModel) -> Option<Self> {
        Self::try_new(platform.resolve(alias), value)
    }

    #[inline]
    pub const fn kind(&self) -> IntegerKind {
        self.kind
    }

    #[inline]
    pub const fn value(&self) -> i128 {
        self.value
    }

    /// Encodes the value as 64 raw bits. Inverse of `from_bits`.
    #[inline]
    pub const fn to_bits(&self) -> u64 {
        if self.kind.is_signed() {
            self.value as i64 as u64
        } else {
            self.value as u64
        }
    }

    /// Converts the value into a primitive of the matching Rust type.
    ///
    /// Returns `None` if the value does not fit `T`, regardless of whether the
    /// kinds agree.
    #[inline]
    pub fn to_primitive<T: Primitive>(&self) -> Option<T> {
        T::narrow(self.value)
    }
}

impl std::fmt::Display for TypedOperand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

macro_rules! operand_from_primitive {
    ($($t:ty)*) => {$(
        impl From<$t> for TypedOperand {
            #[inline]
            fn from(v: $t) -> Self {
                Self::new_unchecked(<$t as Primitive>::KIND, v.widen())
            }
        }
    )*}
}

operand_from_primitive!(u8 u16 u32 u64 usize i8 i16 i32 i64 isize);
