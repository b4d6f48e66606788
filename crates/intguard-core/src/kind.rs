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

//! # Integer Kinds
//!
//! The closed set of integer kinds the engine reasons about. A kind is a
//! signedness plus one of four canonical widths; its representable range is
//! derived on demand and never stored.
//!
//! Every kind carries a short code (`u8`, `s16`, ...) used by the expression
//! grammar and by `Display`/`FromStr`.

use crate::math::interval::ClosedInterval;

/// One of the four canonical bit widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    /// Returns the number of bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Returns the canonical width with exactly `bits` bits, if there is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::kind::Width;
    /// assert_eq!(Width::from_bits(32), Some(Width::W32));
    /// assert_eq!(Width::from_bits(24), None);
    /// ```
    #[inline]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::W8),
            16 => Some(Self::W16),
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }

    /// Returns the width occupying `bytes` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is not 1, 2, 4 or 8. Used in const context to resolve
    /// host type sizes, where this turns an unsupported target into a build error.
    #[inline]
    pub const fn from_bytes(bytes: usize) -> Self {
        match bytes {
            1 => Self::W8,
            2 => Self::W16,
            4 => Self::W32,
            8 => Self::W64,
            _ => panic!("unsupported integer size"),
        }
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// An integer kind: signedness and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntegerKind {
    U8,
    S8,
    U16,
    S16,
    U32,
    S32,
    U64,
    S64,
}

impl IntegerKind {
    /// All kinds, narrowest first, unsigned before signed at each width.
    pub const ALL: [IntegerKind; 8] = [
        Self::U8,
        Self::S8,
        Self::U16,
        Self::S16,
        Self::U32,
        Self::S32,
        Self::U64,
        Self::S64,
    ];

    /// Returns the kind with the given signedness and width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::kind::{IntegerKind, Width};
    /// assert_eq!(IntegerKind::new(true, Width::W16), IntegerKind::S16);
    /// assert_eq!(IntegerKind::new(false, Width::W64), IntegerKind::U64);
    /// ```
    #[inline]
    pub const fn new(signed: bool, width: Width) -> Self {
        match (signed, width) {
            (false, Width::W8) => Self::U8,
            (true, Width::W8) => Self::S8,
            (false, Width::W16) => Self::U16,
            (true, Width::W16) => Self::S16,
            (false, Width::W32) => Self::U32,
            (true, Width::W32) => Self::S32,
            (false, Width::W64) => Self::U64,
            (true, Width::W64) => Self::S64,
        }
    }

    #[inline]
    pub const fn width(self) -> Width {
        match self {
            Self::U8 | Self::S8 => Width::W8,
            Self::U16 | Self::S16 => Width::W16,
            Self::U32 | Self::S32 => Width::W32,
            Self::U64 | Self::S64 => Width::W64,
        }
    }

    /// Returns the width in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.width().bits()
    }

    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::S8 | Self::S16 | Self::S32 | Self::S64)
    }

    /// Returns the smallest representable value, widened to `i128`.
    #[inline]
    pub const fn min(self) -> i128 {
        match self {
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => 0,
            Self::S8 => i8::MIN as i128,
            Self::S16 => i16::MIN as i128,
            Self::S32 => i32::MIN as i128,
            Self::S64 => i64::MIN as i128,
        }
    }

    /// Returns the largest representable value, widened to `i128`.
    #[inline]
    pub const fn max(self) -> i128 {
        match self {
            Self::U8 => u8::MAX as i128,
            Self::S8 => i8::MAX as i128,
            Self::U16 => u16::MAX as i128,
            Self::S16 => i16::MAX as i128,
            Self::U32 => u32::MAX as i128,
            Self::S32 => i32::MAX as i128,
            Self::U64 => u64::MAX as i128,
            Self::S64 => i64::MAX as i128,
        }
    }

    /// Returns the closed range `[min, max]` of this kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::kind::IntegerKind;
    /// let range = IntegerKind::S8.range();
    /// assert_eq!((range.start(), range.end()), (-128, 127));
    /// ```
    #[inline]
    pub fn range(self) -> ClosedInterval<i128> {
        ClosedInterval::new(self.min(), self.max())
    }

    /// Returns `true` if `value` is representable in this kind.
    #[inline]
    pub fn contains(self, value: i128) -> bool {
        self.range().contains(value)
    }

    /// Returns the short code used by the expression grammar.
    #[inline]
    pub const fn code(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::S8 => "s8",
            Self::U16 => "u16",
            Self::S16 => "s16",
            Self::U32 => "u32",
            Self::S32 => "s32",
            Self::U64 => "u64",
            Self::S64 => "s64",
        }
    }

    /// Looks up a kind by its short code.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }
}

impl std::fmt::Display for IntegerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The error returned when a string is not a kind code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown integer kind code '{0}'")]
pub struct UnknownKindCode(pub String);

impl std::str::FromStr for IntegerKind {
    type Err = UnknownKindCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownKindCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_match_primitives() {
        assert_eq!(IntegerKind::U8.range(), ClosedInterval::new(0, 255));
        assert_eq!(IntegerKind::S8.range(), ClosedInterval::new(-128, 127));
        assert_eq!(IntegerKind::U16.max(), u16::MAX as i128);
        assert_eq!(IntegerKind::S16.min(), i16::MIN as i128);
        assert_eq!(IntegerKind::U32.max(), u32::MAX as i128);
        assert_eq!(IntegerKind::S32.min(), i32::MIN as i128);
        assert_eq!(IntegerKind::U64.max(), u64::MAX as i128);
        assert_eq!(IntegerKind::S64.min(), i64::MIN as i128);
        assert_eq!(IntegerKind::S64.max(), i64::MAX as i128);
    }

    #[test]
    fn test_width_and_signedness() {
        for kind in IntegerKind::ALL {
            assert_eq!(IntegerKind::new(kind.is_signed(), kind.width()), kind);
        }
        assert_eq!(IntegerKind::S32.bits(), 32);
        assert!(IntegerKind::S8.is_signed());
        assert!(!IntegerKind::U64.is_signed());
    }

    #[test]
    fn test_unsigned_ranges_start_at_zero() {
        for kind in IntegerKind::ALL.into_iter().filter(|k| !k.is_signed()) {
            assert_eq!(kind.min(), 0);
            assert_eq!(kind.max(), (1i128 << kind.bits()) - 1);
        }
    }

    #[test]
    fn test_signed_ranges_are_twos_complement() {
        for kind in IntegerKind::ALL.into_iter().filter(|k| k.is_signed()) {
            assert_eq!(kind.min(), -(1i128 << (kind.bits() - 1)));
            assert_eq!(kind.max(), (1i128 << (kind.bits() - 1)) - 1);
        }
    }

    #[test]
    fn test_code_round_trip() {
        for kind in IntegerKind::ALL {
            assert_eq!(IntegerKind::from_code(kind.code()), Some(kind));
            assert_eq!(kind.to_string().parse::<IntegerKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(IntegerKind::from_code("i32"), None);
        assert_eq!(
            "u128".parse::<IntegerKind>(),
            Err(UnknownKindCode("u128".to_string()))
        );
    }

    #[test]
    fn test_width_from_bits_and_bytes() {
        assert_eq!(Width::from_bits(8), Some(Width::W8));
        assert_eq!(Width::from_bits(128), None);
        assert_eq!(Width::from_bytes(4), Width::W32);
        assert_eq!(Width::W64.to_string(), "64");
    }

    #[test]
    #[should_panic(expected = "unsupported integer size")]
    fn test_width_from_bytes_rejects_odd_sizes() {
        let _ = Width::from_bytes(3);
    }
}
