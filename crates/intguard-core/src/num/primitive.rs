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

use crate::kind::{IntegerKind, Width};
use num_traits::{NumCast, PrimInt};

/// A Rust primitive integer type with a statically known `IntegerKind`.
///
/// This is the bridge between native integers and the tagged engine: the kind
/// of a primitive is inferred from its type, so callers never tag it by hand.
/// `isize` and `usize` resolve through the pointer width of the target.
///
/// # Examples
///
/// ```rust
/// # use intguard_core::kind::IntegerKind;
/// # use intguard_core::num::primitive::Primitive;
/// assert_eq!(<u16 as Primitive>::KIND, IntegerKind::U16);
/// assert_eq!(200u8.widen(), 200);
/// assert_eq!(<u8 as Primitive>::narrow(256), None);
/// ```
pub trait Primitive: PrimInt + NumCast {
    /// The kind a value of this type carries.
    const KIND: IntegerKind;

    /// Widens the value to the engine's intermediate representation. Lossless.
    fn widen(self) -> i128;

    /// Narrows an intermediate value back, returning `None` if it does not fit.
    #[inline]
    fn narrow(value: i128) -> Option<Self> {
        <Self as NumCast>::from(value)
    }
}

macro_rules! primitive_impl {
    ($t:ty, $kind:expr) => {
        impl Primitive for $t {
            const KIND: IntegerKind = $kind;

            #[inline(always)]
            fn widen(self) -> i128 {
                self as i128
            }
        }
    };
}

primitive_impl!(u8, IntegerKind::U8);
primitive_impl!(u16, IntegerKind::U16);
primitive_impl!(u32, IntegerKind::U32);
primitive_impl!(u64, IntegerKind::U64);
primitive_impl!(
    usize,
    IntegerKind::new(false, Width::from_bytes(std::mem::size_of::<usize>()))
);

primitive_impl!(i8, IntegerKind::S8);
primitive_impl!(i16, IntegerKind::S16);
primitive_impl!(i32, IntegerKind::S32);
primitive_impl!(i64, IntegerKind::S64);
primitive_impl!(
    isize,
    IntegerKind::new(true, Width::from_bytes(std::mem::size_of::<isize>()))
);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_kind_matches_type<T: Primitive>() {
        assert_eq!(T::KIND.min(), T::min_value().widen());
        assert_eq!(T::KIND.max(), T::max_value().widen());
    }

    #[test]
    fn test_kinds_match_type_bounds() {
        assert_kind_matches_type::<u8>();
        assert_kind_matches_type::<u16>();
        assert_kind_matches_type::<u32>();
        assert_kind_matches_type::<u64>();
        assert_kind_matches_type::<usize>();
        assert_kind_matches_type::<i8>();
        assert_kind_matches_type::<i16>();
        assert_kind_matches_type::<i32>();
        assert_kind_matches_type::<i64>();
        assert_kind_matches_type::<isize>();
    }

    #[test]
    fn test_narrow_checks_range() {
        assert_eq!(<u8 as Primitive>::narrow(255), Some(255u8));
        assert_eq!(<u8 as Primitive>::narrow(-1), None);
        assert_eq!(<i8 as Primitive>::narrow(-128), Some(-128i8));
        assert_eq!(<i8 as Primitive>::narrow(128), None);
        assert_eq!(
            <u64 as Primitive>::narrow(u64::MAX as i128),
            Some(u64::MAX)
        );
        assert_eq!(<i64 as Primitive>::narrow(u64::MAX as i128), None);
    }

    #[test]
    fn test_widen_preserves_sign() {
        assert_eq!((-1i64).widen(), -1);
        assert_eq!(u64::MAX.widen(), 18_446_744_073_709_551_615);
    }
}
