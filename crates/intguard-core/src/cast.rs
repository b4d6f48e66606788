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

//! Cast-safety checks between integer kinds.
//!
//! A cast from kind `F` to kind `T` is lossless exactly for the values in the
//! overlap of both ranges. Every comparison happens in `i128`, so neither the
//! source value nor the target bounds can overflow the checker itself.

use crate::error::ArithError;
use crate::kind::IntegerKind;
use crate::math::interval::ClosedInterval;
use crate::operand::TypedOperand;

/// Returns the values of `from` that survive a cast to `to`, or `None` if no
/// value of `from` is representable in `to`.
///
/// # Examples
///
/// ```rust
/// # use intguard_core::cast::castable_range;
/// # use intguard_core::kind::IntegerKind;
/// # use intguard_core::math::interval::ClosedInterval;
/// // Only the non-negative half of s8 fits u8.
/// assert_eq!(
///     castable_range(IntegerKind::S8, IntegerKind::U8),
///     Some(ClosedInterval::new(0, 127))
/// );
/// ```
#[inline]
pub fn castable_range(from: IntegerKind, to: IntegerKind) -> Option<ClosedInterval<i128>> {
    from.range().intersection(to.range())
}

/// Returns `true` if every value of `from` is representable in `to`.
#[inline]
pub fn is_widening(from: IntegerKind, to: IntegerKind) -> bool {
    to.range().contains_interval(from.range())
}

/// Returns `true` if `operand` can be cast to `target` without loss.
///
/// # Examples
///
/// ```rust
/// # use intguard_core::cast::can_cast;
/// # use intguard_core::kind::IntegerKind;
/// # use intguard_core::operand::TypedOperand;
/// assert!(!can_cast(TypedOperand::new(IntegerKind::U32, 300), IntegerKind::U8));
/// assert!(!can_cast(TypedOperand::new(IntegerKind::S32, -1), IntegerKind::U32));
/// assert!(can_cast(TypedOperand::new(IntegerKind::U8, 10), IntegerKind::S32));
/// ```
#[inline]
pub fn can_cast(operand: TypedOperand, target: IntegerKind) -> bool {
    castable_range(operand.kind(), target).is_some_and(|r| r.contains(operand.value()))
}

/// Casts `operand` to `target`, failing with `ArithError::UnsafeCast` if the
/// value would change.
#[inline]
pub fn cast(operand: TypedOperand, target: IntegerKind) -> Result<TypedOperand, ArithError> {
    if operand.kind() == target {
        return Ok(operand);
    }
    if can_cast(operand, target) {
        Ok(TypedOperand::new_unchecked(target, operand.value()))
    } else {
        Err(ArithError::UnsafeCast {
            value: operand.value(),
            from: operand.kind(),
            to: target,
        })
    }
}
