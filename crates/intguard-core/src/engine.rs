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

//! # Binary Safety Engine
//!
//! Decides, for two values already cast to a shared target kind, whether an
//! operation can be carried out without overflow or undefined behavior, and
//! computes the result when it can.
//!
//! All arithmetic is exact in `i128`. Sums and differences of two 64-bit values
//! always fit; products may not, in which case the `i128` overflow is itself
//! proof that the target kind overflows.
//!
//! ## Semantics
//!
//! - `Div` and `Rem` truncate toward zero; the remainder takes the sign of the
//!   dividend.
//! - `Shl` rejects negative left operands and any shift that drops set bits
//!   off the top of the kind.
//! - `Shr` is an arithmetic shift: negative values stay negative.
//! - Shift amounts must lie in `0..width`.

use crate::error::ArithError;
use crate::kind::IntegerKind;

/// A binary arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Shr,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Rem,
        Self::Shl,
        Self::Shr,
    ];

    /// Returns the operator symbol used by the expression grammar.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Shl => "<<",
            Self::Shr => ">>",
        }
    }

    #[inline]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An in-place unary step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperation {
    Increment,
    Decrement,
}

impl UnaryOperation {
    /// Returns the binary operation this step is defined as, with a right-hand
    /// operand of `1`.
    #[inline]
    pub const fn as_binary(self) -> Operation {
        match self {
            Self::Increment => Operation::Add,
            Self::Decrement => Operation::Sub,
        }
    }
}

#[inline(always)]
fn in_range(op: Operation, kind: IntegerKind, value: i128) -> Result<i128, ArithError> {
    if kind.contains(value) {
        Ok(value)
    } else {
        Err(ArithError::Overflow { op, kind })
    }
}

#[inline(always)]
fn debug_check_operands(kind: IntegerKind, lhs: i128, rhs: i128) {
    debug_assert!(
        kind.contains(lhs) && kind.contains(rhs),
        "called the safety engine with operands {} and {} outside the range of {}",
        lhs,
        rhs,
        kind
    );
}

/// Checked addition in `kind`.
///
/// # Examples
///
/// ```rust
/// # use intguard_core::engine::checked_add;
/// # use intguard_core::kind::IntegerKind;
/// assert_eq!(checked_add(IntegerKind::U8, 200, 55), Ok(255));
/// assert!(checked_add(IntegerKind::U8, 200, 56).is_err());
/// ```
#[inline]
pub fn checked_add(kind: IntegerKind, lhs: i128, rhs: i128) -> Result<i128, ArithError> {
    debug_check_operands(kind, lhs, rhs);
    in_range(Operation::Add, kind, lhs + rhs)
}

/// Checked subtraction in `kind`.
#[inline]
pub fn checked_sub(kind: IntegerKind, lhs: i128, rhs: i128) -> Result<i128, ArithError> {
    debug_check_operands(kind, lhs, rhs);
    in_range(Operation::Sub, kind, lhs - rhs)
}

/// Checked multiplication in `kind`.
///
/// # Examples
///
/// ```rust
/// # use intguard_core::engine::checked_mul;
/// # use intguard_core::kind::IntegerKind;
/// assert_eq!(checked_mul(IntegerKind::U8, 100, 2), Ok(200));
/// assert!(checked_mul(IntegerKind::U8, 200, 2).is_err());
/// ```
#[inline]
pub fn checked_mul(kind: IntegerKind, lhs: i128, rhs: i128) -> Result<i128, ArithError> {
    debug_check_operands(kind, lhs, rhs);
    if lhs == 0 || rhs == 0 {
        return Ok(0);
    }
    let product = lhs.checked_mul(rhs).ok_or(ArithError::Overflow {
        op: Operation::Mul,
        kind,
    })?;
    in_range(Operation::Mul, kind, product)
}

#[inline(always)]
fn check_divisor(kind: IntegerKind, lhs: i128, rhs: i128) -> Result<(), ArithError> {
    if rhs == 0 {
        return Err(ArithError::DivisionByZero);
    }
    if kind.is_signed() && lhs == kind.min() && rhs == -1 {
        return Err(ArithError::SignedOverflowDivision { kind });
    }
    Ok(())
}

/// Checked division in `kind`, truncating toward zero.
///
/// # Examples
///
/// ```rust
/// # use intguard_core::engine::checked_div;
/// # use intguard_core::kind::IntegerKind;
/// assert_eq!(checked_div(IntegerKind::S32, -7, 2), Ok(-3));
/// assert!(checked_div(IntegerKind::S32, i32::MIN as i128, -1).is_err());
/// ```
#[inline]
pub fn checked_div(kind: IntegerKind, lhs: i128, rhs: i128) -> Result<i128, ArithError> {
    debug_check_operands(kind, lhs, rhs);
    check_divisor(kind, lhs, rhs)?;
    in_range(Operation::Div, kind, lhs / rhs)
}

/// Checked remainder in `kind`. The result has the sign of `lhs`.
#[inline]
pub fn checked_rem(kind: IntegerKind, lhs: i128, rhs: i128) -> Result<i128, ArithError> {
    debug_check_operands(kind, lhs, rhs);
    check_divisor(kind, lhs, rhs)?;
    in_range(Operation::Rem, kind, lhs % rhs)
}

#[inline(always)]
fn check_shift_amount(kind: IntegerKind, amount: i128) -> Result<u32, ArithError> {
    let width = kind.bits();
    if (0..width as i128).contains(&amount) {
        Ok(amount as u32)
    } else {
        Err(ArithError::InvalidShiftAmount { amount, width })
    }
}

/// Checked left shift in `kind`.
///
/// Fails if the amount is outside `0..width`, if `lhs` is negative, or if any
/// set bit would be shifted past the top of the kind.
///
/// # Examples
///
/// ```rust
/// # use intguard_core::engine::checked_shl;
/// # use intguard_core::kind::IntegerKind;
/// assert_eq!(checked_shl(IntegerKind::U8, 1, 7), Ok(128));
/// assert!(checked_shl(IntegerKind::U8, 200, 1).is_err());
/// assert!(checked_shl(IntegerKind::S8, 1, 7).is_err());
/// ```
#[inline]
pub fn checked_shl(kind: IntegerKind, lhs: i128, rhs: i128) -> Result<i128, ArithError> {
    debug_check_operands(kind, lhs, rhs);
    let amount = check_shift_amount(kind, rhs)?;
    if lhs < 0 {
        return Err(ArithError::NegativeLeftShift { value: lhs });
    }
    // lhs << amount <= max  <=>  lhs <= max >> amount, and the shifted value then
    // fits i128 as well.
    if lhs > kind.max() >> amount {
        return Err(ArithError::Overflow {
            op: Operation::Shl,
            kind,
        });
    }
    Ok(lhs << amount)
}

/// Checked arithmetic right shift in `kind`.
///
/// # Examples
///
/// ```rust
/// # use intguard_core::engine::checked_shr;
/// # use intguard_core::kind::IntegerKind;
/// assert_eq!(checked_shr(IntegerKind::S8, -128, 7), Ok(-1));
/// assert!(checked_shr(IntegerKind::U8, 1, 8).is_err());
/// ```
#[inline]
pub fn checked_shr(kind: IntegerKind, lhs: i128, rhs: i128) -> Result<i128, ArithError> {
    debug_check_operands(kind, lhs, rhs);
    let amount = check_shift_amount(kind, rhs)?;
    Ok(lhs >> amount)
}

/// Applies `op` to two values of `kind`.
///
/// Both operands must already lie in the range of `kind`; the chain evaluator
/// guarantees this by casting every operand before it reaches the engine.
#[inline]
pub fn apply(kind: IntegerKind, op: Operation, lhs: i128, rhs: i128) -> Result<i128, ArithError> {
    match op {
        Operation::Add => checked_add(kind, lhs, rhs),
        Operation::Sub => checked_sub(kind, lhs, rhs),
        Operation::Mul => checked_mul(kind, lhs, rhs),
        Operation::Div => checked_div(kind, lhs, rhs),
        Operation::Rem => checked_rem(kind, lhs, rhs),
        Operation::Shl => checked_shl(kind, lhs, rhs),
        Operation::Shr => checked_shr(kind, lhs, rhs),
    }
}

/// Applies an increment or decrement to a value of `kind`.
#[inline]
pub fn apply_unary(kind: IntegerKind, op: UnaryOperation, value: i128) -> Result<i128, ArithError> {
    apply(kind, op.as_binary(), value, 1)
}
