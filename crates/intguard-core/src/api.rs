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

//! # Public Entry Points
//!
//! Two layers over the chain evaluator:
//!
//! - `try_*` functions return the result or the reason for failure.
//! - `safe_*` functions return only a verdict. They exist for every operator
//!   with two to five operands, plus increment, decrement and expressions.
//!
//! Both take an optional `Destination`. Its kind, when present, is the target
//! every operand is cast to; otherwise the leftmost operand's kind is. The
//! destination is written only when the whole evaluation, including the final
//! cast into it, succeeds.
//!
//! Operands accept anything convertible into a `TypedOperand`, so native
//! integers can be passed directly and get their kind from their type.
//!
//! ```rust
//! # use intguard_core::api::{safe_add, safe_mul3};
//! let mut out: u8 = 0;
//! assert!(safe_add(Some(&mut out), 100u32, 55u8));
//! assert_eq!(out, 155);
//! assert!(!safe_mul3(Some(&mut out), 10u8, 10u8, 3u8));
//! assert_eq!(out, 155);
//! assert!(safe_mul3(None, 10u32, 10u8, 3u8));
//! ```

use crate::chain::{evaluate_chain, resolve_target_kind};
use crate::dest::{deliver, Destination};
use crate::engine::{apply_unary, Operation, UnaryOperation};
use crate::error::Error;
use crate::expr::Expression;
use crate::operand::TypedOperand;

/// Folds `operands` under `op` and delivers the result.
///
/// # Examples
///
/// ```rust
/// # use intguard_core::api::try_chain;
/// # use intguard_core::engine::Operation;
/// # use intguard_core::operand::TypedOperand;
/// let operands = [TypedOperand::from(10u8), TypedOperand::from(3i64)];
/// let result = try_chain(None, Operation::Sub, &operands).unwrap();
/// assert_eq!(result.value(), 7);
/// ```
pub fn try_chain(
    destination: Option<&mut dyn Destination>,
    op: Operation,
    operands: &[TypedOperand],
) -> Result<TypedOperand, Error> {
    let leftmost = operands.first().ok_or(Error::OperandCountMismatch {
        expected: 1,
        supplied: 0,
    })?;
    let target = resolve_target_kind(destination.as_deref().map(|d| d.kind()), leftmost.kind());
    let result = evaluate_chain(target, op, operands)?;
    deliver(result, destination)
}

/// Applies `op` to two operands and delivers the result.
#[inline]
pub fn try_binary(
    destination: Option<&mut dyn Destination>,
    op: Operation,
    lhs: impl Into<TypedOperand>,
    rhs: impl Into<TypedOperand>,
) -> Result<TypedOperand, Error> {
    let operands: [TypedOperand; 2] = [lhs.into(), rhs.into()];
    try_chain(destination, op, &operands)
}

/// Increments or decrements `slot` in place.
///
/// The step is evaluated in the slot's own kind, as step 1 of the chain
/// `slot op 1`. On failure the slot is unchanged.
pub fn try_unary(slot: &mut dyn Destination, op: UnaryOperation) -> Result<TypedOperand, Error> {
    let current = slot.load();
    let value = apply_unary(current.kind(), op, current.value())
        .map_err(|source| Error::Step { step: 1, source })?;
    deliver(TypedOperand::new_unchecked(current.kind(), value), Some(slot))
}

/// Parses `format`, binds `values` to its terms and delivers the result.
///
/// The expression is evaluated in the kind of its leftmost term; a destination
/// only has to accept the final value.
///
/// # Examples
///
/// ```rust
/// # use intguard_core::api::try_eval;
/// let mut out: u64 = 0;
/// let r = try_eval(Some(&mut out), "u32+s16/u64", &[10, 20, 2]).unwrap();
/// assert_eq!(r.value(), 15);
/// assert_eq!(out, 15);
/// ```
pub fn try_eval(
    destination: Option<&mut dyn Destination>,
    format: &str,
    values: &[i128],
) -> Result<TypedOperand, Error> {
    let expr = Expression::parse(format)?;
    let result = expr.evaluate(values)?;
    deliver(result, destination)
}

/// Returns `true` and writes the destination, if any, when `format` evaluates
/// safely over `values`.
#[inline]
pub fn safe_eval(destination: Option<&mut dyn Destination>, format: &str, values: &[i128]) -> bool {
    try_eval(destination, format, values).is_ok()
}

/// Increments `slot` in place if the result fits its kind.
///
/// ```rust
/// # use intguard_core::api::safe_inc;
/// let mut x: i8 = 126;
/// assert!(safe_inc(&mut x));
/// assert!(!safe_inc(&mut x));
/// assert_eq!(x, 127);
/// ```
#[inline]
pub fn safe_inc(slot: &mut dyn Destination) -> bool {
    try_unary(slot, UnaryOperation::Increment).is_ok()
}

/// Decrements `slot` in place if the result fits its kind.
#[inline]
pub fn safe_dec(slot: &mut dyn Destination) -> bool {
    try_unary(slot, UnaryOperation::Decrement).is_ok()
}

macro_rules! safe_family {
    ($op:expr, $sym:literal, $name2:ident, $name3:ident, $name4:ident, $name5:ident) => {
        #[doc = concat!("Checks `a ", $sym, " b` and writes the result to `destination` if it is safe.")]
        #[inline]
        pub fn $name2(
            destination: Option<&mut dyn Destination>,
            a: impl Into<TypedOperand>,
            b: impl Into<TypedOperand>,
        ) -> bool {
            let operands: [TypedOperand; 2] = [a.into(), b.into()];
            try_chain(destination, $op, &operands).is_ok()
        }

        #[doc = concat!("Checks `(a ", $sym, " b) ", $sym, " c`, left to right.")]
        #[inline]
        pub fn $name3(
            destination: Option<&mut dyn Destination>,
            a: impl Into<TypedOperand>,
            b: impl Into<TypedOperand>,
            c: impl Into<TypedOperand>,
        ) -> bool {
            let operands: [TypedOperand; 3] = [a.into(), b.into(), c.into()];
            try_chain(destination, $op, &operands).is_ok()
        }

        #[doc = concat!("Checks a four-operand `", $sym, "` chain, left to right.")]
        #[inline]
        pub fn $name4(
            destination: Option<&mut dyn Destination>,
            a: impl Into<TypedOperand>,
            b: impl Into<TypedOperand>,
            c: impl Into<TypedOperand>,
            d: impl Into<TypedOperand>,
        ) -> bool {
            let operands: [TypedOperand; 4] = [a.into(), b.into(), c.into(), d.into()];
            try_chain(destination, $op, &operands).is_ok()
        }

        #[doc = concat!("Checks a five-operand `", $sym, "` chain, left to right.")]
        #[inline]
        pub fn $name5(
            destination: Option<&mut dyn Destination>,
            a: impl Into<TypedOperand>,
            b: impl Into<TypedOperand>,
            c: impl Into<TypedOperand>,
            d: impl Into<TypedOperand>,
            e: impl Into<TypedOperand>,
        ) -> bool {
            let operands: [TypedOperand; 5] = [a.into(), b.into(), c.into(), d.into(), e.into()];
            try_chain(destination, $op, &operands).is_ok()
        }
    };
}

safe_family!(Operation::Add, "+", safe_add, safe_add3, safe_add4, safe_add5);
safe_family!(Operation::Sub, "-", safe_sub, safe_sub3, safe_sub4, safe_sub5);
safe_family!(Operation::Mul, "*", safe_mul, safe_mul3, safe_mul4, safe_mul5);
safe_family!(Operation::Div, "/", safe_div, safe_div3, safe_div4, safe_div5);
safe_family!(Operation::Rem, "%", safe_rem, safe_rem3, safe_rem4, safe_rem5);
safe_family!(Operation::Shl, "<<", safe_shl, safe_shl3, safe_shl4, safe_shl5);
safe_family!(Operation::Shr, ">>", safe_shr, safe_shr3, safe_shr4, safe_shr5);

/// Evaluates an expression over a variable number of values.
///
/// Each value must be one of the supported primitive integers and is widened
/// losslessly, exactly once, so arguments with side effects run once.
///
/// ```rust
/// # use intguard_core::safe_eval;
/// let (a, b, c) = (10u32, 20i16, 2u64);
/// let mut out: u32 = 0;
/// assert!(safe_eval!(Some(&mut out), "u32+s16/u64", a, b, c));
/// assert_eq!(out, 15);
/// ```
///
/// Floats, `char`, `bool` and 128-bit integers are rejected at compile time:
///
/// ```compile_fail
/// # use intguard_core::safe_eval;
/// let mut out: u8 = 0;
/// safe_eval!(Some(&mut out), "u8+u8", 3.9f64, 1u8);
/// ```
///
/// ```compile_fail
/// # use intguard_core::safe_eval;
/// safe_eval!(None, "s8", u128::MAX);
/// ```
///
/// ```compile_fail
/// # use intguard_core::safe_eval;
/// safe_eval!(None, "u8+u8", 'A', true);
/// ```
#[macro_export]
macro_rules! safe_eval {
    ($destination:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $crate::api::safe_eval(
            $destination,
            $format,
            &[$($crate::num::primitive::Primitive::widen($value)),*],
        )
    };
}
