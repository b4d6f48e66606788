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

//! # Chain Evaluator
//!
//! Left-to-right folding of several operands under one target kind.
//!
//! Every operand is cast to the target before it is combined, and the running
//! accumulator always holds a value of the target kind. Evaluation stops at the
//! first unsafe step; later operands are never cast or combined.
//!
//! Step numbering: step `0` is the cast of the first operand, step `i` is the
//! cast and combination of operand `i`. An `Error::Step` carries the number of
//! the step that failed.

use crate::cast::cast;
use crate::engine::{apply, Operation};
use crate::error::Error;
use crate::kind::IntegerKind;
use crate::operand::TypedOperand;
use smallvec::SmallVec;
use tracing::trace;

/// Picks the kind every operand of an evaluation is cast to.
///
/// The destination's kind wins if there is a destination; otherwise the kind of
/// the leftmost operand does. No other kind is ever considered, in particular
/// never an intermediate or the rightmost one.
///
/// # Examples
///
/// ```rust
/// # use intguard_core::chain::resolve_target_kind;
/// # use intguard_core::kind::IntegerKind;
/// assert_eq!(resolve_target_kind(Some(IntegerKind::U8), IntegerKind::S64), IntegerKind::U8);
/// assert_eq!(resolve_target_kind(None, IntegerKind::S64), IntegerKind::S64);
/// ```
#[inline]
pub fn resolve_target_kind(destination: Option<IntegerKind>, leftmost: IntegerKind) -> IntegerKind {
    destination.unwrap_or(leftmost)
}

/// An ordered sequence of operations applied to a first operand, all under one
/// target kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationChain {
    target: IntegerKind,
    first: TypedOperand,
    steps: SmallVec<[(Operation, TypedOperand); 4]>,
}

impl OperationChain {
    /// Creates a chain with only its first operand.
    #[inline]
    pub fn new(target: IntegerKind, first: TypedOperand) -> Self {
        Self {
            target,
            first,
            steps: SmallVec::new(),
        }
    }

    /// Creates a chain with capacity for `steps` further operands.
    #[inline]
    pub fn preallocated(target: IntegerKind, first: TypedOperand, steps: usize) -> Self {
        Self {
            target,
            first,
            steps: SmallVec::with_capacity(steps),
        }
    }

    /// Appends `op operand` to the chain.
    #[inline]
    pub fn push(&mut self, op: Operation, operand: TypedOperand) {
        self.steps.push((op, operand));
    }

    /// Builder-style `push`.
    #[inline]
    pub fn then(mut self, op: Operation, operand: TypedOperand) -> Self {
        self.push(op, operand);
        self
    }

    #[inline]
    pub fn target(&self) -> IntegerKind {
        self.target
    }

    /// Returns the number of operands, including the first.
    #[inline]
    pub fn operand_count(&self) -> usize {
        self.steps.len() + 1
    }

    /// Evaluates the chain strictly left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::chain::OperationChain;
    /// # use intguard_core::engine::Operation;
    /// # use intguard_core::kind::IntegerKind;
    /// let chain = OperationChain::new(IntegerKind::U32, 10u32.into())
    ///     .then(Operation::Add, 20i16.into())
    ///     .then(Operation::Div, 2u64.into());
    /// assert_eq!(chain.evaluate().unwrap().value(), 15);
    /// ```
    pub fn evaluate(&self) -> Result<TypedOperand, Error> {
        let target = self.target;
        let mut acc = cast(self.first, target).map_err(|source| Error::Step { step: 0, source })?;
        trace!(step = 0, %target, operand = %self.first, "chain start");

        for (i, &(op, operand)) in self.steps.iter().enumerate() {
            let step = i + 1;
            let rhs = cast(operand, target).map_err(|source| Error::Step { step, source })?;
            let value = apply(target, op, acc.value(), rhs.value())
                .map_err(|source| Error::Step { step, source })?;
            acc = TypedOperand::new_unchecked(target, value);
            trace!(step, %op, %operand, result = %acc, "chain step");
        }

        Ok(acc)
    }
}

/// Folds `operands` left to right under a single operator.
///
/// Returns the final value in `target`, or the first failing step. An empty
/// slice yields `Error::OperandCountMismatch`.
///
/// # Examples
///
/// ```rust
/// # use intguard_core::chain::evaluate_chain;
/// # use intguard_core::engine::Operation;
/// # use intguard_core::kind::IntegerKind;
/// # use intguard_core::operand::TypedOperand;
/// let operands = [TypedOperand::from(10u32), TypedOperand::from(20u32), TypedOperand::from(3u32)];
/// let result = evaluate_chain(IntegerKind::U32, Operation::Mul, &operands).unwrap();
/// assert_eq!(result.value(), 600);
/// ```
pub fn evaluate_chain(
    target: IntegerKind,
    op: Operation,
    operands: &[TypedOperand],
) -> Result<TypedOperand, Error> {
    let (&first, rest) = operands.split_first().ok_or(Error::OperandCountMismatch {
        expected: 1,
        supplied: 0,
    })?;
    let mut chain = OperationChain::preallocated(target, first, rest.len());
    for &operand in rest {
        chain.push(op, operand);
    }
    chain.evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArithError, ErrorKind};

    fn op(kind: IntegerKind, value: i128) -> TypedOperand {
        TypedOperand::new(kind, value)
    }

    #[test]
    fn test_mul3_left_to_right() {
        let operands = [
            op(IntegerKind::U32, 10),
            op(IntegerKind::U32, 20),
            op(IntegerKind::U32, 3),
        ];
        let result = evaluate_chain(IntegerKind::U32, Operation::Mul, &operands).unwrap();
        assert_eq!(result, op(IntegerKind::U32, 600));
    }

    #[test]
    fn test_failure_reports_first_failing_step() {
        // 200 * 2 overflows u8 at step 1; step 2 (division by zero) never runs.
        let operands = [
            op(IntegerKind::U8, 200),
            op(IntegerKind::U8, 2),
            op(IntegerKind::U8, 0),
        ];
        let err = evaluate_chain(IntegerKind::U8, Operation::Mul, &operands).unwrap_err();
        assert_eq!(err.step(), Some(1));
        assert_eq!(err.kind(), ErrorKind::Overflow);
    }

    #[test]
    fn test_overflow_at_step_two_stops_before_step_three() {
        let operands = [
            op(IntegerKind::U8, 10),
            op(IntegerKind::U8, 5),
            op(IntegerKind::U8, 10),
            op(IntegerKind::U8, 0),
        ];
        // 10 * 5 = 50; 50 * 10 = 500 overflows at step 2. Step 3 would be
        // harmless, so the only way to see step 2 is to stop there.
        let err = evaluate_chain(IntegerKind::U8, Operation::Mul, &operands).unwrap_err();
        assert_eq!(
            err,
            Error::Step {
                step: 2,
                source: ArithError::Overflow {
                    op: Operation::Mul,
                    kind: IntegerKind::U8
                }
            }
        );
    }

    #[test]
    fn test_every_operand_cast_to_target() {
        // s16 -1 cannot become u32.
        let operands = [op(IntegerKind::U32, 1), op(IntegerKind::S16, -1)];
        let err = evaluate_chain(IntegerKind::U32, Operation::Add, &operands).unwrap_err();
        assert_eq!(err.step(), Some(1));
        assert_eq!(err.kind(), ErrorKind::UnsafeCast);

        // The first operand is cast too.
        let operands = [op(IntegerKind::U64, 300), op(IntegerKind::U8, 1)];
        let err = evaluate_chain(IntegerKind::U8, Operation::Add, &operands).unwrap_err();
        assert_eq!(err.step(), Some(0));
    }

    #[test]
    fn test_result_kind_is_target() {
        let operands = [op(IntegerKind::U8, 10), op(IntegerKind::S64, -20)];
        let result = evaluate_chain(IntegerKind::S16, Operation::Add, &operands).unwrap();
        assert_eq!(result, op(IntegerKind::S16, -10));
    }

    #[test]
    fn test_single_operand_is_a_cast() {
        let result = evaluate_chain(IntegerKind::S8, Operation::Add, &[op(IntegerKind::U64, 5)]);
        assert_eq!(result, Ok(op(IntegerKind::S8, 5)));
    }

    #[test]
    fn test_empty_operands() {
        assert_eq!(
            evaluate_chain(IntegerKind::U8, Operation::Add, &[]),
            Err(Error::OperandCountMismatch {
                expected: 1,
                supplied: 0
            })
        );
    }

    #[test]
    fn test_single_operand_chain_counts_its_first_operand() {
        let chain = OperationChain::new(IntegerKind::U8, op(IntegerKind::U8, 9));
        assert_eq!(chain.operand_count(), 1);
        assert_eq!(chain.evaluate(), Ok(op(IntegerKind::U8, 9)));
    }

    #[test]
    fn test_mixed_chain() {
        let chain = OperationChain::new(IntegerKind::S32, op(IntegerKind::S32, 7))
            .then(Operation::Sub, op(IntegerKind::U8, 10))
            .then(Operation::Mul, op(IntegerKind::S8, -4))
            .then(Operation::Shr, op(IntegerKind::U16, 1));
        assert_eq!(chain.operand_count(), 4);
        assert_eq!(chain.target(), IntegerKind::S32);
        // ((7 - 10) * -4) >> 1 = 12 >> 1 = 6
        assert_eq!(chain.evaluate(), Ok(op(IntegerKind::S32, 6)));
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let chain = OperationChain::new(IntegerKind::U16, op(IntegerKind::U16, 60000))
            .then(Operation::Add, op(IntegerKind::U16, 6000));
        let first = chain.evaluate();
        assert_eq!(first, chain.evaluate());
        assert!(first.is_err());
    }
}
