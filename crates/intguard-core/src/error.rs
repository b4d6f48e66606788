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

//! Error types for the safety engine.
//!
//! `ArithError` describes why a single cast or arithmetic step is unsafe.
//! `ParseError` describes a malformed expression. `Error` is what the public
//! `try_*` entry points return: it wraps the other two with the position at which
//! evaluation stopped. The `bool` entry points discard it.

use crate::engine::Operation;
use crate::kind::IntegerKind;

/// Why a single cast or arithmetic step cannot be performed safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithError {
    /// The exact result lies outside the range of the target kind.
    #[error("{op} overflows {kind}")]
    Overflow { op: Operation, kind: IntegerKind },
    /// A value is not representable in the kind it is being cast to.
    #[error("{value} ({from}) is not representable as {to}")]
    UnsafeCast {
        value: i128,
        from: IntegerKind,
        to: IntegerKind,
    },
    #[error("division by zero")]
    DivisionByZero,
    /// The shift amount is negative or not smaller than the width.
    #[error("shift amount {amount} is out of bounds for a {width}-bit kind")]
    InvalidShiftAmount { amount: i128, width: u32 },
    /// A negative value was shifted left.
    #[error("left shift of negative value {value}")]
    NegativeLeftShift { value: i128 },
    /// `MIN / -1` or `MIN % -1` on a signed kind.
    #[error("signed overflow dividing {kind}::MIN by -1")]
    SignedOverflowDivision { kind: IntegerKind },
}

/// Why an expression string could not be parsed. Offsets are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,
    #[error("unknown kind code '{text}' at offset {offset}")]
    UnknownKind { offset: usize, text: String },
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { offset: usize, ch: char },
    /// An operator with no term after it.
    #[error("operator at offset {offset} has no right-hand term")]
    DanglingOperator { offset: usize },
    /// Two terms with no operator between them.
    #[error("expected an operator at offset {offset}")]
    MissingOperator { offset: usize },
    /// An operator where a term was expected: at the start, or right after another operator.
    #[error("expected a kind code at offset {offset}")]
    MissingTerm { offset: usize },
}

/// The error returned by the `try_*` entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Step `step` of an evaluation failed. Step 0 is the cast of the first
    /// operand to the target kind; step `i` combines operand `i`.
    #[error("step {step}: {source}")]
    Step { step: usize, source: ArithError },
    /// The result could not be cast into the destination's kind.
    #[error("destination: {0}")]
    Destination(#[source] ArithError),
    #[error("malformed expression: {0}")]
    MalformedExpression(#[from] ParseError),
    #[error("expression has {expected} terms but {supplied} values were supplied")]
    OperandCountMismatch { expected: usize, supplied: usize },
    /// A supplied value does not fit the kind its term declares.
    #[error("value {value} supplied for term {index} does not fit {kind}")]
    OperandKindMismatch {
        index: usize,
        kind: IntegerKind,
        value: i128,
    },
}

/// The flat failure taxonomy, for callers that only branch on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Overflow,
    UnsafeCast,
    DivisionByZero,
    InvalidShiftAmount,
    NegativeLeftShift,
    SignedOverflowDivision,
    MalformedExpression,
    OperandCountMismatch,
}

impl ArithError {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::UnsafeCast { .. } => ErrorKind::UnsafeCast,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::InvalidShiftAmount { .. } => ErrorKind::InvalidShiftAmount,
            Self::NegativeLeftShift { .. } => ErrorKind::NegativeLeftShift,
            Self::SignedOverflowDivision { .. } => ErrorKind::SignedOverflowDivision,
        }
    }
}

impl Error {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Step { source, .. } | Self::Destination(source) => source.kind(),
            Self::MalformedExpression(_) => ErrorKind::MalformedExpression,
            Self::OperandCountMismatch { .. } => ErrorKind::OperandCountMismatch,
            Self::OperandKindMismatch { .. } => ErrorKind::UnsafeCast,
        }
    }

    /// Returns the index of the failing step, if the failure happened during folding.
    #[inline]
    pub fn step(&self) -> Option<usize> {
        match self {
            Self::Step { step, .. } => Some(*step),
            _ => None,
        }
    }
}
