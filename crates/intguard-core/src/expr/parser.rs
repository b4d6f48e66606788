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

use super::lexer::{tokenize, Token};
use crate::chain::{resolve_target_kind, OperationChain};
use crate::engine::Operation;
use crate::error::{Error, ParseError};
use crate::kind::IntegerKind;
use crate::operand::TypedOperand;
use smallvec::SmallVec;
use tracing::trace;

/// A parsed expression: `n` term kinds joined by `n - 1` operators.
///
/// Operators are applied in the order they appear, with no precedence:
/// `u32+s16/u64` means `(a + b) / c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    kinds: SmallVec<[IntegerKind; 8]>,
    operators: SmallVec<[Operation; 8]>,
}

impl Expression {
    /// Parses an expression string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::expr::Expression;
    /// # use intguard_core::kind::IntegerKind;
    /// let expr = Expression::parse("u32 + s16 / u64").unwrap();
    /// assert_eq!(expr.arity(), 3);
    /// assert_eq!(expr.result_kind(), IntegerKind::U32);
    /// ```
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(src)?;
        let mut kinds: SmallVec<[IntegerKind; 8]> = SmallVec::new();
        let mut operators: SmallVec<[Operation; 8]> = SmallVec::new();
        // Offset of an operator still waiting for its right-hand term.
        let mut pending: Option<usize> = None;

        for token in tokens {
            match token {
                Token::Term { offset, kind } => {
                    if !kinds.is_empty() && pending.is_none() {
                        return Err(ParseError::MissingOperator { offset });
                    }
                    kinds.push(kind);
                    pending = None;
                }
                Token::Op { offset, op } => {
                    if kinds.is_empty() || pending.is_some() {
                        return Err(ParseError::MissingTerm { offset });
                    }
                    operators.push(op);
                    pending = Some(offset);
                }
            }
        }

        if let Some(offset) = pending {
            return Err(ParseError::DanglingOperator { offset });
        }
        if kinds.is_empty() {
            return Err(ParseError::Empty);
        }

        debug_assert_eq!(kinds.len(), operators.len() + 1);
        let expr = Self { kinds, operators };
        trace!(%expr, arity = expr.arity(), "parsed expression");
        Ok(expr)
    }

    /// Returns the number of terms, i.e. the number of values evaluation consumes.
    #[inline]
    pub fn arity(&self) -> usize {
        self.kinds.len()
    }

    /// Returns the declared kind of every term, left to right.
    #[inline]
    pub fn kinds(&self) -> &[IntegerKind] {
        &self.kinds
    }

    #[inline]
    pub fn operators(&self) -> &[Operation] {
        &self.operators
    }

    /// Returns the kind of the leftmost term, which every operand is cast to.
    #[inline]
    pub fn result_kind(&self) -> IntegerKind {
        // A parsed expression always holds at least one term.
        self.kinds[0]
    }

    /// Tags each value with its term's kind and builds the chain to evaluate.
    ///
    /// Fails if the number of values differs from the arity, or if a value does not
    /// fit the kind its term declares.
    pub fn bind(&self, values: &[i128]) -> Result<OperationChain, Error> {
        if values.len() != self.arity() {
            return Err(Error::OperandCountMismatch {
                expected: self.arity(),
                supplied: values.len(),
            });
        }

        let mut operands = self
            .kinds
            .iter()
            .zip(values)
            .enumerate()
            .map(|(index, (&kind, &value))| {
                TypedOperand::try_new(kind, value).ok_or(Error::OperandKindMismatch {
                    index,
                    kind,
                    value,
                })
            });

        let target = resolve_target_kind(None, self.result_kind());
        let first = match operands.next() {
            Some(first) => first?,
            None => return Err(ParseError::Empty.into()),
        };
        let mut chain = OperationChain::preallocated(target, first, self.operators.len());
        for (&op, operand) in self.operators.iter().zip(operands) {
            chain.push(op, operand?);
        }
        Ok(chain)
    }

    /// Binds `values` and evaluates the expression.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::expr::Expression;
    /// let expr = Expression::parse("u32+s16/u64").unwrap();
    /// assert_eq!(expr.evaluate(&[10, 20, 2]).unwrap().value(), 15);
    /// ```
    #[inline]
    pub fn evaluate(&self, values: &[i128]) -> Result<TypedOperand, Error> {
        self.bind(values)?.evaluate()
    }
}

impl std::str::FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds = self.kinds.iter();
        if let Some(first) = kinds.next() {
            write!(f, "{}", first)?;
        }
        for (op, kind) in self.operators.iter().zip(kinds) {
            write!(f, "{}{}", op, kind)?;
        }
        Ok(())
    }
}
