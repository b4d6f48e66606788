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

//! # Expression Interpreter
//!
//! A compact textual form for mixed-operator chains. An expression names the
//! kind of each operand and the operators between them; the values are supplied
//! separately, one per term.
//!
//! ```text
//! expr     := term (operator term)*
//! term     := u8 | s8 | u16 | s16 | u32 | s32 | u64 | s64
//! operator := + | - | * | / | % | << | >>
//! ```
//!
//! Evaluation is first-in-first-out: operators apply in the order they appear
//! and there is no precedence. Every value is cast to the kind of the leftmost
//! term before it is combined.
//!
//! ## Submodules
//!
//! - `lexer`: Splits a string into kind and operator tokens with byte offsets.
//! - `parser`: Builds an `Expression` from tokens and binds values into an
//!   `OperationChain`.

pub mod lexer;
pub mod parser;

pub use parser::Expression;
