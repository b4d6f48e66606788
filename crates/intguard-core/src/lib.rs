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

//! # Intguard Core
//!
//! Overflow-safe integer arithmetic over explicitly tagged integer kinds. Every
//! operand carries its kind, every operation is checked against the range of a
//! single target kind, and a result is only ever written to its destination
//! once the whole computation is known to be safe.
//!
//! ## Modules
//!
//! - `api`: The public entry points. `try_*` functions return the result or the
//!   error, `safe_*` functions return a verdict, and `safe_eval!` evaluates an
//!   expression over a variable number of values.
//! - `cast`: Value-preserving conversions between kinds.
//! - `chain`: Left-to-right evaluation of operand chains and the policy that
//!   picks the target kind.
//! - `dest`: The `Destination` trait for typed storage locations and the
//!   all-or-nothing write of a result into one.
//! - `engine`: Checked add, sub, mul, div, rem, shl and shr on widened values.
//! - `error`: Arithmetic, parse and evaluation errors with a flat `ErrorKind`.
//! - `expr`: A small expression language (`"u32+s16/u64"`) evaluated in
//!   first-in-first-out order.
//! - `kind`: The eight canonical integer kinds and their ranges.
//! - `math`: Closed interval primitives used for range reasoning.
//! - `num`: The `Primitive` trait binding native integers to their kinds.
//! - `operand`: `TypedOperand`, a value paired with its kind.
//! - `platform`: C type aliases and the platform model that resolves them.
//!
//! ## Example
//!
//! ```rust
//! use intguard_core::api::{safe_add, safe_inc};
//!
//! let mut total: u16 = 0;
//! assert!(safe_add(Some(&mut total), 60_000u32, 5_000u16));
//! assert!(!safe_add(Some(&mut total), 60_000u32, 6_000u16));
//! assert_eq!(total, 65_000);
//! assert!(safe_inc(&mut total));
//! ```

pub mod api;
pub mod cast;
pub mod chain;
pub mod dest;
pub mod engine;
pub mod error;
pub mod expr;
pub mod kind;
pub mod math;
pub mod num;
pub mod operand;
pub mod platform;
