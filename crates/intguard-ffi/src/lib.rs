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

//! # Intguard FFI
//!
//! C-compatible bindings for the intguard safety engine.
//!
//! Values cross the boundary as `IntguardValue`, a kind tag plus the value
//! widened to 64 bits. Kinds include the C type aliases (`int`, `long`,
//! `size_t`, ...), which resolve with the data model this library was built for.
//!
//! ## Conventions
//!
//! 1.  **Verdicts**: Every arithmetic function returns `true` exactly when the
//!     operation is safe.
//! 2.  **Optional Destination**: A non-null destination receives the result
//!     only on success; `NULL` selects check-only mode.
//! 3.  **Fail-Fast Safety**: Null required pointers, format strings that are not
//!     UTF-8, and values whose bits do not encode their kind abort the process
//!     rather than being reported as unsafe arithmetic.
//!
//! ## Modules
//!
//! - `value`: `IntguardKind` and `IntguardValue`.
//! - `ops`: Binary operators, chains, increment, decrement and cast checks.
//! - `expr`: Evaluation of format strings.

pub mod expr;
pub mod ops;
pub mod value;
