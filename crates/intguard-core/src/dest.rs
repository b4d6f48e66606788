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

//! Result delivery.
//!
//! A `Destination` is a typed integer storage location. Every public operation
//! accepts an optional destination; when one is given, its kind becomes the
//! target kind of the evaluation and the result must also survive the final cast
//! into it. The write happens only after every check has passed, so a failed
//! operation leaves the destination exactly as it was.

use crate::cast::cast;
use crate::error::{ArithError, Error};
use crate::kind::IntegerKind;
use crate::num::primitive::Primitive;
use crate::operand::TypedOperand;

/// A typed integer storage location.
pub trait Destination {
    /// The kind of value this location holds.
    fn kind(&self) -> IntegerKind;

    /// Reads the current value.
    fn load(&self) -> TypedOperand;

    /// Writes `value`, which must be representable in `self.kind()`.
    ///
    /// Implementations must either write the whole value or leave the location
    /// untouched and return an error.
    fn store(&mut self, value: TypedOperand) -> Result<(), ArithError>;
}

macro_rules! destination_impl {
    ($($t:ty)*) => {$(
        impl Destination for $t {
            #[inline]
            fn kind(&self) -> IntegerKind {
                <$t as Primitive>::KIND
            }

            #[inline]
            fn load(&self) -> TypedOperand {
                TypedOperand::from(*self)
            }

            #[inline]
            fn store(&mut self, value: TypedOperand) -> Result<(), ArithError> {
                *self = <$t as Primitive>::narrow(value.value()).ok_or(ArithError::UnsafeCast {
                    value: value.value(),
                    from: value.kind(),
                    to: <$t as Primitive>::KIND,
                })?;
                Ok(())
            }
        }
    )*}
}

destination_impl!(u8 u16 u32 u64 usize i8 i16 i32 i64 isize);

impl Destination for TypedOperand {
    #[inline]
    fn kind(&self) -> IntegerKind {
        TypedOperand::kind(self)
    }

    #[inline]
    fn load(&self) -> TypedOperand {
        *self
    }

    /// Stores `value` as a new snapshot of the same kind.
    #[inline]
    fn store(&mut self, value: TypedOperand) -> Result<(), ArithError> {
        *self = cast(value, TypedOperand::kind(self))?;
        Ok(())
    }
}

/// Hands `result` to the caller.
///
/// Without a destination the result is returned as is. With one, the result is
/// cast into the destination's kind and written; on any failure nothing is
/// written.
pub fn deliver(
    result: TypedOperand,
    destination: Option<&mut dyn Destination>,
) -> Result<TypedOperand, Error> {
    let Some(destination) = destination else {
        return Ok(result);
    };
    let value = cast(result, destination.kind()).map_err(Error::Destination)?;
    destination.store(value).map_err(Error::Destination)?;
    Ok(value)
}
