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

//! Exported arithmetic entry points.
//!
//! Every function returns `true` exactly when the operation is safe. A non-null
//! destination receives the result only in that case; a null destination
//! selects check-only mode.

use crate::value::{IntguardKind, IntguardValue};
use intguard_core::api::{try_binary, try_chain, try_unary};
use intguard_core::cast::can_cast;
use intguard_core::dest::Destination;
use intguard_core::engine::{Operation, UnaryOperation};
use intguard_core::operand::TypedOperand;

/// FFI-compatible binary operator.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntguardOperation {
    Add = 0,
    Sub = 1,
    Mul = 2,
    Div = 3,
    Rem = 4,
    Shl = 5,
    Shr = 6,
}

impl From<IntguardOperation> for Operation {
    #[inline]
    fn from(op: IntguardOperation) -> Self {
        match op {
            IntguardOperation::Add => Operation::Add,
            IntguardOperation::Sub => Operation::Sub,
            IntguardOperation::Mul => Operation::Mul,
            IntguardOperation::Div => Operation::Div,
            IntguardOperation::Rem => Operation::Rem,
            IntguardOperation::Shl => Operation::Shl,
            IntguardOperation::Shr => Operation::Shr,
        }
    }
}

/// Turns a nullable destination pointer into an optional destination.
///
/// # Safety
///
/// `dest` must be null or valid for reads and writes for `'a`.
#[inline]
pub(crate) unsafe fn destination<'a>(dest: *mut IntguardValue) -> Option<&'a mut dyn Destination> {
    unsafe { dest.as_mut() }.map(|d| d as &mut dyn Destination)
}

macro_rules! ffi_binary {
    ($($name:ident => $op:expr, $sym:literal;)*) => {$(
        #[doc = concat!("Checks `a ", $sym, " b` and writes the result to `dest` if it is safe.")]
        ///
        /// The target kind is `dest`'s kind when `dest` is non-null, otherwise
        /// `a`'s kind.
        ///
        /// # Panics
        ///
        /// This function will panic if `a` or `b` carries bits that do not encode a
        /// value of its kind.
        ///
        /// # Safety
        ///
        /// `dest` must be null or point to a valid, writable `IntguardValue`.
        #[no_mangle]
        pub unsafe extern "C" fn $name(
            dest: *mut IntguardValue,
            a: IntguardValue,
            b: IntguardValue,
        ) -> bool {
            let a = a.to_operand(stringify!($name));
            let b = b.to_operand(stringify!($name));
            try_binary(unsafe { destination(dest) }, $op, a, b).is_ok()
        }
    )*};
}

ffi_binary! {
    intguard_add => Operation::Add, "+";
    intguard_sub => Operation::Sub, "-";
    intguard_mul => Operation::Mul, "*";
    intguard_div => Operation::Div, "/";
    intguard_rem => Operation::Rem, "%";
    intguard_shl => Operation::Shl, "<<";
    intguard_shr => Operation::Shr, ">>";
}

/// Folds `len` operands left to right under `op` and writes the result to
/// `dest` if every step is safe.
///
/// Returns `false` for an empty operand list.
///
/// # Panics
///
/// This function will panic if `operands` is null while `len` is non-zero, or if
/// any operand carries bits that do not encode a value of its kind.
///
/// # Safety
///
/// Unless `len` is zero, `operands` must point to `len` readable values and `dest` must be null or
/// point to a valid, writable `IntguardValue`.
#[no_mangle]
pub unsafe extern "C" fn intguard_chain(
    dest: *mut IntguardValue,
    op: IntguardOperation,
    operands: *const IntguardValue,
    len: usize,
) -> bool {
    assert!(
        !operands.is_null() || len == 0,
        "called `intguard_chain` with null pointer"
    );
    let raw: &[IntguardValue] = if len == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(operands, len) }
    };
    let operands: Vec<TypedOperand> = raw
        .iter()
        .map(|v| v.to_operand("intguard_chain"))
        .collect();
    try_chain(unsafe { destination(dest) }, op.into(), &operands).is_ok()
}

/// Increments `slot` in place if the result fits its kind.
///
/// # Panics
///
/// This function will panic if called with a null pointer or if the slot's bits
/// do not encode a value of its kind.
///
/// # Safety
///
/// `slot` must point to a valid, writable `IntguardValue`.
#[no_mangle]
pub unsafe extern "C" fn intguard_inc(slot: *mut IntguardValue) -> bool {
    assert!(!slot.is_null(), "called `intguard_inc` with null pointer");
    let slot = unsafe { &mut *slot };
    // Panics here rather than inside `load`.
    slot.to_operand("intguard_inc");
    try_unary(slot, UnaryOperation::Increment).is_ok()
}

/// Decrements `slot` in place if the result fits its kind.
///
/// # Panics
///
/// This function will panic if called with a null pointer or if the slot's bits
/// do not encode a value of its kind.
///
/// # Safety
///
/// `slot` must point to a valid, writable `IntguardValue`.
#[no_mangle]
pub unsafe extern "C" fn intguard_dec(slot: *mut IntguardValue) -> bool {
    assert!(!slot.is_null(), "called `intguard_dec` with null pointer");
    let slot = unsafe { &mut *slot };
    slot.to_operand("intguard_dec");
    try_unary(slot, UnaryOperation::Decrement).is_ok()
}

/// Returns whether `value` converts to `kind` without loss.
///
/// # Panics
///
/// This function will panic if `value` carries bits that do not encode a value
/// of its kind.
#[no_mangle]
pub extern "C" fn intguard_can_cast(value: IntguardValue, kind: IntguardKind) -> bool {
    can_cast(value.to_operand("intguard_can_cast"), kind.resolve())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u8v(v: u8) -> IntguardValue {
        IntguardValue::new(IntguardKind::U8, v as u64)
    }

    fn s32v(v: i32) -> IntguardValue {
        IntguardValue::new(IntguardKind::S32, v as i64 as u64)
    }

    #[test]
    fn test_binary_check_only() {
        unsafe {
            assert!(intguard_add(std::ptr::null_mut(), u8v(100), u8v(100)));
            assert!(!intguard_add(std::ptr::null_mut(), u8v(200), u8v(100)));
            assert!(!intguard_div(std::ptr::null_mut(), u8v(1), u8v(0)));
            assert!(!intguard_shl(std::ptr::null_mut(), u8v(1), u8v(8)));
        }
    }

    #[test]
    fn test_binary_writes_destination() {
        let mut dest = IntguardValue::new(IntguardKind::S64, 0);
        unsafe {
            assert!(intguard_mul(&mut dest, u8v(200), u8v(2)));
            assert_eq!(dest.bits, 400);
            assert!(intguard_sub(&mut dest, u8v(1), u8v(2)));
            assert_eq!(dest.bits, (-1i64) as u64);
            assert!(intguard_rem(&mut dest, s32v(-7), s32v(2)));
            assert_eq!(dest.bits, (-1i64) as u64);
            assert!(intguard_shr(&mut dest, s32v(-8), s32v(1)));
            assert_eq!(dest.bits, (-4i64) as u64);
        }
    }

    #[test]
    fn test_destination_untouched_on_failure() {
        let mut dest = IntguardValue::new(IntguardKind::S32, 77);
        unsafe {
            assert!(!intguard_div(&mut dest, s32v(i32::MIN), s32v(-1)));
        }
        assert_eq!(dest.bits, 77);

        let mut narrow = IntguardValue::new(IntguardKind::U8, 5);
        unsafe {
            assert!(!intguard_add(&mut narrow, s32v(250), s32v(10)));
        }
        assert_eq!(narrow.bits, 5);
    }

    #[test]
    fn test_chain() {
        let operands = [s32v(10), s32v(20), s32v(3)];
        let mut dest = IntguardValue::new(IntguardKind::S32, 0);
        unsafe {
            assert!(intguard_chain(
                &mut dest,
                IntguardOperation::Mul,
                operands.as_ptr(),
                operands.len()
            ));
            assert_eq!(dest.bits, 600);
            assert!(!intguard_chain(
                &mut dest,
                IntguardOperation::Mul,
                operands.as_ptr(),
                0
            ));
            assert_eq!(dest.bits, 600);
        }
    }

    #[test]
    fn test_chain_empty_null_operands() {
        let mut dest = IntguardValue::new(IntguardKind::S32, 7);
        unsafe {
            assert!(!intguard_chain(
                std::ptr::null_mut(),
                IntguardOperation::Add,
                std::ptr::null(),
                0
            ));
            assert!(!intguard_chain(
                &mut dest,
                IntguardOperation::Add,
                std::ptr::null(),
                0
            ));
        }
        assert_eq!(dest.bits, 7);
    }

    #[test]
    fn test_inc_dec() {
        let mut slot = u8v(254);
        unsafe {
            assert!(intguard_inc(&mut slot));
            assert!(!intguard_inc(&mut slot));
            assert_eq!(slot.bits, 255);
        }

        let mut slot = IntguardValue::new(IntguardKind::S8, (-128i64) as u64);
        unsafe {
            assert!(!intguard_dec(&mut slot));
            assert!(intguard_inc(&mut slot));
        }
        assert_eq!(slot.bits, (-127i64) as u64);
    }

    #[test]
    fn test_can_cast() {
        assert!(!intguard_can_cast(IntguardValue::new(IntguardKind::U32, 300), IntguardKind::U8));
        assert!(!intguard_can_cast(s32v(-1), IntguardKind::U32));
        assert!(intguard_can_cast(s32v(-1), IntguardKind::S64));
        assert!(intguard_can_cast(u8v(255), IntguardKind::UnsignedChar));
    }
}
