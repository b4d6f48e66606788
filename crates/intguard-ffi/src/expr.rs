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

use crate::ops::destination;
use crate::value::IntguardValue;
use intguard_core::dest::deliver;
use intguard_core::expr::Expression;
use libc::c_char;
use std::ffi::CStr;

/// Evaluates a format string such as `"u32+s16/u64"` over `len` values and
/// writes the result to `dest` if every step is safe.
///
/// Each value is given as 64 raw bits and decoded with the kind of the term it
/// binds to. A malformed format, a value count different from the number of
/// terms, or a value that does not fit its term all yield `false`.
///
/// # Panics
///
/// This function will panic if `format` is null or not valid UTF-8, or if
/// `values` is null while `len` is non-zero.
///
/// # Safety
///
/// `format` must point to a NUL-terminated string, `values` to `len` readable
/// integers, and `dest` must be null or point to a valid, writable
/// `IntguardValue`.
#[no_mangle]
pub unsafe extern "C" fn intguard_eval(
    dest: *mut IntguardValue,
    format: *const c_char,
    values: *const u64,
    len: usize,
) -> bool {
    assert!(!format.is_null(), "called `intguard_eval` with null pointer");
    assert!(
        !values.is_null() || len == 0,
        "called `intguard_eval` with null pointer"
    );

    let format = match unsafe { CStr::from_ptr(format) }.to_str() {
        Ok(format) => format,
        Err(e) => panic!("called `intguard_eval` with a format that is not UTF-8: {}", e),
    };
    let raw: &[u64] = if len == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(values, len) }
    };

    let Ok(expr) = Expression::parse(format) else {
        return false;
    };
    let values: Vec<i128> = raw
        .iter()
        .enumerate()
        .map(|(i, &bits)| match expr.kinds().get(i) {
            Some(kind) if kind.is_signed() => bits as i64 as i128,
            _ => bits as i128,
        })
        .collect();

    expr.evaluate(&values)
        .and_then(|result| deliver(result, unsafe { destination(dest) }))
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::IntguardKind;
    use std::ffi::CString;

    fn eval(dest: *mut IntguardValue, format: &str, values: &[u64]) -> bool {
        let format = CString::new(format).unwrap();
        unsafe { intguard_eval(dest, format.as_ptr(), values.as_ptr(), values.len()) }
    }

    #[test]
    fn test_eval_fifo() {
        let mut dest = IntguardValue::new(IntguardKind::U32, 0);
        assert!(eval(&mut dest, "u32+s16/u64", &[10, 20, 2]));
        assert_eq!(dest.bits, 15);
    }

    #[test]
    fn test_eval_decodes_signed_terms() {
        let mut dest = IntguardValue::new(IntguardKind::S64, 0);
        assert!(eval(&mut dest, "s32+s8", &[(-100i64) as u64, (-28i64) as u64]));
        assert_eq!(dest.bits, (-128i64) as u64);
    }

    #[test]
    fn test_eval_failures_leave_destination() {
        let mut dest = IntguardValue::new(IntguardKind::U8, 9);
        assert!(!eval(&mut dest, "u8*u8", &[16, 16]));
        assert!(!eval(&mut dest, "u8*", &[16]));
        assert!(!eval(&mut dest, "u8*u8", &[16]));
        assert!(!eval(&mut dest, "u8+u8", &[1, 256]));
        assert!(!eval(&mut dest, "u32+u32", &[200, 100]));
        assert_eq!(dest.bits, 9);
    }

    #[test]
    fn test_eval_check_only() {
        assert!(eval(std::ptr::null_mut(), "u64-u64", &[5, 5]));
        assert!(!eval(std::ptr::null_mut(), "u64-u64", &[5, 6]));
    }

    #[test]
    fn test_eval_zero_values_with_null_pointer() {
        let format = CString::new("u8").unwrap();
        let ok = unsafe { intguard_eval(std::ptr::null_mut(), format.as_ptr(), std::ptr::null(), 0) };
        assert!(!ok);
    }
}
