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

//! Property-based tests for the safety engine.
//!
//! Native checked arithmetic is the oracle: for every primitive, an operation is
//! reported safe exactly when the corresponding `checked_*` method succeeds, and
//! the destination then holds the same value.

use intguard_core::api::{
    safe_add, safe_div, safe_eval, safe_mul, safe_rem, safe_shl, safe_shr, safe_sub, try_binary,
    try_eval,
};
use intguard_core::cast::can_cast;
use intguard_core::engine::Operation;
use intguard_core::kind::IntegerKind;
use intguard_core::operand::TypedOperand;
use proptest::prelude::*;

// ============================================================================
// Helper functions
// ============================================================================

fn any_kind() -> impl Strategy<Value = IntegerKind> {
    prop::sample::select(IntegerKind::ALL.to_vec())
}

/// A value in the range of `kind`, biased toward the boundaries.
fn value_in(kind: IntegerKind) -> impl Strategy<Value = i128> {
    let (min, max) = (kind.min(), kind.max());
    prop_oneof![
        Just(min),
        Just(max),
        Just(0i128),
        Just(min + 1),
        Just(max - 1),
        min..=max,
    ]
}

fn any_operand() -> impl Strategy<Value = TypedOperand> {
    any_kind().prop_flat_map(|kind| value_in(kind).prop_map(move |v| TypedOperand::new(kind, v)))
}

/// Left shift is safe when the amount is in range, the value is non-negative
/// and no set bit is lost.
fn shl_is_safe(value: i128, amount: u32, kind: IntegerKind) -> bool {
    amount < kind.bits() && value >= 0 && value <= kind.max() >> amount
}

// ============================================================================
// Native oracle
// ============================================================================

macro_rules! native_oracle_tests {
    ($($name:ident: $t:ty,)*) => {$(
        mod $name {
            use super::*;

            proptest! {
                #![proptest_config(ProptestConfig::with_cases(512))]

                #[test]
                fn prop_add_matches_native(a: $t, b: $t) {
                    let sentinel: $t = 0x5A as $t;
                    let mut out = sentinel;
                    let ok = safe_add(Some(&mut out), a, b);
                    prop_assert_eq!(ok, a.checked_add(b).is_some());
                    prop_assert_eq!(out, a.checked_add(b).unwrap_or(sentinel));
                }

                #[test]
                fn prop_sub_matches_native(a: $t, b: $t) {
                    let sentinel: $t = 0x5A as $t;
                    let mut out = sentinel;
                    let ok = safe_sub(Some(&mut out), a, b);
                    prop_assert_eq!(ok, a.checked_sub(b).is_some());
                    prop_assert_eq!(out, a.checked_sub(b).unwrap_or(sentinel));
                }

                #[test]
                fn prop_mul_matches_native(a: $t, b: $t) {
                    let sentinel: $t = 0x5A as $t;
                    let mut out = sentinel;
                    let ok = safe_mul(Some(&mut out), a, b);
                    prop_assert_eq!(ok, a.checked_mul(b).is_some());
                    prop_assert_eq!(out, a.checked_mul(b).unwrap_or(sentinel));
                }

                #[test]
                fn prop_div_matches_native(a: $t, b: $t) {
                    let sentinel: $t = 0x5A as $t;
                    let mut out = sentinel;
                    let ok = safe_div(Some(&mut out), a, b);
                    prop_assert_eq!(ok, a.checked_div(b).is_some());
                    prop_assert_eq!(out, a.checked_div(b).unwrap_or(sentinel));
                }

                #[test]
                fn prop_rem_matches_native(a: $t, b: $t) {
                    let sentinel: $t = 0x5A as $t;
                    let mut out = sentinel;
                    let ok = safe_rem(Some(&mut out), a, b);
                    prop_assert_eq!(ok, a.checked_rem(b).is_some());
                    prop_assert_eq!(out, a.checked_rem(b).unwrap_or(sentinel));
                }

                #[test]
                fn prop_shifts(a: $t, amount in 0u8..72) {
                    let kind = TypedOperand::from(a).kind();
                    let bits = kind.bits();

                    let mut out: $t = 0x5A as $t;
                    let ok = safe_shl(Some(&mut out), a, amount);
                    let expected = shl_is_safe(a as i128, amount as u32, kind);
                    prop_assert_eq!(ok, expected);
                    if expected {
                        prop_assert_eq!(out, a << amount);
                    } else {
                        prop_assert_eq!(out, 0x5A as $t);
                    }

                    let mut out: $t = 0x5A as $t;
                    let ok = safe_shr(Some(&mut out), a, amount);
                    prop_assert_eq!(ok, (amount as u32) < bits);
                    if ok {
                        prop_assert_eq!(out, a >> amount);
                    }
                }
            }
        }
    )*}
}

native_oracle_tests! {
    native_u8: u8,
    native_i8: i8,
    native_u16: u16,
    native_i16: i16,
    native_u32: u32,
    native_i32: i32,
    native_u64: u64,
    native_i64: i64,
}

// ============================================================================
// Engine-wide properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_add_zero_is_identity(x in any_operand()) {
        let r = try_binary(None, Operation::Add, x, TypedOperand::new(x.kind(), 0));
        prop_assert_eq!(r, Ok(x));
    }

    #[test]
    fn prop_add_at_max_fails(kind in any_kind()) {
        let max = TypedOperand::new(kind, kind.max());
        let one = TypedOperand::new(kind, 1);
        prop_assert!(try_binary(None, Operation::Add, max, one).is_err());
    }

    #[test]
    fn prop_cast_matches_target_range(x in any_operand(), target in any_kind()) {
        prop_assert_eq!(can_cast(x, target), target.contains(x.value()));
    }

    #[test]
    fn prop_cast_to_own_kind_always_succeeds(x in any_operand()) {
        prop_assert!(can_cast(x, x.kind()));
    }

    #[test]
    fn prop_verdict_is_idempotent(
        a in any_operand(),
        b in any_operand(),
        op in prop::sample::select(Operation::ALL.to_vec()),
    ) {
        let first = try_binary(None, op, a, b);
        let second = try_binary(None, op, a, b);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_expression_is_fifo(a in 0u32..1 << 20, b in 0u32..1 << 20, c in 1u32..1 << 10) {
        let mut out: u32 = 0;
        let ok = safe_eval(Some(&mut out), "u32+u32/u32", &[a as i128, b as i128, c as i128]);
        prop_assert!(ok);
        prop_assert_eq!(out, (a + b) / c);
    }

    #[test]
    fn prop_expression_failure_leaves_destination(a: u8, b: u8, c: u8) {
        let mut out: u8 = 0xA5;
        let expected = a.checked_mul(b).and_then(|ab| ab.checked_sub(c));
        let result = try_eval(Some(&mut out), "u8*u8-u8", &[a as i128, b as i128, c as i128]);
        match expected {
            Some(v) => {
                prop_assert_eq!(result.map(|r| r.value()), Ok(v as i128));
                prop_assert_eq!(out, v);
            }
            None => {
                prop_assert!(result.is_err());
                prop_assert_eq!(out, 0xA5);
            }
        }
    }
}
