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

//! Platform model for C-style kind aliases.
//!
//! Names like `long` or `size_t` do not have a fixed width; their width is a
//! property of the data model of the target platform. A `PlatformModel` pins
//! each alias to one canonical `Width` up front, so by the time an operand
//! reaches the engine it always carries one of the eight concrete kinds.
//!
//! `PlatformModel::host()` describes the target this crate was compiled for.
//! The `lp64`, `llp64` and `ilp32` presets describe the common data models and
//! can be adjusted with the builder-style `with_*` setters.

use crate::kind::{IntegerKind, Width};

/// A platform-dependent integer type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindAlias {
    /// Plain `char`, whose signedness is platform-defined.
    Char,
    SignedChar,
    UnsignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    /// `size_t`.
    Size,
    /// `ssize_t` / `ptrdiff_t`.
    SignedSize,
}

/// Widths and signedness of the platform-dependent C integer types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformModel {
    char_signed: bool,
    short: Width,
    int: Width,
    long: Width,
    long_long: Width,
    size: Width,
}

impl Default for PlatformModel {
    fn default() -> Self {
        Self::host()
    }
}

impl PlatformModel {
    /// The data model of the target this crate was compiled for.
    pub const fn host() -> Self {
        Self {
            char_signed: std::ffi::c_char::MIN != 0,
            short: Width::from_bytes(std::mem::size_of::<std::ffi::c_short>()),
            int: Width::from_bytes(std::mem::size_of::<std::ffi::c_int>()),
            long: Width::from_bytes(std::mem::size_of::<std::ffi::c_long>()),
            long_long: Width::from_bytes(std::mem::size_of::<std::ffi::c_longlong>()),
            size: Width::from_bytes(std::mem::size_of::<usize>()),
        }
    }

    /// 64-bit Unix: 32-bit `int`, 64-bit `long` and `size_t`, signed `char`.
    pub const fn lp64() -> Self {
        Self {
            char_signed: true,
            short: Width::W16,
            int: Width::W32,
            long: Width::W64,
            long_long: Width::W64,
            size: Width::W64,
        }
    }

    /// 64-bit Windows: `long` stays 32-bit while `size_t` is 64-bit.
    pub const fn llp64() -> Self {
        Self {
            long: Width::W32,
            ..Self::lp64()
        }
    }

    /// 32-bit platforms: `int`, `long` and `size_t` are all 32-bit.
    pub const fn ilp32() -> Self {
        Self {
            long: Width::W32,
            size: Width::W32,
            ..Self::lp64()
        }
    }

    /// Sets whether plain `char` is signed.
    #[inline]
    pub const fn with_char_signed(mut self, yes: bool) -> Self {
        self.char_signed = yes;
        self
    }

    #[inline]
    pub const fn with_short(mut self, width: Width) -> Self {
        self.short = width;
        self
    }

    #[inline]
    pub const fn with_int(mut self, width: Width) -> Self {
        self.int = width;
        self
    }

    #[inline]
    pub const fn with_long(mut self, width: Width) -> Self {
        self.long = width;
        self
    }

    #[inline]
    pub const fn with_long_long(mut self, width: Width) -> Self {
        self.long_long = width;
        self
    }

    /// Sets the width of `size_t` and `ssize_t`.
    #[inline]
    pub const fn with_size(mut self, width: Width) -> Self {
        self.size = width;
        self
    }

    /// Resolves an alias to its concrete kind on this platform.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use intguard_core::kind::IntegerKind;
    /// # use intguard_core::platform::{KindAlias, PlatformModel};
    /// assert_eq!(PlatformModel::lp64().resolve(KindAlias::UnsignedLong), IntegerKind::U64);
    /// assert_eq!(PlatformModel::llp64().resolve(KindAlias::UnsignedLong), IntegerKind::U32);
    /// ```
    pub const fn resolve(&self, alias: KindAlias) -> IntegerKind {
        match alias {
            KindAlias::Char => IntegerKind::new(self.char_signed, Width::W8),
            KindAlias::SignedChar => IntegerKind::S8,
            KindAlias::UnsignedChar => IntegerKind::U8,
            KindAlias::Short => IntegerKind::new(true, self.short),
            KindAlias::UnsignedShort => IntegerKind::new(false, self.short),
            KindAlias::Int => IntegerKind::new(true, self.int),
            KindAlias::UnsignedInt => IntegerKind::new(false, self.int),
            KindAlias::Long => IntegerKind::new(true, self.long),
            KindAlias::UnsignedLong => IntegerKind::new(false, self.long),
            KindAlias::LongLong => IntegerKind::new(true, self.long_long),
            KindAlias::UnsignedLongLong => IntegerKind::new(false, self.long_long),
            KindAlias::Size => IntegerKind::new(false, self.size),
            KindAlias::SignedSize => IntegerKind::new(true, self.size),
        }
    }
}

impl std::fmt::Display for PlatformModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PlatformModel(char: {}, short: {}, int: {}, long: {}, long long: {}, size: {})",
            if self.char_signed { "signed" } else { "unsigned" },
            self.short,
            self.int,
            self.long,
            self.long_long,
            self.size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_matches_rust_ffi_types() {
        let host = PlatformModel::host();
        assert_eq!(host.resolve(KindAlias::Int).bits(), std::ffi::c_int::BITS);
        assert_eq!(host.resolve(KindAlias::Long).bits(), std::ffi::c_long::BITS);
        assert_eq!(host.resolve(KindAlias::Size).bits(), usize::BITS);
        assert_eq!(
            host.resolve(KindAlias::Char).is_signed(),
            std::ffi::c_char::MIN != 0
        );
        assert_eq!(PlatformModel::default(), host);
    }

    #[test]
    fn test_lp64_resolution() {
        let p = PlatformModel::lp64();
        assert_eq!(p.resolve(KindAlias::Char), IntegerKind::S8);
        assert_eq!(p.resolve(KindAlias::UnsignedShort), IntegerKind::U16);
        assert_eq!(p.resolve(KindAlias::Int), IntegerKind::S32);
        assert_eq!(p.resolve(KindAlias::Long), IntegerKind::S64);
        assert_eq!(p.resolve(KindAlias::Size), IntegerKind::U64);
        assert_eq!(p.resolve(KindAlias::SignedSize), IntegerKind::S64);
    }

    #[test]
    fn test_llp64_and_ilp32_differ_from_lp64() {
        assert_eq!(PlatformModel::llp64().resolve(KindAlias::Long), IntegerKind::S32);
        assert_eq!(PlatformModel::llp64().resolve(KindAlias::Size), IntegerKind::U64);
        assert_eq!(PlatformModel::ilp32().resolve(KindAlias::Size), IntegerKind::U32);
        assert_eq!(
            PlatformModel::ilp32().resolve(KindAlias::LongLong),
            IntegerKind::S64
        );
    }

    #[test]
    fn test_builder_overrides() {
        let p = PlatformModel::lp64()
            .with_char_signed(false)
            .with_int(Width::W16)
            .with_size(Width::W32);
        assert_eq!(p.resolve(KindAlias::Char), IntegerKind::U8);
        assert_eq!(p.resolve(KindAlias::UnsignedInt), IntegerKind::U16);
        assert_eq!(p.resolve(KindAlias::Size), IntegerKind::U32);
        // Fixed-signedness char aliases ignore the plain char setting.
        assert_eq!(p.resolve(KindAlias::SignedChar), IntegerKind::S8);
    }

    #[test]
    fn test_display() {
        let s = PlatformModel::lp64().to_string();
        assert!(s.contains("long: 64"));
        assert!(s.contains("char: signed"));
    }
}
