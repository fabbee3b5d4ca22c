//! Descriptor for the type a read is asked to produce.

use serde::Serialize;
use std::fmt;

/// The category and width of a requested value.
///
/// Only the numeric kinds can be read. The remaining variants exist so an
/// [`Error::UnsupportedKind`](crate::Error::UnsupportedKind) can say what was
/// asked for instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// 8-bit two's-complement integer.
    I8,
    /// 8-bit unsigned integer.
    U8,
    /// 16-bit two's-complement integer.
    I16,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit two's-complement integer.
    I32,
    /// 32-bit unsigned integer.
    U32,
    /// 64-bit two's-complement integer.
    I64,
    /// 64-bit unsigned integer.
    U64,
    /// Pointer-sized unsigned integer.
    Usize,
    /// IEEE 754 binary32.
    F32,
    /// IEEE 754 binary64.
    F64,

    /// `bool`
    Bool,
    /// `char`
    Char,
    /// 128-bit signed integer (not readable)
    I128,
    /// 128-bit unsigned integer (not readable)
    U128,
    /// `&str` or `String`
    Str,
    /// `&[u8]` or `Vec<u8>` as serde bytes
    Bytes,
    /// `Option<T>`
    Option,
    /// `()` or a unit struct
    Unit,
    /// A variable-length sequence
    Seq,
    /// A tuple or tuple struct
    Tuple,
    /// A map
    Map,
    /// A struct with named fields
    Struct,
    /// An enum
    Enum,
    /// A field or variant identifier
    Identifier,
    /// A self-describing request (`deserialize_any` / `deserialize_ignored_any`).
    Any,
}

impl Kind {
    /// Number of bytes a value of this kind occupies, or `None` for kinds
    /// that cannot be read.
    pub const fn width(self) -> Option<usize> {
        match self {
            Kind::I8 | Kind::U8 => Some(1),
            Kind::I16 | Kind::U16 => Some(2),
            Kind::I32 | Kind::U32 | Kind::F32 => Some(4),
            Kind::I64 | Kind::U64 | Kind::F64 => Some(8),
            Kind::Usize => Some(size_of::<usize>()),
            _ => None,
        }
    }

    pub const fn is_numeric(self) -> bool {
        self.width().is_some()
    }

    /// Two's-complement integer kinds. Floats are not included; see
    /// [`Kind::is_float`].
    pub const fn is_signed(self) -> bool {
        matches!(self, Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64)
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Kind::F32 | Kind::F64)
    }

    const fn name(self) -> &'static str {
        match self {
            Kind::I8 => "i8",
            Kind::U8 => "u8",
            Kind::I16 => "i16",
            Kind::U16 => "u16",
            Kind::I32 => "i32",
            Kind::U32 => "u32",
            Kind::I64 => "i64",
            Kind::U64 => "u64",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Bool => "bool",
            Kind::Char => "char",
            Kind::I128 => "i128",
            Kind::U128 => "u128",
            Kind::Str => "str",
            Kind::Bytes => "bytes",
            Kind::Option => "option",
            Kind::Unit => "unit",
            Kind::Seq => "seq",
            Kind::Tuple => "tuple",
            Kind::Map => "map",
            Kind::Struct => "struct",
            Kind::Enum => "enum",
            Kind::Identifier => "identifier",
            Kind::Any => "any",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_widths() {
        assert_eq!(Kind::U8.width(), Some(1));
        assert_eq!(Kind::I16.width(), Some(2));
        assert_eq!(Kind::F32.width(), Some(4));
        assert_eq!(Kind::U64.width(), Some(8));
        assert_eq!(Kind::Usize.width(), Some(size_of::<usize>()));
    }

    #[test]
    fn non_numeric_kinds_have_no_width() {
        for kind in [Kind::Bool, Kind::Char, Kind::I128, Kind::Str, Kind::Struct, Kind::Any] {
            assert_eq!(kind.width(), None, "{kind}");
            assert!(!kind.is_numeric());
        }
    }

    #[test]
    fn classification() {
        assert!(Kind::I32.is_signed());
        assert!(!Kind::U32.is_signed());
        assert!(!Kind::Usize.is_signed());
        assert!(!Kind::F32.is_signed(), "f32 classified as signed integer");
        assert!(!Kind::F64.is_signed(), "f64 classified as signed integer");
        assert!(Kind::F32.is_float());
        assert!(Kind::F64.is_float());
        assert!(!Kind::I64.is_float());
    }

    #[test]
    fn display_uses_rust_type_names() {
        assert_eq!(Kind::Usize.to_string(), "usize");
        assert_eq!(Kind::F64.to_string(), "f64");
        assert_eq!(Kind::Bool.to_string(), "bool");
    }
}
