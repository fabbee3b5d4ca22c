//! Reading a single scalar through serde.
//!
//! [`read_ordered`](crate::read_ordered) only accepts the built-in numeric
//! types. This module accepts anything whose serde representation is one of
//! them, which covers newtype wrappers such as `struct Port(u16)`. Every
//! other part of the serde data model is rejected with
//! [`Error::UnsupportedKind`] before the buffer is touched.

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::order::ByteOrder;
use crate::read::{Scalar, window_start};
use serde::de::{self, Deserialize, Visitor};

/// Read a `T` from `buffer` at `offset` through its `Deserialize` impl.
///
/// ```rust
/// use serde::Deserialize;
/// use scalar_read::{ByteOrder, from_bytes_at};
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Port(u16);
///
/// let buf = [0x00, 0x1F, 0x90];
/// let port: Port = from_bytes_at(&buf, 1, Some(ByteOrder::Big)).unwrap();
/// assert_eq!(port, Port(8080));
/// ```
pub fn from_bytes_at<'de, T: Deserialize<'de>>(
    buffer: &'de [u8],
    offset: impl TryInto<usize>,
    order: Option<ByteOrder>,
) -> Result<T> {
    let mut de = Deserializer::new(buffer, offset, order);
    T::deserialize(&mut de)
}

/// A serde deserializer that yields one scalar read at a fixed offset.
pub struct Deserializer<'de> {
    input: &'de [u8],
    // None when the caller's offset was not representable as usize
    offset: Option<usize>,
    order: ByteOrder,
}

impl<'de> Deserializer<'de> {
    pub fn new(input: &'de [u8], offset: impl TryInto<usize>, order: Option<ByteOrder>) -> Self {
        Deserializer {
            input,
            offset: offset.try_into().ok(),
            order: order.unwrap_or_default().resolve(),
        }
    }

    /// Read the scalar at the configured offset.
    fn read<T: Scalar>(&self) -> Result<T> {
        let start = window_start(self.offset, T::WIDTH, self.input.len())?;
        Ok(T::from_window(
            &self.input[start..start + T::WIDTH],
            self.order,
        ))
    }
}

fn unsupported<V>(kind: Kind) -> Result<V> {
    tracing::trace!(%kind, "unsupported kind requested");
    Err(Error::UnsupportedKind(kind))
}

// ── Main Deserializer impl ─────────────────────────────────────────────────

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Any)
    }

    fn deserialize_bool<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Bool)
    }

    fn deserialize_i8<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i8(self.read()?)
    }

    fn deserialize_i16<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i16(self.read()?)
    }

    fn deserialize_i32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i32(self.read()?)
    }

    fn deserialize_i64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i64(self.read()?)
    }

    fn deserialize_i128<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::I128)
    }

    fn deserialize_u8<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u8(self.read()?)
    }

    fn deserialize_u16<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u16(self.read()?)
    }

    fn deserialize_u32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u32(self.read()?)
    }

    // serde has no usize hint; usize and u64 both arrive here
    fn deserialize_u64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u64(self.read()?)
    }

    fn deserialize_u128<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::U128)
    }

    fn deserialize_f32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_f32(self.read()?)
    }

    fn deserialize_f64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_f64(self.read()?)
    }

    fn deserialize_char<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Char)
    }

    fn deserialize_str<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Str)
    }

    fn deserialize_string<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Str)
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Bytes)
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Bytes)
    }

    fn deserialize_option<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Option)
    }

    fn deserialize_unit<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Unit)
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _visitor: V,
    ) -> Result<V::Value> {
        unsupported(Kind::Unit)
    }

    /// Newtype wrappers read as their inner scalar.
    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Seq)
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Tuple)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value> {
        unsupported(Kind::Tuple)
    }

    fn deserialize_map<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Map)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value> {
        unsupported(Kind::Struct)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value> {
        unsupported(Kind::Enum)
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Identifier)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        unsupported(Kind::Any)
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}
