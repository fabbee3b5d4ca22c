//! Typed reads of fixed-width scalars at a byte offset.
//!
//! [`read_ordered`] is the one entry point that does the work: it resolves
//! the width from the requested type, checks that the whole window is inside
//! the buffer, and hands the window to the type's [`Scalar`] implementation.
//! The other functions are shorthands over it.

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::order::ByteOrder;

mod private {
    pub trait Sealed {}
}

/// A fixed-width numeric type that can be read out of a byte window.
///
/// This trait is sealed: it is implemented for `u8`, `i8`, `u16`, `i16`,
/// `u32`, `i32`, `u64`, `i64`, `usize`, `f32` and `f64` only. Multi-byte
/// integers are combined as an unsigned pattern and then reinterpreted as
/// two's complement when signed; floats are combined as an unsigned pattern
/// of the same width and reinterpreted as IEEE 754 bits.
pub trait Scalar: private::Sealed + Copy + Sized {
    /// The category and width of `Self`.
    const KIND: Kind;
    /// Number of bytes consumed by one value.
    const WIDTH: usize;

    /// Build a value from exactly `WIDTH` bytes in the given order.
    fn from_window(window: &[u8], order: ByteOrder) -> Self;
}

/// Copy a window whose length was already checked into a fixed array.
#[inline]
fn to_array<const N: usize>(window: &[u8]) -> [u8; N] {
    let mut raw = [0u8; N];
    raw.copy_from_slice(&window[..N]);
    raw
}

macro_rules! impl_single_byte {
    ($t:ty, $kind:expr) => {
        impl private::Sealed for $t {}

        impl Scalar for $t {
            const KIND: Kind = $kind;
            const WIDTH: usize = 1;

            #[inline]
            fn from_window(window: &[u8], _order: ByteOrder) -> Self {
                window[0] as $t
            }
        }
    };
}

macro_rules! impl_multi_byte {
    ($t:ty, $bits:ty, $kind:expr, |$pattern:ident| $convert:expr) => {
        impl private::Sealed for $t {}

        impl Scalar for $t {
            const KIND: Kind = $kind;
            const WIDTH: usize = size_of::<$bits>();

            #[inline]
            fn from_window(window: &[u8], order: ByteOrder) -> Self {
                let raw = to_array::<{ size_of::<$bits>() }>(window);
                let $pattern: $bits = match order {
                    ByteOrder::Big => <$bits>::from_be_bytes(raw),
                    ByteOrder::Little => <$bits>::from_le_bytes(raw),
                    ByteOrder::Native => <$bits>::from_ne_bytes(raw),
                };
                $convert
            }
        }
    };
}

impl_single_byte!(u8, Kind::U8);
impl_single_byte!(i8, Kind::I8);

impl_multi_byte!(u16, u16, Kind::U16, |bits| bits);
impl_multi_byte!(u32, u32, Kind::U32, |bits| bits);
impl_multi_byte!(u64, u64, Kind::U64, |bits| bits);
impl_multi_byte!(usize, usize, Kind::Usize, |bits| bits);

impl_multi_byte!(i16, u16, Kind::I16, |bits| bits as i16);
impl_multi_byte!(i32, u32, Kind::I32, |bits| bits as i32);
impl_multi_byte!(i64, u64, Kind::I64, |bits| bits as i64);

impl_multi_byte!(f32, u32, Kind::F32, |bits| f32::from_bits(bits));
impl_multi_byte!(f64, u64, Kind::F64, |bits| f64::from_bits(bits));

/// Check that `width` bytes starting at `start` lie inside a buffer of
/// `len` bytes and return the window's start. A `start` of `None` is an
/// offset that did not fit in a `usize`.
pub(crate) fn window_start(start: Option<usize>, width: usize, len: usize) -> Result<usize> {
    match start {
        Some(start) if start.checked_add(width).is_some_and(|end| end <= len) => Ok(start),
        _ => {
            tracing::trace!(offset = ?start, width, len, "read window out of bounds");
            Err(Error::InsufficientData {
                offset: start,
                width,
                len,
            })
        }
    }
}

/// Read a `T` from `buffer` starting at `offset`, in the given byte order.
///
/// `None` for `order` means [`ByteOrder::Native`]. `offset` may be any
/// integer; a negative offset, or one where the `T::WIDTH`-byte window would
/// run past the end of the buffer, fails with
/// [`Error::InsufficientData`] and no byte is interpreted.
///
/// ```rust
/// use scalar_read::{ByteOrder, read_ordered};
///
/// let buf = [0x12, 0x34];
/// assert_eq!(read_ordered::<u16>(&buf, 0, Some(ByteOrder::Big)).unwrap(), 0x1234);
/// assert_eq!(read_ordered::<u16>(&buf, 0, Some(ByteOrder::Little)).unwrap(), 0x3412);
/// assert!(read_ordered::<u16>(&buf, 1, Some(ByteOrder::Big)).is_err());
/// ```
#[inline]
pub fn read_ordered<T: Scalar>(
    buffer: &[u8],
    offset: impl TryInto<usize>,
    order: Option<ByteOrder>,
) -> Result<T> {
    let start = window_start(offset.try_into().ok(), T::WIDTH, buffer.len())?;
    let window = &buffer[start..start + T::WIDTH];
    Ok(T::from_window(window, order.unwrap_or_default().resolve()))
}

/// Read a `T` in the host's native byte order. See [`read_ordered`].
#[inline]
pub fn read<T: Scalar>(buffer: &[u8], offset: impl TryInto<usize>) -> Result<T> {
    read_ordered(buffer, offset, Some(ByteOrder::Native))
}

/// Like [`read_ordered`], but panics when the read fails.
///
/// Meant for call sites where a short buffer is a bug rather than bad
/// input.
///
/// # Panics
///
/// Panics with the [`Error`]'s message if the read fails.
#[track_caller]
pub fn expect_read_ordered<T: Scalar>(
    buffer: &[u8],
    offset: impl TryInto<usize>,
    order: Option<ByteOrder>,
) -> T {
    match read_ordered(buffer, offset, order) {
        Ok(value) => value,
        Err(err) => panic!("failed to read {}: {err}", T::KIND),
    }
}

/// Like [`read`], but panics when the read fails.
///
/// # Panics
///
/// Panics with the [`Error`]'s message if the read fails.
#[track_caller]
pub fn expect_read<T: Scalar>(buffer: &[u8], offset: impl TryInto<usize>) -> T {
    expect_read_ordered(buffer, offset, Some(ByteOrder::Native))
}

/// The [`Kind`] a `T` is read as.
pub const fn kind_of<T: Scalar>() -> Kind {
    T::KIND
}
