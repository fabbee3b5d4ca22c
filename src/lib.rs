//! # scalar-read
//!
//! Read fixed-width integers and IEEE 754 floats out of a byte buffer at an
//! arbitrary offset, in big-endian, little-endian or native byte order.
//!
//! ## Overview
//!
//! This crate is the bottom layer of a binary-format parser: given a byte
//! slice, an offset and a target type, it reads exactly `size_of::<T>()`
//! bytes and reinterprets them as `T`. It never allocates, never mutates the
//! buffer and never reads part of a value: either the whole window is inside
//! the buffer or the call fails with [`Error::InsufficientData`]. Offsets may
//! be negative (they fail the same way).
//!
//! The width and interpretation are chosen at compile time through the
//! sealed [`Scalar`] trait, so one generic function covers every type.
//!
//! ## Type mapping
//!
//! | Rust type | Bytes | Interpretation |
//! |-----------|-------|----------------|
//! | `u8`, `i8` | 1 | the byte itself, order ignored |
//! | `u16`, `u32`, `u64` | 2, 4, 8 | unsigned magnitude |
//! | `i16`, `i32`, `i64` | 2, 4, 8 | unsigned pattern read as two's complement |
//! | `usize` | pointer width | unsigned magnitude |
//! | `f32` | 4 | `u32` pattern read as IEEE 754 binary32 |
//! | `f64` | 8 | `u64` pattern read as IEEE 754 binary64 |
//!
//! Through [`from_bytes_at`], newtype wrappers around these types read the
//! same way. Any other type is rejected with [`Error::UnsupportedKind`].
//!
//! ## Example
//!
//! ```rust
//! use scalar_read::{ByteOrder, Error, expect_read_ordered, read, read_ordered};
//!
//! let buf = [0xDE, 0xAD, 0xCA, 0xFE];
//!
//! assert_eq!(read::<u8>(&buf, 0).unwrap(), 0xDE);
//! assert_eq!(read_ordered::<u32>(&buf, 0, Some(ByteOrder::Big)).unwrap(), 0xDEAD_CAFE);
//! assert_eq!(expect_read_ordered::<u16>(&buf, 2, Some(ByteOrder::Little)), 0xFECA);
//!
//! let err = read_ordered::<i64>(&buf, 1, None).unwrap_err();
//! assert!(matches!(err, Error::InsufficientData { width: 8, len: 4, .. }));
//! ```

pub mod de;
pub mod error;
pub mod kind;
pub mod order;
pub mod read;

pub use de::{Deserializer, from_bytes_at};
pub use error::{Error, Result};
pub use kind::Kind;
pub use order::ByteOrder;
pub use read::{Scalar, expect_read, expect_read_ordered, kind_of, read, read_ordered};
