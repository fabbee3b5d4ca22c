//! Byte ordering used to combine a multi-byte window into a value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The order in which the bytes of a multi-byte value are laid out.
///
/// `Native` stands for whatever the compile target uses; [`ByteOrder::resolve`]
/// turns it into one of the two concrete orders. One-byte values read the
/// same under every ordering.
///
/// In configuration files the orders are spelled `"big"`, `"little"` and
/// `"native"` (or `"be"`, `"le"`, `"ne"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Most-significant byte first (network byte order).
    #[serde(alias = "be")]
    Big,
    /// Least-significant byte first.
    #[serde(alias = "le")]
    Little,
    /// The host platform's order.
    #[default]
    #[serde(alias = "ne")]
    Native,
}

impl ByteOrder {
    /// Map `Native` to the target's concrete order. `Big` and `Little` are
    /// returned unchanged.
    #[inline]
    pub const fn resolve(self) -> ByteOrder {
        match self {
            ByteOrder::Native => {
                if cfg!(target_endian = "big") {
                    ByteOrder::Big
                } else {
                    ByteOrder::Little
                }
            }
            other => other,
        }
    }

    /// Whether this order reads bytes the way the host does.
    #[inline]
    pub const fn is_native(self) -> bool {
        matches!(
            (self.resolve(), ByteOrder::Native.resolve()),
            (ByteOrder::Big, ByteOrder::Big) | (ByteOrder::Little, ByteOrder::Little)
        )
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Big => write!(f, "big-endian"),
            ByteOrder::Little => write!(f, "little-endian"),
            ByteOrder::Native => write!(f, "native-endian"),
        }
    }
}
