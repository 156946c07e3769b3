//! Byte-exact asset parsers (§6, §6.1, §10.3).
//!
//! Parsing is the only fallible surface in this crate. Everything returns
//! `Result<_, AssetError>`; whether a failure is fatal is a decision made by
//! the caller (typically a startup routine), never by this crate (§7).

mod ega;
mod pt;
mod shp;
mod tt2;

pub use ega::{decode_plane, encode_plane};
pub use pt::parse_pt;
pub use shp::{AnimationMode, HorizontalMode, SpriteSheet};
pub use tt2::{parse_tt2, TileBitmap};

use std::fmt;

/// The one error type for the whole asset-parsing surface (§10.3).
#[derive(Debug)]
pub enum AssetError {
    Io(std::io::Error),
    Truncated { expected: usize, found: usize },
    InvalidHeader { field: &'static str, value: u32 },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(e) => write!(f, "asset I/O error: {e}"),
            AssetError::Truncated { expected, found } => {
                write!(f, "truncated asset: expected {expected} bytes, found {found}")
            }
            AssetError::InvalidHeader { field, value } => {
                write!(f, "invalid asset header field `{field}` = {value}")
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AssetError {
    fn from(e: std::io::Error) -> Self {
        AssetError::Io(e)
    }
}

/// Checks `data` holds at least `expected` bytes, else a `Truncated` error.
pub(crate) fn require_len(data: &[u8], expected: usize) -> Result<(), AssetError> {
    if data.len() < expected {
        Err(AssetError::Truncated {
            expected,
            found: data.len(),
        })
    } else {
        Ok(())
    }
}
