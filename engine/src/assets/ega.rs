//! `EGA` fullscreen image format (§6): `plane_size:u16`, then four
//! consecutive RLE-encoded bitplanes (320×200 16-color, one bit per pixel
//! per plane — `plane_size` is normally 8000 = 320*200/8).

use platformer_core::byte_operations::{rle_decode_from, rle_encode};
use platformer_core::read_u16;

use super::{require_len, AssetError};

const PLANE_COUNT: usize = 4;

/// Decodes one EGA fullscreen image into its four raw bitplanes, each
/// `plane_size` bytes. The planes are RLE-encoded back-to-back in `data`
/// after the 2-byte `plane_size` header, so each plane's decode must report
/// how many input bytes it consumed before the next plane's stream can start.
pub fn decode_plane(data: &[u8]) -> Result<[Vec<u8>; PLANE_COUNT], AssetError> {
    require_len(data, 2)?;
    let mut offset = 0usize;
    let plane_size = read_u16!(data, offset) as usize;

    let mut planes: Vec<Vec<u8>> = Vec::with_capacity(PLANE_COUNT);
    for _ in 0..PLANE_COUNT {
        let remaining = &data[offset..];
        let (plane, consumed) = rle_decode_from(remaining, plane_size);
        if plane.len() < plane_size {
            return Err(AssetError::Truncated {
                expected: plane_size,
                found: plane.len(),
            });
        }
        offset += consumed;
        planes.push(plane);
    }

    Ok(planes.try_into().expect("exactly PLANE_COUNT planes pushed"))
}

/// Encodes four raw bitplanes (each `plane_size` bytes) into the `EGA`
/// on-disk format, inverse of [`decode_plane`].
pub fn encode_plane(planes: &[Vec<u8>; PLANE_COUNT]) -> Vec<u8> {
    let plane_size = planes[0].len();
    let mut out = Vec::new();
    out.extend_from_slice(&(plane_size as u16).to_le_bytes());
    for plane in planes {
        out.extend(rle_encode(plane));
    }
    out
}
