//! `PT` tile map format (§6): `width:u16`, `height:u16`, then `width*height`
//! row-major tile IDs.

use platformer_core::constants::{TILE_COLS, TILE_ROWS};
use platformer_core::read_u16;
use platformer_core::types::TileGrid;

use super::{require_len, AssetError};

/// Parses a `PT` tile map. `tileset_last_passable` comes from the tileset
/// (TT2) asset, not the PT file itself (§3).
pub fn parse_pt(data: &[u8], tileset_last_passable: u8) -> Result<TileGrid, AssetError> {
    require_len(data, 4)?;
    let mut offset = 0usize;
    let width = read_u16!(data, offset) as usize;
    let height = read_u16!(data, offset) as usize;

    if width != TILE_COLS {
        return Err(AssetError::InvalidHeader {
            field: "width",
            value: width as u32,
        });
    }
    if height != TILE_ROWS {
        return Err(AssetError::InvalidHeader {
            field: "height",
            value: height as u32,
        });
    }

    let tile_count = width * height;
    require_len(data, offset + tile_count)?;
    let tiles = data[offset..offset + tile_count].to_vec();

    Ok(TileGrid::new(tiles, tileset_last_passable))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pt() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(TILE_COLS as u16).to_le_bytes());
        bytes.extend_from_slice(&(TILE_ROWS as u16).to_le_bytes());
        bytes.extend(std::iter::repeat(0u8).take(TILE_COLS * TILE_ROWS));
        bytes
    }

    #[test]
    fn parses_well_formed_map() {
        let data = sample_pt();
        let grid = parse_pt(&data, 4).expect("parses");
        assert!(!grid.is_solid(0, 0));
    }

    #[test]
    fn rejects_truncated_map() {
        let mut data = sample_pt();
        data.truncate(data.len() - 10);
        assert!(matches!(parse_pt(&data, 4), Err(AssetError::Truncated { .. })));
    }

    #[test]
    fn rejects_wrong_dimensions() {
        let mut data = sample_pt();
        data[0] = 1;
        data[1] = 0;
        assert!(matches!(
            parse_pt(&data, 4),
            Err(AssetError::InvalidHeader { field: "width", .. })
        ));
    }
}
