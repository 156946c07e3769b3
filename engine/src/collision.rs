//! Width-aware tile collision, shared by player physics and every enemy
//! behavior (§4.2, §4.7).

use platformer_core::types::TileGrid;

/// True if the 2-unit-wide actor occupying `(x, y)` overlaps a solid tile.
/// A 2-unit body only straddles two tile columns when `x` is odd, so the
/// second column only needs checking in that case (§4.2, §4.7).
pub fn solid_for_width(tiles: &TileGrid, x: i32, y: i32) -> bool {
    if tiles.is_solid(x, y) {
        return true;
    }
    x % 2 != 0 && tiles.is_solid(x + 1, y)
}
