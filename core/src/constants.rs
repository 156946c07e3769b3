//! Tuning constants ported from the original game's `physics.h`, `globals.h` and
//! `actors.c`, plus the few values this crate's design notes pin down where the
//! source left them ambiguous (see `SPEC_FULL.md` §9).

use bitflags::bitflags;

// =============================================================================
// Map / playfield dimensions (game units; 1 unit = 8 pixels, 1 tile = 2 units)
// =============================================================================

/// Tile columns in a stage map.
pub const TILE_COLS: usize = 128;
/// Tile rows in a stage map.
pub const TILE_ROWS: usize = 10;

/// Map width in game units.
pub const MAP_WIDTH: i32 = (TILE_COLS * 2) as i32;
/// Map height in game units.
pub const MAP_HEIGHT: i32 = (TILE_ROWS * 2) as i32;

/// Visible playfield width in game units.
pub const PLAYFIELD_WIDTH: i32 = 24;
/// Visible playfield height in game units.
pub const PLAYFIELD_HEIGHT: i32 = 20;

/// Sentinel marking an unused/dead pool slot coordinate (fireballs).
pub const DEAD: u8 = 0xFF;

// =============================================================================
// Player physics (physics.h)
// =============================================================================

pub const PLAYER_WIDTH: i32 = 2;
pub const PLAYER_HEIGHT: i32 = 4;

/// Gravity in normal levels, in eighths of a game unit per tick.
pub const GRAVITY: i8 = 5;
/// Gravity in the low-gravity "space" level.
pub const GRAVITY_SPACE: i8 = 3;
/// Maximum downward velocity (eighths of a game unit per tick).
pub const TERMINAL_VELOCITY: i32 = 23;
/// Upward acceleration applied each tick the jump button is held.
pub const JUMP_ACCELERATION: i32 = 7;
/// Default jump power (without Boots).
pub const JUMP_POWER_DEFAULT: i32 = 4;
/// Jump power once the Boots item has been collected.
pub const JUMP_POWER_WITH_BOOTS: i32 = 5;
/// Jump counter seeded at the start of a jump.
pub const JUMP_COUNTER_INITIAL: u8 = 5;

/// Maximum hit points.
pub const MAX_HP: i32 = 10;
/// Maximum simultaneous fireballs (Blastola Cola firepower cap).
pub const MAX_FIREPOWER: i32 = 5;
/// Maximum treasures tracked before the win sequence starts.
pub const MAX_TREASURES: i32 = 3;
/// Ticks the win countdown runs before the end sequence fires.
pub const WIN_COUNTER_INITIAL: i32 = 200;

// =============================================================================
// Actor pools
// =============================================================================

pub const MAX_ENEMIES: usize = 4;
pub const MAX_FIREBALLS: usize = 5;
pub const MAX_DOORS: usize = 3;

/// Fireball horizontal speed (game units/tick); sign follows facing.
pub const FIREBALL_SPEED: i32 = 2;

/// Distance (game units) beyond which a spawned enemy silently despawns.
pub const ENEMY_DESPAWN_DISTANCE: i32 = 30;

/// Spawn-offset cycle: horizontal distance outside the playfield used for
/// successive enemy spawns, so enemies don't pile up in one column.
pub const SPAWN_OFFSET_CYCLE: [i32; 4] = [24, 26, 28, 30];

/// Respawn countdown cycle (ticks) once an enemy's death animation completes.
pub const RESPAWN_COUNTER_CYCLE: [i32; 5] = [20, 40, 60, 80, 100];

/// Retry delay applied when a spawn attempt is voided (behavior == Unused).
pub const SPAWN_RETRY_VOID_COUNTER: i32 = 100;

/// Fixed initial jump velocity for the Leap behavior.
///
/// The original assembly used `-7` (a shallow ~4-unit arc); this crate uses the
/// stronger `-10` recorded in the later C port, which clears two-tile gaps in the
/// bundled reference stages without the enemy clipping back into the takeoff tile.
pub const LEAP_INITIAL_Y_VEL: i32 = -10;
/// Gravity applied to a Leap enemy while airborne (not the player's gravity).
pub const LEAP_GRAVITY: i32 = 2;
/// Vertical velocity used to start a Leap enemy falling off a ledge.
pub const LEAP_FALL_START_Y_VEL: i32 = 8;

// =============================================================================
// Scoring
// =============================================================================

/// Points (already ×100) awarded for a fireball killing an enemy.
pub const POINTS_ENEMY_KILL: i32 = 300;
/// Points awarded for picking up an item.
pub const POINTS_ITEM_PICKUP: i32 = 2000;

/// Score thresholds at which an extra life is awarded, each at most once.
pub const EXTRA_LIFE_THRESHOLDS: [u32; 5] = [20_000, 50_000, 100_000, 200_000, 500_000];

/// Maximum representable score (24-bit, three little-endian bytes).
pub const MAX_SCORE: u32 = 0x00FF_FFFF;

// =============================================================================
// Timing
// =============================================================================

/// Ticks per second (~55ms per tick).
pub const TICKS_PER_SECOND: u32 = 18;

bitflags! {
    /// Latched input snapshot read once per tick (§5, §6).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InputButtons: u8 {
        const LEFT     = 1 << 0;
        const RIGHT    = 1 << 1;
        const JUMP     = 1 << 2;
        const FIRE     = 1 << 3;
        const OPEN     = 1 << 4;
        const TELEPORT = 1 << 5;
        const PAUSE    = 1 << 6;
    }
}
