//! Thin contracts for the external collaborators this crate calls into but
//! does not implement (§6, §9 "Global mutable state" / "Interrupt-driven input").
//!
//! The simulation core only ever *calls* these; it never owns a renderer,
//! audio device, or socket. Production binaries (and tests) supply concrete
//! implementations; `NullRenderer`/`NullAudio` below are the no-op stand-ins
//! used by the headless demo binary and the integration tests.

use platformer_core::types::{Player, Stage};

/// Masked sprite blit surface. Sprite data itself (BGRI planes + inverted
/// mask) is an asset-layer concern (§6.1); this trait only names the calls
/// the simulation makes, not how they're realized.
pub trait Renderer {
    fn render_tile_map(&mut self, stage: &Stage, camera_x: i32);
    fn render_player(&mut self, player: &Player, camera_x: i32);
    fn render_sprite_16x16_masked(&mut self, x: i32, y: i32, sprite_id: u32);
    fn render_sprite_16x8_masked(&mut self, x: i32, y: i32, sprite_id: u32);
    fn render_sprite_16x32_masked(&mut self, x: i32, y: i32, sprite_id: u32);
}

/// Sound identifiers used by `play_sound`. Kept as a plain enum rather than a
/// raw id so call sites stay self-documenting; the audio collaborator maps
/// these onto whatever tone-sequence table it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    Fire,
    EnemyHit,
    ItemPickup,
    PlayerDamage,
    DoorOpen,
    ExtraLife,
}

pub trait AudioDriver {
    fn play_sound(&mut self, id: SoundId, priority: u8);
    fn stop_sound(&mut self);
    /// Advances the sound driver one tick (step 2 of §4.1); a no-op for
    /// collaborators with no time-sliced tone sequencer.
    fn advance_tick(&mut self) {}
}

/// Reinitializes tile/enemy/item/camera state for a stage or level change
/// (§6 "Core API to collaborators"). The simulation core calls this at the
/// well-defined sync points named in §5; it never decides *how* a stage is
/// loaded, only *when*.
pub trait StageSource {
    fn load_stage(&mut self, level: usize, stage: usize) -> Stage;
}

/// No-op renderer used by the headless demo binary and tests.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_tile_map(&mut self, _stage: &Stage, _camera_x: i32) {}
    fn render_player(&mut self, _player: &Player, _camera_x: i32) {}
    fn render_sprite_16x16_masked(&mut self, _x: i32, _y: i32, _sprite_id: u32) {}
    fn render_sprite_16x8_masked(&mut self, _x: i32, _y: i32, _sprite_id: u32) {}
    fn render_sprite_16x32_masked(&mut self, _x: i32, _y: i32, _sprite_id: u32) {}
}

/// No-op audio driver used by the headless demo binary and tests.
#[derive(Debug, Default)]
pub struct NullAudio {
    pub last_sound: Option<SoundId>,
}

impl AudioDriver for NullAudio {
    fn play_sound(&mut self, id: SoundId, _priority: u8) {
        self.last_sound = Some(id);
    }
    fn stop_sound(&mut self) {
        self.last_sound = None;
    }
}

/// A stage source that always hands back an empty, item-less, door-less
/// stage of the requested size. Handy for synthetic/test worlds (§8, §10.4).
#[derive(Debug, Default)]
pub struct EmptyStageSource;

impl StageSource for EmptyStageSource {
    fn load_stage(&mut self, _level: usize, _stage: usize) -> Stage {
        Stage::new(platformer_core::types::TileGrid::empty())
    }
}
