//! Door activation and cross-stage/cross-level transition (§4.5).

use platformer_core::constants::InputButtons;
use platformer_core::types::{Door, Player, Stage};

use crate::interfaces::{AudioDriver, SoundId, StageSource};

/// The door the player most recently arrived through, so the reciprocal door
/// on the destination stage can be located symmetrically (§4.5, §8 scenario 6).
#[derive(Debug, Clone, Copy)]
pub struct SourceDoor {
    pub level: usize,
    pub stage: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorOutcome {
    None,
    Transitioned { level: usize, stage: usize },
}

/// Scans the current stage's doors for one under the player with the open
/// key pressed and the door key held, and performs the transition (§4.5).
#[allow(clippy::too_many_arguments)]
pub fn try_activate<S: StageSource>(
    player: &mut Player,
    stage: &mut Stage,
    current_level: &mut usize,
    current_stage: &mut usize,
    source_door: &mut Option<SourceDoor>,
    stage_source: &mut S,
    input: InputButtons,
    audio: &mut impl AudioDriver,
) -> DoorOutcome {
    if !input.contains(InputButtons::OPEN) || !player.inventory.has_door_key {
        return DoorOutcome::None;
    }
    let Some(door) = stage.door_at(player.x, player.y) else {
        return DoorOutcome::None;
    };

    let arrived_from = SourceDoor {
        level: *current_level,
        stage: *current_stage,
    };

    *current_level = door.target_level;
    *current_stage = door.target_stage;
    *stage = stage_source.load_stage(door.target_level, door.target_stage);
    *source_door = Some(arrived_from);

    if let Some(reciprocal) = find_reciprocal(stage, arrived_from) {
        player.x = reciprocal.x;
        player.y = reciprocal.y;
    }

    audio.play_sound(SoundId::DoorOpen, 2);
    DoorOutcome::Transitioned {
        level: *current_level,
        stage: *current_stage,
    }
}

/// Finds the door in `stage` whose target is the stage the player just came
/// from — the reciprocal door the player should appear at.
fn find_reciprocal(stage: &Stage, arrived_from: SourceDoor) -> Option<Door> {
    stage
        .doors
        .iter()
        .find(|d| d.target_level == arrived_from.level && d.target_stage == arrived_from.stage)
        .copied()
}
