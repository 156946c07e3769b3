//! Per-stage item update, pickup, and effect application (§4.4).

use std::collections::HashSet;

use platformer_core::constants::{JUMP_POWER_WITH_BOOTS, MAX_HP, POINTS_ITEM_PICKUP, WIN_COUNTER_INITIAL};
use platformer_core::types::{ItemKind, Player, Score, Stage};

use crate::interfaces::{AudioDriver, Renderer, SoundId};

/// Per-(level, stage) collected-item bitmap (§3 invariant 5). Stored outside
/// `Stage` because stages are reloaded fresh from the asset layer on every
/// transition, but collection state must survive that reload.
pub type ItemsCollected = HashSet<(usize, usize)>;

#[allow(clippy::too_many_arguments)]
pub fn update(
    stage: &mut Stage,
    collected: &mut ItemsCollected,
    level: usize,
    stage_index: usize,
    player: &mut Player,
    camera_x: i32,
    score: &mut Score,
    audio: &mut impl AudioDriver,
    renderer: &mut impl Renderer,
) {
    if collected.contains(&(level, stage_index)) {
        stage.item = None;
        return;
    }
    let Some(item) = stage.item.as_mut() else {
        return;
    };

    let rel_x = item.x - camera_x;
    if !(0..=22).contains(&rel_x) {
        return;
    }
    item.anim_bit = !item.anim_bit;

    let overlap_x = (item.x - player.x).abs() <= 1;
    let overlap_y = (0..4).contains(&(item.y - player.y));
    if overlap_x && overlap_y {
        let kind = item.kind;
        stage.item = None;
        collected.insert((level, stage_index));

        let extra_lives = score.add_points(POINTS_ITEM_PICKUP as u32);
        if extra_lives > 0 {
            player.lives += extra_lives as i32;
            audio.play_sound(SoundId::ExtraLife, 2);
        }
        audio.play_sound(SoundId::ItemPickup, 1);
        apply_effect(kind, player, audio);
    } else {
        let sprite_id = item.anim_bit as u32;
        renderer.render_sprite_16x16_masked(rel_x * 8 + 8, item.y * 8 + 8, sprite_id);
    }
}

/// Applies one item's pickup effect (§4.4 table).
fn apply_effect(kind: ItemKind, player: &mut Player, audio: &mut impl AudioDriver) {
    match kind {
        ItemKind::Corkscrew => player.inventory.has_corkscrew = true,
        ItemKind::BlastolaCola => player.add_firepower(),
        ItemKind::Boots => {
            player.inventory.has_boots = true;
            player.jump_power = JUMP_POWER_WITH_BOOTS;
        }
        ItemKind::Lantern => player.inventory.has_lantern = true,
        ItemKind::Shield => {
            player.inventory.has_shield = true;
            if player.hp == MAX_HP {
                player.lives += 1;
                audio.play_sound(SoundId::ExtraLife, 2);
            } else {
                player.hp_pending_increase = MAX_HP - player.hp;
            }
        }
        ItemKind::TeleportWand => player.inventory.has_teleport_wand = true,
        ItemKind::DoorKey => player.inventory.has_door_key = true,
        ItemKind::Gems | ItemKind::Crown | ItemKind::Gold => {
            if player.add_treasure() {
                player.win_counter = WIN_COUNTER_INITIAL;
            }
        }
    }
}
