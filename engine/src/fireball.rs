//! Fireball spawn and per-tick update (§4.3).

use platformer_core::constants::{DEAD, FIREBALL_SPEED, MAX_FIREBALLS, PLAYFIELD_WIDTH, POINTS_ENEMY_KILL};
use platformer_core::types::{CorkscrewPhase, Enemy, EnemyState, Fireball, Player, Score, SparkColor};

use crate::interfaces::{AudioDriver, Renderer, SoundId};

const DEAD_I32: i32 = DEAD as i32;

/// Spawns one fireball from the player's position, if firepower allows and a
/// slot is free (§4.3 "Spawn").
pub fn try_spawn(player: &Player, fireballs: &mut [Fireball; MAX_FIREBALLS], audio: &mut impl AudioDriver) {
    if player.firepower <= 0 {
        return;
    }
    let Some(slot) = fireballs
        .iter_mut()
        .take(player.firepower as usize)
        .find(|f| f.is_dead())
    else {
        return;
    };

    slot.y = (player.y + 1).clamp(0, DEAD_I32 - 1) as u8;
    slot.x = player.x.clamp(0, DEAD_I32 - 1) as u8;
    slot.vel = FIREBALL_SPEED * player.facing.sign();
    slot.corkscrew_phase = CorkscrewPhase::Two;
    slot.animation_frame = 0;
    audio.play_sound(SoundId::Fire, 1);
}

/// Advances every active fireball slot: movement, corkscrew oscillation,
/// animation, off-camera despawn, and enemy collision (§4.3 steps 1-6).
pub fn update_all(
    fireballs: &mut [Fireball; MAX_FIREBALLS],
    player: &mut Player,
    camera_x: i32,
    enemies: &mut [Enemy],
    score: &mut Score,
    audio: &mut impl AudioDriver,
    renderer: &mut impl Renderer,
) {
    for fireball in fireballs.iter_mut().take(player.firepower.max(0) as usize) {
        if fireball.is_dead() {
            continue;
        }

        let new_x = (fireball.x as i32 + fireball.vel).clamp(0, DEAD_I32 - 1);
        fireball.x = new_x as u8;

        if player.inventory.has_corkscrew {
            let (next_phase, dy) = fireball.corkscrew_phase.advance();
            fireball.corkscrew_phase = next_phase;
            let new_y = (fireball.y as i32 + dy).clamp(0, DEAD_I32 - 1);
            fireball.y = new_y as u8;
        }
        fireball.animation_frame = (fireball.animation_frame + 1) % 2;

        let rel_x = fireball.x as i32 - camera_x;
        if (fireball.x as i32) < camera_x || rel_x > PLAYFIELD_WIDTH - 2 {
            fireball.kill();
            continue;
        }

        let mut hit = false;
        for enemy in enemies.iter_mut() {
            if !enemy.is_spawned() {
                continue;
            }
            let dy = fireball.y as i32 - enemy.y;
            let dx = (fireball.x as i32 - enemy.x).abs();
            if (0..=1).contains(&dy) && dx <= 1 {
                enemy.state = EnemyState::Spark {
                    color: SparkColor::White,
                    frame: 0,
                };
                hit = true;
                break;
            }
        }

        if hit {
            fireball.kill();
            let extra_lives = score.add_points(POINTS_ENEMY_KILL as u32);
            if extra_lives > 0 {
                player.lives += extra_lives as i32;
                audio.play_sound(SoundId::ExtraLife, 2);
            }
            audio.play_sound(SoundId::EnemyHit, 1);
            continue;
        }

        if !fireball.is_dead() {
            renderer.render_sprite_16x16_masked(rel_x * 8 + 8, fireball.y as i32 * 8 + 8, fireball.animation_frame as u32);
        }
    }
}
