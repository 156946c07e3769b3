//! Seek behavior (Killer Bee): aligns horizontally first, then vertically
//! (§4.7). Per the restraint resolution in §9, a skipped tick skips both
//! axes — the restraint check happens once, before either branch.

use platformer_core::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use platformer_core::types::{Enemy, Facing, Player, Stage};

use crate::collision::solid_for_width;

pub fn update(enemy: &mut Enemy, player: &Player, stage: &Stage, camera_x: i32) {
    let (should_move, next_restraint) = enemy.restraint.consume();
    enemy.restraint = next_restraint;
    if !should_move {
        return;
    }

    if enemy.x != player.x {
        let step = (player.x - enemy.x).signum();
        let dest_x = enemy.x + step;
        if dest_x < 0 || dest_x > camera_x + PLAYFIELD_WIDTH - 2 || solid_for_width(&stage.tiles, dest_x, enemy.y) {
            enemy.x_vel = -step;
        } else {
            enemy.x = dest_x;
            enemy.x_vel = step;
        }
        enemy.facing = Facing::from_x_sign(enemy.x_vel);
    } else if enemy.y != player.y {
        let step = (player.y - enemy.y).signum();
        let dest_y = enemy.y + step;
        if (0..=PLAYFIELD_HEIGHT - 2).contains(&dest_y) {
            enemy.y = dest_y;
        }
    }
}
