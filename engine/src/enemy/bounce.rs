//! Bounce behavior (Fire Ball, Brave Bird): independent ±1 bounce on each
//! axis, reversing on a solid-tile bump or playfield edge (§4.7).

use platformer_core::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use platformer_core::types::{Enemy, Facing, Stage};

use crate::collision::solid_for_width;

pub fn update(enemy: &mut Enemy, stage: &Stage, camera_x: i32) {
    let (should_move, next_restraint) = enemy.restraint.consume();
    enemy.restraint = next_restraint;
    if !should_move {
        return;
    }

    let dest_x = enemy.x + enemy.x_vel;
    if dest_x < 0 || dest_x > camera_x + PLAYFIELD_WIDTH - 2 || solid_for_width(&stage.tiles, dest_x, enemy.y) {
        enemy.x_vel = -enemy.x_vel;
    } else {
        enemy.x = dest_x;
    }

    let dest_y = enemy.y + enemy.y_vel;
    if dest_y < 0 || dest_y > PLAYFIELD_HEIGHT - 2 || solid_for_width(&stage.tiles, enemy.x, dest_y) {
        enemy.y_vel = -enemy.y_vel;
    } else {
        enemy.y = dest_y;
    }

    enemy.facing = Facing::from_x_sign(enemy.x_vel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use platformer_core::types::{Behavior, Restraint, TileGrid};

    fn enemy_at(x: i32, y: i32) -> Enemy {
        let mut enemy = Enemy::new_slot(Behavior::Bounce, false, 0);
        enemy.x = x;
        enemy.y = y;
        enemy.restraint = Restraint::MoveEveryTick;
        enemy
    }

    #[test]
    fn bumping_the_right_playfield_edge_reverses_horizontal_velocity() {
        let camera_x = 0;
        let mut enemy = enemy_at(camera_x + PLAYFIELD_WIDTH - 2, 0);
        enemy.x_vel = 1;
        let stage = Stage::new(TileGrid::empty());

        update(&mut enemy, &stage, camera_x);

        assert_eq!(enemy.x_vel, -1);
        assert_eq!(enemy.x, camera_x + PLAYFIELD_WIDTH - 2);
    }

    #[test]
    fn a_skipped_tick_leaves_position_unchanged() {
        let mut enemy = enemy_at(10, 10);
        enemy.x_vel = 1;
        enemy.y_vel = 1;
        enemy.restraint = Restraint::SkipThisTick;
        let stage = Stage::new(TileGrid::empty());

        update(&mut enemy, &stage, 0);

        assert_eq!(enemy.x, 10);
        assert_eq!(enemy.y, 10);
    }
}
