//! Leap behavior (Bug-eyes, Blind Toad, Beach Ball): a gravity-ballistic jump
//! toward the player, bouncing off solid tiles while airborne (§4.7).

use platformer_core::constants::{
    LEAP_FALL_START_Y_VEL, LEAP_GRAVITY, LEAP_INITIAL_Y_VEL, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH,
    TERMINAL_VELOCITY,
};
use platformer_core::types::{Enemy, EnemyState, Facing, Player, SparkColor, Stage};

use crate::collision::solid_for_width;

pub fn update(enemy: &mut Enemy, player: &Player, stage: &Stage, camera_x: i32) {
    let (should_move, next_restraint) = enemy.restraint.consume();
    enemy.restraint = next_restraint;
    if !should_move {
        return;
    }

    let grounded = solid_for_width(&stage.tiles, enemy.x, enemy.y + 2);
    let mut skip_gravity = false;
    if grounded && enemy.y_vel == 0 {
        enemy.y_vel = LEAP_INITIAL_Y_VEL;
        enemy.x_vel = (player.x - enemy.x).signum();
        skip_gravity = true;
    } else if !grounded && enemy.y_vel == 0 {
        enemy.y_vel = LEAP_FALL_START_Y_VEL;
    }

    enemy.y += enemy.y_vel >> 3;

    if enemy.y > PLAYFIELD_HEIGHT - 2 {
        // Quiet despawn: skip the spark animation entirely by jumping
        // straight to its final frame.
        enemy.state = EnemyState::Spark {
            color: SparkColor::White,
            frame: EnemyState::SPARK_FRAMES,
        };
        return;
    }

    if !skip_gravity {
        enemy.y_vel = (enemy.y_vel + LEAP_GRAVITY).min(TERMINAL_VELOCITY);
    }

    let dest_x = enemy.x + enemy.x_vel;
    if dest_x < 0 || dest_x > camera_x + PLAYFIELD_WIDTH - 2 || solid_for_width(&stage.tiles, dest_x, enemy.y) {
        enemy.x_vel = -enemy.x_vel;
    } else {
        enemy.x = dest_x;
    }
    enemy.facing = Facing::from_x_sign(enemy.x_vel);

    if enemy.y_vel > 0 && solid_for_width(&stage.tiles, enemy.x, enemy.y + 2) {
        enemy.y = (enemy.y + 1) & !1;
        enemy.y_vel = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platformer_core::types::{Behavior, Restraint, TileGrid};

    fn grounded_enemy(x: i32, y: i32) -> (Enemy, Stage) {
        let mut enemy = Enemy::new_slot(Behavior::Leap, false, 0);
        enemy.x = x;
        enemy.y = y;
        enemy.restraint = Restraint::MoveEveryTick;
        let mut stage = Stage::new(TileGrid::empty());
        stage.tiles.set_tile(x / 2, (y + 2) / 2, 1);
        (enemy, stage)
    }

    #[test]
    fn a_grounded_enemy_launches_upward_toward_the_player() {
        let (mut enemy, stage) = grounded_enemy(10, 10);
        let player = Player::new(20, 10);

        update(&mut enemy, &player, &stage, 0);

        assert_eq!(enemy.y_vel, LEAP_INITIAL_Y_VEL);
        assert_eq!(enemy.x_vel, 1);
    }

    #[test]
    fn falling_past_the_bottom_of_the_playfield_is_a_quiet_despawn() {
        let mut enemy = Enemy::new_slot(Behavior::Leap, false, 0);
        enemy.x = 10;
        enemy.y = PLAYFIELD_HEIGHT - 1;
        enemy.y_vel = 200;
        enemy.restraint = Restraint::MoveEveryTick;
        let stage = Stage::new(TileGrid::empty());
        let player = Player::new(20, 10);

        update(&mut enemy, &player, &stage, 0);

        assert_eq!(enemy.state, EnemyState::Spark { color: SparkColor::White, frame: EnemyState::SPARK_FRAMES });
    }
}
