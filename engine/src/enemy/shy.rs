//! Shy behavior (Shy Bird, Spinner): constant horizontal drift, fleeing
//! upward when the player faces it and seeking the player's altitude
//! otherwise (§4.7).

use platformer_core::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use platformer_core::types::{Enemy, Facing, Player, Stage};

use crate::collision::solid_for_width;

pub fn update(enemy: &mut Enemy, player: &Player, stage: &Stage, camera_x: i32) {
    let (should_move, next_restraint) = enemy.restraint.consume();
    enemy.restraint = next_restraint;
    if !should_move {
        return;
    }

    let player_faces_this_enemy = match player.facing {
        Facing::Left => enemy.x < player.x,
        Facing::Right => enemy.x > player.x,
    };
    enemy.y_vel = if player_faces_this_enemy {
        -1
    } else {
        (player.y - enemy.y).signum()
    };

    let dest_y = enemy.y + enemy.y_vel;
    if dest_y < 0 || dest_y > PLAYFIELD_HEIGHT - 2 || solid_for_width(&stage.tiles, enemy.x, dest_y) {
        enemy.y_vel = -enemy.y_vel;
    } else {
        enemy.y = dest_y;
    }

    let dest_x = enemy.x + enemy.x_vel;
    if dest_x < 0 || dest_x > camera_x + PLAYFIELD_WIDTH - 2 || solid_for_width(&stage.tiles, dest_x, enemy.y) {
        enemy.x_vel = -enemy.x_vel;
        enemy.facing = Facing::from_x_sign(enemy.x_vel);
    } else {
        enemy.x = dest_x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platformer_core::types::{Behavior, Restraint, TileGrid};

    fn enemy_at(x: i32, y: i32) -> Enemy {
        let mut enemy = Enemy::new_slot(Behavior::Shy, false, 0);
        enemy.x = x;
        enemy.y = y;
        enemy.x_vel = 1;
        enemy.restraint = Restraint::MoveEveryTick;
        enemy
    }

    #[test]
    fn flees_upward_when_the_player_faces_it() {
        let mut enemy = enemy_at(10, 10);
        let mut player = Player::new(5, 10);
        player.facing = Facing::Right; // player is to the enemy's left, facing right -> faces the enemy
        let stage = Stage::new(TileGrid::empty());

        update(&mut enemy, &player, &stage, 0);

        assert_eq!(enemy.y, 9);
    }

    #[test]
    fn seeks_the_players_altitude_when_not_faced() {
        let mut enemy = enemy_at(10, 0);
        let mut player = Player::new(20, 10);
        player.facing = Facing::Right; // player is to the enemy's right, facing right -> not facing the enemy

        let stage = Stage::new(TileGrid::empty());

        update(&mut enemy, &player, &stage, 0);

        assert_eq!(enemy.y, 1);
    }
}
