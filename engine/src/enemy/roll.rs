//! Roll behavior (Glow Globe): purely horizontal pursuit, falling off ledges
//! it rolls past (§4.7).

use platformer_core::types::{Enemy, EnemyState, Facing, Player, SparkColor, Stage};
use platformer_core::constants::PLAYFIELD_HEIGHT;

use crate::collision::solid_for_width;

pub fn update(enemy: &mut Enemy, player: &Player, stage: &Stage) {
    let (should_move, next_restraint) = enemy.restraint.consume();
    enemy.restraint = next_restraint;
    if !should_move {
        return;
    }

    enemy.x_vel = (player.x - enemy.x).signum();
    enemy.facing = Facing::from_x_sign(enemy.x_vel);

    if enemy.x_vel != 0 {
        let dest_x = enemy.x + enemy.x_vel;
        if !solid_for_width(&stage.tiles, dest_x, enemy.y) {
            enemy.x = dest_x;
        }
    }

    if !solid_for_width(&stage.tiles, enemy.x, enemy.y + 3) {
        enemy.y_vel = 1;
        enemy.y += enemy.y_vel;
        if enemy.y > PLAYFIELD_HEIGHT - 2 {
            enemy.state = EnemyState::Spark {
                color: SparkColor::White,
                frame: EnemyState::SPARK_FRAMES,
            };
        }
    } else if enemy.y_vel > 0 {
        enemy.y = (enemy.y + 1) & !1;
        enemy.y_vel = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platformer_core::types::{Behavior, Restraint, TileGrid};

    #[test]
    fn rolls_toward_the_player_on_solid_ground() {
        let mut enemy = Enemy::new_slot(Behavior::Roll, false, 0);
        enemy.x = 10;
        enemy.y = 10;
        enemy.restraint = Restraint::MoveEveryTick;
        let mut stage = Stage::new(TileGrid::empty());
        stage.tiles.set_tile(5, 6, 1); // solid floor under x=10..11, y=12..13
        let player = Player::new(20, 10);

        update(&mut enemy, &player, &stage);

        assert_eq!(enemy.x, 11);
        assert_eq!(enemy.x_vel, 1);
    }

    #[test]
    fn rolling_off_a_ledge_past_the_bottom_is_a_quiet_despawn() {
        let mut enemy = Enemy::new_slot(Behavior::Roll, false, 0);
        enemy.x = 10;
        enemy.y = PLAYFIELD_HEIGHT - 1;
        enemy.restraint = Restraint::MoveEveryTick;
        let stage = Stage::new(TileGrid::empty()); // no floor anywhere
        let player = Player::new(10, 10);

        update(&mut enemy, &player, &stage);

        assert_eq!(enemy.state, EnemyState::Spark { color: SparkColor::White, frame: EnemyState::SPARK_FRAMES });
    }
}
