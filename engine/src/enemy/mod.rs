//! Enemy pool: spawn scheduling (§4.6), behavior dispatch (§4.7), and the
//! despawn-by-distance / player-collision checks shared by all five variants.

mod bounce;
mod leap;
mod roll;
mod seek;
mod shy;

use platformer_core::constants::{
    ENEMY_DESPAWN_DISTANCE, MAX_ENEMIES, PLAYER_HEIGHT, RESPAWN_COUNTER_CYCLE, SPAWN_OFFSET_CYCLE,
    SPAWN_RETRY_VOID_COUNTER,
};
use platformer_core::types::{Behavior, Enemy, EnemyState, Facing, Player, Restraint, SparkColor, Stage};

use crate::combat;
use crate::interfaces::AudioDriver;

/// Cycling spawn-offset/respawn-counter indices, and (implicitly, via the
/// per-tick scan order) the "at most one spawn per tick" rule (§4.6, §5).
#[derive(Debug, Clone, Default)]
pub struct SpawnScheduler {
    spawn_offset_index: usize,
    respawn_index: usize,
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_spawn_offset(&mut self) -> i32 {
        let offset = SPAWN_OFFSET_CYCLE[self.spawn_offset_index];
        self.spawn_offset_index = (self.spawn_offset_index + 1) % SPAWN_OFFSET_CYCLE.len();
        offset
    }

    fn next_respawn_counter(&mut self) -> i32 {
        let counter = RESPAWN_COUNTER_CYCLE[self.respawn_index];
        self.respawn_index = (self.respawn_index + 1) % RESPAWN_COUNTER_CYCLE.len();
        counter
    }
}

/// Updates every enemy slot for one tick: spawn scheduling, behavior
/// dispatch, despawn-by-distance, and player collision (§4.6, §4.7).
#[allow(clippy::too_many_arguments)]
pub fn update_all(
    enemies: &mut [Enemy; MAX_ENEMIES],
    player: &mut Player,
    stage: &Stage,
    camera_x: i32,
    scheduler: &mut SpawnScheduler,
    audio: &mut impl AudioDriver,
) {
    let mut spawned_this_tick = false;

    for enemy in enemies.iter_mut() {
        match enemy.state {
            EnemyState::Despawned => {
                if spawned_this_tick {
                    continue;
                }
                enemy.anim_or_spawn_timer -= 1;
                if enemy.anim_or_spawn_timer > 0 {
                    continue;
                }
                if try_spawn(enemy, player, stage, scheduler) {
                    spawned_this_tick = true;
                }
            }
            EnemyState::Spawned => {
                enemy.anim_or_spawn_timer = enemy.anim_or_spawn_timer.wrapping_add(1);
                dispatch(enemy, player, stage, camera_x);

                if !enemy.is_spawned() {
                    // A behavior transitioned the enemy to Spark (e.g. a quiet
                    // fall-off-bottom despawn); nothing further to check.
                    continue;
                }

                if (enemy.x - player.x).abs() > ENEMY_DESPAWN_DISTANCE {
                    despawn(enemy, scheduler);
                    continue;
                }

                let overlap_y = (0..4).contains(&(enemy.y - player.y));
                let overlap_x = (enemy.x - player.x).abs() <= 1;
                if overlap_x && overlap_y {
                    enemy.state = EnemyState::Spark {
                        color: SparkColor::Red,
                        frame: 0,
                    };
                    combat::take_damage(player, audio);
                }
            }
            EnemyState::Spark { color, frame } => {
                let next_frame = frame + 1;
                if next_frame >= EnemyState::SPARK_FRAMES {
                    despawn(enemy, scheduler);
                } else {
                    enemy.state = EnemyState::Spark { color, frame: next_frame };
                }
            }
        }
    }
}

fn despawn(enemy: &mut Enemy, scheduler: &mut SpawnScheduler) {
    enemy.state = EnemyState::Despawned;
    enemy.anim_or_spawn_timer = scheduler.next_respawn_counter();
}

/// Attempts to place a counted-down slot (§4.6). Returns whether a spawn
/// actually happened, so the caller can enforce "at most one per tick".
fn try_spawn(enemy: &mut Enemy, player: &Player, stage: &Stage, scheduler: &mut SpawnScheduler) -> bool {
    if enemy.behavior == Behavior::Unused {
        enemy.anim_or_spawn_timer = SPAWN_RETRY_VOID_COUNTER;
        return false;
    }

    let offset = scheduler.next_spawn_offset();
    let spawn_x = player.x + player.facing.sign() * offset;

    let Some(spawn_y) = find_spawn_y(stage, spawn_x, (player.y & !1) + PLAYER_HEIGHT) else {
        enemy.anim_or_spawn_timer = 1;
        return false;
    };

    enemy.x = spawn_x;
    enemy.y = spawn_y;
    match enemy.behavior {
        Behavior::Bounce | Behavior::Shy => {
            enemy.x_vel = -1;
            enemy.y_vel = -1;
            enemy.facing = Facing::from_x_sign(enemy.x_vel);
        }
        _ => {
            enemy.x_vel = 0;
            enemy.y_vel = 0;
            enemy.facing = Facing::Left;
        }
    }
    enemy.state = EnemyState::Spawned;
    enemy.restraint = if enemy.fast {
        Restraint::MoveEveryTick
    } else {
        Restraint::MoveThisTick
    };
    true
}

/// Scans upward from the player's feet for the first solid tile, then the
/// first passable tile above it (§4.6).
fn find_spawn_y(stage: &Stage, x: i32, from_y: i32) -> Option<i32> {
    let mut y = from_y;
    while y > 0 && !stage.tiles.is_solid(x, y) {
        y -= 1;
    }
    if y <= 0 {
        return None;
    }
    while y > 0 && stage.tiles.is_solid(x, y) {
        y -= 1;
    }
    Some(y)
}

fn dispatch(enemy: &mut Enemy, player: &Player, stage: &Stage, camera_x: i32) {
    match enemy.behavior {
        Behavior::Unused => {}
        Behavior::Bounce => bounce::update(enemy, stage, camera_x),
        Behavior::Leap => leap::update(enemy, player, stage, camera_x),
        Behavior::Roll => roll::update(enemy, player, stage),
        Behavior::Seek => seek::update(enemy, player, stage, camera_x),
        Behavior::Shy => shy::update(enemy, player, stage, camera_x),
    }
}
