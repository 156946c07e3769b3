//! End-to-end `World` coverage for the seed scenarios in `SPEC_FULL.md` §8.

use platformer_core::constants::{
    ENEMY_DESPAWN_DISTANCE, InputButtons, MAX_HP, RESPAWN_COUNTER_CYCLE, WIN_COUNTER_INITIAL,
};
use platformer_core::types::{
    Behavior, Door, EnemyState, ItemKind, ItemRecord, Player, Restraint, Stage, TileGrid,
};
use platformer_engine::interfaces::{EmptyStageSource, NullAudio, NullRenderer, StageSource};
use platformer_engine::{TickOutcome, World};

/// A flat stage with a solid floor under the playfield, so grounded movement
/// doesn't immediately fall through into free fall.
fn flat_stage() -> Stage {
    let mut tiles = TileGrid::empty();
    for col in 0..128 {
        tiles.set_tile(col, 6, 1); // solid floor at game-unit rows 12-13
    }
    Stage::new(tiles)
}

fn flat_world() -> World<NullRenderer, NullAudio, EmptyStageSource> {
    let player = Player::new(4, 8);
    World::new(player, flat_stage(), NullRenderer, NullAudio::default(), EmptyStageSource)
}

#[test]
fn fireball_flight_advances_or_exits_the_playfield() {
    let mut world = flat_world();
    world.player.firepower = 1;

    world.tick(InputButtons::FIRE);
    for _ in 0..9 {
        world.tick(InputButtons::empty());
    }

    let fireball = &world.fireballs[0];
    assert!(fireball.is_dead() || fireball.x as i32 == world.player.x + 20);
}

#[test]
fn enemy_despawns_after_the_player_walks_out_of_range() {
    let mut world = flat_world();
    world.player.x = 100;
    world.player.y = 8;
    world.enemies[0] = platformer_core::types::Enemy::new_slot(Behavior::Bounce, false, 0);
    world.enemies[0].state = EnemyState::Spawned;
    world.enemies[0].x = 100;
    world.enemies[0].y = 8;
    world.enemies[0].x_vel = 0;
    world.enemies[0].y_vel = 0;
    world.enemies[0].restraint = Restraint::MoveEveryTick;

    for _ in 0..31 {
        world.tick(InputButtons::RIGHT);
    }

    assert_eq!(world.player.x, 100 + ENEMY_DESPAWN_DISTANCE + 1);
    assert!(world.enemies[0].is_despawned());
    assert_eq!(world.enemies[0].anim_or_spawn_timer, RESPAWN_COUNTER_CYCLE[0]);
}

#[test]
fn shield_pickup_at_max_hp_grants_an_extra_life_instead_of_healing() {
    let mut world = flat_world();
    world.player.hp = MAX_HP;
    world.player.lives = 3;
    world.stage.item = Some(ItemRecord::new(ItemKind::Shield, world.player.x, world.player.y));

    world.tick(InputButtons::empty());

    assert!(world.player.inventory.has_shield);
    assert_eq!(world.player.lives, 4);
    assert_eq!(world.player.hp, MAX_HP);
}

#[test]
fn collecting_three_treasures_starts_the_win_countdown() {
    let mut world = flat_world();

    for (level, stage, kind) in [(0, 0, ItemKind::Gems), (0, 1, ItemKind::Crown), (0, 2, ItemKind::Gold)] {
        world.current_level = level;
        world.current_stage = stage;
        world.stage.item = Some(ItemRecord::new(kind, world.player.x, world.player.y));
        world.tick(InputButtons::empty());
    }

    assert_eq!(world.player.treasures, 3);
    assert_eq!(world.player.win_counter, WIN_COUNTER_INITIAL);

    let mut outcome = TickOutcome::Continue;
    for _ in 0..(WIN_COUNTER_INITIAL - 1) {
        outcome = world.tick(InputButtons::empty());
    }
    assert_eq!(outcome, TickOutcome::Victory);
}

struct OneReciprocalDoorSource;

impl StageSource for OneReciprocalDoorSource {
    fn load_stage(&mut self, _level: usize, _stage: usize) -> Stage {
        let mut stage = Stage::new(TileGrid::empty());
        stage.doors.push(Door { x: 3, y: 0, target_level: 0, target_stage: 0 });
        stage
    }
}

#[test]
fn door_transition_places_the_player_at_the_reciprocal_door() {
    let player = Player::new(118, 10);
    let mut stage = Stage::new(TileGrid::empty());
    stage.doors.push(Door { x: 118, y: 10, target_level: 1, target_stage: 2 });
    let mut world = World::new(player, stage, NullRenderer, NullAudio::default(), OneReciprocalDoorSource);
    world.player.inventory.has_door_key = true;

    world.tick(InputButtons::OPEN);

    assert_eq!(world.current_level, 1);
    assert_eq!(world.current_stage, 2);
    assert_eq!(world.source_door.map(|d| (d.level, d.stage)), Some((0, 0)));
    assert_eq!(world.player.x, 3);
    assert_eq!(world.player.y, 0);
}
