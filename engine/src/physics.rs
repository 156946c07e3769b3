//! Player physics (§4.2): grounded immediate movement, the seven-step
//! airborne integration, and the `step_left`/`step_right` primitives shared
//! by both and by stage-edge transitions.

use platformer_core::constants::{
    GRAVITY, GRAVITY_SPACE, InputButtons, JUMP_ACCELERATION, JUMP_COUNTER_INITIAL, MAP_WIDTH,
    PLAYER_HEIGHT, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, TERMINAL_VELOCITY,
};
use platformer_core::types::{Facing, Player, SideExit, Stage};

use crate::collision::solid_for_width;
use crate::interfaces::StageSource;

/// Outcome of an airborne physics step the tick loop must react to (§4.2 step 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsOutcome {
    Ok,
    /// The player fell past the bottom of the playfield.
    Died,
}

/// Grounded-frame input handling: immediate movement, jump initiation, and
/// the walk-off-an-edge transition to airborne (§4.2 "Grounded frame").
#[allow(clippy::too_many_arguments)]
pub fn handle_grounded_input<S: StageSource>(
    player: &mut Player,
    stage: &mut Stage,
    camera_x: &mut i32,
    current_level: usize,
    current_stage: &mut usize,
    stage_source: &mut S,
    input: InputButtons,
) {
    player.landed_this_tick = false;

    if input.contains(InputButtons::JUMP) {
        player.y_vel = -(player.jump_power * JUMP_ACCELERATION);
        player.jump_counter = JUMP_COUNTER_INITIAL;
        player.ceiling_stick = false;
        player.is_airborne = true;
        return;
    }

    if input.contains(InputButtons::LEFT) {
        player.facing = Facing::Left;
        step_left(player, stage, camera_x, current_level, current_stage, stage_source);
    } else if input.contains(InputButtons::RIGHT) {
        player.facing = Facing::Right;
        step_right(player, stage, camera_x, current_level, current_stage, stage_source);
    }

    if !solid_for_width(&stage.tiles, player.x, player.y + PLAYER_HEIGHT + 1) {
        player.is_airborne = true;
        player.y_vel = 0;
    }
}

/// The seven-step airborne integration (§4.2 "Airborne frame").
#[allow(clippy::too_many_arguments)]
pub fn update_airborne<S: StageSource>(
    player: &mut Player,
    stage: &mut Stage,
    camera_x: &mut i32,
    current_level: usize,
    current_stage: &mut usize,
    stage_source: &mut S,
    input: InputButtons,
) -> PhysicsOutcome {
    // 1. jump counter / continued thrust
    if player.jump_counter > 0 {
        player.jump_counter -= 1;
    }
    if player.jump_counter == 0 {
        player.jump_counter = 1;
        player.ceiling_stick = false;
    } else if input.contains(InputButtons::JUMP) {
        player.y_vel -= JUMP_ACCELERATION;
    } else {
        player.ceiling_stick = false;
    }

    // 2. integrate y
    player.y += player.y_vel >> 3;
    if player.y >= PLAYFIELD_HEIGHT - 3 {
        return PhysicsOutcome::Died;
    }

    // 3. ceiling-stick push
    if player.ceiling_stick {
        player.y += 1;
        player.ceiling_stick = false;
    }

    // 4. gravity
    let gravity = if stage.low_gravity { GRAVITY_SPACE } else { GRAVITY } as i32;
    player.y_vel = (player.y_vel + gravity).min(TERMINAL_VELOCITY);

    // 5. horizontal momentum
    if input.contains(InputButtons::LEFT) {
        player.x_momentum = (player.x_momentum - 1).max(-5);
        player.facing = Facing::Left;
    } else if input.contains(InputButtons::RIGHT) {
        player.x_momentum = (player.x_momentum + 1).min(5);
        player.facing = Facing::Right;
    }
    if player.x_momentum < 0 {
        player.x_momentum += 1;
        step_left(player, stage, camera_x, current_level, current_stage, stage_source);
    } else if player.x_momentum > 0 {
        player.x_momentum -= 1;
        step_right(player, stage, camera_x, current_level, current_stage, stage_source);
    }

    // 6. ceiling test
    if player.y_vel < 0 && solid_for_width(&stage.tiles, player.x, player.y) {
        player.ceiling_stick = true;
        player.y_vel = 0;
    }

    // 7. ground test
    if player.y_vel > 0 && solid_for_width(&stage.tiles, player.x, player.y + PLAYER_HEIGHT + 1) {
        player.y = (player.y + 1) & !1;
        player.y_vel = 0;
        player.is_airborne = false;
        player.landed_this_tick = true;
    }

    PhysicsOutcome::Ok
}

/// Steps the player one unit left, handling knee-height collision and the
/// left stage-edge exit (§4.2 "Horizontal step primitive").
fn step_left<S: StageSource>(
    player: &mut Player,
    stage: &mut Stage,
    camera_x: &mut i32,
    current_level: usize,
    current_stage: &mut usize,
    stage_source: &mut S,
) {
    let dest_x = player.x - 1;
    let knee_y = player.y + 3;
    if solid_for_width(&stage.tiles, dest_x, knee_y) {
        player.x_momentum = 0;
        return;
    }
    if player.x == 0 {
        if let SideExit::Stage(target) = stage.exit_l {
            *current_stage = target;
            *stage = stage_source.load_stage(current_level, target);
            player.x = MAP_WIDTH - 2;
            player.y_vel = 0;
        } else {
            player.x_momentum = 0;
        }
        return;
    }
    player.x = dest_x;
    scroll_camera(player, camera_x);
}

/// Steps the player one unit right; the destination check covers both
/// columns the 2-unit-wide body occupies (§4.2).
fn step_right<S: StageSource>(
    player: &mut Player,
    stage: &mut Stage,
    camera_x: &mut i32,
    current_level: usize,
    current_stage: &mut usize,
    stage_source: &mut S,
) {
    let dest_x = player.x + 1;
    let knee_y = player.y + 3;
    if solid_for_width(&stage.tiles, dest_x, knee_y) || stage.tiles.is_solid(dest_x + 1, knee_y) {
        player.x_momentum = 0;
        return;
    }
    if dest_x > MAP_WIDTH - 2 {
        if let SideExit::Stage(target) = stage.exit_r {
            *current_stage = target;
            *stage = stage_source.load_stage(current_level, target);
            player.x = 0;
            player.y_vel = 0;
        } else {
            player.x_momentum = 0;
        }
        return;
    }
    player.x = dest_x;
    scroll_camera(player, camera_x);
}

/// Scrolls the camera once the player crosses the playfield's mid-line,
/// clamped to the map bounds (§4.2 "scrolls the camera when the player
/// crosses the playfield mid-line" — the exact scroll law is left to the
/// implementer; this keeps the player within the middle half of the screen).
fn scroll_camera(player: &Player, camera_x: &mut i32) {
    let rel_x = player.x - *camera_x;
    let mid = PLAYFIELD_WIDTH / 2;
    if rel_x > mid && *camera_x < MAP_WIDTH - PLAYFIELD_WIDTH {
        *camera_x += 1;
    } else if rel_x < mid && *camera_x > 0 {
        *camera_x -= 1;
    }
}
