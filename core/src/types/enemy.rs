//! Enemy pool record and the five-behavior tag set (§3, §4.6, §4.7).

use super::player::Facing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Unused,
    Bounce,
    Leap,
    Roll,
    Seek,
    Shy,
}

/// Throttle deciding whether an enemy moves this tick (§4.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restraint {
    MoveThisTick,
    SkipThisTick,
    MoveEveryTick,
}

impl Restraint {
    /// Returns whether the enemy should move this tick, and the restraint
    /// value it should carry into the next tick.
    pub fn consume(self) -> (bool, Restraint) {
        match self {
            Restraint::MoveThisTick => (true, Restraint::SkipThisTick),
            Restraint::SkipThisTick => (false, Restraint::MoveThisTick),
            Restraint::MoveEveryTick => (true, Restraint::MoveEveryTick),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SparkColor {
    /// Killed by a fireball; awards score.
    White,
    /// Killed by colliding with the player; damages the player.
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyState {
    Despawned,
    Spawned,
    Spark { color: SparkColor, frame: u8 },
}

impl EnemyState {
    pub const SPARK_FRAMES: u8 = 5;
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub x_vel: i32,
    pub y_vel: i32,
    pub facing: Facing,

    pub behavior: Behavior,
    /// The FAST modifier: orthogonal to `behavior`, forces `Restraint::MoveEveryTick`.
    pub fast: bool,

    pub state: EnemyState,
    /// Countdown while `Despawned`; animation frame while `Spawned`.
    pub anim_or_spawn_timer: i32,
    pub restraint: Restraint,
}

impl Enemy {
    pub fn unused() -> Self {
        Self {
            x: 0,
            y: 0,
            x_vel: 0,
            y_vel: 0,
            facing: Facing::Left,
            behavior: Behavior::Unused,
            fast: false,
            state: EnemyState::Despawned,
            anim_or_spawn_timer: 0,
            restraint: Restraint::MoveThisTick,
        }
    }

    pub fn new_slot(behavior: Behavior, fast: bool, initial_timer: i32) -> Self {
        Self {
            behavior,
            fast,
            anim_or_spawn_timer: initial_timer,
            ..Self::unused()
        }
    }

    pub fn is_spawned(&self) -> bool {
        matches!(self.state, EnemyState::Spawned)
    }

    pub fn is_despawned(&self) -> bool {
        matches!(self.state, EnemyState::Despawned)
    }
}
