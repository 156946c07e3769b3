//! The Hero's state (§3 "Player state").

use crate::constants::{JUMP_POWER_DEFAULT, MAX_FIREPOWER, MAX_HP, MAX_TREASURES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn from_x_sign(dx: i32) -> Self {
        if dx < 0 {
            Facing::Left
        } else {
            Facing::Right
        }
    }

    pub fn sign(self) -> i32 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }
}

/// Inventory flags that, once set, never clear themselves (only a new game resets them).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inventory {
    pub has_corkscrew: bool,
    pub has_door_key: bool,
    pub has_boots: bool,
    pub has_lantern: bool,
    pub has_teleport_wand: bool,
    pub has_shield: bool,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,

    /// Signed vertical velocity, eighths of a game unit per tick.
    pub y_vel: i32,
    /// Horizontal drag state while airborne, clamped to [-5, 5].
    pub x_momentum: i32,
    pub is_airborne: bool,

    pub jump_counter: u8,
    pub jump_power: i32,
    pub ceiling_stick: bool,
    /// Set by the physics step when it lands the player this tick, so the
    /// outer loop skips the redundant grounded-input movement (§4.2).
    pub landed_this_tick: bool,

    pub hp: i32,
    pub hp_pending_increase: i32,
    pub lives: i32,

    pub inventory: Inventory,
    pub firepower: i32,
    pub treasures: i32,
    pub win_counter: i32,

    /// Reentrancy guard so collision handling during the death animation
    /// cannot recurse into `take_damage` again (§4.8).
    pub dying: bool,
    pub is_teleporting: bool,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            facing: Facing::Right,
            y_vel: 0,
            x_momentum: 0,
            is_airborne: false,
            jump_counter: 0,
            jump_power: JUMP_POWER_DEFAULT,
            ceiling_stick: false,
            landed_this_tick: false,
            hp: MAX_HP,
            hp_pending_increase: 0,
            lives: 3,
            inventory: Inventory::default(),
            firepower: 1,
            treasures: 0,
            win_counter: 0,
            dying: false,
            is_teleporting: false,
        }
    }

    /// Resets position, velocity, and air-state for a stage transition; the
    /// rest of the player's state (inventory, score-adjacent fields, lives)
    /// persists across stages (§3 "Lifecycles").
    pub fn reset_for_stage_entry(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.y_vel = 0;
        self.x_momentum = 0;
        self.is_airborne = false;
        self.jump_counter = 0;
        self.ceiling_stick = false;
        self.landed_this_tick = false;
        self.is_teleporting = false;
    }

    pub fn add_treasure(&mut self) -> bool {
        if self.treasures >= MAX_TREASURES {
            return false;
        }
        self.treasures += 1;
        self.treasures >= MAX_TREASURES
    }

    pub fn add_firepower(&mut self) {
        self.firepower = (self.firepower + 1).min(MAX_FIREPOWER);
    }

    pub fn heal_one(&mut self) {
        if self.hp_pending_increase > 0 {
            self.hp = (self.hp + 1).min(MAX_HP);
            self.hp_pending_increase -= 1;
        }
    }
}
