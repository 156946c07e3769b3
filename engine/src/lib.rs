//! Tick-driven simulation core for the tile-based platformer: player
//! physics, fireball/item/enemy subsystems, door transitions, and the tick
//! loop that sequences them (§1-§5). Asset parsing lives in `assets`; the
//! render/audio/stage-loading contracts this crate calls into live in
//! `interfaces`.

pub mod assets;
pub mod collision;
pub mod combat;
pub mod config;
pub mod door;
pub mod enemy;
pub mod fireball;
pub mod interfaces;
pub mod item;
pub mod physics;
pub mod tick;
pub mod world;

pub use tick::TickOutcome;
pub use world::World;
