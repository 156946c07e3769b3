//! Data types module — the simulation's value types, ported from §3.

mod enemy;
mod fireball;
mod item;
mod player;
mod score;
mod stage;
mod tile;

pub use enemy::{Behavior, Enemy, EnemyState, Restraint, SparkColor};
pub use fireball::{CorkscrewPhase, Fireball};
pub use item::{ItemKind, ItemRecord};
pub use player::{Facing, Inventory, Player};
pub use score::Score;
pub use stage::{Door, SideExit, Stage};
pub use tile::TileGrid;
