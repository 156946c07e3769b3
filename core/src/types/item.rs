//! The single per-stage item (§3, §4.4).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Corkscrew,
    BlastolaCola,
    Boots,
    Lantern,
    Shield,
    TeleportWand,
    DoorKey,
    Gems,
    Crown,
    Gold,
}

impl ItemKind {
    pub fn is_treasure(self) -> bool {
        matches!(self, ItemKind::Gems | ItemKind::Crown | ItemKind::Gold)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ItemRecord {
    pub kind: ItemKind,
    pub x: i32,
    pub y: i32,
    /// Toggled every tick the item is on-screen, selecting the even/odd sprite.
    pub anim_bit: bool,
}

impl ItemRecord {
    pub fn new(kind: ItemKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            anim_bit: false,
        }
    }
}
