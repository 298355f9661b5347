use bevy::prelude::*;

/// Marks an entity as a unit on the board
#[derive(Component)]
pub struct Unit;

/// Marks an entity as a building on the board
#[derive(Component)]
pub struct Building;

/// Stable identity from seed data. Units and buildings each have their own
/// id space; it also gives selection-dependent UI a deterministic order.
#[derive(Component, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct BoardId(pub u32);

#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnitKind {
    Worker,
    Warrior,
    Archer,
    Hero,
}

#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BuildingKind {
    TownHall,
    Barracks,
    Farm,
    Tower,
}

/// One of the playable races. Doubles as the faction tag on board entities.
#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Race {
    Human,
    Orc,
    Undead,
    NightElf,
}

impl Race {
    /// Short identifier as shown in player-facing messages.
    pub fn id(&self) -> &'static str {
        match self {
            Race::Human => "human",
            Race::Orc => "orc",
            Race::Undead => "undead",
            Race::NightElf => "night_elf",
        }
    }
}

#[derive(Component)]
pub struct DisplayName(pub &'static str);

/// Top-left corner of the entity's icon, in board coordinates (500x400).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct BoardPosition(pub Vec2);

/// Unit health as a percentage. Not clamped on write.
#[derive(Component, Clone, Copy)]
pub struct HealthPct(pub f32);

/// Unit mana as a percentage; the bar is only rendered when above zero.
#[derive(Component, Clone, Copy)]
pub struct ManaPct(pub f32);

/// Hero experience level. Only present on heroes.
#[derive(Component, Clone, Copy)]
pub struct HeroLevel(pub u8);

/// Absolute building hit points, rendered against a fixed bar maximum.
#[derive(Component, Clone, Copy)]
pub struct StructureHealth(pub f32);

/// Cosmetic "currently producing" label. No timer behind it.
#[derive(Component)]
pub struct Producing(pub &'static str);

/// Marks a board entity as currently selected by the player
#[derive(Component)]
pub struct Selected;
