//! Static seed data: the board dimensions, the starting roster, and the
//! race list. Used both at first load and on every new-game reset.

use super::components::{BuildingKind, Race, UnitKind};

/// Virtual board plane the icons live on, in board units (= pixels).
pub const BOARD_WIDTH: f32 = 500.0;
pub const BOARD_HEIGHT: f32 = 400.0;

/// Building health bars are drawn against this fixed maximum.
pub const BUILDING_HEALTH_BAR_MAX: f32 = 500.0;

pub struct UnitSeed {
    pub id: u32,
    pub kind: UnitKind,
    pub name: &'static str,
    pub health: f32,
    pub mana: f32,
    pub race: Race,
    pub level: u8,
    pub x: f32,
    pub y: f32,
}

pub struct BuildingSeed {
    pub id: u32,
    pub kind: BuildingKind,
    pub name: &'static str,
    pub health: f32,
    pub race: Race,
    pub x: f32,
    pub y: f32,
    pub producing: Option<&'static str>,
}

pub const UNIT_SEEDS: [UnitSeed; 4] = [
    UnitSeed { id: 1, kind: UnitKind::Hero, name: "Paladin", health: 100.0, mana: 80.0, race: Race::Human, level: 3, x: 300.0, y: 200.0 },
    UnitSeed { id: 2, kind: UnitKind::Warrior, name: "Footman", health: 85.0, mana: 0.0, race: Race::Human, level: 1, x: 250.0, y: 220.0 },
    UnitSeed { id: 3, kind: UnitKind::Archer, name: "Rifleman", health: 70.0, mana: 0.0, race: Race::Human, level: 1, x: 350.0, y: 180.0 },
    UnitSeed { id: 4, kind: UnitKind::Worker, name: "Peasant", health: 60.0, mana: 0.0, race: Race::Human, level: 1, x: 200.0, y: 250.0 },
];

pub const BUILDING_SEEDS: [BuildingSeed; 3] = [
    BuildingSeed { id: 1, kind: BuildingKind::TownHall, name: "Town Hall", health: 500.0, race: Race::Human, x: 150.0, y: 150.0, producing: None },
    BuildingSeed { id: 2, kind: BuildingKind::Barracks, name: "Barracks", health: 300.0, race: Race::Human, x: 400.0, y: 250.0, producing: Some("Footman") },
    BuildingSeed { id: 3, kind: BuildingKind::Farm, name: "Farm", health: 150.0, race: Race::Human, x: 100.0, y: 300.0, producing: None },
];

/// Entry on the race-selection screen.
pub struct RaceChoice {
    pub race: Race,
    pub name: &'static str,
    pub blurb: &'static str,
}

pub const RACE_CHOICES: [RaceChoice; 4] = [
    RaceChoice { race: Race::Human, name: "Human Alliance", blurb: "Noble warriors with strong magic" },
    RaceChoice { race: Race::Orc, name: "Orcish Horde", blurb: "Brutal strength and shamanic power" },
    RaceChoice { race: Race::Undead, name: "Undead Scourge", blurb: "Dark necromancy and endless armies" },
    RaceChoice { race: Race::NightElf, name: "Night Elves", blurb: "Ancient magic and forest guardians" },
];
