mod components;
pub mod data;

use bevy::prelude::*;

pub use components::{
    Building, BuildingKind, BoardId, BoardPosition, DisplayName, HealthPct, HeroLevel, ManaPct,
    Producing, Race, Selected, StructureHealth, Unit, UnitKind,
};

/// Plugin that owns the board entities: the seeded roster of units and
/// buildings. They are spawned once at startup and live for the whole
/// session; a new-game reset despawns and reseeds them.
pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, seed_board);
    }
}

fn seed_board(mut commands: Commands) {
    spawn_seed_entities(&mut commands);
}

/// Spawn the full seed roster. Shared between startup and new-game reset.
pub fn spawn_seed_entities(commands: &mut Commands) {
    for seed in &data::UNIT_SEEDS {
        let mut entity = commands.spawn((
            Unit,
            BoardId(seed.id),
            seed.kind,
            DisplayName(seed.name),
            HealthPct(seed.health),
            ManaPct(seed.mana),
            seed.race,
            BoardPosition(Vec2::new(seed.x, seed.y)),
        ));
        if seed.kind == UnitKind::Hero {
            entity.insert(HeroLevel(seed.level));
        }
    }

    for seed in &data::BUILDING_SEEDS {
        let mut entity = commands.spawn((
            Building,
            BoardId(seed.id),
            seed.kind,
            DisplayName(seed.name),
            StructureHealth(seed.health),
            seed.race,
            BoardPosition(Vec2::new(seed.x, seed.y)),
        ));
        if let Some(label) = seed.producing {
            entity.insert(Producing(label));
        }
    }
}
