use bevy::prelude::*;

use crate::game::board::Race;

// Start Menu Components
#[derive(Component)]
pub struct StartMenuRoot;

#[derive(Component)]
pub enum StartMenuAction {
    NewGame,
    LoadGame,
    Settings,
    Close,
}

// Race Selection Components
#[derive(Component)]
pub struct RaceSelectRoot;

#[derive(Component)]
pub enum RaceSelectAction {
    Pick(Race),
    Cancel,
}

// In-Game Menu Components
/// The always-visible button that opens the in-game menu
#[derive(Component)]
pub struct GameMenuButton;

/// Root of the in-game menu overlay (exists only while open)
#[derive(Component)]
pub struct GameMenuRoot;

#[derive(Component)]
pub enum GameMenuAction {
    NewGame,
    LoadGame,
    Settings,
    Close,
}
