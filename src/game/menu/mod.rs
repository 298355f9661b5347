/// Menu screens - start menu, race selection, and the in-game menu overlay
///
/// This module is organized into:
/// - components: marker and button-action component types
/// - ui_utils: the spawn_button macro
/// - start_menu: the modal shown when the app opens
/// - race_select: the race picker between menu and game
/// - game_menu: the overlay reachable from the game screen

mod components;
mod game_menu;
mod race_select;
mod start_menu;
mod ui_utils;

use bevy::prelude::*;

use crate::game::GameState;

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app
            // Start Menu
            .add_systems(OnEnter(GameState::StartMenu), start_menu::setup_start_menu)
            .add_systems(OnExit(GameState::StartMenu), start_menu::cleanup_start_menu)
            .add_systems(
                Update,
                start_menu::start_menu_action.run_if(in_state(GameState::StartMenu)),
            )
            // Race Selection
            .add_systems(OnEnter(GameState::RaceSelect), race_select::setup_race_select)
            .add_systems(OnExit(GameState::RaceSelect), race_select::cleanup_race_select)
            .add_systems(
                Update,
                race_select::race_select_action.run_if(in_state(GameState::RaceSelect)),
            )
            // In-Game Menu
            .add_systems(OnEnter(GameState::InGame), game_menu::setup_menu_button)
            .add_systems(OnExit(GameState::InGame), game_menu::cleanup_game_menu)
            .add_systems(
                Update,
                (game_menu::open_game_menu, game_menu::game_menu_action)
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
