use bevy::prelude::*;

pub mod board;
pub mod config;
pub mod control;
pub mod economy;
pub mod hud;
pub mod menu;
pub mod notice;
pub mod session;

use board::BoardPlugin;
use config::ConfigPlugin;
use control::ControlPlugin;
use economy::EconomyPlugin;
use hud::HudPlugin;
use menu::MenuPlugin;
use notice::NoticePlugin;
use session::SessionPlugin;

/// Coarse screen the session is on. Dismissing a modal inside a screen is a
/// visibility toggle, not a state transition.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    StartMenu,
    RaceSelect,
    InGame,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .insert_resource(ClearColor(Color::srgb(0.07, 0.09, 0.07)))
            .add_plugins((
                ConfigPlugin,
                BoardPlugin,
                ControlPlugin,
                EconomyPlugin,
                NoticePlugin,
                SessionPlugin,
                MenuPlugin,
                HudPlugin,
            ))
            .add_systems(Startup, setup_game);
    }
}

fn setup_game(mut commands: Commands) {
    info!("Game setup started");

    // UI camera
    commands.spawn(Camera2d);
}
