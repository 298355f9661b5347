use bevy::prelude::*;
use bevy_common_assets::ron::RonAssetPlugin;
use serde::{Deserialize, Serialize};

/// Presentation and input tuning that can be hot-reloaded during a session.
/// Gameplay rules (seed values, costs, tick increments) are fixed seed data
/// and live next to the code that owns them.
#[derive(Deserialize, Serialize, Asset, TypePath, Clone, Debug)]
pub struct GameConfig {
    /// Pointer presses that travel less than this many pixels are clicks;
    /// anything longer is a drag.
    pub selection_drag_threshold: f32,

    /// Side length of the square minimap, in pixels.
    pub minimap_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            selection_drag_threshold: 8.0,
            minimap_size: 200.0,
        }
    }
}

#[derive(Resource)]
pub struct GameConfigHandle(pub Handle<GameConfig>);

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<GameConfig>::new(&["game_config.ron"]))
            .add_systems(Startup, setup_config);
    }
}

fn setup_config(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handle = asset_server.load("game_config.ron");
    commands.insert_resource(GameConfigHandle(handle));
}
