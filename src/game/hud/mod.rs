use bevy::prelude::*;

use crate::game::GameState;

mod board_icons;
mod command_card;
mod components;
mod minimap;
mod notices;
mod selection_tray;
mod setup;

pub use components::{BuildingIcon, UnitIcon, BUILDING_ICON_SIZE, UNIT_ICON_SIZE};

use board_icons::*;
use command_card::*;
use minimap::*;
use selection_tray::*;
use setup::*;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, notices::setup_notice_feed)
            // The toast feed serves every screen
            .add_systems(Update, notices::decorate_notices)
            .add_systems(OnEnter(GameState::InGame), setup_hud)
            .add_systems(OnExit(GameState::InGame), cleanup_hud)
            .add_systems(
                Update,
                (
                    update_resource_bar,
                    spawn_board_icons,
                    sync_unit_icons,
                    sync_building_icons,
                    handle_building_clicks,
                    handle_surface_clicks,
                    minimap_system,
                    apply_minimap_size,
                    update_selection_tray,
                    update_command_card,
                    button_system,
                    command_handler,
                )
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
