use bevy::prelude::*;

use crate::game::GameState;

pub mod commands;
mod drag;
pub mod messages;
mod resources;
mod selection;

pub use commands::{building_commands, unit_commands, CommandAction};
pub use messages::{ClearSelection, IssueCommand, MoveUnit, SelectBuilding, SelectUnit};
pub use resources::DragState;

pub struct ControlPlugin;

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragState>()
            .add_message::<SelectUnit>()
            .add_message::<SelectBuilding>()
            .add_message::<ClearSelection>()
            .add_message::<MoveUnit>()
            .add_message::<IssueCommand>()
            .add_systems(
                Update,
                (
                    drag::handle_unit_drag,
                    selection::handle_select_unit,
                    selection::handle_select_building,
                    selection::handle_clear_selection,
                    selection::handle_move_unit,
                    commands::handle_commands,
                )
                    .run_if(in_state(GameState::InGame)),
            );
    }
}
