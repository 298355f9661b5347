use bevy::prelude::*;

use crate::game::board::{Building, BoardPosition, DisplayName, Selected, Unit};
use crate::game::notice::GameNotice;

use super::messages::{ClearSelection, MoveUnit, SelectBuilding, SelectUnit};

/// Toggle unit selection. Selecting any unit first clears the building
/// selection; units and buildings are never selected together.
pub fn handle_select_unit(
    mut commands: Commands,
    mut reader: MessageReader<SelectUnit>,
    q_units: Query<(&DisplayName, Option<&Selected>), With<Unit>>,
    q_selected_buildings: Query<Entity, (With<Building>, With<Selected>)>,
    mut notices: MessageWriter<GameNotice>,
) {
    for msg in reader.read() {
        // Unknown target: silent no-op
        let Ok((name, selected)) = q_units.get(msg.target) else {
            continue;
        };

        for building in q_selected_buildings.iter() {
            commands.entity(building).remove::<Selected>();
        }

        if selected.is_some() {
            commands.entity(msg.target).remove::<Selected>();
        } else {
            commands.entity(msg.target).insert(Selected);
        }

        notices.write(GameNotice::info(format!("Selected {}", name.0)));
    }
}

/// Toggle building selection. At most one building is selected at a time:
/// picking a different building replaces the selection outright.
pub fn handle_select_building(
    mut commands: Commands,
    mut reader: MessageReader<SelectBuilding>,
    q_buildings: Query<(&DisplayName, Option<&Selected>), With<Building>>,
    q_selected_units: Query<Entity, (With<Unit>, With<Selected>)>,
    q_selected_buildings: Query<Entity, (With<Building>, With<Selected>)>,
    mut notices: MessageWriter<GameNotice>,
) {
    for msg in reader.read() {
        let Ok((name, selected)) = q_buildings.get(msg.target) else {
            continue;
        };

        for unit in q_selected_units.iter() {
            commands.entity(unit).remove::<Selected>();
        }

        if selected.is_some() {
            commands.entity(msg.target).remove::<Selected>();
        } else {
            for other in q_selected_buildings.iter() {
                commands.entity(other).remove::<Selected>();
            }
            commands.entity(msg.target).insert(Selected);
        }

        notices.write(GameNotice::info(format!("Selected {}", name.0)));
    }
}

/// Background click: drop the whole selection, whatever it was.
pub fn handle_clear_selection(
    mut commands: Commands,
    mut reader: MessageReader<ClearSelection>,
    q_selected: Query<Entity, With<Selected>>,
) {
    if reader.is_empty() {
        return;
    }
    reader.clear();

    for entity in q_selected.iter() {
        commands.entity(entity).remove::<Selected>();
    }
}

/// Write a dragged unit's position back into the authoritative component.
/// The drag already clamped the value; it round-trips exactly.
pub fn handle_move_unit(
    mut reader: MessageReader<MoveUnit>,
    mut q_units: Query<&mut BoardPosition, With<Unit>>,
) {
    for msg in reader.read() {
        let Ok(mut position) = q_units.get_mut(msg.target) else {
            continue;
        };
        position.0 = msg.to;
    }
}
