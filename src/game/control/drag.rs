use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::game::board::data::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::board::{BoardPosition, Unit};
use crate::game::config::{GameConfig, GameConfigHandle};
use crate::game::hud::{UnitIcon, UNIT_ICON_SIZE};

use super::messages::{MoveUnit, SelectUnit};
use super::resources::{DragState, DragTarget};

/// Drag-or-click on unit icons. A press below the configured threshold is a
/// click (selection toggle); past it the press becomes a drag and every
/// cursor movement is written back as the unit's new board position,
/// clamped to the board.
pub fn handle_unit_drag(
    mouse_button: Res<ButtonInput<MouseButton>>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    q_icons: Query<(&Interaction, &UnitIcon), Changed<Interaction>>,
    q_positions: Query<&BoardPosition, With<Unit>>,
    mut drag_state: ResMut<DragState>,
    mut moves: MessageWriter<MoveUnit>,
    mut selects: MessageWriter<SelectUnit>,
    config_handle: Res<GameConfigHandle>,
    game_configs: Res<Assets<GameConfig>>,
) {
    let Some(window) = q_window.iter().next() else { return };
    let Some(config) = game_configs.get(&config_handle.0) else { return };

    if drag_state.target.is_none() {
        for (interaction, icon) in q_icons.iter() {
            if *interaction != Interaction::Pressed {
                continue;
            }
            let Some(cursor) = window.cursor_position() else { continue };
            let Ok(position) = q_positions.get(icon.0) else { continue };

            drag_state.target = Some(DragTarget {
                unit: icon.0,
                start_cursor: cursor,
                start_position: position.0,
                moved: false,
            });
            break;
        }
    }

    let Some(target) = drag_state.target.as_mut() else { return };

    if mouse_button.pressed(MouseButton::Left) {
        if let Some(cursor) = window.cursor_position() {
            let delta = cursor - target.start_cursor;
            if delta.length() >= config.selection_drag_threshold {
                target.moved = true;
            }
            if target.moved {
                let max = Vec2::new(BOARD_WIDTH - UNIT_ICON_SIZE, BOARD_HEIGHT - UNIT_ICON_SIZE);
                let to = (target.start_position + delta).clamp(Vec2::ZERO, max);
                moves.write(MoveUnit {
                    target: target.unit,
                    to,
                });
            }
        }
    }

    if mouse_button.just_released(MouseButton::Left) {
        if !target.moved {
            selects.write(SelectUnit {
                target: target.unit,
            });
        }
        drag_state.target = None;
    }
}
