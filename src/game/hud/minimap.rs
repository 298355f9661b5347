use bevy::prelude::*;

use crate::game::board::data::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::board::{BoardPosition, Building, Race, Unit};
use crate::game::config::{GameConfig, GameConfigHandle};

use super::components::*;

fn dot_color(race: &Race, is_building: bool) -> Color {
    match (race, is_building) {
        (Race::Human, false) => Color::srgb(0.35, 0.55, 0.95),
        (Race::Human, true) => Color::srgb(0.15, 0.3, 0.75),
        (_, false) => Color::srgb(0.9, 0.35, 0.3),
        (_, true) => Color::srgb(0.7, 0.15, 0.1),
    }
}

/// Update minimap dots to reflect board entity positions
pub fn minimap_system(
    mut commands: Commands,
    q_minimap: Query<(Entity, &ComputedNode), With<Minimap>>,
    q_untracked: Query<
        (Entity, &BoardPosition, &Race, Option<&Building>),
        (Or<(With<Unit>, With<Building>)>, Without<MinimapTracked>),
    >,
    mut q_dots: Query<(Entity, &MinimapDot, &mut Node), Without<Minimap>>,
    q_lookup: Query<&BoardPosition, Or<(With<Unit>, With<Building>)>>,
) {
    let Ok((minimap_entity, minimap_node)) = q_minimap.single() else { return };

    let minimap_w = minimap_node.size().x;
    let minimap_h = minimap_node.size().y;

    // Spawn new dots
    for (entity, position, race, building) in q_untracked.iter() {
        let is_building = building.is_some();
        let dot_size = if is_building { 6.0 } else { 4.0 };
        let x = (position.0.x / BOARD_WIDTH * minimap_w).clamp(0.0, minimap_w);
        let y = (position.0.y / BOARD_HEIGHT * minimap_h).clamp(0.0, minimap_h);

        let dot = commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(x),
                    top: Val::Px(y),
                    width: Val::Px(dot_size),
                    height: Val::Px(dot_size),
                    ..default()
                },
                BackgroundColor(dot_color(race, is_building)),
                MinimapDot(entity),
            ))
            .id();

        commands.entity(minimap_entity).add_child(dot);
        commands.entity(entity).insert(MinimapTracked);
    }

    // Update existing dots
    for (dot_entity, dot_link, mut node) in q_dots.iter_mut() {
        if let Ok(position) = q_lookup.get(dot_link.0) {
            let x = (position.0.x / BOARD_WIDTH * minimap_w).clamp(0.0, minimap_w);
            let y = (position.0.y / BOARD_HEIGHT * minimap_h).clamp(0.0, minimap_h);
            node.left = Val::Px(x);
            node.top = Val::Px(y);
        } else {
            // Entity gone (new-game reset)
            commands.entity(dot_entity).despawn();
        }
    }
}

/// Apply the configured minimap size; picks up config hot reloads
pub fn apply_minimap_size(
    config_handle: Res<GameConfigHandle>,
    game_configs: Res<Assets<GameConfig>>,
    mut q_minimap: Query<&mut Node, With<Minimap>>,
) {
    let Some(config) = game_configs.get(&config_handle.0) else { return };

    for mut node in q_minimap.iter_mut() {
        node.width = Val::Px(config.minimap_size);
        node.height = Val::Px(config.minimap_size);
    }
}
