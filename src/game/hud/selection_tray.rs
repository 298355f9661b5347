use bevy::prelude::*;

use crate::game::board::{BoardId, Building, DisplayName, Selected, Unit};

use super::components::*;

/// At most this many unit chips are shown; the rest collapse into a "+N".
const TRAY_CHIP_LIMIT: usize = 6;

/// Rebuild the selection tray whenever the selection changes. Units are
/// listed in roster order, matching the order the command card uses.
pub fn update_selection_tray(
    mut commands: Commands,
    q_tray: Query<Entity, With<SelectionTray>>,
    q_children: Query<&Children>,
    q_added: Query<Entity, Added<Selected>>,
    mut removed: RemovedComponents<Selected>,
    q_selected_units: Query<(&BoardId, &DisplayName), (With<Unit>, With<Selected>)>,
    q_selected_buildings: Query<&DisplayName, (With<Building>, With<Selected>)>,
) {
    let selection_changed = !q_added.is_empty() || removed.read().next().is_some();
    if !selection_changed {
        return;
    }
    let Ok(tray) = q_tray.single() else { return };

    if let Ok(children) = q_children.get(tray) {
        for child in children.iter() {
            commands.entity(child).despawn();
        }
    }

    let mut units: Vec<(&BoardId, &DisplayName)> = q_selected_units.iter().collect();
    units.sort_by_key(|(id, _)| id.0);
    let buildings: Vec<&DisplayName> = q_selected_buildings.iter().collect();

    if units.is_empty() && buildings.is_empty() {
        let placeholder = commands
            .spawn((
                Text::new("Select units or buildings"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ))
            .id();
        commands.entity(tray).add_child(placeholder);
        return;
    }

    for (_, name) in units.iter().take(TRAY_CHIP_LIMIT) {
        let chip = spawn_chip(&mut commands, name.0, Color::srgb(0.4, 0.28, 0.12));
        commands.entity(tray).add_child(chip);
    }

    if units.len() > TRAY_CHIP_LIMIT {
        let overflow = commands
            .spawn((
                Text::new(format!("+{}", units.len() - TRAY_CHIP_LIMIT)),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.4)),
            ))
            .id();
        commands.entity(tray).add_child(overflow);
    }

    for name in buildings {
        let chip = spawn_chip(&mut commands, name.0, Color::srgb(0.24, 0.22, 0.2));
        commands.entity(tray).add_child(chip);
    }
}

fn spawn_chip(commands: &mut Commands, name: &'static str, portrait_color: Color) -> Entity {
    commands
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(2.0),
            ..default()
        })
        .with_children(|chip| {
            chip.spawn((
                Node {
                    width: Val::Px(40.0),
                    height: Val::Px(40.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BorderColor::from(Color::srgb(0.95, 0.85, 0.2)),
                BackgroundColor(portrait_color),
            ))
            .with_children(|portrait| {
                portrait.spawn((
                    Text::new(&name[..1]),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            });

            chip.spawn((
                Text::new(name),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.4)),
            ));
        })
        .id()
}
