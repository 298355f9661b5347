use bevy::prelude::*;

use crate::game::board::data::BUILDING_HEALTH_BAR_MAX;
use crate::game::board::{
    BoardPosition, Building, BuildingKind, DisplayName, HealthPct, HeroLevel, ManaPct, Producing,
    Selected, StructureHealth, Unit,
};
use crate::game::control::{ClearSelection, SelectBuilding};

use super::components::*;

const SELECTED_BORDER: Color = Color::srgb(0.95, 0.85, 0.2);
const UNIT_BORDER: Color = Color::srgb(0.45, 0.45, 0.45);
const BUILDING_BORDER: Color = Color::srgb(0.35, 0.32, 0.28);
const HEALTH_GREEN: Color = Color::srgb(0.25, 0.75, 0.3);
const HEALTH_RED: Color = Color::srgb(0.8, 0.3, 0.25);
const MANA_BLUE: Color = Color::srgb(0.3, 0.5, 0.9);
const BAR_BACKDROP: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);

fn building_glyph(kind: BuildingKind) -> &'static str {
    match kind {
        BuildingKind::TownHall => "H",
        BuildingKind::Barracks => "B",
        BuildingKind::Farm => "F",
        BuildingKind::Tower => "T",
    }
}

/// Spawn icons on the board surface for any board entity that does not have
/// one yet. Runs every frame so the reseeded roster after a new game gets
/// fresh icons without special casing.
pub fn spawn_board_icons(
    mut commands: Commands,
    q_surface: Query<Entity, With<BoardSurface>>,
    q_new_units: Query<
        (
            Entity,
            &BoardPosition,
            &DisplayName,
            &HealthPct,
            &ManaPct,
            Option<&HeroLevel>,
        ),
        (With<Unit>, Without<IconSpawned>),
    >,
    q_new_buildings: Query<
        (
            Entity,
            &BoardPosition,
            &BuildingKind,
            &StructureHealth,
            Option<&Producing>,
        ),
        (With<Building>, Without<IconSpawned>),
    >,
) {
    let Ok(surface) = q_surface.single() else { return };

    for (building, position, kind, health, producing) in q_new_buildings.iter() {
        let icon = commands
            .spawn((
                Button,
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(position.0.x),
                    top: Val::Px(position.0.y),
                    width: Val::Px(BUILDING_ICON_SIZE),
                    height: Val::Px(BUILDING_ICON_SIZE),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BorderColor::from(BUILDING_BORDER),
                BackgroundColor(Color::srgb(0.24, 0.22, 0.2)),
                BuildingIcon(building),
            ))
            .with_children(|icon| {
                icon.spawn((
                    Text::new(building_glyph(*kind)),
                    TextFont {
                        font_size: 24.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.85, 0.8, 0.7)),
                ));

                // Health bar, drawn against the fixed building maximum
                icon.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        bottom: Val::Px(-8.0),
                        left: Val::Px(0.0),
                        width: Val::Percent(100.0),
                        height: Val::Px(5.0),
                        ..default()
                    },
                    BackgroundColor(BAR_BACKDROP),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        Node {
                            width: Val::Percent(health.0 / BUILDING_HEALTH_BAR_MAX * 100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(HEALTH_RED),
                    ));
                });

                if let Some(producing) = producing {
                    icon.spawn((
                        Node {
                            position_type: PositionType::Absolute,
                            top: Val::Px(-20.0),
                            left: Val::Px(0.0),
                            padding: UiRect::axes(Val::Px(6.0), Val::Px(2.0)),
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.15, 0.3, 0.6)),
                        BorderColor::from(Color::srgb(0.3, 0.5, 0.9)),
                    ))
                    .with_children(|label| {
                        label.spawn((
                            Text::new(format!("+{}", producing.0)),
                            TextFont {
                                font_size: 11.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                    });
                }
            })
            .id();

        commands.entity(surface).add_child(icon);
        commands.entity(building).insert(IconSpawned);
    }

    for (unit, position, name, health, mana, level) in q_new_units.iter() {
        let glyph = &name.0[..1];
        let icon = commands
            .spawn((
                Button,
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(position.0.x),
                    top: Val::Px(position.0.y),
                    width: Val::Px(UNIT_ICON_SIZE),
                    height: Val::Px(UNIT_ICON_SIZE),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BorderColor::from(UNIT_BORDER),
                BackgroundColor(Color::srgb(0.4, 0.28, 0.12)),
                UnitIcon(unit),
            ))
            .with_children(|icon| {
                icon.spawn((
                    Text::new(glyph),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));

                // Health bar; the raw percentage drives the fill width
                icon.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        bottom: Val::Px(-6.0),
                        left: Val::Px(0.0),
                        width: Val::Percent(100.0),
                        height: Val::Px(4.0),
                        ..default()
                    },
                    BackgroundColor(BAR_BACKDROP),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        Node {
                            width: Val::Percent(health.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(HEALTH_GREEN),
                    ));
                });

                if mana.0 > 0.0 {
                    icon.spawn((
                        Node {
                            position_type: PositionType::Absolute,
                            bottom: Val::Px(-11.0),
                            left: Val::Px(0.0),
                            width: Val::Percent(100.0),
                            height: Val::Px(3.0),
                            ..default()
                        },
                        BackgroundColor(BAR_BACKDROP),
                    ))
                    .with_children(|bar| {
                        bar.spawn((
                            Node {
                                width: Val::Percent(mana.0),
                                height: Val::Percent(100.0),
                                ..default()
                            },
                            BackgroundColor(MANA_BLUE),
                        ));
                    });
                }

                if let Some(level) = level {
                    icon.spawn((
                        Node {
                            position_type: PositionType::Absolute,
                            top: Val::Px(-8.0),
                            right: Val::Px(-8.0),
                            width: Val::Px(18.0),
                            height: Val::Px(18.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(1.0)),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.5, 0.25, 0.65)),
                        BorderColor::from(SELECTED_BORDER),
                    ))
                    .with_children(|badge| {
                        badge.spawn((
                            Text::new(format!("{}", level.0)),
                            TextFont {
                                font_size: 11.0,
                                ..default()
                            },
                            TextColor(Color::srgb(0.95, 0.85, 0.4)),
                        ));
                    });
                }
            })
            .id();

        commands.entity(surface).add_child(icon);
        commands.entity(unit).insert(IconSpawned);
    }
}

/// Keep unit icons at their unit's board position and highlight selection
pub fn sync_unit_icons(
    mut commands: Commands,
    mut q_icons: Query<(Entity, &UnitIcon, &mut Node, &mut BorderColor)>,
    q_units: Query<(&BoardPosition, Option<&Selected>), With<Unit>>,
) {
    for (icon_entity, link, mut node, mut border) in q_icons.iter_mut() {
        if let Ok((position, selected)) = q_units.get(link.0) {
            node.left = Val::Px(position.0.x);
            node.top = Val::Px(position.0.y);
            *border = BorderColor::from(if selected.is_some() {
                SELECTED_BORDER
            } else {
                UNIT_BORDER
            });
        } else {
            // Unit gone (new-game reset)
            commands.entity(icon_entity).despawn();
        }
    }
}

/// Highlight selected buildings; buildings never move
pub fn sync_building_icons(
    mut commands: Commands,
    mut q_icons: Query<(Entity, &BuildingIcon, &mut BorderColor)>,
    q_buildings: Query<Option<&Selected>, With<Building>>,
) {
    for (icon_entity, link, mut border) in q_icons.iter_mut() {
        if let Ok(selected) = q_buildings.get(link.0) {
            *border = BorderColor::from(if selected.is_some() {
                SELECTED_BORDER
            } else {
                BUILDING_BORDER
            });
        } else {
            commands.entity(icon_entity).despawn();
        }
    }
}

/// Clicks on building icons toggle building selection
pub fn handle_building_clicks(
    interaction_query: Query<(&Interaction, &BuildingIcon), Changed<Interaction>>,
    mut selects: MessageWriter<SelectBuilding>,
) {
    for (interaction, icon) in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            selects.write(SelectBuilding { target: icon.0 });
        }
    }
}

/// A press on the bare board surface (not on an icon) clears the selection
pub fn handle_surface_clicks(
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<BoardSurface>)>,
    mut clears: MessageWriter<ClearSelection>,
) {
    for interaction in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            clears.write(ClearSelection);
        }
    }
}
