use bevy::prelude::*;
use bevy::ui::FocusPolicy;

use crate::game::board::data::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::config::{GameConfig, GameConfigHandle};
use crate::game::economy::PlayerResources;

use super::components::*;

/// Setup the HUD: top resource bar, the board surface, and the bottom row of
/// minimap / selection tray / command card.
pub fn setup_hud(
    mut commands: Commands,
    config_handle: Res<GameConfigHandle>,
    game_configs: Res<Assets<GameConfig>>,
) {
    let minimap_size = game_configs
        .get(&config_handle.0)
        .map(|config| config.minimap_size)
        .unwrap_or_else(|| GameConfig::default().minimap_size);

    // Top Bar: Resources
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Px(40.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            FocusPolicy::Block,
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Gold: 0 | Lumber: 0 | Food: 0/0"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.4)),
                ResourceBarText,
            ));
        });

    // Board area, centered
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Button,
                Node {
                    width: Val::Px(BOARD_WIDTH),
                    height: Val::Px(BOARD_HEIGHT),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BorderColor::from(Color::srgb(0.55, 0.42, 0.18)),
                BackgroundColor(Color::srgb(0.12, 0.2, 0.12)),
                BoardSurface,
            ));
        });

    // Bottom row: minimap, selection tray, command card
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::FlexEnd,
                flex_direction: FlexDirection::Row,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            // Bottom Left: Minimap
            parent
                .spawn((
                    Node {
                        width: Val::Px(minimap_size),
                        height: Val::Px(minimap_size),
                        border: UiRect::all(Val::Px(2.0)),
                        margin: UiRect::all(Val::Px(10.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.07, 0.14, 0.07)),
                    BorderColor::from(Color::srgb(0.55, 0.42, 0.18)),
                    FocusPolicy::Block,
                    Minimap,
                ))
                .with_children(|p| {
                    // Static view-area indicator
                    p.spawn((
                        Node {
                            position_type: PositionType::Absolute,
                            left: Val::Px(16.0),
                            top: Val::Px(16.0),
                            right: Val::Px(16.0),
                            bottom: Val::Px(16.0),
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BorderColor::from(Color::srgba(0.95, 0.85, 0.4, 0.6)),
                    ));
                });

            // Bottom Center: Selection Tray
            parent
                .spawn((
                    Node {
                        min_width: Val::Px(320.0),
                        height: Val::Px(90.0),
                        border: UiRect::all(Val::Px(2.0)),
                        margin: UiRect::bottom(Val::Px(10.0)),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(8.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                    BorderColor::from(Color::srgb(0.35, 0.32, 0.3)),
                    FocusPolicy::Block,
                    SelectionTray,
                ))
                .with_children(|p| {
                    p.spawn((
                        Text::new("Select units or buildings"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.6, 0.6, 0.6)),
                    ));
                });

            // Bottom Right: Command Card
            parent
                .spawn((
                    Node {
                        width: Val::Px(190.0),
                        min_height: Val::Px(130.0),
                        border: UiRect::all(Val::Px(2.0)),
                        margin: UiRect::all(Val::Px(10.0)),
                        display: Display::Grid,
                        grid_template_columns: vec![GridTrack::fr(1.0); 2],
                        row_gap: Val::Px(5.0),
                        column_gap: Val::Px(5.0),
                        padding: UiRect::all(Val::Px(5.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                    BorderColor::from(Color::srgb(0.35, 0.32, 0.3)),
                    FocusPolicy::Block,
                    CommandCard,
                ))
                .with_children(|p| {
                    p.spawn((
                        Text::new("No commands available"),
                        TextFont {
                            font_size: 13.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.6, 0.6, 0.6)),
                    ));
                });
        });
}

/// Cleanup HUD elements when leaving the game screen. The board entities
/// survive; only their icon/dot link markers are dropped so the trackers
/// respawn cleanly next time.
pub fn cleanup_hud(
    mut commands: Commands,
    query: Query<Entity, With<HudRoot>>,
    icon_query: Query<Entity, With<IconSpawned>>,
    dot_query: Query<Entity, With<MinimapTracked>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
    for entity in &icon_query {
        commands.entity(entity).remove::<IconSpawned>();
    }
    for entity in &dot_query {
        commands.entity(entity).remove::<MinimapTracked>();
    }
}

/// Keep the top-bar readout in sync with the player's resources
pub fn update_resource_bar(
    resources: Res<PlayerResources>,
    mut text_query: Query<&mut Text, With<ResourceBarText>>,
) {
    for mut text in &mut text_query {
        **text = format!(
            "Gold: {} | Lumber: {} | Food: {}/{}",
            resources.gold, resources.lumber, resources.food, resources.max_food
        );
    }
}
