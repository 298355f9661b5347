use bevy::prelude::*;

use crate::game::notice::GameNotice;
use crate::game::session::RequestNewGame;

use super::components::*;
use super::ui_utils::spawn_button;

/// Spawns the small menu button in the top-right corner of the game screen
pub fn setup_menu_button(mut commands: Commands) {
    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(48.0),
                right: Val::Px(8.0),
                width: Val::Px(72.0),
                height: Val::Px(36.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BorderColor::from(Color::srgb(0.55, 0.42, 0.18)),
            BackgroundColor(Color::srgb(0.25, 0.18, 0.08)),
            GameMenuButton,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Menu"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

/// Removes the menu button and any open overlay when leaving the game screen
pub fn cleanup_game_menu(
    mut commands: Commands,
    button_query: Query<Entity, With<GameMenuButton>>,
    overlay_query: Query<Entity, With<GameMenuRoot>>,
) {
    for entity in button_query.iter() {
        commands.entity(entity).despawn();
    }
    for entity in overlay_query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Opens the in-game menu overlay. Opening it twice is a no-op.
pub fn open_game_menu(
    mut commands: Commands,
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<GameMenuButton>)>,
    overlay_query: Query<Entity, With<GameMenuRoot>>,
) {
    let pressed = interaction_query
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed);
    if !pressed || !overlay_query.is_empty() {
        return;
    }

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            GameMenuRoot,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(16.0),
                        padding: UiRect::all(Val::Px(32.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BorderColor::from(Color::srgb(0.55, 0.42, 0.18)),
                    BackgroundColor(Color::srgb(0.13, 0.12, 0.11)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("Menu"),
                        TextFont {
                            font_size: 32.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.95, 0.85, 0.4)),
                    ));

                    spawn_button!(panel, "New Game", GameMenuAction::NewGame);
                    spawn_button!(panel, "Load Game", GameMenuAction::LoadGame);
                    spawn_button!(panel, "Settings", GameMenuAction::Settings);
                    spawn_button!(panel, "Cancel", GameMenuAction::Close);
                });
        });
}

/// Handles in-game menu button interactions
pub fn game_menu_action(
    mut commands: Commands,
    interaction_query: Query<
        (&Interaction, &GameMenuAction),
        (Changed<Interaction>, With<Button>),
    >,
    overlay_query: Query<Entity, With<GameMenuRoot>>,
    mut new_game: MessageWriter<RequestNewGame>,
    mut notices: MessageWriter<GameNotice>,
) {
    for (interaction, action) in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            match action {
                GameMenuAction::NewGame => {
                    new_game.write(RequestNewGame);
                    for entity in overlay_query.iter() {
                        commands.entity(entity).despawn();
                    }
                }
                GameMenuAction::LoadGame => {
                    notices.write(GameNotice::info("Load game feature coming soon!"));
                }
                GameMenuAction::Settings => {
                    notices.write(GameNotice::info("Settings feature coming soon!"));
                }
                GameMenuAction::Close => {
                    for entity in overlay_query.iter() {
                        commands.entity(entity).despawn();
                    }
                }
            }
        }
    }
}
