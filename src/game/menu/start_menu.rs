use bevy::prelude::*;

use crate::game::notice::GameNotice;
use crate::game::GameState;

use super::components::*;
use super::ui_utils::spawn_button;

/// Sets up the start menu modal
pub fn setup_start_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            StartMenuRoot,
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
                        Text::new("Warhall"),
                        TextFont {
                            font_size: 48.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.95, 0.85, 0.4)),
                    ));

                    spawn_button!(panel, "New Game", StartMenuAction::NewGame);
                    spawn_button!(panel, "Load Game", StartMenuAction::LoadGame);
                    spawn_button!(panel, "Settings", StartMenuAction::Settings);
                    spawn_button!(panel, "Cancel", StartMenuAction::Close);
                });
        });
}

/// Cleans up start menu entities
pub fn cleanup_start_menu(mut commands: Commands, query: Query<Entity, With<StartMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handles start menu button interactions. Closing the modal only hides it;
/// the session stays on the start-menu screen.
pub fn start_menu_action(
    interaction_query: Query<
        (&Interaction, &StartMenuAction),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<GameState>>,
    mut root_query: Query<&mut Visibility, With<StartMenuRoot>>,
    mut notices: MessageWriter<GameNotice>,
) {
    for (interaction, action) in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            match action {
                StartMenuAction::NewGame => {
                    // No data reset here; that only happens on a new game
                    // requested from inside a session.
                    next_state.set(GameState::RaceSelect);
                }
                StartMenuAction::LoadGame => {
                    notices.write(GameNotice::info("Load game feature coming soon!"));
                }
                StartMenuAction::Settings => {
                    notices.write(GameNotice::info("Settings feature coming soon!"));
                }
                StartMenuAction::Close => {
                    for mut visibility in root_query.iter_mut() {
                        *visibility = Visibility::Hidden;
                    }
                }
            }
        }
    }
}
