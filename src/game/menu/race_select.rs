use bevy::prelude::*;

use crate::game::board::data::RACE_CHOICES;
use crate::game::session::ChooseRace;

use super::components::*;
use super::ui_utils::spawn_button;

/// Sets up the race-selection modal
pub fn setup_race_select(mut commands: Commands) {
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
            RaceSelectRoot,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(14.0),
                        padding: UiRect::all(Val::Px(32.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BorderColor::from(Color::srgb(0.55, 0.42, 0.18)),
                    BackgroundColor(Color::srgb(0.13, 0.12, 0.11)),
                ))
                .with_children(|panel| {
                    panel.spawn((
                        Text::new("Choose Your Race"),
                        TextFont {
                            font_size: 32.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.95, 0.85, 0.4)),
                    ));

                    for choice in &RACE_CHOICES {
                        panel
                            .spawn((
                                Button,
                                Node {
                                    width: Val::Px(360.0),
                                    flex_direction: FlexDirection::Column,
                                    align_items: AlignItems::FlexStart,
                                    row_gap: Val::Px(4.0),
                                    padding: UiRect::all(Val::Px(12.0)),
                                    border: UiRect::all(Val::Px(2.0)),
                                    ..default()
                                },
                                BorderColor::from(Color::srgb(0.4, 0.4, 0.4)),
                                BackgroundColor(Color::srgb(0.2, 0.2, 0.2)),
                                RaceSelectAction::Pick(choice.race),
                            ))
                            .with_children(|button| {
                                button.spawn((
                                    Text::new(choice.name),
                                    TextFont {
                                        font_size: 20.0,
                                        ..default()
                                    },
                                    TextColor(Color::srgb(0.95, 0.9, 0.6)),
                                ));
                                button.spawn((
                                    Text::new(choice.blurb),
                                    TextFont {
                                        font_size: 14.0,
                                        ..default()
                                    },
                                    TextColor(Color::srgb(0.75, 0.75, 0.75)),
                                ));
                            });
                    }

                    spawn_button!(panel, "Cancel", RaceSelectAction::Cancel);
                });
        });
}

/// Cleans up race-selection entities
pub fn cleanup_race_select(mut commands: Commands, query: Query<Entity, With<RaceSelectRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handles race-selection button interactions
pub fn race_select_action(
    interaction_query: Query<
        (&Interaction, &RaceSelectAction),
        (Changed<Interaction>, With<Button>),
    >,
    mut choices: MessageWriter<ChooseRace>,
    mut root_query: Query<&mut Visibility, With<RaceSelectRoot>>,
) {
    for (interaction, action) in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            match action {
                RaceSelectAction::Pick(race) => {
                    choices.write(ChooseRace(*race));
                }
                RaceSelectAction::Cancel => {
                    for mut visibility in root_query.iter_mut() {
                        *visibility = Visibility::Hidden;
                    }
                }
            }
        }
    }
}
