use bevy::prelude::*;

use crate::game::board::{BoardId, Building, BuildingKind, Selected, Unit, UnitKind};
use crate::game::control::{building_commands, unit_commands, CommandAction, IssueCommand};

use super::components::*;

/// What the command card is currently showing commands for: the leading
/// selected unit's kind, else the selected building's kind, else nothing.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CommandContext {
    #[default]
    None,
    Unit(UnitKind),
    Building(BuildingKind),
}

fn current_context(
    q_selected_units: &Query<(&BoardId, &UnitKind), (With<Unit>, With<Selected>)>,
    q_selected_buildings: &Query<&BuildingKind, (With<Building>, With<Selected>)>,
) -> CommandContext {
    // Roster order decides which unit leads a mixed selection
    if let Some((_, kind)) = q_selected_units.iter().min_by_key(|(id, _)| id.0) {
        return CommandContext::Unit(*kind);
    }
    if let Some(kind) = q_selected_buildings.iter().next() {
        return CommandContext::Building(*kind);
    }
    CommandContext::None
}

/// Rebuild the command card when the selection context changes
pub fn update_command_card(
    mut commands: Commands,
    q_card: Query<Entity, With<CommandCard>>,
    q_children: Query<&Children>,
    q_selected_units: Query<(&BoardId, &UnitKind), (With<Unit>, With<Selected>)>,
    q_selected_buildings: Query<&BuildingKind, (With<Building>, With<Selected>)>,
    mut shown: Local<CommandContext>,
) {
    let context = current_context(&q_selected_units, &q_selected_buildings);
    if context == *shown {
        return;
    }
    *shown = context;

    let Ok(card) = q_card.single() else { return };

    if let Ok(children) = q_children.get(card) {
        for child in children.iter() {
            commands.entity(child).despawn();
        }
    }

    let actions: &[CommandAction] = match context {
        CommandContext::None => &[],
        CommandContext::Unit(kind) => unit_commands(kind),
        CommandContext::Building(kind) => building_commands(kind),
    };

    if actions.is_empty() {
        let placeholder = commands
            .spawn((
                Text::new("No commands available"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ))
            .id();
        commands.entity(card).add_child(placeholder);
        return;
    }

    for action in actions {
        let button = commands
            .spawn((
                Button,
                Node {
                    height: Val::Px(56.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    border: UiRect::all(Val::Px(1.0)),
                    padding: UiRect::all(Val::Px(4.0)),
                    ..default()
                },
                BorderColor::from(Color::srgb(0.55, 0.42, 0.18)),
                BackgroundColor(Color::srgb(0.3, 0.3, 0.3)),
                CommandButton(*action),
            ))
            .with_children(|btn| {
                btn.spawn((
                    Text::new(action.label()),
                    TextFont {
                        font_size: 13.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            })
            .id();
        commands.entity(card).add_child(button);
    }
}

/// Handle button visual feedback on interaction
pub fn button_system(
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, With<CommandButton>),
    >,
) {
    for (interaction, mut color) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                *color = BackgroundColor(Color::srgb(0.1, 0.5, 0.1));
            }
            Interaction::Hovered => {
                *color = BackgroundColor(Color::srgb(0.4, 0.4, 0.4));
            }
            Interaction::None => {
                *color = BackgroundColor(Color::srgb(0.3, 0.3, 0.3));
            }
        }
    }
}

/// Forward command button presses to the command handler
pub fn command_handler(
    interaction_query: Query<(&Interaction, &CommandButton), (Changed<Interaction>, With<Button>)>,
    mut issues: MessageWriter<IssueCommand>,
) {
    for (interaction, command) in &interaction_query {
        if *interaction == Interaction::Pressed {
            issues.write(IssueCommand(command.0));
        }
    }
}
