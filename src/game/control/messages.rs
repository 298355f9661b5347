/// Player-intent messages. UI widgets only ever write these; the handler
/// systems in this module are the single place game state is mutated in
/// response to input.

use bevy::prelude::*;

use super::commands::CommandAction;

/// Toggle a unit's selection (clears any building selection first)
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct SelectUnit {
    pub target: Entity,
}

/// Toggle a building's selection (clears any unit selection first)
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct SelectBuilding {
    pub target: Entity,
}

/// Clear both selection sets, e.g. on a background click
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct ClearSelection;

/// Move a unit to a new board position (drag)
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct MoveUnit {
    pub target: Entity,
    pub to: Vec2,
}

/// Run a command-card action against the current selection
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct IssueCommand(pub CommandAction);
