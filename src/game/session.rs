use bevy::prelude::*;

use crate::game::board::{self, Building, Race, Unit};
use crate::game::economy::PlayerResources;
use crate::game::notice::GameNotice;
use crate::game::GameState;

/// Faction picked on the race-selection screen. `None` until the first pick.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct ChosenFaction(pub Option<Race>);

/// Commit to a race and enter the game
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct ChooseRace(pub Race);

/// Full reset back to race selection, requested from the in-game menu
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct RequestNewGame;

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChosenFaction>()
            .add_message::<ChooseRace>()
            .add_message::<RequestNewGame>()
            .add_systems(
                Update,
                handle_choose_race.run_if(in_state(GameState::RaceSelect)),
            )
            .add_systems(
                Update,
                handle_new_game.run_if(in_state(GameState::InGame)),
            );
    }
}

/// Store the faction, move to the game screen, greet the player.
fn handle_choose_race(
    mut reader: MessageReader<ChooseRace>,
    mut faction: ResMut<ChosenFaction>,
    mut next_state: ResMut<NextState<GameState>>,
    mut notices: MessageWriter<GameNotice>,
) {
    for ChooseRace(race) in reader.read() {
        info!("Race chosen: {:?}", race);
        faction.0 = Some(*race);
        next_state.set(GameState::InGame);
        notices.write(GameNotice::info(format!(
            "Welcome, {} player! Build your army and conquer!",
            race.id()
        )));
    }
}

/// New game from inside a session: everything back to seed values, then
/// return to race selection. Selections die with the despawned entities.
fn handle_new_game(
    mut commands: Commands,
    mut reader: MessageReader<RequestNewGame>,
    q_board: Query<Entity, Or<(With<Unit>, With<Building>)>>,
    mut resources: ResMut<PlayerResources>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if reader.is_empty() {
        return;
    }
    reader.clear();

    info!("New game requested, resetting to seed state");

    for entity in q_board.iter() {
        commands.entity(entity).despawn();
    }
    board::spawn_seed_entities(&mut commands);

    *resources = PlayerResources::seed();
    next_state.set(GameState::RaceSelect);
}
