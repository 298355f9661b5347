use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimePlugin;

use warhall::game::board::data::{BUILDING_SEEDS, UNIT_SEEDS};
use warhall::game::board::{
    Building, BoardId, BoardPosition, DisplayName, Race, Selected, Unit,
};
use warhall::game::board::BoardPlugin;
use warhall::game::config::ConfigPlugin;
use warhall::game::control::{ControlPlugin, MoveUnit, SelectUnit};
use warhall::game::economy::{EconomyPlugin, PlayerResources};
use warhall::game::notice::{Notice, NoticePlugin};
use warhall::game::session::{ChooseRace, ChosenFaction, RequestNewGame, SessionPlugin};
use warhall::game::GameState;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins.build().disable::<TimePlugin>());
    app.add_plugins(StatesPlugin);
    app.add_plugins(AssetPlugin::default());
    app.init_resource::<ButtonInput<MouseButton>>();
    app.insert_resource(Time::<()>::default());
    app.init_state::<GameState>();
    app.add_plugins(ConfigPlugin);
    app.add_plugins(BoardPlugin);
    app.add_plugins(ControlPlugin);
    app.add_plugins(EconomyPlugin);
    app.add_plugins(NoticePlugin);
    app.add_plugins(SessionPlugin);
    app.update();
    app
}

fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

fn goto_race_select(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::RaceSelect);
    app.update();
}

fn choose(app: &mut App, race: Race) {
    app.world_mut().write_message(ChooseRace(race));
    app.update();
    app.update();
}

fn unit_by_name(app: &mut App, name: &str) -> Entity {
    let mut query = app
        .world_mut()
        .query_filtered::<(Entity, &DisplayName), With<Unit>>();
    query
        .iter(app.world())
        .find(|(_, display)| display.0 == name)
        .map(|(entity, _)| entity)
        .unwrap_or_else(|| panic!("no unit named {name}"))
}

#[test]
fn session_starts_on_the_start_menu() {
    let mut app = test_app();
    app.update();

    assert_eq!(state(&app), GameState::StartMenu);
    assert!(app.world().resource::<ChosenFaction>().0.is_none());
}

#[test]
fn choosing_a_race_enters_the_game() {
    let mut app = test_app();
    goto_race_select(&mut app);

    choose(&mut app, Race::Orc);

    assert_eq!(state(&app), GameState::InGame);
    assert_eq!(app.world().resource::<ChosenFaction>().0, Some(Race::Orc));

    let mut query = app.world_mut().query::<&Notice>();
    assert!(query
        .iter(app.world())
        .any(|notice| notice.text == "Welcome, orc player! Build your army and conquer!"));
}

#[test]
fn race_choice_is_inert_outside_race_select() {
    let mut app = test_app();
    // Still on the start menu
    app.world_mut().write_message(ChooseRace(Race::Undead));
    app.update();
    app.update();

    assert_eq!(state(&app), GameState::StartMenu);
    assert!(app.world().resource::<ChosenFaction>().0.is_none());
}

#[test]
fn new_game_resets_everything_to_seed() {
    let mut app = test_app();
    goto_race_select(&mut app);
    choose(&mut app, Race::Human);
    assert_eq!(state(&app), GameState::InGame);

    // Dirty the session: spend gold, move a unit, select things
    app.world_mut().resource_mut::<PlayerResources>().gold = 41;
    app.world_mut().resource_mut::<PlayerResources>().food = 30;

    let paladin = unit_by_name(&mut app, "Paladin");
    app.world_mut().write_message(MoveUnit {
        target: paladin,
        to: Vec2::new(10.0, 10.0),
    });
    app.world_mut().write_message(SelectUnit { target: paladin });
    app.update();

    assert_eq!(
        app.world().get::<BoardPosition>(paladin).unwrap().0,
        Vec2::new(10.0, 10.0)
    );

    // Reset; the state transition lands on the following frame
    app.world_mut().write_message(RequestNewGame);
    app.update();
    app.update();

    assert_eq!(state(&app), GameState::RaceSelect);
    assert_eq!(
        *app.world().resource::<PlayerResources>(),
        PlayerResources::seed()
    );

    // Roster is the seed roster again, positions included
    let mut units = {
        let mut query = app
            .world_mut()
            .query_filtered::<(&BoardId, &DisplayName, &BoardPosition), With<Unit>>();
        query
            .iter(app.world())
            .map(|(id, name, position)| (id.0, name.0, position.0))
            .collect::<Vec<_>>()
    };
    units.sort_by_key(|(id, _, _)| *id);
    let expected: Vec<(u32, &str, Vec2)> = UNIT_SEEDS
        .iter()
        .map(|seed| (seed.id, seed.name, Vec2::new(seed.x, seed.y)))
        .collect();
    assert_eq!(units, expected);

    let building_count = {
        let mut query = app.world_mut().query_filtered::<Entity, With<Building>>();
        query.iter(app.world()).count()
    };
    assert_eq!(building_count, BUILDING_SEEDS.len());

    // Both selection sets are empty
    let selected = {
        let mut query = app.world_mut().query_filtered::<Entity, With<Selected>>();
        query.iter(app.world()).count()
    };
    assert_eq!(selected, 0);
}

#[test]
fn reset_flows_back_into_a_fresh_game() {
    let mut app = test_app();
    goto_race_select(&mut app);
    choose(&mut app, Race::Human);

    app.world_mut().write_message(RequestNewGame);
    app.update();
    app.update();
    assert_eq!(state(&app), GameState::RaceSelect);

    // Pick a different race this time
    choose(&mut app, Race::NightElf);
    assert_eq!(state(&app), GameState::InGame);
    assert_eq!(
        app.world().resource::<ChosenFaction>().0,
        Some(Race::NightElf)
    );

    let unit_count = {
        let mut query = app.world_mut().query_filtered::<Entity, With<Unit>>();
        query.iter(app.world()).count()
    };
    assert_eq!(unit_count, UNIT_SEEDS.len());
}
