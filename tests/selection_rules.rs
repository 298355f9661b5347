use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimePlugin;

use warhall::game::board::{Building, BoardPosition, DisplayName, Selected, Unit};
use warhall::game::board::BoardPlugin;
use warhall::game::config::ConfigPlugin;
use warhall::game::control::{ClearSelection, ControlPlugin, MoveUnit, SelectBuilding, SelectUnit};
use warhall::game::economy::EconomyPlugin;
use warhall::game::notice::{Notice, NoticePlugin};
use warhall::game::GameState;

fn test_app() -> App {
    let mut app = App::new();
    // Time is driven by hand in these tests, so TimePlugin stays out
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

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    // Run Startup and apply the state transition
    app.update();
    app
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

fn building_by_name(app: &mut App, name: &str) -> Entity {
    let mut query = app
        .world_mut()
        .query_filtered::<(Entity, &DisplayName), With<Building>>();
    query
        .iter(app.world())
        .find(|(_, display)| display.0 == name)
        .map(|(entity, _)| entity)
        .unwrap_or_else(|| panic!("no building named {name}"))
}

fn selected_units(app: &mut App) -> Vec<Entity> {
    let mut query = app
        .world_mut()
        .query_filtered::<Entity, (With<Unit>, With<Selected>)>();
    query.iter(app.world()).collect()
}

fn selected_buildings(app: &mut App) -> Vec<Entity> {
    let mut query = app
        .world_mut()
        .query_filtered::<Entity, (With<Building>, With<Selected>)>();
    query.iter(app.world()).collect()
}

#[test]
fn unit_selection_toggles() {
    let mut app = test_app();
    let paladin = unit_by_name(&mut app, "Paladin");
    let footman = unit_by_name(&mut app, "Footman");

    app.world_mut().write_message(SelectUnit { target: paladin });
    app.update();
    assert_eq!(selected_units(&mut app), vec![paladin]);

    app.world_mut().write_message(SelectUnit { target: footman });
    app.update();
    let mut selected = selected_units(&mut app);
    selected.sort();
    let mut expected = vec![paladin, footman];
    expected.sort();
    assert_eq!(selected, expected);

    // Toggling the first unit off leaves the second selected
    app.world_mut().write_message(SelectUnit { target: paladin });
    app.update();
    assert_eq!(selected_units(&mut app), vec![footman]);
}

#[test]
fn selecting_a_unit_clears_building_selection() {
    let mut app = test_app();
    let barracks = building_by_name(&mut app, "Barracks");
    let peasant = unit_by_name(&mut app, "Peasant");

    app.world_mut().write_message(SelectBuilding { target: barracks });
    app.update();
    assert_eq!(selected_buildings(&mut app), vec![barracks]);

    app.world_mut().write_message(SelectUnit { target: peasant });
    app.update();
    assert_eq!(selected_units(&mut app), vec![peasant]);
    assert!(selected_buildings(&mut app).is_empty());
}

#[test]
fn at_most_one_building_is_selected() {
    let mut app = test_app();
    let barracks = building_by_name(&mut app, "Barracks");
    let town_hall = building_by_name(&mut app, "Town Hall");
    let paladin = unit_by_name(&mut app, "Paladin");

    // Selecting a building also clears any unit selection
    app.world_mut().write_message(SelectUnit { target: paladin });
    app.update();
    app.world_mut().write_message(SelectBuilding { target: barracks });
    app.update();
    assert!(selected_units(&mut app).is_empty());
    assert_eq!(selected_buildings(&mut app), vec![barracks]);

    // A different building replaces the selection
    app.world_mut().write_message(SelectBuilding { target: town_hall });
    app.update();
    assert_eq!(selected_buildings(&mut app), vec![town_hall]);

    // Toggling the same building deselects it
    app.world_mut().write_message(SelectBuilding { target: town_hall });
    app.update();
    assert!(selected_buildings(&mut app).is_empty());
}

#[test]
fn background_click_clears_everything() {
    let mut app = test_app();
    let paladin = unit_by_name(&mut app, "Paladin");
    let footman = unit_by_name(&mut app, "Footman");

    app.world_mut().write_message(SelectUnit { target: paladin });
    app.update();
    app.world_mut().write_message(SelectUnit { target: footman });
    app.update();
    assert_eq!(selected_units(&mut app).len(), 2);

    app.world_mut().write_message(ClearSelection);
    app.update();
    assert!(selected_units(&mut app).is_empty());
    assert!(selected_buildings(&mut app).is_empty());

    // Clearing an already-empty selection is fine
    app.world_mut().write_message(ClearSelection);
    app.update();
    assert!(selected_units(&mut app).is_empty());
}

#[test]
fn unknown_targets_are_ignored() {
    let mut app = test_app();
    let stranger = app.world_mut().spawn_empty().id();

    let notices_before = {
        let mut query = app.world_mut().query::<&Notice>();
        query.iter(app.world()).count()
    };

    app.world_mut().write_message(SelectUnit { target: stranger });
    app.world_mut().write_message(SelectBuilding { target: stranger });
    app.update();

    assert!(selected_units(&mut app).is_empty());
    assert!(selected_buildings(&mut app).is_empty());

    // No feedback either: a lookup miss is a silent no-op
    let notices_after = {
        let mut query = app.world_mut().query::<&Notice>();
        query.iter(app.world()).count()
    };
    assert_eq!(notices_before, notices_after);
}

#[test]
fn selection_emits_a_notice() {
    let mut app = test_app();
    let paladin = unit_by_name(&mut app, "Paladin");

    app.world_mut().write_message(SelectUnit { target: paladin });
    app.update();
    app.update();

    let mut query = app.world_mut().query::<&Notice>();
    assert!(query
        .iter(app.world())
        .any(|notice| notice.text == "Selected Paladin"));
}

#[test]
fn unit_moves_round_trip_exactly() {
    let mut app = test_app();
    let rifleman = unit_by_name(&mut app, "Rifleman");

    let to = Vec2::new(123.4, 56.7);
    app.world_mut().write_message(MoveUnit { target: rifleman, to });
    app.update();

    let position = app.world().get::<BoardPosition>(rifleman).unwrap();
    assert_eq!(position.0, to);

    // Moves only touch the dragged unit
    let paladin = unit_by_name(&mut app, "Paladin");
    let position = app.world().get::<BoardPosition>(paladin).unwrap();
    assert_eq!(position.0, Vec2::new(300.0, 200.0));
}
