use bevy::prelude::*;

use crate::game::GameState;

/// Hard ceiling on the gold and lumber counters.
pub const RESOURCE_CAP: u32 = 9999;

/// Resource-tick cadence and per-tick income.
pub const TICK_SECONDS: f32 = 3.0;
pub const TICK_GOLD: u32 = 5;
pub const TICK_LUMBER: u32 = 2;

/// Training costs charged by the command handlers.
pub const PEASANT_GOLD_COST: u32 = 75;
pub const FOOTMAN_GOLD_COST: u32 = 135;

/// The player's resource counters. Food may exceed its cap; that mirrors the
/// product behavior and is not enforced here.
#[derive(Resource, Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlayerResources {
    pub gold: u32,
    pub lumber: u32,
    pub food: u32,
    pub max_food: u32,
}

impl PlayerResources {
    /// Starting values, also restored on every new-game reset.
    pub fn seed() -> Self {
        Self {
            gold: 500,
            lumber: 250,
            food: 12,
            max_food: 50,
        }
    }
}

impl Default for PlayerResources {
    fn default() -> Self {
        Self::seed()
    }
}

/// Repeating income timer. Exists only while the session is in game, so a
/// stale timer can never fire on a menu screen.
#[derive(Resource)]
pub struct ResourceTick(pub Timer);

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerResources>()
            .add_systems(OnEnter(GameState::InGame), start_resource_tick)
            .add_systems(OnExit(GameState::InGame), stop_resource_tick)
            .add_systems(
                Update,
                tick_resources
                    .run_if(in_state(GameState::InGame).and(resource_exists::<ResourceTick>)),
            );
    }
}

fn start_resource_tick(mut commands: Commands) {
    commands.insert_resource(ResourceTick(Timer::from_seconds(
        TICK_SECONDS,
        TimerMode::Repeating,
    )));
}

fn stop_resource_tick(mut commands: Commands) {
    commands.remove_resource::<ResourceTick>();
}

fn tick_resources(
    time: Res<Time>,
    mut tick: ResMut<ResourceTick>,
    mut resources: ResMut<PlayerResources>,
) {
    // One increment per update even if several periods elapsed: no catch-up.
    if tick.0.tick(time.delta()).just_finished() {
        apply_tick(&mut resources);
    }
}

/// One tick of passive income, saturating at the resource cap.
pub fn apply_tick(resources: &mut PlayerResources) {
    resources.gold = (resources.gold + TICK_GOLD).min(RESOURCE_CAP);
    resources.lumber = (resources.lumber + TICK_LUMBER).min(RESOURCE_CAP);
}
