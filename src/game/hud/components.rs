use bevy::prelude::*;

/// Side length of a unit icon on the board, in pixels.
pub const UNIT_ICON_SIZE: f32 = 48.0;

/// Side length of a building icon on the board, in pixels.
pub const BUILDING_ICON_SIZE: f32 = 64.0;

/// Root marker component for HUD elements
#[derive(Component)]
pub struct HudRoot;

/// The board area itself. A press that lands here (and not on a child icon)
/// clears the selection.
#[derive(Component)]
pub struct BoardSurface;

/// Link between a board icon and the unit it renders
#[derive(Component)]
pub struct UnitIcon(pub Entity);

/// Link between a board icon and the building it renders
#[derive(Component)]
pub struct BuildingIcon(pub Entity);

/// Marker on board entities that already have an icon
#[derive(Component)]
pub struct IconSpawned;

/// Resource readout in the top bar
#[derive(Component)]
pub struct ResourceBarText;

/// Minimap UI element
#[derive(Component)]
pub struct Minimap;

/// Link between a minimap dot and its board entity
#[derive(Component)]
pub struct MinimapDot(pub Entity);

/// Marker on board entities that already have a minimap dot
#[derive(Component)]
pub struct MinimapTracked;

/// Selection tray at the bottom center
#[derive(Component)]
pub struct SelectionTray;

/// Command card at the bottom right
#[derive(Component)]
pub struct CommandCard;

/// Command button component
#[derive(Component)]
pub struct CommandButton(pub crate::game::control::CommandAction);

/// Container the notice toasts stack in
#[derive(Component)]
pub struct NoticeFeed;
