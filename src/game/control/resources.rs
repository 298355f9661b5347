use bevy::prelude::*;

/// In-flight pointer drag on a unit icon.
pub struct DragTarget {
    pub unit: Entity,
    pub start_cursor: Vec2,
    pub start_position: Vec2,
    /// Set once the cursor travels past the click threshold.
    pub moved: bool,
}

/// State for tracking the current icon drag, if any
#[derive(Resource, Default)]
pub struct DragState {
    pub target: Option<DragTarget>,
}
