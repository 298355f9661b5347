use bevy::prelude::*;

use crate::game::notice::{Notice, NoticeSeverity};

use super::components::NoticeFeed;

fn severity_colors(severity: NoticeSeverity) -> (Color, Color, Color) {
    // (background, border, text)
    match severity {
        NoticeSeverity::Info => (
            Color::srgb(0.1, 0.15, 0.35),
            Color::srgb(0.3, 0.4, 0.7),
            Color::srgb(0.75, 0.82, 0.95),
        ),
        NoticeSeverity::Warning => (
            Color::srgb(0.3, 0.25, 0.05),
            Color::srgb(0.7, 0.6, 0.2),
            Color::srgb(0.95, 0.9, 0.6),
        ),
        NoticeSeverity::Error => (
            Color::srgb(0.35, 0.08, 0.08),
            Color::srgb(0.75, 0.25, 0.25),
            Color::srgb(0.95, 0.7, 0.7),
        ),
    }
}

/// Spawn the toast stack. It lives for the whole app so notices show on the
/// menu screens too.
pub fn setup_notice_feed(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(48.0),
            left: Val::Px(8.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            max_width: Val::Px(320.0),
            ..default()
        },
        NoticeFeed,
    ));
}

/// Dress fresh notice entities as toasts and stack them in the feed. The
/// notice entity is the toast node, so its expiry despawns both at once.
pub fn decorate_notices(
    mut commands: Commands,
    q_feed: Query<Entity, With<NoticeFeed>>,
    q_new: Query<(Entity, &Notice), Added<Notice>>,
) {
    let Ok(feed) = q_feed.single() else { return };

    for (entity, notice) in q_new.iter() {
        let (background, border, text_color) = severity_colors(notice.severity);

        commands.entity(entity).insert((
            Node {
                padding: UiRect::axes(Val::Px(10.0), Val::Px(4.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(background),
            BorderColor::from(border),
        ));

        let text = commands
            .spawn((
                Text::new(notice.text.clone()),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(text_color),
            ))
            .id();
        commands.entity(entity).add_child(text);
        commands.entity(feed).add_child(entity);
    }
}
