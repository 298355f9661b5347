use bevy::prelude::*;

/// How long a notice stays on screen.
pub const NOTICE_SECONDS: f32 = 3.0;

/// Severity of a player-facing notice. Domain failures (not enough gold)
/// surface here instead of as error control flow.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeSeverity {
    Info,
    Warning,
    Error,
}

/// Request to show a toast to the player. Written by any handler that wants
/// to say something; consumed once per frame into notice entities.
#[derive(Event, Message, Debug, Clone)]
pub struct GameNotice {
    pub text: String,
    pub severity: NoticeSeverity,
}

impl GameNotice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: NoticeSeverity::Info }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: NoticeSeverity::Warning }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: NoticeSeverity::Error }
    }
}

/// A live notice. One entity per message; the HUD decorates it with a toast
/// node, and despawning it cancels the pending expiry.
#[derive(Component, Debug)]
pub struct Notice {
    pub id: u64,
    pub text: String,
    pub severity: NoticeSeverity,
    /// Seconds since app start when the notice was created.
    pub created: f64,
}

/// Per-notice one-shot expiry timer. Each notice expires on its own clock,
/// independent of any other notice.
#[derive(Component)]
pub struct NoticeExpiry(pub Timer);

/// Monotonic id source for notices. Never reset during a session.
#[derive(Resource, Default)]
pub struct NoticeCounter(pub u64);

pub struct NoticePlugin;

impl Plugin for NoticePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<GameNotice>()
            .init_resource::<NoticeCounter>()
            // Notices appear on every screen, so neither system is gated on
            // game state.
            .add_systems(Update, (spawn_notices, expire_notices).chain());
    }
}

fn spawn_notices(
    mut commands: Commands,
    mut reader: MessageReader<GameNotice>,
    mut counter: ResMut<NoticeCounter>,
    time: Res<Time>,
) {
    for notice in reader.read() {
        let id = counter.0;
        counter.0 += 1;

        commands.spawn((
            Notice {
                id,
                text: notice.text.clone(),
                severity: notice.severity,
                created: time.elapsed_secs_f64(),
            },
            NoticeExpiry(Timer::from_seconds(NOTICE_SECONDS, TimerMode::Once)),
        ));
    }
}

fn expire_notices(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut NoticeExpiry)>,
) {
    for (entity, mut expiry) in query.iter_mut() {
        if expiry.0.tick(time.delta()).finished() {
            commands.entity(entity).despawn();
        }
    }
}
