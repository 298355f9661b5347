use std::time::Duration;

use bevy::prelude::*;

use warhall::game::notice::{GameNotice, Notice, NoticePlugin, NoticeSeverity};

fn test_app() -> App {
    let mut app = App::new();
    app.insert_resource(Time::<()>::default());
    app.add_plugins(NoticePlugin);
    app
}

fn step(app: &mut App, seconds: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
    app.update();
}

fn live_notices(app: &mut App) -> Vec<(u64, String)> {
    let mut query = app.world_mut().query::<&Notice>();
    let mut notices: Vec<(u64, String)> = query
        .iter(app.world())
        .map(|notice| (notice.id, notice.text.clone()))
        .collect();
    notices.sort();
    notices
}

#[test]
fn notice_ids_are_monotonic() {
    let mut app = test_app();

    app.world_mut().write_message(GameNotice::info("first"));
    app.world_mut().write_message(GameNotice::warning("second"));
    app.world_mut().write_message(GameNotice::error("third"));
    step(&mut app, 0.0);

    assert_eq!(
        live_notices(&mut app),
        vec![
            (0, "first".to_string()),
            (1, "second".to_string()),
            (2, "third".to_string()),
        ]
    );
}

#[test]
fn a_notice_expires_after_three_seconds() {
    let mut app = test_app();

    app.world_mut().write_message(GameNotice::info("fleeting"));
    step(&mut app, 0.0);
    assert_eq!(live_notices(&mut app).len(), 1);

    // Still alive just before the deadline
    step(&mut app, 2.9);
    assert_eq!(live_notices(&mut app).len(), 1);

    step(&mut app, 0.2);
    assert!(live_notices(&mut app).is_empty());
}

#[test]
fn notices_expire_independently() {
    let mut app = test_app();

    app.world_mut().write_message(GameNotice::info("early"));
    step(&mut app, 0.0);

    step(&mut app, 2.0);
    app.world_mut().write_message(GameNotice::info("late"));
    step(&mut app, 0.0);

    // 1.5s later the first notice is past its 3s, the second is not
    step(&mut app, 1.5);
    let remaining = live_notices(&mut app);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].1, "late");

    step(&mut app, 2.0);
    assert!(live_notices(&mut app).is_empty());
}

#[test]
fn duplicate_notices_are_not_coalesced() {
    let mut app = test_app();

    app.world_mut().write_message(GameNotice::error("Not enough gold!"));
    app.world_mut().write_message(GameNotice::error("Not enough gold!"));
    step(&mut app, 0.0);

    let notices = live_notices(&mut app);
    assert_eq!(notices.len(), 2);
    assert_ne!(notices[0].0, notices[1].0);
}

#[test]
fn severity_is_preserved() {
    let mut app = test_app();

    app.world_mut().write_message(GameNotice::warning("careful"));
    step(&mut app, 0.0);

    let mut query = app.world_mut().query::<&Notice>();
    let notice = query.iter(app.world()).next().unwrap();
    assert_eq!(notice.severity, NoticeSeverity::Warning);
    assert_eq!(notice.created, 0.0);
}
