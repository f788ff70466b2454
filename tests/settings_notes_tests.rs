mod common;
use common::{count_rows, memory_db, register_user};

use fittracker::config::Config;
use fittracker::core::{DeleteOutcome, notes, settings};
use fittracker::models::daily_note::NewDailyNote;
use fittracker::models::settings::{NewSettings, UnitSystem};

#[test]
fn two_saves_for_one_account_leave_exactly_one_settings_row() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    settings::save_settings(
        &pool.conn,
        "ann@x.com",
        &NewSettings {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            reminder_time: "06:00".to_string(),
            units: UnitSystem::Metric,
            ..Default::default()
        },
    )
    .expect("first save");

    let second = settings::save_settings(
        &pool.conn,
        "ann@x.com",
        &NewSettings {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            reminder_time: "06:45".to_string(),
            units: UnitSystem::Imperial,
            notifications: false,
            ..Default::default()
        },
    )
    .expect("second save");

    assert_eq!(count_rows(&pool, "settings"), 1);
    assert_eq!(second.reminder_time, "06:45");
    assert_eq!(second.units, UnitSystem::Imperial);
    assert!(!second.notifications);
}

#[test]
fn settings_lookup_is_a_typed_option_not_an_error() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    // unknown account and account without a saved row both give None
    assert!(settings::get_settings(&pool.conn, "ghost@x.com").expect("get").is_none());
    assert!(settings::get_settings(&pool.conn, "ann@x.com").expect("get").is_none());
}

#[test]
fn settings_seed_from_installation_defaults() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    let cfg = Config {
        database: ":memory:".to_string(),
        default_units: "imperial".to_string(),
        default_reminder_time: "07:15".to_string(),
        default_notifications: true,
    };
    let seeded = settings::save_settings(
        &pool.conn,
        "ann@x.com",
        &NewSettings::from_defaults(&cfg, "Ann", "ann@x.com"),
    )
    .expect("save defaults");

    assert_eq!(seeded.units, UnitSystem::Imperial);
    assert_eq!(seeded.reminder_time, "07:15");
    assert!(seeded.notifications);
}

#[test]
fn delete_settings_reports_whether_a_row_existed() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    assert_eq!(
        settings::delete_settings(&pool.conn, "ann@x.com").expect("delete"),
        DeleteOutcome::NotFound
    );

    settings::save_settings(&pool.conn, "ann@x.com", &NewSettings::default()).expect("save");
    assert_eq!(
        settings::delete_settings(&pool.conn, "ann@x.com").expect("delete"),
        DeleteOutcome::Deleted
    );
}

#[test]
fn saving_a_note_twice_for_one_date_updates_in_place() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    let first = notes::save_note(
        &pool.conn,
        "ann@x.com",
        &NewDailyNote {
            date: "2024-03-01".to_string(),
            content: "tired".to_string(),
            ..Default::default()
        },
    )
    .expect("first save");

    let second = notes::save_note(
        &pool.conn,
        "ann@x.com",
        &NewDailyNote {
            date: "2024-03-01".to_string(),
            content: "tired, but finished the session".to_string(),
            ..Default::default()
        },
    )
    .expect("second save");

    assert_eq!(count_rows(&pool, "daily_notes"), 1);
    assert_eq!(second.id, first.id);
    assert_eq!(second.content, "tired, but finished the session");
    assert_eq!(second.created_at, first.created_at);
}

#[test]
fn notes_for_different_dates_are_separate_rows() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    for (date, content) in [("2024-03-01", "one"), ("2024-03-02", "two")] {
        notes::save_note(
            &pool.conn,
            "ann@x.com",
            &NewDailyNote {
                date: date.to_string(),
                content: content.to_string(),
                ..Default::default()
            },
        )
        .expect("save note");
    }

    assert_eq!(count_rows(&pool, "daily_notes"), 2);
}

#[test]
fn note_update_and_delete_report_missing_ids() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    let outcome = notes::update_note(
        &pool.conn,
        777,
        &NewDailyNote {
            date: "2024-03-01".to_string(),
            ..Default::default()
        },
    )
    .expect("update call");
    assert!(outcome.is_not_found());

    assert_eq!(
        notes::delete_note(&pool.conn, 777).expect("delete call"),
        DeleteOutcome::NotFound
    );
}
