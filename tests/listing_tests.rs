mod common;
use common::{memory_db, register_user, seed_exercise};

use fittracker::core::{exercises, logs, notes, reminders, workouts};
use fittracker::models::daily_note::NewDailyNote;
use fittracker::models::exercise::NewExercise;
use fittracker::models::reminder::NewReminder;
use fittracker::models::workout::NewWorkout;
use fittracker::models::workout_log::NewWorkoutLog;

#[test]
fn workouts_list_newest_date_first_regardless_of_insertion_order() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    for date in ["2024-01-05", "2024-03-01", "2024-02-14"] {
        workouts::create_workout(
            &pool.conn,
            "ann@x.com",
            &NewWorkout {
                date: date.to_string(),
                ..Default::default()
            },
        )
        .expect("create workout");
    }

    let listed = workouts::list_workouts(&pool.conn, "ann@x.com").expect("list");
    let dates: Vec<&str> = listed.iter().map(|w| w.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-02-14", "2024-01-05"]);
}

#[test]
fn logs_list_by_completion_time_descending() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    for completed_at in [
        "2024-01-05T10:00:00+00:00",
        "2024-03-01T18:30:00+00:00",
        "2024-02-14T07:45:00+00:00",
    ] {
        logs::create_log(
            &pool.conn,
            "ann@x.com",
            &NewWorkoutLog {
                completed_at: Some(completed_at.to_string()),
                ..Default::default()
            },
        )
        .expect("create log");
    }

    let listed = logs::list_logs(&pool.conn, "ann@x.com").expect("list");
    assert_eq!(listed[0].completed_at, "2024-03-01T18:30:00+00:00");
    assert_eq!(listed[2].completed_at, "2024-01-05T10:00:00+00:00");
}

#[test]
fn notes_list_newest_date_first() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    for date in ["2024-02-01", "2024-02-03", "2024-02-02"] {
        notes::save_note(
            &pool.conn,
            "ann@x.com",
            &NewDailyNote {
                date: date.to_string(),
                content: date.to_string(),
                ..Default::default()
            },
        )
        .expect("save note");
    }

    let listed = notes::list_notes(&pool.conn, "ann@x.com").expect("list");
    let dates: Vec<&str> = listed.iter().map(|n| n.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-02-03", "2024-02-02", "2024-02-01"]);
}

#[test]
fn reminders_list_by_creation_time_descending() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    for created_at in ["2023-06-01T08:00:00+00:00", "2024-06-01T08:00:00+00:00"] {
        reminders::create_reminder(
            &pool.conn,
            "ann@x.com",
            &NewReminder {
                time: "07:00".to_string(),
                created_at: Some(created_at.to_string()),
                ..Default::default()
            },
        )
        .expect("create reminder");
    }

    let listed = reminders::list_reminders(&pool.conn, "ann@x.com").expect("list");
    assert_eq!(listed[0].created_at, "2024-06-01T08:00:00+00:00");
}

#[test]
fn exercise_catalog_mixes_system_rows_with_own_custom_rows_only() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");
    register_user(&pool, "Bob", "bob@x.com");
    seed_exercise(&pool, "Burpee");

    exercises::create_exercise(
        &pool.conn,
        "ann@x.com",
        &NewExercise {
            name: "Ann's Special".to_string(),
            ..Default::default()
        },
    )
    .expect("ann custom");
    exercises::create_exercise(
        &pool.conn,
        "bob@x.com",
        &NewExercise {
            name: "Bob's Special".to_string(),
            ..Default::default()
        },
    )
    .expect("bob custom");

    let catalog = exercises::list_exercises(&pool.conn, "ann@x.com").expect("list");
    let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Ann's Special", "Burpee"]);

    let system_row = catalog.iter().find(|e| e.name == "Burpee").expect("system row");
    assert!(system_row.user_id.is_none());
    assert!(!system_row.is_custom);
}

#[test]
fn lists_are_scoped_to_the_owning_account() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");
    register_user(&pool, "Bob", "bob@x.com");

    workouts::create_workout(
        &pool.conn,
        "ann@x.com",
        &NewWorkout {
            date: "2024-01-01".to_string(),
            ..Default::default()
        },
    )
    .expect("ann workout");

    assert_eq!(workouts::list_workouts(&pool.conn, "ann@x.com").expect("list").len(), 1);
    assert!(workouts::list_workouts(&pool.conn, "bob@x.com").expect("list").is_empty());
}
