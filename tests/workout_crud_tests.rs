mod common;
use common::{count_rows, memory_db, register_user, seed_exercise};

use fittracker::core::{DeleteOutcome, UpdateOutcome, workouts};
use fittracker::errors::AppError;
use fittracker::models::exercise_entry::ExerciseEntry;
use fittracker::models::workout::NewWorkout;
use serde_json::json;

#[test]
fn create_returns_stored_record_with_generated_id_and_timestamp() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    let created = workouts::create_workout(
        &pool.conn,
        "ann@x.com",
        &NewWorkout {
            date: "2024-01-10".to_string(),
            name: "Leg Day".to_string(),
            duration: 45,
            ..Default::default()
        },
    )
    .expect("create workout");

    assert!(created.id > 0);
    assert!(!created.created_at.is_empty(), "created_at must be stamped");
    assert_eq!(created.name, "Leg Day");
    assert_eq!(created.duration, 45);
    assert!(!created.completed);
}

#[test]
fn create_honors_client_supplied_timestamp() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    let created = workouts::create_workout(
        &pool.conn,
        "ann@x.com",
        &NewWorkout {
            date: "2024-01-10".to_string(),
            created_at: Some("2023-12-31T23:59:59+00:00".to_string()),
            ..Default::default()
        },
    )
    .expect("create workout");

    assert_eq!(created.created_at, "2023-12-31T23:59:59+00:00");
}

#[test]
fn create_for_unknown_email_fails_and_writes_nothing() {
    let pool = memory_db();

    let err = workouts::create_workout(
        &pool.conn,
        "ghost@x.com",
        &NewWorkout {
            date: "2024-01-10".to_string(),
            ..Default::default()
        },
    )
    .expect_err("must fail");

    assert!(matches!(err, AppError::UserNotFound(_)));
    assert!(err.is_bad_request());
    assert_eq!(count_rows(&pool, "workouts"), 0);
}

#[test]
fn list_requires_an_email_parameter() {
    let pool = memory_db();
    let err = workouts::list_workouts(&pool.conn, "  ").expect_err("must fail");
    assert!(matches!(err, AppError::MissingParameter(_)));
}

#[test]
fn list_for_unknown_email_is_empty_not_an_error() {
    let pool = memory_db();
    let listed = workouts::list_workouts(&pool.conn, "nobody@x.com").expect("list");
    assert!(listed.is_empty());
}

#[test]
fn exercise_entry_detail_round_trips_unchanged() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");
    let ex_id = seed_exercise(&pool, "Back Squat");

    let entries: Vec<ExerciseEntry> = serde_json::from_value(json!([
        {
            "exerciseId": ex_id,
            "sets": [{"reps": 5, "weight": 102.5}, {"reps": 5, "weight": 107.5}],
            "restSeconds": 180,
            "supersetWith": null
        }
    ]))
    .expect("entries");

    let created = workouts::create_workout(
        &pool.conn,
        "ann@x.com",
        &NewWorkout {
            date: "2024-01-10".to_string(),
            exercises: entries.clone(),
            ..Default::default()
        },
    )
    .expect("create workout");

    assert_eq!(created.exercises, entries);

    let listed = workouts::list_workouts(&pool.conn, "ann@x.com").expect("list");
    assert_eq!(listed[0].exercises, entries);
}

#[test]
fn update_replaces_the_record_in_place() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    let created = workouts::create_workout(
        &pool.conn,
        "ann@x.com",
        &NewWorkout {
            date: "2024-01-10".to_string(),
            name: "Leg Day".to_string(),
            ..Default::default()
        },
    )
    .expect("create workout");

    let outcome = workouts::update_workout(
        &pool.conn,
        created.id,
        &NewWorkout {
            date: "2024-01-11".to_string(),
            name: "Pull Day".to_string(),
            completed: true,
            duration: 50,
            ..Default::default()
        },
    )
    .expect("update workout");

    let updated = match outcome {
        UpdateOutcome::Updated(w) => w,
        UpdateOutcome::NotFound => panic!("row exists"),
    };
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Pull Day");
    assert!(updated.completed);
    // created_at untouched when the payload does not replace it
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(count_rows(&pool, "workouts"), 1);
}

#[test]
fn update_of_missing_id_reports_not_found() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    let outcome = workouts::update_workout(&pool.conn, 9999, &NewWorkout::default())
        .expect("update call itself succeeds");
    assert!(outcome.is_not_found());
    assert_eq!(count_rows(&pool, "workouts"), 0);
}

#[test]
fn delete_reports_whether_a_row_existed() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    let created = workouts::create_workout(
        &pool.conn,
        "ann@x.com",
        &NewWorkout {
            date: "2024-01-10".to_string(),
            ..Default::default()
        },
    )
    .expect("create workout");

    assert_eq!(
        workouts::delete_workout(&pool.conn, created.id).expect("delete"),
        DeleteOutcome::Deleted
    );
    assert_eq!(
        workouts::delete_workout(&pool.conn, created.id).expect("delete again"),
        DeleteOutcome::NotFound
    );
    assert_eq!(count_rows(&pool, "workouts"), 0);
}
