mod common;
use common::{memory_db, register_user};

use fittracker::core::{logs, stats, users, workouts};
use fittracker::errors::AppError;
use fittracker::models::user::NewUser;
use fittracker::models::workout::NewWorkout;
use fittracker::models::workout_log::NewWorkoutLog;

#[test]
fn registration_validates_the_email_shape() {
    let pool = memory_db();

    let err = users::create_user(
        &pool.conn,
        &NewUser {
            name: "Ann".to_string(),
            email: "not-an-email".to_string(),
            ..Default::default()
        },
    )
    .expect_err("must fail");
    assert!(matches!(err, AppError::InvalidEmail(_)));
    assert!(err.is_bad_request());
}

#[test]
fn a_second_registration_for_the_same_email_is_rejected() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    let err = users::create_user(
        &pool.conn,
        &NewUser {
            name: "Imposter".to_string(),
            email: "ann@x.com".to_string(),
            ..Default::default()
        },
    )
    .expect_err("must fail");
    assert!(matches!(err, AppError::EmailTaken(_)));
}

#[test]
fn upsert_by_email_refreshes_the_name_and_keeps_the_id() {
    let pool = memory_db();
    let id = register_user(&pool, "Ann", "ann@x.com");

    let upserted = users::upsert_user(&pool.conn, "Ann Renamed", "ann@x.com").expect("upsert");
    assert_eq!(upserted, id);

    let user = users::get_user_by_email(&pool.conn, "ann@x.com")
        .expect("get")
        .expect("exists");
    assert_eq!(user.name, "Ann Renamed");
}

#[test]
fn progress_summary_is_zeroed_for_an_unknown_account() {
    let pool = memory_db();
    let summary = stats::progress_summary(&pool.conn, "ghost@x.com").expect("summary");
    assert_eq!(summary, Default::default());
}

#[test]
fn progress_summary_aggregates_workouts_and_logs() {
    let pool = memory_db();
    register_user(&pool, "Ann", "ann@x.com");

    for (date, completed) in [("2024-01-01", true), ("2024-02-01", false), ("2024-03-01", true)] {
        workouts::create_workout(
            &pool.conn,
            "ann@x.com",
            &NewWorkout {
                date: date.to_string(),
                completed,
                ..Default::default()
            },
        )
        .expect("create workout");
    }
    for duration in [30, 45] {
        logs::create_log(
            &pool.conn,
            "ann@x.com",
            &NewWorkoutLog {
                duration,
                ..Default::default()
            },
        )
        .expect("create log");
    }

    let summary = stats::progress_summary(&pool.conn, "ann@x.com").expect("summary");
    assert_eq!(summary.total_workouts, 3);
    assert_eq!(summary.completed_workouts, 2);
    assert_eq!(summary.logged_sessions, 2);
    assert_eq!(summary.logged_minutes, 75);
    assert_eq!(summary.first_workout_date.as_deref(), Some("2024-01-01"));
    assert_eq!(summary.last_workout_date.as_deref(), Some("2024-03-01"));
}
