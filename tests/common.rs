#![allow(dead_code)]
use std::env;
use std::path::PathBuf;

use fittracker::config::Config;
use fittracker::core::{exercises, users};
use fittracker::db::{DbPool, init_db};
use fittracker::models::exercise::NewExercise;
use fittracker::models::user::NewUser;

/// Create a unique test DB inside the system temp dir and remove any
/// leftover file from a previous run.
pub fn setup_test_db(name: &str) -> DbPool {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fittracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    let _ = std::fs::remove_file(&db_path);

    let cfg = Config {
        database: db_path,
        ..Config::default()
    };
    let pool = DbPool::from_config(&cfg).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// Throwaway in-memory database for tests that never reopen the file.
pub fn memory_db() -> DbPool {
    let pool = DbPool::open_in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn register_user(pool: &DbPool, name: &str, email: &str) -> i64 {
    users::create_user(
        &pool.conn,
        &NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        },
    )
    .expect("create user")
    .id
}

/// Seed one shared system exercise and return its id.
pub fn seed_exercise(pool: &DbPool, name: &str) -> i64 {
    exercises::create_system_exercise(
        &pool.conn,
        &NewExercise {
            name: name.to_string(),
            ..Default::default()
        },
    )
    .expect("seed exercise")
    .id
}

/// Count rows of a table with a plain COUNT(*).
pub fn count_rows(pool: &DbPool, table: &str) -> i64 {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
        .expect("count rows")
}
