use log::{debug, info};
use rusqlite::{Connection, Result};

/// Schema version written to `PRAGMA user_version` once the matching
/// migration has been applied.
const SCHEMA_VERSION: i32 = 1;

fn current_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// Create the full base schema (version 1).
///
/// Structured list/object fields (exercise lists, muscle groups,
/// instructions, assessment results) are stored as JSON text columns; the
/// row mappers in `models` decode them on read.
fn create_base_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL DEFAULT '',
            email         TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL DEFAULT '',
            created_at    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS exercises (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id          INTEGER,            -- NULL = shared system exercise
            name             TEXT NOT NULL,
            category         TEXT NOT NULL DEFAULT '',
            muscle_groups    TEXT NOT NULL DEFAULT '[]',
            difficulty       TEXT NOT NULL DEFAULT 'beginner'
                             CHECK(difficulty IN ('beginner','intermediate','advanced')),
            equipment        TEXT NOT NULL DEFAULT '',
            description      TEXT NOT NULL DEFAULT '',
            instructions     TEXT NOT NULL DEFAULT '[]',
            image_url        TEXT NOT NULL DEFAULT '',
            duration_minutes INTEGER NOT NULL DEFAULT 0,
            is_custom        INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS workouts (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    INTEGER NOT NULL,
            date       TEXT NOT NULL,
            name       TEXT NOT NULL DEFAULT '',
            exercises  TEXT NOT NULL DEFAULT '[]',
            notes      TEXT NOT NULL DEFAULT '[]',
            completed  INTEGER NOT NULL DEFAULT 0,
            duration   INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS templates (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    INTEGER NOT NULL,
            name       TEXT NOT NULL DEFAULT '',
            exercises  TEXT NOT NULL DEFAULT '[]',
            category   TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS workout_logs (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id        INTEGER NOT NULL,
            workout_id     INTEGER NOT NULL DEFAULT 0,
            completed_at   TEXT NOT NULL,
            duration       INTEGER NOT NULL DEFAULT 0,
            exercise_logs  TEXT NOT NULL DEFAULT '[]',
            notes          TEXT NOT NULL DEFAULT '',
            overall_effort INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS settings (
            user_id       INTEGER PRIMARY KEY,
            name          TEXT NOT NULL DEFAULT '',
            email         TEXT NOT NULL DEFAULT '',
            notifications INTEGER NOT NULL DEFAULT 1,
            reminder_time TEXT NOT NULL DEFAULT '08:00',
            units         TEXT NOT NULL DEFAULT 'metric'
                          CHECK(units IN ('metric','imperial'))
        );

        CREATE TABLE IF NOT EXISTS progressions (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id            INTEGER NOT NULL,
            template_id        INTEGER NOT NULL DEFAULT 0,
            current_level      INTEGER NOT NULL DEFAULT 1,
            started_at         TEXT NOT NULL,
            completed_sessions INTEGER NOT NULL DEFAULT 0,
            total_sessions     INTEGER NOT NULL DEFAULT 0,
            week_in_level      INTEGER NOT NULL DEFAULT 1,
            active             INTEGER NOT NULL DEFAULT 1,
            notes              TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS daily_notes (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    INTEGER NOT NULL,
            date       TEXT NOT NULL,
            content    TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(user_id, date)
        );

        CREATE TABLE IF NOT EXISTS reminders (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    INTEGER NOT NULL,
            enabled    INTEGER NOT NULL DEFAULT 1,
            time       TEXT NOT NULL DEFAULT '08:00',
            method     TEXT NOT NULL DEFAULT 'push'
                       CHECK(method IN ('push','email','sms')),
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS assessments (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      INTEGER NOT NULL,
            completed_at TEXT NOT NULL,
            results      TEXT NOT NULL DEFAULT '{}',
            overall_level TEXT NOT NULL DEFAULT '',
            recommended  TEXT NOT NULL DEFAULT '[]',
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_exercises_user ON exercises(user_id);
        CREATE INDEX IF NOT EXISTS idx_workouts_user_date ON workouts(user_id, date);
        CREATE INDEX IF NOT EXISTS idx_templates_user ON templates(user_id, created_at);
        CREATE INDEX IF NOT EXISTS idx_logs_user_completed ON workout_logs(user_id, completed_at);
        CREATE INDEX IF NOT EXISTS idx_progressions_user ON progressions(user_id, started_at);
        CREATE INDEX IF NOT EXISTS idx_notes_user_date ON daily_notes(user_id, date);
        CREATE INDEX IF NOT EXISTS idx_reminders_user ON reminders(user_id);
        CREATE INDEX IF NOT EXISTS idx_assessments_user ON assessments(user_id, completed_at);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let version = current_version(conn)?;

    if version < 1 {
        info!("Applying schema migration 1 (base tables)");
        create_base_schema(conn)?;
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    } else {
        debug!("Schema up to date (version {})", version);
    }

    Ok(())
}
