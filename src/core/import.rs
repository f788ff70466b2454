//! Local-to-server migration.
//!
//! Accepts the client's full local snapshot and applies it as a batch of
//! idempotent upserts inside one transaction. Records keep their
//! client-supplied ids and timestamps (this is the trusted-import path; the
//! normal create services generate their own), and the owning user is
//! re-resolved by email for every record rather than trusted from any
//! client `userId` field. Re-running the same snapshot is safe: every
//! record write is an insert-or-update on its durable key.

use log::{debug, info};
use rusqlite::{Connection, params};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::users;
use crate::core::validate::{collect_exercise_ids, ensure_exercises_exist};
use crate::errors::{AppError, AppResult};
use crate::models::exercise::Difficulty;
use crate::models::exercise_entry::ExerciseEntry;
use crate::models::reminder::DeliveryMethod;
use crate::models::settings::NewSettings;
use crate::models::{json_text, now_iso};

/// Full client-side snapshot, as posted by the app's "migrate local data"
/// action. Every field is optional; list-typed fields that are absent or
/// not actually lists are skipped without error.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub user: Option<SnapshotUser>,
    #[serde(default)]
    pub workouts: Option<Value>,
    #[serde(default)]
    pub templates: Option<Value>,
    #[serde(default)]
    pub custom_exercises: Option<Value>,
    #[serde(default)]
    pub logs: Option<Value>,
    #[serde(default)]
    pub settings: Option<Value>,
    #[serde(default)]
    pub progressions: Option<Value>,
    #[serde(default)]
    pub daily_notes: Option<Value>,
    #[serde(default)]
    pub reminders: Option<Value>,
    #[serde(default)]
    pub assessments: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotUser {
    #[serde(default)]
    pub name: String,
    pub email: String,
}

/// Per-kind upsert counts for a completed migration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub users: usize,
    pub workouts: usize,
    pub templates: usize,
    pub exercises: usize,
    pub logs: usize,
    pub settings: usize,
    pub progressions: usize,
    pub daily_notes: usize,
    pub reminders: usize,
    pub assessments: usize,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.users
            + self.workouts
            + self.templates
            + self.exercises
            + self.logs
            + self.settings
            + self.progressions
            + self.daily_notes
            + self.reminders
            + self.assessments
    }
}

// ---------------------------------------------------------------------------
// Import record shapes (client ids and timestamps, trusted verbatim)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkoutRecord {
    id: i64,
    #[serde(default)]
    date: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    exercises: Vec<ExerciseEntry>,
    #[serde(default)]
    notes: Vec<String>,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    duration: i64,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateRecord {
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    exercises: Vec<ExerciseEntry>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseRecord {
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    muscle_groups: Vec<String>,
    #[serde(default)]
    difficulty: Difficulty,
    #[serde(default)]
    equipment: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    duration_minutes: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogRecord {
    id: i64,
    #[serde(default)]
    workout_id: i64,
    #[serde(default)]
    completed_at: Option<String>,
    #[serde(default)]
    duration: i64,
    #[serde(default)]
    exercise_logs: Vec<ExerciseEntry>,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    overall_effort: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProgressionRecord {
    id: i64,
    #[serde(default)]
    template_id: i64,
    #[serde(default)]
    current_level: i64,
    #[serde(default)]
    started_at: Option<String>,
    #[serde(default)]
    completed_sessions: i64,
    #[serde(default)]
    total_sessions: i64,
    #[serde(default)]
    week_in_level: i64,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    notes: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteRecord {
    id: i64,
    #[serde(default)]
    date: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReminderRecord {
    id: i64,
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    time: String,
    #[serde(default)]
    method: DeliveryMethod,
    #[serde(default)]
    created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentRecord {
    id: i64,
    #[serde(default)]
    completed_at: Option<String>,
    #[serde(default)]
    results: Value,
    #[serde(default)]
    overall_level: String,
    #[serde(default)]
    recommended: Vec<String>,
    #[serde(default)]
    created_at: Option<String>,
}

/// Decode a snapshot list field. Absent or non-list values are skipped
/// (empty result); a malformed element aborts the migration.
fn records<T: DeserializeOwned>(kind: &'static str, field: Option<&Value>) -> AppResult<Vec<T>> {
    let Some(value) = field else {
        return Ok(Vec::new());
    };
    let Some(items) = value.as_array() else {
        debug!("migration: skipping non-list field {}", kind);
        return Ok(Vec::new());
    };

    items
        .iter()
        .map(|item| {
            serde_json::from_value(item.clone())
                .map_err(|e| AppError::Import(format!("malformed {} record: {}", kind, e)))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Apply a full snapshot in one transaction.
///
/// Processing order is fixed so user resolution precedes every owned
/// record: user, workouts, templates, customExercises, logs, settings,
/// progressions, dailyNotes, reminders, assessments. Any failure rolls the
/// whole attempt back; a retry of the same payload converges to the same
/// state.
pub fn import_snapshot(conn: &mut Connection, snapshot: &Snapshot) -> AppResult<ImportReport> {
    let user = snapshot
        .user
        .as_ref()
        .ok_or(AppError::MissingParameter("user.email"))?;
    let email = user.email.as_str();

    let tx = conn.transaction()?;
    let mut report = ImportReport::default();

    users::upsert_user(&tx, &user.name, email)?;
    report.users = 1;

    report.workouts = import_workouts(
        &tx,
        email,
        records("workouts", snapshot.workouts.as_ref())?,
    )?;
    report.templates = import_templates(
        &tx,
        email,
        records("templates", snapshot.templates.as_ref())?,
    )?;
    report.exercises = import_exercises(
        &tx,
        email,
        records("customExercises", snapshot.custom_exercises.as_ref())?,
    )?;
    report.logs = import_logs(&tx, email, records("logs", snapshot.logs.as_ref())?)?;
    report.settings = import_settings(&tx, email, snapshot.settings.as_ref())?;
    report.progressions = import_progressions(
        &tx,
        email,
        records("progressions", snapshot.progressions.as_ref())?,
    )?;
    report.daily_notes = import_notes(
        &tx,
        email,
        records("dailyNotes", snapshot.daily_notes.as_ref())?,
    )?;
    report.reminders = import_reminders(
        &tx,
        email,
        records("reminders", snapshot.reminders.as_ref())?,
    )?;
    report.assessments = import_assessments(
        &tx,
        email,
        records("assessments", snapshot.assessments.as_ref())?,
    )?;

    tx.commit()?;
    info!(
        "migration applied for {}: {} records upserted",
        email,
        report.total()
    );
    Ok(report)
}

fn import_workouts(conn: &Connection, email: &str, recs: Vec<WorkoutRecord>) -> AppResult<usize> {
    for rec in &recs {
        let user_id = users::require_user(conn, email)?;
        ensure_exercises_exist(conn, &collect_exercise_ids(&rec.exercises))?;
        conn.execute(
            "INSERT INTO workouts (id, user_id, date, name, exercises, notes, completed, duration,
                                   created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(id) DO UPDATE SET
                 user_id = excluded.user_id,
                 date = excluded.date,
                 name = excluded.name,
                 exercises = excluded.exercises,
                 notes = excluded.notes,
                 completed = excluded.completed,
                 duration = excluded.duration,
                 created_at = excluded.created_at",
            params![
                rec.id,
                user_id,
                rec.date,
                rec.name,
                json_text(&rec.exercises)?,
                json_text(&rec.notes)?,
                rec.completed,
                rec.duration,
                rec.created_at.clone().unwrap_or_else(now_iso),
            ],
        )?;
    }
    Ok(recs.len())
}

fn import_templates(conn: &Connection, email: &str, recs: Vec<TemplateRecord>) -> AppResult<usize> {
    for rec in &recs {
        let user_id = users::require_user(conn, email)?;
        ensure_exercises_exist(conn, &collect_exercise_ids(&rec.exercises))?;
        conn.execute(
            "INSERT INTO templates (id, user_id, name, exercises, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO UPDATE SET
                 user_id = excluded.user_id,
                 name = excluded.name,
                 exercises = excluded.exercises,
                 category = excluded.category,
                 created_at = excluded.created_at",
            params![
                rec.id,
                user_id,
                rec.name,
                json_text(&rec.exercises)?,
                rec.category,
                rec.created_at.clone().unwrap_or_else(now_iso),
            ],
        )?;
    }
    Ok(recs.len())
}

fn import_exercises(conn: &Connection, email: &str, recs: Vec<ExerciseRecord>) -> AppResult<usize> {
    for rec in &recs {
        let user_id = users::require_user(conn, email)?;
        conn.execute(
            "INSERT INTO exercises (id, user_id, name, category, muscle_groups, difficulty,
                                    equipment, description, instructions, image_url,
                                    duration_minutes, is_custom)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, 1)
             ON CONFLICT(id) DO UPDATE SET
                 user_id = excluded.user_id,
                 name = excluded.name,
                 category = excluded.category,
                 muscle_groups = excluded.muscle_groups,
                 difficulty = excluded.difficulty,
                 equipment = excluded.equipment,
                 description = excluded.description,
                 instructions = excluded.instructions,
                 image_url = excluded.image_url,
                 duration_minutes = excluded.duration_minutes,
                 is_custom = excluded.is_custom",
            params![
                rec.id,
                user_id,
                rec.name,
                rec.category,
                json_text(&rec.muscle_groups)?,
                rec.difficulty.to_db_str(),
                rec.equipment,
                rec.description,
                json_text(&rec.instructions)?,
                rec.image_url,
                rec.duration_minutes,
            ],
        )?;
    }
    Ok(recs.len())
}

fn import_logs(conn: &Connection, email: &str, recs: Vec<LogRecord>) -> AppResult<usize> {
    for rec in &recs {
        let user_id = users::require_user(conn, email)?;
        ensure_exercises_exist(conn, &collect_exercise_ids(&rec.exercise_logs))?;
        conn.execute(
            "INSERT INTO workout_logs (id, user_id, workout_id, completed_at, duration,
                                       exercise_logs, notes, overall_effort)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(id) DO UPDATE SET
                 user_id = excluded.user_id,
                 workout_id = excluded.workout_id,
                 completed_at = excluded.completed_at,
                 duration = excluded.duration,
                 exercise_logs = excluded.exercise_logs,
                 notes = excluded.notes,
                 overall_effort = excluded.overall_effort",
            params![
                rec.id,
                user_id,
                rec.workout_id,
                rec.completed_at.clone().unwrap_or_else(now_iso),
                rec.duration,
                json_text(&rec.exercise_logs)?,
                rec.notes,
                rec.overall_effort,
            ],
        )?;
    }
    Ok(recs.len())
}

/// Settings is a single object in the snapshot, not a list. It reuses the
/// service-level upsert, which is already keyed on the owning user.
fn import_settings(conn: &Connection, email: &str, field: Option<&Value>) -> AppResult<usize> {
    let Some(value) = field else {
        return Ok(0);
    };
    if !value.is_object() {
        debug!("migration: skipping non-object settings field");
        return Ok(0);
    }

    let new: NewSettings = serde_json::from_value(value.clone())
        .map_err(|e| AppError::Import(format!("malformed settings record: {}", e)))?;
    crate::core::settings::save_settings(conn, email, &new)?;
    Ok(1)
}

fn import_progressions(
    conn: &Connection,
    email: &str,
    recs: Vec<ProgressionRecord>,
) -> AppResult<usize> {
    for rec in &recs {
        let user_id = users::require_user(conn, email)?;
        conn.execute(
            "INSERT INTO progressions (id, user_id, template_id, current_level, started_at,
                                       completed_sessions, total_sessions, week_in_level, active,
                                       notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
             ON CONFLICT(id) DO UPDATE SET
                 user_id = excluded.user_id,
                 template_id = excluded.template_id,
                 current_level = excluded.current_level,
                 started_at = excluded.started_at,
                 completed_sessions = excluded.completed_sessions,
                 total_sessions = excluded.total_sessions,
                 week_in_level = excluded.week_in_level,
                 active = excluded.active,
                 notes = excluded.notes",
            params![
                rec.id,
                user_id,
                rec.template_id,
                rec.current_level,
                rec.started_at.clone().unwrap_or_else(now_iso),
                rec.completed_sessions,
                rec.total_sessions,
                rec.week_in_level,
                rec.active,
                rec.notes,
            ],
        )?;
    }
    Ok(recs.len())
}

/// Daily notes keep their per-date uniqueness through migration: the date's
/// existing row is updated in place, and only a genuinely new date inserts
/// (still guarded by the id key for re-dated records).
fn import_notes(conn: &Connection, email: &str, recs: Vec<NoteRecord>) -> AppResult<usize> {
    for rec in &recs {
        let user_id = users::require_user(conn, email)?;
        let existing =
            crate::core::notes::get_note_for_date(conn, user_id, &rec.date)?;

        if let Some(existing) = existing {
            conn.execute(
                "UPDATE daily_notes SET content = ?1, updated_at = ?2 WHERE id = ?3",
                params![
                    rec.content,
                    rec.updated_at.clone().unwrap_or_else(now_iso),
                    existing.id,
                ],
            )?;
        } else {
            let created_at = rec.created_at.clone().unwrap_or_else(now_iso);
            let updated_at = rec.updated_at.clone().unwrap_or_else(|| created_at.clone());
            conn.execute(
                "INSERT INTO daily_notes (id, user_id, date, content, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(id) DO UPDATE SET
                     user_id = excluded.user_id,
                     date = excluded.date,
                     content = excluded.content,
                     created_at = excluded.created_at,
                     updated_at = excluded.updated_at",
                params![rec.id, user_id, rec.date, rec.content, created_at, updated_at],
            )?;
        }
    }
    Ok(recs.len())
}

fn import_reminders(conn: &Connection, email: &str, recs: Vec<ReminderRecord>) -> AppResult<usize> {
    for rec in &recs {
        let user_id = users::require_user(conn, email)?;
        conn.execute(
            "INSERT INTO reminders (id, user_id, enabled, time, method, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO UPDATE SET
                 user_id = excluded.user_id,
                 enabled = excluded.enabled,
                 time = excluded.time,
                 method = excluded.method,
                 created_at = excluded.created_at",
            params![
                rec.id,
                user_id,
                rec.enabled,
                rec.time,
                rec.method.to_db_str(),
                rec.created_at.clone().unwrap_or_else(now_iso),
            ],
        )?;
    }
    Ok(recs.len())
}

fn import_assessments(
    conn: &Connection,
    email: &str,
    recs: Vec<AssessmentRecord>,
) -> AppResult<usize> {
    for rec in &recs {
        let user_id = users::require_user(conn, email)?;
        let completed_at = rec.completed_at.clone().unwrap_or_else(now_iso);
        let created_at = rec.created_at.clone().unwrap_or_else(|| completed_at.clone());
        conn.execute(
            "INSERT INTO assessments (id, user_id, completed_at, results, overall_level,
                                      recommended, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(id) DO UPDATE SET
                 user_id = excluded.user_id,
                 completed_at = excluded.completed_at,
                 results = excluded.results,
                 overall_level = excluded.overall_level,
                 recommended = excluded.recommended,
                 created_at = excluded.created_at",
            params![
                rec.id,
                user_id,
                completed_at,
                json_text(&rec.results)?,
                rec.overall_level,
                json_text(&rec.recommended)?,
                created_at,
            ],
        )?;
    }
    Ok(recs.len())
}
