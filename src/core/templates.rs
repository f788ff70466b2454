//! Workout template resource service.

use rusqlite::{Connection, OptionalExtension, params};

use crate::core::users;
use crate::core::validate::{collect_exercise_ids, ensure_exercises_exist};
use crate::core::{DeleteOutcome, UpdateOutcome, require_email};
use crate::errors::AppResult;
use crate::models::template::{NewTemplate, Template, map_row};
use crate::models::{json_text, now_iso};

const SELECT_TEMPLATE: &str =
    "SELECT id, user_id, name, exercises, category, created_at FROM templates";

pub fn list_templates(conn: &Connection, email: &str) -> AppResult<Vec<Template>> {
    require_email(email)?;
    let Some(user_id) = users::id_for_email(conn, email)? else {
        return Ok(Vec::new());
    };

    let mut stmt = conn.prepare_cached(&format!(
        "{} WHERE user_id = ?1 ORDER BY created_at DESC, id DESC",
        SELECT_TEMPLATE
    ))?;
    let rows = stmt.query_map([user_id], map_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get_template(conn: &Connection, id: i64) -> AppResult<Option<Template>> {
    let template = conn
        .query_row(&format!("{} WHERE id = ?1", SELECT_TEMPLATE), [id], map_row)
        .optional()?;
    Ok(template)
}

pub fn create_template(conn: &Connection, email: &str, new: &NewTemplate) -> AppResult<Template> {
    let user_id = users::require_user(conn, email)?;
    ensure_exercises_exist(conn, &collect_exercise_ids(&new.exercises))?;

    let created_at = new.created_at.clone().unwrap_or_else(now_iso);
    conn.execute(
        "INSERT INTO templates (user_id, name, exercises, category, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user_id,
            new.name,
            json_text(&new.exercises)?,
            new.category,
            created_at,
        ],
    )?;
    let id = conn.last_insert_rowid();

    Ok(conn.query_row(&format!("{} WHERE id = ?1", SELECT_TEMPLATE), [id], map_row)?)
}

pub fn update_template(
    conn: &Connection,
    id: i64,
    new: &NewTemplate,
) -> AppResult<UpdateOutcome<Template>> {
    ensure_exercises_exist(conn, &collect_exercise_ids(&new.exercises))?;

    let rows = conn.execute(
        "UPDATE templates
         SET name = ?1, exercises = ?2, category = ?3, created_at = COALESCE(?4, created_at)
         WHERE id = ?5",
        params![
            new.name,
            json_text(&new.exercises)?,
            new.category,
            new.created_at,
            id,
        ],
    )?;
    if rows == 0 {
        return Ok(UpdateOutcome::NotFound);
    }

    let template = conn.query_row(&format!("{} WHERE id = ?1", SELECT_TEMPLATE), [id], map_row)?;
    Ok(UpdateOutcome::Updated(template))
}

pub fn delete_template(conn: &Connection, id: i64) -> AppResult<DeleteOutcome> {
    let rows = conn.execute("DELETE FROM templates WHERE id = ?1", [id])?;
    Ok(if rows == 0 {
        DeleteOutcome::NotFound
    } else {
        DeleteOutcome::Deleted
    })
}
