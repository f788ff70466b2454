//! Fitness assessment resource service.

use rusqlite::{Connection, OptionalExtension, params};

use crate::core::users;
use crate::core::{DeleteOutcome, UpdateOutcome, require_email};
use crate::errors::AppResult;
use crate::models::assessment::{Assessment, NewAssessment, map_row};
use crate::models::{json_text, now_iso};

const SELECT_ASSESSMENT: &str =
    "SELECT id, user_id, completed_at, results, overall_level, recommended, created_at \
     FROM assessments";

pub fn list_assessments(conn: &Connection, email: &str) -> AppResult<Vec<Assessment>> {
    require_email(email)?;
    let Some(user_id) = users::id_for_email(conn, email)? else {
        return Ok(Vec::new());
    };

    let mut stmt = conn.prepare_cached(&format!(
        "{} WHERE user_id = ?1 ORDER BY completed_at DESC, id DESC",
        SELECT_ASSESSMENT
    ))?;
    let rows = stmt.query_map([user_id], map_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn get_assessment(conn: &Connection, id: i64) -> AppResult<Option<Assessment>> {
    let assessment = conn
        .query_row(
            &format!("{} WHERE id = ?1", SELECT_ASSESSMENT),
            [id],
            map_row,
        )
        .optional()?;
    Ok(assessment)
}

pub fn create_assessment(
    conn: &Connection,
    email: &str,
    new: &NewAssessment,
) -> AppResult<Assessment> {
    let user_id = users::require_user(conn, email)?;

    let completed_at = new.completed_at.clone().unwrap_or_else(now_iso);
    let created_at = new.created_at.clone().unwrap_or_else(|| completed_at.clone());
    conn.execute(
        "INSERT INTO assessments (user_id, completed_at, results, overall_level, recommended,
                                  created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            user_id,
            completed_at,
            json_text(&new.results)?,
            new.overall_level,
            json_text(&new.recommended)?,
            created_at,
        ],
    )?;
    let id = conn.last_insert_rowid();

    Ok(conn.query_row(
        &format!("{} WHERE id = ?1", SELECT_ASSESSMENT),
        [id],
        map_row,
    )?)
}

pub fn update_assessment(
    conn: &Connection,
    id: i64,
    new: &NewAssessment,
) -> AppResult<UpdateOutcome<Assessment>> {
    let rows = conn.execute(
        "UPDATE assessments
         SET completed_at = COALESCE(?1, completed_at), results = ?2, overall_level = ?3,
             recommended = ?4, created_at = COALESCE(?5, created_at)
         WHERE id = ?6",
        params![
            new.completed_at,
            json_text(&new.results)?,
            new.overall_level,
            json_text(&new.recommended)?,
            new.created_at,
            id,
        ],
    )?;
    if rows == 0 {
        return Ok(UpdateOutcome::NotFound);
    }

    let assessment = conn.query_row(
        &format!("{} WHERE id = ?1", SELECT_ASSESSMENT),
        [id],
        map_row,
    )?;
    Ok(UpdateOutcome::Updated(assessment))
}

pub fn delete_assessment(conn: &Connection, id: i64) -> AppResult<DeleteOutcome> {
    let rows = conn.execute("DELETE FROM assessments WHERE id = ?1", [id])?;
    Ok(if rows == 0 {
        DeleteOutcome::NotFound
    } else {
        DeleteOutcome::Deleted
    })
}
