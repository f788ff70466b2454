//! Referential validation for exercise references.
//!
//! Workouts, templates and workout logs all carry exercise lists whose
//! entries point at catalog rows. A write is accepted only when every
//! reference resolves; a stale reference rejects the whole payload.

use rusqlite::{Connection, ToSql};
use std::collections::HashSet;

use crate::errors::{AppError, AppResult};
use crate::models::exercise_entry::ExerciseEntry;

/// Distinct exercise references in first-seen order. Entries without an id
/// (or with a zero id) are not references and are skipped, not validated.
pub fn collect_exercise_ids(entries: &[ExerciseEntry]) -> Vec<i64> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for entry in entries {
        if let Some(id) = entry.exercise_id
            && id != 0
            && seen.insert(id)
        {
            out.push(id);
        }
    }
    out
}

/// Confirm every candidate id resolves to an exercise row.
///
/// One batched lookup instead of a round-trip per exercise; the set
/// difference between requested and found ids becomes the error, naming
/// every missing id. Partial acceptance is never allowed.
pub fn ensure_exercises_exist(conn: &Connection, ids: &[i64]) -> AppResult<()> {
    if ids.is_empty() {
        return Ok(());
    }

    let placeholders = vec!["?"; ids.len()].join(",");
    let sql = format!("SELECT id FROM exercises WHERE id IN ({})", placeholders);
    let params_vec: Vec<&dyn ToSql> = ids.iter().map(|i| i as &dyn ToSql).collect();

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(params_vec), |row| {
        row.get::<_, i64>(0)
    })?;

    let mut found: HashSet<i64> = HashSet::new();
    for r in rows {
        found.insert(r?);
    }

    let mut missing: Vec<i64> = ids.iter().copied().filter(|id| !found.contains(id)).collect();
    if missing.is_empty() {
        return Ok(());
    }

    missing.sort_unstable();
    let joined = missing
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(AppError::UnknownExercises(joined))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collect_skips_empty_and_duplicate_ids() {
        let entries: Vec<ExerciseEntry> = serde_json::from_value(json!([
            {"exerciseId": 3, "sets": 5},
            {"exerciseId": 0},
            {"restSeconds": 90},
            {"exerciseId": 3},
            {"exerciseId": 7}
        ]))
        .unwrap();

        assert_eq!(collect_exercise_ids(&entries), vec![3, 7]);
    }

    #[test]
    fn collect_keeps_first_seen_order() {
        let entries = vec![
            ExerciseEntry::reference(9),
            ExerciseEntry::reference(2),
            ExerciseEntry::reference(9),
        ];
        assert_eq!(collect_exercise_ids(&entries), vec![9, 2]);
    }
}
