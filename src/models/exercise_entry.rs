use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One item of an exercise list: a workout/template slot or a log's
/// per-exercise record. Only the exercise reference is interpreted here;
/// every other client field (sets, reps, weights, per-set notes) rides
/// along unchanged through store and retrieve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    #[serde(
        rename = "exerciseId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub exercise_id: Option<i64>,

    #[serde(flatten)]
    pub detail: Map<String, Value>,
}

impl ExerciseEntry {
    /// A bare reference to an exercise, with no per-set detail.
    pub fn reference(exercise_id: i64) -> Self {
        Self {
            exercise_id: Some(exercise_id),
            detail: Map::new(),
        }
    }
}
