use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Quiz answers
// ---------------------------------------------------------------------------

/// Self-reported fitness level from the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

impl FromStr for FitnessLevel {
    type Err = FitnessLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(FitnessLevelParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`FitnessLevel`] string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid fitness level: {0:?}")]
pub struct FitnessLevelParseError(pub String);

/// Training frequency and session length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSchedule {
    pub days_per_week: String,
    pub session_length: String,
}

/// Height, weight, age, and gender, kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyStats {
    pub height: String,
    pub weight: String,
    pub age: String,
    pub gender: String,
}

/// Answers to the fitness quiz, stored as JSONB.
///
/// The field names match the JSON the quiz form submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizData {
    pub fitness_level: FitnessLevel,
    pub fitness_goals: String,
    pub workout_schedule: WorkoutSchedule,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub limitations: String,
    #[serde(default)]
    pub workout_preference: String,
    #[serde(default)]
    pub body_stats: BodyStats,
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// A user's saved quiz answers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FitnessProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub quiz_data: Json<QuizData>,
    pub created_at: DateTime<Utc>,
}

/// A user's current workout program. Each user has at most one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutProgram {
    pub id: Uuid,
    pub user_id: Uuid,
    pub fitness_profile_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// One day of a workout program.
///
/// `exercises` holds the JSON array of exercise records produced by the
/// plan parser; this crate does not interpret it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkoutSplit {
    pub id: Uuid,
    pub program_id: Uuid,
    pub name: String,
    pub day_number: i32,
    pub exercises: serde_json::Value,
    pub warm_up: Option<String>,
    pub cool_down: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
