//! Structured records produced by the plan parser.
//!
//! Field names serialize in camelCase, the shape the `workout_splits.exercises`
//! column and the CLI's `--json` output use.

use serde::{Deserialize, Serialize};

/// One exercise within a workout day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedExercise {
    /// Exercise name as written in the header line. Never empty.
    pub name: String,
    /// Follow-up lines joined with single spaces. Empty when none.
    pub description: String,
    /// Number of sets, at least 1.
    pub sets: u32,
    /// Repetitions per set, at least 1. Ranges keep the lower bound.
    pub reps: u32,
}

/// One day of a parsed workout plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDay {
    /// Day number from the header, or 1 for the synthetic full-body day.
    pub day_number: u32,
    /// Title from the header line.
    pub name: String,
    /// Exercises in the order they appear.
    pub exercises: Vec<ParsedExercise>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warm_up: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cool_down: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A full plan: days in order of appearance in the source text.
///
/// Day numbers are kept as written. Nothing is renumbered, sorted or merged.
pub type ParsedPlan = Vec<ParsedDay>;
