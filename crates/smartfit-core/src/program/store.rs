//! Storage seams for programs and fitness profiles.

use async_trait::async_trait;
use smartfit_db::models::QuizData;
use thiserror::Error;
use uuid::Uuid;

use crate::plan::ParsedDay;

/// Failure inside a store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage error: {0:#}")]
    Storage(#[from] anyhow::Error),

    #[error("could not encode exercises: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("day number {0} does not fit the storage column")]
    DayNumberOutOfRange(u32),

    #[error("day {day_number}: {source}")]
    Day {
        day_number: u32,
        source: Box<PersistenceError>,
    },
}

/// Program header saved together with its day splits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramDraft {
    pub user_id: Uuid,
    pub fitness_profile_id: Option<Uuid>,
    pub title: String,
    pub description: String,
}

/// Ids assigned to a saved program and to each of its days, in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedProgram {
    pub program_id: Uuid,
    pub split_ids: Vec<Uuid>,
}

/// Where generated programs are written.
#[async_trait]
pub trait ProgramStore: Send + Sync {
    /// Save the program header and one split per day as a single unit.
    ///
    /// A user keeps one program. Saving again replaces the header and every
    /// split. On error nothing is written and the program stored before
    /// stays as it was. A failing day is reported as
    /// [`PersistenceError::Day`].
    async fn save_program(
        &self,
        program: &ProgramDraft,
        days: &[ParsedDay],
    ) -> Result<SavedProgram, PersistenceError>;
}

/// Where quiz answers are kept.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Return a user's profile id and answers, if any.
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<(Uuid, QuizData)>, PersistenceError>;

    /// Save a user's answers and return the profile id.
    async fn save_profile(&self, user_id: Uuid, quiz: &QuizData) -> Result<Uuid, PersistenceError>;
}
