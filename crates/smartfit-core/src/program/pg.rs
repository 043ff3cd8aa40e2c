//! PostgreSQL-backed stores over the `smartfit-db` query layer.

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::debug;
use uuid::Uuid;

use smartfit_db::models::QuizData;
use smartfit_db::queries::profiles as profile_queries;
use smartfit_db::queries::programs::{self as program_queries, NewWorkoutProgram};
use smartfit_db::queries::splits::{self as split_queries, NewWorkoutSplit};

use super::store::{PersistenceError, ProfileStore, ProgramDraft, ProgramStore, SavedProgram};
use crate::plan::ParsedDay;

/// Program and profile store on a shared connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgramStore for PgStore {
    /// Upserts the program row, replaces its splits and commits once. Any
    /// failure drops the transaction, which rolls every write back.
    async fn save_program(
        &self,
        program: &ProgramDraft,
        days: &[ParsedDay],
    ) -> Result<SavedProgram, PersistenceError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("failed to begin transaction")?;

        let saved = program_queries::save_workout_program(
            &mut *tx,
            &NewWorkoutProgram {
                user_id: program.user_id,
                fitness_profile_id: program.fitness_profile_id,
                title: &program.title,
                description: &program.description,
            },
        )
        .await?;

        let stale = split_queries::delete_splits_for_program(&mut *tx, saved.id).await?;

        let mut split_ids = Vec::with_capacity(days.len());
        for day in days {
            let id = insert_split(&mut tx, saved.id, day)
                .await
                .map_err(|source| PersistenceError::Day {
                    day_number: day.day_number,
                    source: Box::new(source),
                })?;
            split_ids.push(id);
        }

        tx.commit()
            .await
            .with_context(|| format!("failed to commit program {}", saved.id))?;

        if stale > 0 {
            debug!(program_id = %saved.id, stale, "replaced previous splits");
        }
        Ok(SavedProgram {
            program_id: saved.id,
            split_ids,
        })
    }
}

async fn insert_split(
    conn: &mut PgConnection,
    program_id: Uuid,
    day: &ParsedDay,
) -> Result<Uuid, PersistenceError> {
    let day_number = i32::try_from(day.day_number)
        .map_err(|_| PersistenceError::DayNumberOutOfRange(day.day_number))?;
    let exercises = serde_json::to_value(&day.exercises)?;

    let split = split_queries::save_workout_split(
        &mut *conn,
        &NewWorkoutSplit {
            program_id,
            name: &day.name,
            day_number,
            exercises: &exercises,
            warm_up: day.warm_up.as_deref(),
            cool_down: day.cool_down.as_deref(),
            notes: day.notes.as_deref(),
        },
    )
    .await?;
    Ok(split.id)
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<(Uuid, QuizData)>, PersistenceError> {
        let profile = profile_queries::get_fitness_profile(&self.pool, user_id).await?;
        Ok(profile.map(|p| (p.id, p.quiz_data.0)))
    }

    async fn save_profile(&self, user_id: Uuid, quiz: &QuizData) -> Result<Uuid, PersistenceError> {
        let profile = profile_queries::save_fitness_profile(&self.pool, user_id, quiz).await?;
        Ok(profile.id)
    }
}
