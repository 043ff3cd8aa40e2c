//! Program service: generate, parse, and persist a workout program.

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::store::{ProgramDraft, ProgramStore};
use crate::generate::{GenerationClient, GenerationError};
use crate::plan::{ParsedPlan, parse_plan};

/// Input to [`create_program`].
#[derive(Debug, Clone)]
pub struct ProgramRequest {
    pub user_id: Uuid,
    pub fitness_profile_id: Option<Uuid>,
    pub title: String,
    pub prompt: String,
}

/// Whether a generated plan made it to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Persistence {
    Saved { program_id: Uuid, split_ids: Vec<Uuid> },
    Unsaved { reason: String },
}

/// A generated plan together with its storage result.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramOutcome {
    /// The raw generated text the plan was parsed from.
    pub text: String,
    pub plan: ParsedPlan,
    pub persistence: Persistence,
}

impl ProgramOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self.persistence, Persistence::Saved { .. })
    }
}

/// Generate a program for `request`, parse it, and save it through `store`.
///
/// Only generation failure is an error. A storage failure after a
/// successful generation still returns the plan, marked
/// [`Persistence::Unsaved`], and leaves any previously stored program
/// untouched.
pub async fn create_program(
    generator: &GenerationClient,
    store: &dyn ProgramStore,
    request: &ProgramRequest,
) -> Result<ProgramOutcome, GenerationError> {
    let text = generator.generate(&request.prompt).await?;
    let plan = parse_plan(&text);
    let persistence = persist(store, request, &text, &plan).await;

    match &persistence {
        Persistence::Saved {
            program_id,
            split_ids,
        } => info!(
            program_id = %program_id,
            user_id = %request.user_id,
            days = split_ids.len(),
            "workout program saved"
        ),
        Persistence::Unsaved { reason } => warn!(
            user_id = %request.user_id,
            reason = %reason,
            "workout program generated but not saved"
        ),
    }

    Ok(ProgramOutcome {
        text,
        plan,
        persistence,
    })
}

async fn persist(
    store: &dyn ProgramStore,
    request: &ProgramRequest,
    text: &str,
    plan: &ParsedPlan,
) -> Persistence {
    let draft = ProgramDraft {
        user_id: request.user_id,
        fitness_profile_id: request.fitness_profile_id,
        title: request.title.clone(),
        description: text.to_string(),
    };

    match store.save_program(&draft, plan).await {
        Ok(saved) => Persistence::Saved {
            program_id: saved.program_id,
            split_ids: saved.split_ids,
        },
        Err(e) => Persistence::Unsaved {
            reason: e.to_string(),
        },
    }
}
