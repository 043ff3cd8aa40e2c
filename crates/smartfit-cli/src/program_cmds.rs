//! CLI handler for `smartfit program show --user <id>`.

use anyhow::{Context, Result};
use sqlx::PgPool;

use smartfit_core::plan::{ParsedDay, ParsedExercise};
use smartfit_db::models::WorkoutSplit;
use smartfit_db::queries::{programs as program_queries, splits as split_queries};

use crate::{ProgramCommands, parse_user_id, render};

pub async fn run_program_command(command: ProgramCommands, pool: &PgPool) -> Result<()> {
    match command {
        ProgramCommands::Show { user } => cmd_show(pool, &user).await,
    }
}

async fn cmd_show(pool: &PgPool, user: &str) -> Result<()> {
    let user_id = parse_user_id(user)?;
    let program = program_queries::get_workout_program_for_user(pool, user_id)
        .await?
        .with_context(|| format!("no workout program for user {user_id}"))?;
    let splits = split_queries::list_splits_for_program(pool, program.id).await?;

    println!("{}", program.title);
    println!("  Program ID: {}", program.id);
    println!("  Created:    {}", program.created_at.format("%Y-%m-%d %H:%M"));
    println!("  Days:       {}", splits.len());
    println!();

    let days = splits
        .into_iter()
        .map(split_to_day)
        .collect::<Result<Vec<_>>>()?;
    render::print_days(&days);
    Ok(())
}

/// Rebuild the parsed form of a stored split for display.
fn split_to_day(split: WorkoutSplit) -> Result<ParsedDay> {
    let exercises: Vec<ParsedExercise> = serde_json::from_value(split.exercises)
        .with_context(|| format!("split {} has malformed exercises", split.id))?;
    let day_number = u32::try_from(split.day_number)
        .with_context(|| format!("split {} has invalid day number", split.id))?;

    Ok(ParsedDay {
        day_number,
        name: split.name,
        exercises,
        warm_up: split.warm_up,
        cool_down: split.cool_down,
        notes: split.notes,
    })
}
