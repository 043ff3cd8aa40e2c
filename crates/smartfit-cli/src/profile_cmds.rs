//! CLI handlers for `smartfit profile` subcommands.
//!
//! Implements:
//! - `smartfit profile set --user <id> --file <quiz.json>` -- save quiz answers
//! - `smartfit profile show --user <id>`                   -- print saved answers

use anyhow::{Context, Result};
use sqlx::PgPool;

use smartfit_db::models::QuizData;
use smartfit_db::queries::profiles as profile_queries;

use crate::{ProfileCommands, parse_user_id};

pub async fn run_profile_command(command: ProfileCommands, pool: &PgPool) -> Result<()> {
    match command {
        ProfileCommands::Set { user, file } => cmd_set(pool, &user, &file).await,
        ProfileCommands::Show { user } => cmd_show(pool, &user).await,
    }
}

async fn cmd_set(pool: &PgPool, user: &str, file_path: &str) -> Result<()> {
    let user_id = parse_user_id(user)?;
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read quiz file: {file_path}"))?;
    let quiz: QuizData = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse quiz file: {file_path}"))?;

    let profile = profile_queries::save_fitness_profile(pool, user_id, &quiz).await?;

    println!("Profile saved.");
    println!("  Profile ID:    {}", profile.id);
    println!("  Fitness level: {}", quiz.fitness_level);
    println!("  Goals:         {}", quiz.fitness_goals);
    Ok(())
}

async fn cmd_show(pool: &PgPool, user: &str) -> Result<()> {
    let user_id = parse_user_id(user)?;
    let profile = profile_queries::get_fitness_profile(pool, user_id)
        .await?
        .with_context(|| format!("no fitness profile for user {user_id}"))?;

    let quiz = &profile.quiz_data.0;
    println!("Profile {}", profile.id);
    println!("  Created:        {}", profile.created_at.format("%Y-%m-%d %H:%M"));
    println!("  Fitness level:  {}", quiz.fitness_level);
    println!("  Goals:          {}", quiz.fitness_goals);
    println!(
        "  Schedule:       {} days/week, {} min",
        quiz.workout_schedule.days_per_week, quiz.workout_schedule.session_length
    );
    println!("  Equipment:      {}", or_dash(&quiz.equipment));
    println!("  Limitations:    {}", or_dash(&quiz.limitations));
    println!("  Preference:     {}", or_dash(&quiz.workout_preference));
    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}
