//! `smartfit generate`: generate a program with Gemini, parse it, and save it.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::info;
use uuid::Uuid;

use smartfit_core::generate::{GeminiGenerator, GenerationClient};
use smartfit_core::plan::parse_plan;
use smartfit_core::program::{
    PgStore, Persistence, ProfileStore, ProgramRequest, create_program,
};
use smartfit_db::pool;

use crate::config::SmartfitConfig;
use crate::render;

pub struct GenerateArgs {
    pub user_id: Uuid,
    pub prompt_file: String,
    pub title: String,
    pub dry_run: bool,
}

pub async fn run_generate(config: &SmartfitConfig, args: GenerateArgs) -> Result<()> {
    let prompt = std::fs::read_to_string(&args.prompt_file)
        .with_context(|| format!("failed to read prompt file: {}", args.prompt_file))?;
    if prompt.trim().is_empty() {
        bail!("prompt file {} is empty", args.prompt_file);
    }

    let generator = GeminiGenerator::new(config.gemini()?)?;
    let client = GenerationClient::new(Arc::new(generator), config.retry);
    info!(
        user_id = %args.user_id,
        model = %config.model,
        dry_run = args.dry_run,
        "generating workout program"
    );

    if args.dry_run {
        let text = client.generate(&prompt).await?;
        let plan = parse_plan(&text);
        render::print_days(&plan);
        println!();
        println!("Dry run: {} day(s) parsed, nothing saved.", plan.len());
        return Ok(());
    }

    let db_pool = pool::create_pool(&config.db_config).await?;
    let store = PgStore::new(db_pool.clone());
    let result = generate_and_save(&client, &store, &args, prompt).await;
    db_pool.close().await;
    result
}

async fn generate_and_save(
    client: &GenerationClient,
    store: &PgStore,
    args: &GenerateArgs,
    prompt: String,
) -> Result<()> {
    let fitness_profile_id = store
        .get_profile(args.user_id)
        .await?
        .map(|(id, _)| id);

    let request = ProgramRequest {
        user_id: args.user_id,
        fitness_profile_id,
        title: args.title.clone(),
        prompt,
    };
    let outcome = create_program(client, store, &request).await?;

    render::print_days(&outcome.plan);
    println!();

    match outcome.persistence {
        Persistence::Saved {
            program_id,
            split_ids,
        } => {
            println!("Program saved.");
            println!("  Program ID: {program_id}");
            println!("  Days:       {}", split_ids.len());
            Ok(())
        }
        Persistence::Unsaved { reason } => {
            bail!("program generated but not saved: {reason}")
        }
    }
}
