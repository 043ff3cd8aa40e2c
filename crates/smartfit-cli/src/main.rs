mod config;
mod generate_cmd;
mod parse_cmd;
mod profile_cmds;
mod program_cmds;
mod render;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use uuid::Uuid;

use smartfit_db::pool;

use config::SmartfitConfig;

#[derive(Parser)]
#[command(name = "smartfit", about = "Generate, parse and store workout programs")]
struct Cli {
    /// Database URL (overrides SMARTFIT_DATABASE_URL env var)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a smartfit config file (no database required)
    Init {
        /// PostgreSQL connection URL
        #[arg(long, default_value = "postgresql://localhost:5432/smartfit")]
        db_url: String,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Initialize the smartfit database (requires config file or env vars)
    DbInit,
    /// Parse saved generation output into workout days
    Parse {
        /// Path to the plan text
        file: String,
        /// Print the parsed plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a program, parse it, and save it for a user
    Generate {
        /// User ID the program belongs to
        #[arg(long)]
        user: String,
        /// File holding the prompt sent to the generation service
        #[arg(long)]
        prompt_file: String,
        /// Program title
        #[arg(long, default_value = "Personalized Workout Program")]
        title: String,
        /// Print the parsed plan without saving it
        #[arg(long)]
        dry_run: bool,
    },
    /// Fitness profile management
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Workout program inspection
    Program {
        #[command(subcommand)]
        command: ProgramCommands,
    },
    /// Print a shell completion script
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Save quiz answers from a JSON file
    Set {
        /// User ID
        #[arg(long)]
        user: String,
        /// Path to the quiz JSON
        #[arg(long)]
        file: String,
    },
    /// Show a user's saved quiz answers
    Show {
        /// User ID
        #[arg(long)]
        user: String,
    },
}

#[derive(Subcommand)]
pub enum ProgramCommands {
    /// Show a user's program and its days
    Show {
        /// User ID
        #[arg(long)]
        user: String,
    },
}

pub fn parse_user_id(raw: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(raw).with_context(|| format!("invalid user ID: {raw}"))
}

/// Execute the `smartfit init` command: write config file.
fn cmd_init(db_url: &str, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        database: config::DatabaseSection {
            url: db_url.to_string(),
        },
        generation: config::GenerationSection::default(),
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  database.url = {db_url}");
    println!("  generation.model = {}", cfg.generation.model);
    println!("  generation.backoff_ms = {}", cfg.generation.backoff_ms);
    println!();
    println!("Set {} before running `smartfit generate`.", config::API_KEY_ENV_VAR);
    println!("Next: run `smartfit db-init` to create and migrate the database.");

    Ok(())
}

/// Execute the `smartfit db-init` command: create database and run migrations.
async fn cmd_db_init(cli_db_url: Option<&str>) -> anyhow::Result<()> {
    let resolved = SmartfitConfig::resolve(cli_db_url)?;

    println!("Initializing smartfit database...");

    let db_pool = pool::prepare_database(&resolved.db_config).await?;

    let counts = pool::table_counts(&db_pool).await?;
    println!("Database ready. Tables:");
    for (table, count) in counts.rows() {
        println!("  {table}: {count} rows");
    }

    db_pool.close().await;

    println!("smartfit db-init complete.");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db_url, force } => {
            cmd_init(&db_url, force)?;
        }
        Commands::DbInit => {
            cmd_db_init(cli.database_url.as_deref()).await?;
        }
        Commands::Parse { file, json } => {
            parse_cmd::run_parse(&file, json)?;
        }
        Commands::Generate {
            user,
            prompt_file,
            title,
            dry_run,
        } => {
            let resolved = SmartfitConfig::resolve(cli.database_url.as_deref())?;
            let args = generate_cmd::GenerateArgs {
                user_id: parse_user_id(&user)?,
                prompt_file,
                title,
                dry_run,
            };
            generate_cmd::run_generate(&resolved, args).await?;
        }
        Commands::Profile { command } => {
            let resolved = SmartfitConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = profile_cmds::run_profile_command(command, &db_pool).await;
            db_pool.close().await;
            result?;
        }
        Commands::Program { command } => {
            let resolved = SmartfitConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = program_cmds::run_program_command(command, &db_pool).await;
            db_pool.close().await;
            result?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "smartfit", &mut std::io::stdout());
        }
    }

    Ok(())
}
