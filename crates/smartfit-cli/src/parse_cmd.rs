//! `smartfit parse <file>`: parse saved generation output without a database.

use anyhow::{Context, Result};

use smartfit_core::plan::parse_plan;

use crate::render;

pub fn run_parse(file_path: &str, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read plan text: {file_path}"))?;

    let plan = parse_plan(&content);

    if json {
        let out = serde_json::to_string_pretty(&plan).context("failed to serialize plan")?;
        println!("{out}");
    } else {
        render::print_days(&plan);
    }
    Ok(())
}
