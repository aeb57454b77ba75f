// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use facetrank::{RankComponent, RankParams, RankRequest, RankStrategy};
use std::fs;
use std::io::Read;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Rank {
            input,
            strategy,
            pretty,
        } => run_rank(input.as_deref(), strategy.as_deref(), pretty),
        Commands::Strategies { json } => run_strategies(json),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays valid JSON. `-v` beats `RUST_LOG`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    // Only fails if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_rank(input: Option<&str>, strategy: Option<&str>, pretty: bool) -> Result<()> {
    let payload = match input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };

    let request: RankRequest =
        serde_json::from_str(&payload).context("Failed to parse rank request JSON")?;

    let mut params = RankParams::from_params(&request.params);
    if let Some(key) = strategy {
        // Unlike the request parameter, an unknown flag value is an error.
        params = params.with_strategy(RankStrategy::by_key(key)?);
    }

    let docs = RankComponent::new()
        .process_with(&request, &params)
        .with_context(|| format!("Failed to rank {} documents", request.docs.len()))?;

    let out = if pretty {
        serde_json::to_string_pretty(&docs)?
    } else {
        serde_json::to_string(&docs)?
    };
    println!("{}", out);
    Ok(())
}

fn run_strategies(json: bool) -> Result<()> {
    if !json {
        display::print_strategies();
        return Ok(());
    }

    let listing: Vec<serde_json::Value> = RankStrategy::ALL
        .iter()
        .map(|strategy| {
            serde_json::json!({
                "key": strategy.key(),
                "description": strategy.description(),
                "facetBased": strategy.is_facet_based(),
                "default": *strategy == RankStrategy::default(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
