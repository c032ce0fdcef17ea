// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use namekeys::build::{run_check, run_filter, run_index};
use namekeys::{generate_keywords_with, Config};

mod cli;
use cli::{display, Cli, Commands};

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Commands::Keywords {
            text,
            options,
            json,
        } => {
            let options = options.apply(config.keywords);
            debug!(?options, "generating keywords");
            let keywords = generate_keywords_with(&text, &options);

            if json {
                let encoded =
                    serde_json::to_string(&keywords).context("failed to encode keywords")?;
                println!("{}", encoded);
            } else if let Some(keywords) = &keywords {
                display::print_keywords(keywords);
            }
        }

        Commands::Index {
            input,
            output,
            options,
        } => {
            let options = options.apply(config.keywords);
            let report = run_index(&input, &output, &options)
                .with_context(|| format!("failed to index {}", input.display()))?;
            display::print_index_report(&report);
        }

        Commands::Check { input, options } => {
            let options = options.apply(config.keywords);
            let report = run_check(&input, &options)
                .with_context(|| format!("failed to check {}", input.display()))?;
            display::print_check_report(&report);
            if !report.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Filter {
            input,
            user,
            status,
            json,
        } => {
            let requests = run_filter(&input, user.as_deref(), status.into(), config.filter.case)
                .with_context(|| format!("failed to filter {}", input.display()))?;
            if json {
                let encoded = serde_json::to_string_pretty(&requests)
                    .context("failed to encode requests")?;
                println!("{}", encoded);
            } else {
                display::print_requests(&requests);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
