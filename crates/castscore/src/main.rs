// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! castscore - a Farcaster activity score service.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod score;
mod serve;
mod shutdown;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// castscore - a Farcaster activity score service.
#[derive(Parser, Debug)]
#[command(name = "castscore", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server.
    Serve,
    /// Score one fid against the configured Hub and print the result.
    Score {
        /// The Farcaster identity to score.
        #[arg(allow_hyphen_values = true)]
        fid: String,
    },
    /// Print the resolved configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match castscore_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            castscore_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Some(Commands::Serve) => match serve::run_serve(config).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("castscore: {e}");
                ExitCode::FAILURE
            }
        },
        Some(Commands::Score { fid }) => score::run_score(config, &fid).await,
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => {
                print!("{rendered}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("castscore: failed to render config: {e}");
                ExitCode::FAILURE
            }
        },
        None => {
            println!("castscore: use --help for available commands");
            ExitCode::SUCCESS
        }
    }
}
