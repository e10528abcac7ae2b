// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `castscore score <fid>` command implementation.

use std::process::ExitCode;

use castscore_config::model::CastscoreConfig;
use castscore_core::{CastscoreError, Fid};

use crate::serve::{build_service, init_tracing};

/// Exit code for a rejected identity.
const EXIT_INVALID_FID: u8 = 2;

/// Scores one identity against the configured Hub and prints the payload.
pub async fn run_score(config: CastscoreConfig, raw_fid: &str) -> ExitCode {
    init_tracing(&config.log.level);

    let fid = match Fid::parse(Some(raw_fid)) {
        Ok(fid) => fid,
        Err(e) => {
            eprintln!("castscore: {e}");
            return ExitCode::from(EXIT_INVALID_FID);
        }
    };

    match score_once(&config, fid).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("castscore: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn score_once(config: &CastscoreConfig, fid: Fid) -> Result<String, CastscoreError> {
    let service = build_service(config)?;
    let payload = service.get_score(fid).await?;
    serde_json::to_string_pretty(payload.as_ref())
        .map_err(|e| CastscoreError::Internal(format!("failed to serialize payload: {e}")))
}
