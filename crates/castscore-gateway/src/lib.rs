// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for castscore.
//!
//! Serves `GET /score?fid=<n>` plus the operational `/health` and
//! `/metrics` endpoints on top of a shared [`castscore_service::ScoreService`].

pub mod handlers;
pub mod server;

pub use server::{build_router, start_server, GatewayState, HealthState};
