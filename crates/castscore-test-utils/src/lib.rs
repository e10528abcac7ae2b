// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for castscore.
//!
//! - [`MockHub`]: programmable, call-counting [`HubApi`](castscore_core::HubApi)
//! - [`ManualClock`]: a clock that only moves when told to
//! - [`fixtures`]: Hub-shaped JSON builders

pub mod fixtures;
pub mod mock_clock;
pub mod mock_hub;

pub use mock_clock::ManualClock;
pub use mock_hub::MockHub;
