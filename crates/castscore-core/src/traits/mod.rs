// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams the aggregator is assembled from.

pub mod clock;
pub mod hub;

pub use clock::{Clock, SystemClock};
pub use hub::HubApi;
