// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./castscore.toml` > `~/.config/castscore/castscore.toml`
//! > `/etc/castscore/castscore.toml`, with environment variable overrides via
//! the `CASTSCORE_` prefix and the legacy `HUB_HTTP_URL` variable.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::CastscoreConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/castscore/castscore.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "castscore.toml";

/// Path of the per-user config file, if a config dir exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("castscore/castscore.toml"))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/castscore/castscore.toml`
/// 3. `~/.config/castscore/castscore.toml`
/// 4. `./castscore.toml`
/// 5. `CASTSCORE_*` environment variables
/// 6. `HUB_HTTP_URL`
pub fn load_config() -> Result<CastscoreConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<CastscoreConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CastscoreConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CastscoreConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CastscoreConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .merge(legacy_hub_env())
        .extract()
}

/// Build the Figment used for the standard hierarchy.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(CastscoreConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
        .merge(legacy_hub_env())
}

/// `CASTSCORE_*` variables, mapped section-first.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `CASTSCORE_HUB_PAGE_SIZE` must land on `hub.page_size`, not
/// `hub.page.size`.
fn env_provider() -> Env {
    Env::prefixed("CASTSCORE_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("server_", "server.", 1)
            .replacen("hub_", "hub.", 1)
            .replacen("log_", "log.", 1)
            .replacen("metrics_", "metrics.", 1);
        mapped.into()
    })
}

/// `HUB_HTTP_URL`, as read by earlier deployments.
fn legacy_hub_env() -> Env {
    Env::raw()
        .only(&["HUB_HTTP_URL"])
        .map(|_| "hub.base_url".into())
}
