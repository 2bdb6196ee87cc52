// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./agropilot.toml` > `~/.config/agropilot/agropilot.toml`
//! > `/etc/agropilot/agropilot.toml` with environment variable overrides via
//! the `AGROPILOT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::AgropilotConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/agropilot/agropilot.toml` (system-wide)
/// 3. `~/.config/agropilot/agropilot.toml` (user XDG config)
/// 4. `./agropilot.toml` (local directory)
/// 5. `AGROPILOT_*` environment variables
pub fn load_config() -> Result<AgropilotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AgropilotConfig::default()))
        .merge(Toml::file("/etc/agropilot/agropilot.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("agropilot/agropilot.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("agropilot.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<AgropilotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AgropilotConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AgropilotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AgropilotConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `AGROPILOT_GROQ_API_KEY` must map to
/// `groq.api_key`, not `groq.api.key`.
fn env_provider() -> Env {
    Env::prefixed("AGROPILOT_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: AGROPILOT_GROQ_API_KEY -> "groq_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("groq_", "groq.", 1)
            .replacen("weather_", "weather.", 1)
            .replacen("geocoding_", "geocoding.", 1)
            .replacen("vision_", "vision.", 1)
            .replacen("knowledge_", "knowledge.", 1);
        mapped.into()
    })
}
