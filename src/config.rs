// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.moneysage", "Moneysage", "moneysage"));

pub const DATA_FILE: &str = "financial_data.json";
pub const CONFIG_FILE: &str = "config.json";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Directory holding the ledger and the credential document.
#[derive(Debug, Clone)]
pub struct AppPaths {
    dir: PathBuf,
}

impl AppPaths {
    /// Uses `dir` when given, otherwise the platform data directory.
    pub fn resolve(dir: Option<&Path>) -> Result<Self> {
        let dir = match dir {
            Some(d) => d.to_path_buf(),
            None => ProjectDirs::from(APP.0, APP.1, APP.2)
                .context("Could not determine platform-specific data dir")?
                .data_dir()
                .to_path_buf(),
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.dir.join(DATA_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }
}

/// Advisor credential document, kept apart from the ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gemini_api_key: String,
    /// Pins the advisor to one model instead of probing the candidate list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Config {
    /// Missing or corrupt files give an empty credential.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let parsed = fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|raw| serde_json::from_str(&raw).map_err(anyhow::Error::from));
        match parsed {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let body = serde_json::to_string_pretty(self)?;
        fs::write(path, body).with_context(|| format!("Write config at {}", path.display()))?;
        Ok(())
    }

    /// Stored key, or `GEMINI_API_KEY` when none is stored.
    pub fn api_key(&self) -> String {
        if !self.gemini_api_key.trim().is_empty() {
            return self.gemini_api_key.trim().to_string();
        }
        env_key().unwrap_or_default()
    }

    /// The key [`Config::api_key`] would use, masked, noting when it comes
    /// from the environment.
    pub fn masked_key(&self) -> String {
        let stored = self.gemini_api_key.trim();
        if !stored.is_empty() {
            return mask_key(stored);
        }
        match env_key() {
            Some(key) => format!("{} (from {})", mask_key(&key), API_KEY_ENV),
            None => mask_key(""),
        }
    }
}

fn env_key() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

/// First 8 characters followed by `...`; short keys are fully hidden.
pub fn mask_key(key: &str) -> String {
    let key = key.trim();
    match key.chars().count() {
        0 => "not configured".to_string(),
        n if n > 8 => format!("{}...", key.chars().take(8).collect::<String>()),
        _ => "********".to_string(),
    }
}
