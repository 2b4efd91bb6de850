//! Startup configuration, read from the environment.

use std::path::PathBuf;

use anyhow::{bail, Context};
use hub_logging::{LogDestination, DEFAULT_LOG_FILE};
use research_engine::{BackendSettings, ScriptSettings};

const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];
const MODEL_VAR: &str = "RESEARCH_HUB_MODEL";
const BASE_URL_VAR: &str = "RESEARCH_HUB_BASE_URL";
const LANGUAGE_VAR: &str = "RESEARCH_HUB_LANGUAGE";
const LOG_VAR: &str = "RESEARCH_HUB_LOG";
const LOG_FILE_VAR: &str = "RESEARCH_HUB_LOG_FILE";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendSettings,
    pub script: ScriptSettings,
    pub log_destination: LogDestination,
    pub log_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let Some(api_key) = API_KEY_VARS.iter().find_map(|key| get(*key)) else {
            bail!(
                "no API key configured: set {} (or {})",
                API_KEY_VARS[0],
                API_KEY_VARS[1]
            );
        };

        let mut backend = BackendSettings {
            api_key,
            ..BackendSettings::default()
        };
        if let Some(model) = get(MODEL_VAR) {
            backend.model = model;
        }
        if let Some(base_url) = get(BASE_URL_VAR) {
            backend.base_url = base_url;
        }

        let mut script = ScriptSettings::default();
        if let Some(language) = get(LANGUAGE_VAR) {
            script.language = language;
        }

        let log_destination = match get(LOG_VAR) {
            Some(raw) => LogDestination::parse(&raw)
                .with_context(|| format!("{LOG_VAR}={raw:?}: expected file, terminal or both"))?,
            None => LogDestination::default(),
        };
        let log_path = get(LOG_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self {
            backend,
            script,
            log_destination,
            log_path,
        })
    }
}
