use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, anyhow, bail};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

const CONFIG_PATH_VAR: &str = "MARQUEE_CONFIG_PATH";
const CONFIG_JSON_VAR: &str = "MARQUEE_CONFIG_JSON";
const API_KEY_VAR: &str = "TMDB_API_KEY";
const ACCESS_TOKEN_VAR: &str = "TMDB_ACCESS_TOKEN";

/// Source that produced the TMDB client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TmdbConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
}

/// Settings for [`crate::provider::TmdbClient`].
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// Root of the v3 API, without a trailing `/movie`.
    pub api_base_url: Url,
    /// v3 API key, sent as the `api_key` query parameter.
    pub api_key: Option<String>,
    /// v4 read access token, sent as a bearer token. Preferred over
    /// `api_key` when both are set.
    pub access_token: Option<String>,
    /// ISO 639-1 language tag forwarded as `language`, e.g. `en-US`.
    pub language: Option<String>,
    /// Whole-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base(),
            api_key: None,
            access_token: None,
            language: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

// Secrets stay out of logs.
impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_base_url", &self.api_base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("language", &self.language)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}

fn default_api_base() -> Url {
    Url::parse(DEFAULT_TMDB_API_BASE).expect("default TMDB base URL is valid")
}

impl TmdbConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$MARQUEE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$MARQUEE_CONFIG_JSON` (inline JSON),
    /// 3) defaults if neither is set.
    ///
    /// `$TMDB_API_KEY` and `$TMDB_ACCESS_TOKEN` then override credentials.
    pub fn load_from_env() -> anyhow::Result<(Self, TmdbConfigSource)> {
        Self::load_with(|name| env::var(name).ok())
    }

    /// [`Self::load_from_env`] against an arbitrary variable lookup.
    pub fn load_with(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<(Self, TmdbConfigSource)> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let (mut config, source) = if let Some(path) = var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path);
            (Self::load_from_file(&path)?, TmdbConfigSource::EnvPath(path))
        } else if let Some(raw) = var(CONFIG_JSON_VAR) {
            let parsed = serde_json::from_str(&raw)
                .context("failed to parse MARQUEE_CONFIG_JSON")?;
            (parsed, TmdbConfigSource::EnvInline)
        } else {
            (Self::default(), TmdbConfigSource::Default)
        };

        if let Some(key) = var(API_KEY_VAR) {
            config.api_key = Some(key);
        }
        if let Some(token) = var(ACCESS_TOKEN_VAR) {
            config.access_token = Some(token);
        }

        config.validate()?;
        Ok((config, source))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read TMDB config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents).with_context(|| {
                format!("invalid TMDB config {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid TMDB config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse TMDB config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !matches!(self.api_base_url.scheme(), "http" | "https") {
            bail!(
                "api_base_url must be http(s), got {}",
                self.api_base_url
            );
        }
        if self.api_base_url.cannot_be_a_base() {
            bail!("api_base_url {} cannot carry a path", self.api_base_url);
        }
        if self.request_timeout_ms == 0 {
            bail!("request_timeout_ms must be greater than zero");
        }
        Ok(())
    }
}
