//! Run configuration: defaults, optional JSON file, environment overrides.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{SparkError, SparkResult};

pub const ENV_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_API_KEY_INTEGRATION: &str = "AI_INTEGRATIONS_ANTHROPIC_API_KEY";
pub const ENV_BASE_URL: &str = "ANTHROPIC_BASE_URL";
pub const ENV_BASE_URL_INTEGRATION: &str = "AI_INTEGRATIONS_ANTHROPIC_BASE_URL";
pub const ENV_OUTPUT_DIR: &str = "ONESPARK_OUTPUT_DIR";
pub const ENV_FONT_DIR: &str = "ONESPARK_FONT_DIR";

/// Card layout and persistence flavour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 1080x1350 card, static concepts, `spark_<slug>.png`, no sidecar.
    Classic,
    /// 1080x1920 card, generated concepts, timestamped PNG plus JSON sidecar.
    #[default]
    Pro,
}

impl Variant {
    pub fn default_source(self) -> ConceptSource {
        match self {
            Variant::Classic => ConceptSource::Static,
            Variant::Pro => ConceptSource::Generative,
        }
    }

    pub fn writes_sidecar(self) -> bool {
        matches!(self, Variant::Pro)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Variant::Classic => "classic",
            Variant::Pro => "pro",
        })
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" | "simple" => Ok(Variant::Classic),
            "pro" => Ok(Variant::Pro),
            other => Err(format!("unknown variant '{other}' (expected classic|pro)")),
        }
    }
}

/// Where the product concept comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConceptSource {
    /// Pre-written concept table keyed by pain point.
    Static,
    /// External text-generation API.
    Generative,
    /// Local recombination of the static table.
    Remix,
}

impl std::fmt::Display for ConceptSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ConceptSource::Static => "static",
            ConceptSource::Generative => "generative",
            ConceptSource::Remix => "remix",
        })
    }
}

impl std::str::FromStr for ConceptSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(ConceptSource::Static),
            "generative" | "ai" => Ok(ConceptSource::Generative),
            "remix" => Ok(ConceptSource::Remix),
            other => Err(format!(
                "unknown concept source '{other}' (expected static|generative|remix)"
            )),
        }
    }
}

/// Settings for the text-generation API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// `None` keeps the HTTP client's default timeout.
    pub timeout_secs: Option<u64>,
    /// Only ever read from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1024,
            timeout_secs: None,
            api_key: None,
        }
    }
}

/// Where to look for the card fonts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Directories searched, in order, for the named faces.
    pub dirs: Vec<PathBuf>,
    pub bold_file: String,
    pub regular_file: String,
    /// Query the system font database when the named faces are missing.
    pub system_fallback: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            dirs: vec![PathBuf::from("/usr/share/fonts/truetype/dejavu")],
            bold_file: "DejaVuSans-Bold.ttf".to_string(),
            regular_file: "DejaVuSans.ttf".to_string(),
            system_fallback: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkConfig {
    pub variant: Variant,
    /// Defaults to `~/sparks`.
    pub output_dir: Option<PathBuf>,
    /// Defaults to the variant's own source.
    pub source: Option<ConceptSource>,
    /// Custom catalog file replacing the built-in tables.
    pub catalog_path: Option<PathBuf>,
    pub api: ApiConfig,
    pub fonts: FontConfig,
}

impl SparkConfig {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn from_path(path: &Path) -> SparkResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        serde_json::from_str(&s)
            .map_err(|e| SparkError::serde(format!("config '{}': {e}", path.display())))
    }

    /// Apply overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Empty values count as unset.
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(ENV_API_KEY_INTEGRATION).or_else(|| get(ENV_API_KEY)) {
            self.api.api_key = Some(key);
        }
        if let Some(url) = get(ENV_BASE_URL_INTEGRATION).or_else(|| get(ENV_BASE_URL)) {
            self.api.base_url = url;
        }
        if let Some(dir) = get(ENV_OUTPUT_DIR) {
            self.output_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = get(ENV_FONT_DIR) {
            self.fonts.dirs.insert(0, PathBuf::from(dir));
        }
        self
    }

    pub fn concept_source(&self) -> ConceptSource {
        self.source.unwrap_or_else(|| self.variant.default_source())
    }

    pub fn resolved_output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }
        dirs::home_dir()
            .map(|home| home.join("sparks"))
            .unwrap_or_else(|| PathBuf::from("sparks"))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
