pub mod defaults;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};
use crate::locale::Locale;

/// Renderer configuration, loaded from `labmark.toml` or built from defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output language for tag headings and labels: `en`, `zh`, or `zh-TW`.
    #[serde(default = "defaults::language")]
    pub language: String,
    #[serde(default)]
    pub markdown: MarkdownOptions,
    #[serde(default)]
    pub tags: TagOptions,
}

/// Toggles for the base Markdown render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownOptions {
    #[serde(default = "defaults::bool_true")]
    pub tables: bool,
    #[serde(default = "defaults::bool_true")]
    pub footnotes: bool,
    #[serde(default = "defaults::bool_true")]
    pub strikethrough: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
        }
    }
}

/// Options for the custom-tag renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagOptions {
    /// Chip color cycle for research areas without an explicit color.
    /// Each entry must be `#` followed by exactly six hex digits.
    #[serde(default = "defaults::palette")]
    pub palette: Vec<String>,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            palette: defaults::palette(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            language: defaults::language(),
            markdown: MarkdownOptions::default(),
            tags: TagOptions::default(),
        }
    }
}

impl RenderConfig {
    /// Load and validate config from a `labmark.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RenderError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        let config: RenderConfig =
            toml::from_str(&contents).map_err(|e| RenderError::ConfigInvalid {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check language and palette entries. Called by [`RenderConfig::load`];
    /// callers constructing a config by hand should call it themselves.
    pub fn validate(&self) -> Result<()> {
        if Locale::parse(&self.language).is_none() {
            return Err(RenderError::ConfigInvalid {
                message: format!(
                    "unsupported language `{}`. Supported: en, zh, zh-TW",
                    self.language
                ),
            });
        }
        if self.tags.palette.is_empty() {
            return Err(RenderError::ConfigInvalid {
                message: "tags.palette must not be empty".to_string(),
            });
        }
        for color in &self.tags.palette {
            if !is_hash_hex_color(color) {
                return Err(RenderError::ConfigInvalid {
                    message: format!(
                        "invalid palette color `{color}`. Expected `#` followed by six hex digits"
                    ),
                });
            }
        }
        Ok(())
    }

    /// The configured output language. Valid after [`RenderConfig::validate`].
    pub fn locale(&self) -> Locale {
        Locale::parse(&self.language).unwrap_or_default()
    }
}

/// True for `#RRGGBB` with exactly six hex digits.
fn is_hash_hex_color(s: &str) -> bool {
    s.strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}
