use distil_wiki_engine::{
    RenderOptions,
    render::{DEFAULT_BIB_URL_PREFIX, DEFAULT_WIKI_URL_PREFIX},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Host configuration: where the library lives and how notes are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root of the Distil library (holds `wiki/` and `bibs/`).
    pub library_path: PathBuf,
    #[serde(default = "default_wiki_url_prefix")]
    pub wiki_url_prefix: String,
    #[serde(default = "default_bib_url_prefix")]
    pub bib_url_prefix: String,
    #[serde(default)]
    pub heading_offset: u8,
    #[serde(default)]
    pub typography: bool,
}

fn default_wiki_url_prefix() -> String {
    DEFAULT_WIKI_URL_PREFIX.to_string()
}

fn default_bib_url_prefix() -> String {
    DEFAULT_BIB_URL_PREFIX.to_string()
}

impl Config {
    /// A config for `library_path` with every other setting at its default.
    pub fn new(library_path: impl Into<PathBuf>) -> Self {
        Self {
            library_path: library_path.into(),
            wiki_url_prefix: default_wiki_url_prefix(),
            bib_url_prefix: default_bib_url_prefix(),
            heading_offset: 0,
            typography: false,
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the library path
        config.library_path =
            Self::expand_path(&config.library_path).unwrap_or(config.library_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/distil-wiki");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            heading_offset: self.heading_offset,
            typography: self.typography,
            wiki_url_prefix: self.wiki_url_prefix.clone(),
            bib_url_prefix: self.bib_url_prefix.clone(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        shellexpand::full(&path_str)
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}
