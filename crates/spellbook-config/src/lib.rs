use serde::{Deserialize, Serialize};
use spellbook_engine::{ParseOptions, Pipeline, Site};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Project-local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "spellbook.toml";

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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the markdown sources.
    pub markdown_path: PathBuf,
    /// Django app that receives templates, `urls.py` and `views.py`.
    pub content_app: String,
    /// Where the content app lives; defaults to a sibling of `markdown_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_app_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_template: Option<String>,
    #[serde(default)]
    pub parser: ParseOptions,
}

impl Config {
    pub fn new(markdown_path: impl Into<PathBuf>, content_app: impl Into<String>) -> Self {
        Self {
            markdown_path: markdown_path.into(),
            content_app: content_app.into(),
            content_app_path: None,
            base_template: None,
            parser: ParseOptions::default(),
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

        // Expand shell variables and tilde in the loaded paths
        config.markdown_path =
            Self::expand_path(&config.markdown_path).unwrap_or(config.markdown_path);
        config.content_app_path = config
            .content_app_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    /// `./spellbook.toml` if present, else the user config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        if let Some(config) = Self::load_from_path(LOCAL_CONFIG_FILE)? {
            return Ok(Some(config));
        }
        Self::load_from_path(Self::config_path())
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
        self.save_to_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/spellbook");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The content app directory, explicit or next to the markdown directory.
    pub fn content_app_dir(&self) -> PathBuf {
        match &self.content_app_path {
            Some(path) => path.clone(),
            None => self
                .markdown_path
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(&self.content_app),
        }
    }

    pub fn site(&self) -> Site {
        Site {
            source_dir: self.markdown_path.clone(),
            content_app: self.content_app.clone(),
            content_app_dir: self.content_app_dir(),
            base_template: self.base_template.clone(),
        }
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.parser.clone())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
