//! Layered configuration loading.
//!
//! Evaluation order:
//! 1) `.env` in the search root (never overrides real environment values),
//! 2) `$FOLIO_CONFIG_PATH` (TOML or JSON file),
//! 3) `$FOLIO_CONFIG_JSON` (inline JSON),
//! 4) the first existing default file candidate,
//! 5) compiled defaults.
//!
//! `$FOLIO_API_URL` and `$FOLIO_API_TIMEOUT` are applied on top of whichever
//! source won, and the result is validated before it is returned.

use std::{
    collections::HashMap,
    fmt, fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};
use url::Url;

use crate::{constants, error::ConfigLoadError, models::Config};

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Loaded configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub source: ConfigSource,
    pub env_file_loaded: bool,
}

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

pub struct ConfigLoader {
    search_root: PathBuf,
    env_file: Option<PathBuf>,
    lookup: EnvLookup,
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("search_root", &self.search_root)
            .field("env_file", &self.env_file)
            .finish_non_exhaustive()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader reading the process environment, rooted at the working directory.
    pub fn new() -> Self {
        Self {
            search_root: PathBuf::from("."),
            env_file: Some(PathBuf::from(".env")),
            lookup: Box::new(|key| std::env::var(key).ok()),
        }
    }

    /// Replace the environment lookup. Tests use this to avoid touching the
    /// process environment.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.lookup = Box::new(lookup);
        self
    }

    /// Directory that relative default candidates and `.env` resolve against.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    /// Explicit `.env` path (relative paths resolve against the search root).
    /// `None` disables `.env` loading.
    pub fn with_env_file(mut self, path: Option<PathBuf>) -> Self {
        self.env_file = path;
        self
    }

    pub fn load(self) -> Result<ConfigLoad, ConfigLoadError> {
        let dotenv = self.read_env_file()?;
        let env_file_loaded = dotenv.is_some();
        let dotenv = dotenv.unwrap_or_default();
        let var = |key: &str| -> Option<String> {
            (self.lookup)(key)
                .or_else(|| dotenv.get(key).cloned())
                .filter(|value| !value.trim().is_empty())
        };

        let (mut config, source) =
            if let Some(path) = var(constants::CONFIG_PATH_VAR) {
                let path = self.resolve(Path::new(path.trim()));
                (load_file(&path)?, ConfigSource::EnvPath(path))
            } else if let Some(raw) = var(constants::CONFIG_JSON_VAR) {
                (
                    parse_json(&raw, constants::CONFIG_JSON_VAR)?,
                    ConfigSource::EnvInline,
                )
            } else if let Some(path) = self.find_default_file() {
                (load_file(&path)?, ConfigSource::File(path))
            } else {
                (Config::default(), ConfigSource::Default)
            };

        if let Some(raw) = var(constants::API_URL_VAR) {
            config.api.base_url = Url::parse(raw.trim()).map_err(|err| {
                ConfigLoadError::InvalidEnv {
                    var: constants::API_URL_VAR,
                    message: err.to_string(),
                }
            })?;
        }
        if let Some(raw) = var(constants::API_TIMEOUT_VAR) {
            config.api.timeout = humantime::parse_duration(raw.trim())
                .map_err(|err| ConfigLoadError::InvalidEnv {
                    var: constants::API_TIMEOUT_VAR,
                    message: err.to_string(),
                })?;
        }

        config.validate()?;
        info!(
            source = ?source,
            api = %config.api.base_url,
            env_file_loaded,
            "configuration loaded"
        );

        Ok(ConfigLoad {
            config,
            source,
            env_file_loaded,
        })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.search_root.join(path)
        }
    }

    fn read_env_file(
        &self,
    ) -> Result<Option<HashMap<String, String>>, ConfigLoadError> {
        let Some(env_file) = self.env_file.as_deref() else {
            return Ok(None);
        };
        let path = self.resolve(env_file);
        if !path.exists() {
            return Ok(None);
        }

        let iter = dotenvy::from_path_iter(&path).map_err(|source| {
            ConfigLoadError::EnvFile {
                path: path.clone(),
                source,
            }
        })?;
        let mut values = HashMap::new();
        for entry in iter {
            let (key, value) =
                entry.map_err(|source| ConfigLoadError::EnvFile {
                    path: path.clone(),
                    source,
                })?;
            values.insert(key, value);
        }
        debug!(path = %path.display(), count = values.len(), "read env file");
        Ok(Some(values))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        constants::DEFAULT_CONFIG_CANDIDATES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.exists())
    }
}

pub fn load_file(path: &Path) -> Result<Config, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &origin),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                origin,
                message: err.to_string(),
            })
        }
        _ => parse_from_str(&contents, &origin),
    }
}

/// Try TOML first, then JSON.
pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<Config, ConfigLoadError> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Parse {
                origin: origin.to_string(),
                message: format!(
                    "toml error: {toml_err}; json error: {json_err}"
                ),
            }
        })
    })
}

pub fn parse_json(raw: &str, origin: &str) -> Result<Config, ConfigLoadError> {
    serde_json::from_str(raw).map_err(|err| ConfigLoadError::Parse {
        origin: origin.to_string(),
        message: err.to_string(),
    })
}
