use crate::cli::{SourceArgs, TargetSyntax, WriteMode, DEFAULT_CONFIG_FILE};
use crate::domain::constants::{DEFAULT_INPUT, DEFAULT_NAME, DEFAULT_OUTPUT};
use crate::domain::models::{ConfigFile, ConfigInitReport, Settings};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("config unreadable: {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config invalid: {}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("config exists: {} (use --force to replace it)", .0.display())]
    Exists(PathBuf),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "CONFIG_NOT_FOUND",
            ConfigError::Unreadable { .. } | ConfigError::Invalid { .. } => "CONFIG_INVALID",
            ConfigError::Exists(_) => "CONFIG_EXISTS",
        }
    }
}

pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Loads the config file. The default location is optional; a path given
/// explicitly must exist.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    let path = config_path(explicit);
    if !path.exists() {
        if explicit.is_some() {
            return Err(ConfigError::NotFound(path));
        }
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::Unreadable {
        path: path.clone(),
        source: e,
    })?;
    let cfg = toml::from_str(&raw).map_err(|e| ConfigError::Invalid {
        path: path.clone(),
        source: e,
    })?;
    log::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Flag values the user passed on the command line. `None` falls through
/// to the config file, then to the built-in default.
#[derive(Debug, Default)]
pub struct Overrides<'a> {
    pub input: Option<&'a Path>,
    pub output: Option<&'a Path>,
    pub name: Option<&'a str>,
    pub syntax: Option<TargetSyntax>,
    pub mode: Option<WriteMode>,
}

impl<'a> Overrides<'a> {
    pub fn from_source(source: &'a SourceArgs) -> Self {
        Self {
            input: source.input.as_deref(),
            name: source.name.as_deref(),
            syntax: source.syntax,
            ..Self::default()
        }
    }
}

pub fn resolve_settings(cfg: &ConfigFile, flags: &Overrides<'_>) -> Settings {
    Settings {
        input: flags
            .input
            .map(Path::to_path_buf)
            .or_else(|| cfg.input.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
        output: flags
            .output
            .map(Path::to_path_buf)
            .or_else(|| cfg.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        name: flags
            .name
            .map(str::to_string)
            .or_else(|| cfg.name.clone())
            .unwrap_or_else(|| DEFAULT_NAME.to_string()),
        syntax: flags.syntax.or(cfg.syntax).unwrap_or_default(),
        mode: flags.mode.or(cfg.mode).unwrap_or_default(),
    }
}

fn default_config() -> ConfigFile {
    ConfigFile {
        input: Some(PathBuf::from(DEFAULT_INPUT)),
        output: Some(PathBuf::from(DEFAULT_OUTPUT)),
        name: Some(DEFAULT_NAME.to_string()),
        syntax: Some(TargetSyntax::default()),
        mode: Some(WriteMode::default()),
    }
}

pub fn init_config(explicit: Option<&Path>, force: bool) -> anyhow::Result<ConfigInitReport> {
    let path = config_path(explicit);
    let existed = path.exists();
    if existed && !force {
        return Err(ConfigError::Exists(path).into());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, toml::to_string_pretty(&default_config())?)?;
    log::info!("wrote config to {}", path.display());
    Ok(ConfigInitReport {
        path,
        overwritten: existed,
    })
}
