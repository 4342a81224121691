//! Configuration loader
//!
//! Loads application configuration from an optional file overlaid with
//! environment variables.
//!
//! ## Loading Strategy
//! 1. Probes for a `skylark.{toml,json}` file; its values form the base
//! 2. Every recognised environment variable that is set overrides the base
//! 3. Without a file the environment alone is used; missing data source
//!    credentials surface later as a descriptive fetch error
//! 4. Timeouts of zero seconds are rejected
//!
//! ## Environment Variables
//! - `MONDAY_API_KEY`: Board data source API key
//! - `DEALS_BOARD_ID`: Numeric id of the deals board
//! - `WORK_ORDERS_BOARD_ID`: Numeric id of the work orders board
//! - `MONDAY_API_URL`: GraphQL endpoint override
//! - `MONDAY_TIMEOUT_SECS`: Data source request timeout
//! - `GROQ_API_KEY`: Primary generation backend key (optional)
//! - `GROQ_MODEL`: Primary backend model override
//! - `GROQ_API_URL`: Primary backend endpoint override
//! - `HF_API_KEY`: Secondary generation backend key (optional)
//! - `HF_MODEL_URL`: Secondary backend endpoint override
//! - `GENERATION_TIMEOUT_SECS`: Per-backend generation timeout
//! - `SKYLARK_BIND_ADDR`: HTTP listen address
//!
//! Empty values are treated as unset.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./skylark.toml` then `./skylark.json` (working directory)
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use skylark_domain::{Config, GroqConfig, HuggingFaceConfig, Result, SkylarkError};

const CONFIG_FILE_NAMES: [&str; 2] = ["skylark.toml", "skylark.json"];

/// Load configuration: probed file first, environment on top
///
/// # Errors
/// Returns `SkylarkError::Config` if a numeric variable cannot be parsed, a
/// timeout is zero, or a probed config file is unreadable or malformed.
pub fn load() -> Result<Config> {
    load_layered(probe_config_paths().as_deref())
}

fn load_layered(file: Option<&Path>) -> Result<Config> {
    let mut config = match file {
        Some(path) => load_from_file(Some(path.to_path_buf()))?,
        None => Config::default(),
    };

    apply_env(&mut config)?;
    validate(&config)?;

    if config.monday.is_configured() {
        tracing::info!(file = file.is_some(), "Configuration loaded");
    } else {
        tracing::warn!("board data source credentials are incomplete; board fetches will fail");
    }

    Ok(config)
}

/// Load configuration from environment variables
///
/// Unset variables keep their defaults. See module documentation for the
/// complete list.
///
/// # Errors
/// Returns `SkylarkError::Config` if a numeric variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env(&mut config)?;
    validate(&config)?;
    Ok(config)
}

/// Overlay every set environment variable onto `config`.
fn apply_env(config: &mut Config) -> Result<()> {
    if let Some(key) = env_opt("MONDAY_API_KEY") {
        config.monday.api_key = Some(key);
    }
    if let Some(id) = env_parse("DEALS_BOARD_ID")? {
        config.monday.deals_board_id = Some(id);
    }
    if let Some(id) = env_parse("WORK_ORDERS_BOARD_ID")? {
        config.monday.work_orders_board_id = Some(id);
    }
    if let Some(url) = env_opt("MONDAY_API_URL") {
        config.monday.api_url = url;
    }
    if let Some(secs) = env_parse("MONDAY_TIMEOUT_SECS")? {
        config.monday.timeout_secs = secs;
    }

    if let Some(key) = env_opt("GROQ_API_KEY") {
        match config.generation.groq.as_mut() {
            Some(groq) => groq.api_key = key,
            None => config.generation.groq = Some(GroqConfig::new(key)),
        }
    }
    if let Some(groq) = config.generation.groq.as_mut() {
        if let Some(model) = env_opt("GROQ_MODEL") {
            groq.model = model;
        }
        if let Some(url) = env_opt("GROQ_API_URL") {
            groq.api_url = url;
        }
    }

    if let Some(key) = env_opt("HF_API_KEY") {
        match config.generation.huggingface.as_mut() {
            Some(hf) => hf.api_key = key,
            None => config.generation.huggingface = Some(HuggingFaceConfig::new(key)),
        }
    }
    if let Some(hf) = config.generation.huggingface.as_mut() {
        if let Some(url) = env_opt("HF_MODEL_URL") {
            hf.model_url = url;
        }
    }

    if let Some(secs) = env_parse("GENERATION_TIMEOUT_SECS")? {
        config.generation.timeout_secs = secs;
    }

    if let Some(addr) = env_opt("SKYLARK_BIND_ADDR") {
        config.server.bind_addr = addr;
    }

    Ok(())
}

/// Reject values that would make every outbound call fail.
fn validate(config: &Config) -> Result<()> {
    if config.monday.timeout_secs == 0 {
        return Err(SkylarkError::Config(
            "MONDAY_TIMEOUT_SECS (monday.timeout_secs) must be at least 1".to_string(),
        ));
    }
    if config.generation.timeout_secs == 0 {
        return Err(SkylarkError::Config(
            "GENERATION_TIMEOUT_SECS (generation.timeout_secs) must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `SkylarkError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid or a timeout is zero
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SkylarkError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SkylarkError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SkylarkError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SkylarkError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SkylarkError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SkylarkError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    find_config_file(&roots)
}

fn find_config_file(roots: &[PathBuf]) -> Option<PathBuf> {
    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Optional environment variable; empty counts as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

/// Optional numeric environment variable
///
/// # Errors
/// Returns `SkylarkError::Config` if the variable is set but not a number.
fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|e| SkylarkError::Config(format!("Invalid value for {key} ({raw}): {e}")))
        })
        .transpose()
}
