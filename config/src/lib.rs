//! Tessera Configuration
//!
//! Shared configuration crate for the Tessera command-line tools.
//!
//! Handles loading configuration from:
//! 1. TESSERA_CONFIG env var (explicit path)
//! 2. ./tessera.toml (current directory)
//! 3. ~/.tessera/config.toml (user home)
//!
//! Environment variables take precedence over TOML config.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};

const LOCAL_CONFIG_FILE: &str = "tessera.toml";
const CONFIG_FILE_NAME: &str = "config.toml";
const CONFIG_DIR_NAME: &str = ".tessera";

// ============================================================================
// Default Constants
// ============================================================================

const DEFAULT_ORDER: u64 = 251;
const DEFAULT_THRESHOLD: usize = 4;
const DEFAULT_SHARES: usize = 5;

// ============================================================================
// Config Structs
// ============================================================================

/// Root configuration structure (matches TOML layout)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TesseraConfig {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub scheme: SchemeConfig,
}

/// Finite field selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Field order, a prime or a prime power
    #[serde(default = "default_order")]
    pub order: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
        }
    }
}

fn default_order() -> u64 {
    DEFAULT_ORDER
}

/// Threshold parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeConfig {
    /// K: shares needed to reveal
    #[serde(default = "default_threshold")]
    pub threshold: usize,
    /// N: shares produced
    #[serde(default = "default_shares")]
    pub shares: usize,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            shares: DEFAULT_SHARES,
        }
    }
}

fn default_threshold() -> usize {
    DEFAULT_THRESHOLD
}
fn default_shares() -> usize {
    DEFAULT_SHARES
}

// ============================================================================
// Environment Variable Helpers
// ============================================================================

/// Set field from a variable if present and parseable
fn var_parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    field: &mut T,
) {
    match lookup(key).map(|v| v.parse()) {
        Some(Ok(parsed)) => *field = parsed,
        Some(Err(_)) => log::warn!("Ignoring unparseable {key}"),
        None => {}
    }
}

// ============================================================================
// Implementation
// ============================================================================

impl TesseraConfig {
    /// Load configuration from config file with env var overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_file() {
            Some(path) => {
                log::info!("Loading config from: {}", path.display());
                Self::read(&path)?
            }
            None => {
                log::info!("No config file found, using defaults and environment variables");
                Self::default()
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file path
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::read(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Find the config file path
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check TESSERA_CONFIG env var
        if let Ok(path) = env::var("TESSERA_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
            log::warn!("TESSERA_CONFIG points to missing file: {}", path.display());
        }

        // 2. Check ./tessera.toml (current directory)
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            return Some(local_path);
        }

        // 3. Check ~/.tessera/config.toml
        Self::default_config_path().filter(|p| p.exists())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        var_parse(&lookup, "TESSERA_ORDER", &mut self.field.order);
        var_parse(&lookup, "TESSERA_THRESHOLD", &mut self.scheme.threshold);
        var_parse(&lookup, "TESSERA_SHARES", &mut self.scheme.shares);
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Generate a sample config file
    pub fn generate_sample() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
