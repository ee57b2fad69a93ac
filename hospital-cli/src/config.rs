//! Configuration file and setting resolution
//!
//! Every setting resolves in the same order: command-line flag, then
//! environment (clap reads it, `.env` included), then `hospital.toml`,
//! then the built-in default.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hospital_server::{DatabaseConfig, ServerConfig};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "hospital.toml";

static VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("invalid variable regex"));

/// Contents of `hospital.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSection {
    /// Connection string; `${VAR}` references are expanded from the environment
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

impl FileConfig {
    /// Load the config file.
    ///
    /// An explicit path must exist. Without one, `./hospital.toml` is read
    /// if present and an empty config is used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(content).context("Failed to parse config file (invalid TOML)")?;

        let vars: HashMap<String, String> = env::vars().collect();
        if let Some(url) = config.database.url.as_mut() {
            *url = expand_vars(url, &vars);
        }

        Ok(config)
    }

    /// Database settings, CLI/env value first.
    pub fn resolve_database(
        &self,
        url: Option<String>,
        max_connections: Option<u32>,
    ) -> Result<DatabaseConfig> {
        let url = url
            .or_else(|| self.database.url.clone())
            .filter(|u| !u.trim().is_empty())
            .context(
                "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, \
                 or [database] url in hospital.toml",
            )?;

        let mut config = DatabaseConfig::new(url);
        if let Some(max) = max_connections.or(self.database.max_connections) {
            config.max_connections = max;
        }
        Ok(config)
    }

    /// Server settings, CLI/env value first.
    pub fn resolve_server(&self, bind: Option<SocketAddr>, cors_permissive: bool) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: bind.or(self.server.bind).unwrap_or(defaults.bind_addr),
            cors_permissive: cors_permissive || self.server.cors_permissive.unwrap_or(false),
        }
    }
}

/// Replace `${VAR}` with its value from `vars`; unknown names become empty.
fn expand_vars(input: &str, vars: &HashMap<String, String>) -> String {
    VAR_RE
        .replace_all(input, |caps: &regex::Captures<'_>| {
            vars.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}
