use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::cutout::{ResolveContext, DEFAULT_SERVICE_URL};
use crate::fetch::{default_user_agent, FetchOptions};

/// Global configuration loaded from `~/.config/legacystamps/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StampsConfig {
    /// Scheme and host of the cutout service.
    #[serde(default = "default_service_url")]
    pub service_url: String,
    /// Seconds allowed for establishing a connection.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole request, body included.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional User-Agent override; defaults to `legacystamps/<version>`.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_timeout_secs() -> u64 {
    300
}

impl Default for StampsConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl StampsConfig {
    /// Transfer settings for the fetch layer.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone().unwrap_or_else(default_user_agent),
        }
    }

    /// Resolver context for this service, relative to the process working
    /// directory.
    pub fn resolve_context(&self) -> io::Result<ResolveContext> {
        Ok(ResolveContext::new(
            self.service_url.clone(),
            std::env::current_dir()?,
        ))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("legacystamps")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<StampsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = StampsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: StampsConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = StampsConfig::default();
        assert_eq!(cfg.service_url, "https://www.legacysurvey.org");
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.timeout_secs, 300);
        assert!(cfg.user_agent.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = StampsConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: StampsConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            service_url = "http://127.0.0.1:8080"
        "#;
        let cfg: StampsConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.service_url, "http://127.0.0.1:8080");
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.timeout_secs, 300);
    }

    #[test]
    fn fetch_options_from_config() {
        let toml = r#"
            connect_timeout_secs = 5
            timeout_secs = 60
            user_agent = "stamps-test/1.0"
        "#;
        let cfg: StampsConfig = toml::from_str(toml).unwrap();
        let opts = cfg.fetch_options();
        assert_eq!(opts.connect_timeout, Duration::from_secs(5));
        assert_eq!(opts.timeout, Duration::from_secs(60));
        assert_eq!(opts.user_agent, "stamps-test/1.0");

        let default_opts = StampsConfig::default().fetch_options();
        assert!(default_opts.user_agent.starts_with("legacystamps/"));
    }

    #[test]
    fn resolve_context_uses_service_and_working_dir() {
        let cfg = StampsConfig {
            service_url: "http://127.0.0.1:8080".to_string(),
            ..StampsConfig::default()
        };
        let ctx = cfg.resolve_context().unwrap();
        assert_eq!(ctx.service_url, "http://127.0.0.1:8080");
        assert_eq!(ctx.working_dir, std::env::current_dir().unwrap());
    }
}
