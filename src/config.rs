//! Centralized, environment-overridable configuration.
//!
//! No module other than this one reads `std::env` directly; everything
//! else takes a `&Config` (or a value cloned out of one).

use std::path::PathBuf;
use std::time::Duration;

/// Default master port used when a peer address carries none.
pub const DEFAULT_PORT: &str = "1207";

const ENV_PID_DIR: &str = "SWAPPER_PID_DIR";
const ENV_YAML_DIR: &str = "SWAPPER_YAML_DIR";
const ENV_DEFAULT_PORT: &str = "SWAPPER_DEFAULT_PORT";
const ENV_REFRESH_INTERVAL_MS: &str = "SWAPPER_REFRESH_INTERVAL_MS";
const ENV_PING_INTERVAL_MS: &str = "SWAPPER_PING_INTERVAL_MS";
const ENV_RECONCILE_INTERVAL_MS: &str = "SWAPPER_RECONCILE_INTERVAL_MS";

/// Process-wide configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `swapper-master-<port>.pid` / `swapper-node.pid`.
    pub pid_dir: PathBuf,
    /// Directory holding `<name>.yml_<port>` document files.
    pub yaml_dir: PathBuf,
    /// Default master port, used when a peer address carries none.
    pub default_port: String,
    /// Master refresh-loop tick interval.
    pub refresh_interval: Duration,
    /// Master ping-loop tick interval.
    pub ping_interval: Duration,
    /// Node reconciliation-loop tick interval.
    pub reconcile_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pid_dir: PathBuf::from("/tmp/swapper-pid"),
            yaml_dir: PathBuf::from("/tmp/swapper-yaml"),
            default_port: DEFAULT_PORT.to_string(),
            refresh_interval: Duration::from_secs(5),
            ping_interval: Duration::from_secs(30),
            reconcile_interval: Duration::from_secs(3),
        }
    }
}

impl Config {
    /// Build configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            pid_dir: std::env::var(ENV_PID_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.pid_dir),
            yaml_dir: std::env::var(ENV_YAML_DIR)
                .map(PathBuf::from)
                .unwrap_or(defaults.yaml_dir),
            default_port: std::env::var(ENV_DEFAULT_PORT).unwrap_or(defaults.default_port),
            refresh_interval: env_millis(ENV_REFRESH_INTERVAL_MS, defaults.refresh_interval),
            ping_interval: env_millis(ENV_PING_INTERVAL_MS, defaults.ping_interval),
            reconcile_interval: env_millis(ENV_RECONCILE_INTERVAL_MS, defaults.reconcile_interval),
        }
    }

    /// Ensure the PID and document directories exist (`mkdir -p` semantics).
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.pid_dir)?;
        std::fs::create_dir_all(&self.yaml_dir)?;
        Ok(())
    }
}

fn env_millis(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.default_port, "1207");
        assert_eq!(config.refresh_interval, Duration::from_secs(5));
        assert_eq!(config.ping_interval, Duration::from_secs(30));
        assert_eq!(config.reconcile_interval, Duration::from_secs(3));
    }
}
