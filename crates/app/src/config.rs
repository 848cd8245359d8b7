//! Runtime configuration read from the environment.

use probe_infrastructure::DEFAULT_USER_AGENT;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PROBE_LOG";
/// Environment variable overriding the User-Agent.
pub const USER_AGENT_ENV: &str = "PROBE_USER_AGENT";
/// Environment variable forcing plain (non-redrawing) output.
pub const PLAIN_ENV: &str = "PROBE_PLAIN";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for one invocation of the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing` filter directive.
    pub log_filter: String,
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Disable live redrawing.
    pub plain: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            plain: false,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// `PROBE_LOG` takes precedence over `RUST_LOG`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            log_filter: non_empty(LOG_ENV)
                .or_else(|| non_empty("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
            user_agent: non_empty(USER_AGENT_ENV).unwrap_or(defaults.user_agent),
            plain: non_empty(PLAIN_ENV).is_some_and(|v| is_truthy(&v)),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(AppConfig::default().log_filter, "warn");
    }

    #[test]
    fn test_probe_log_wins_over_rust_log() {
        let cfg = config(&[("RUST_LOG", "info"), (LOG_ENV, "debug")]);
        assert_eq!(cfg.log_filter, "debug");

        let cfg = config(&[("RUST_LOG", "info")]);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn test_user_agent_and_plain() {
        let cfg = config(&[(USER_AGENT_ENV, "ci-bot/2"), (PLAIN_ENV, "TRUE")]);
        assert_eq!(cfg.user_agent, "ci-bot/2");
        assert!(cfg.plain);

        assert!(!config(&[(PLAIN_ENV, "0")]).plain);
        assert_eq!(config(&[(USER_AGENT_ENV, " ")]).user_agent, DEFAULT_USER_AGENT);
    }
}
