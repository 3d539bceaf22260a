use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub facts: FactsConfig,
    #[serde(default)]
    pub timer: TimerConfig,
}

/// Settings for the live fact-lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactsConfig {
    /// Base URL of the numbers-facts service; the number is appended as a path segment.
    #[serde(default = "default_facts_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Settings for the recurring counter timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Interval between ticks in milliseconds (default: 1000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_facts_base_url() -> String {
    "http://numbersapi.com".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_interval_ms() -> u64 {
    1000
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            base_url: default_facts_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl TimerConfig {
    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.interval_ms)
    }
}
