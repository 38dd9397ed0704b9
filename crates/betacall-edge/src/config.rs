//! Edge configuration types.

use std::time::Duration;

use serde::Deserialize;

use betacall_gate::GateConfig;

/// Configuration for the edge service.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeConfig {
    /// Listen address (e.g., "0.0.0.0:3000").
    #[serde(default = "EdgeConfig::default_listen_addr")]
    pub listen_addr: String,

    /// Allowed CORS origins.
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    #[serde(default = "EdgeConfig::default_max_body")]
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    #[serde(default = "EdgeConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Path prefixes that never reach the gate: the edge's own JSON API,
    /// liveness, and build/asset internals. This is the platform matcher,
    /// not gate policy.
    #[serde(default = "EdgeConfig::default_gate_bypass_prefixes")]
    pub gate_bypass_prefixes: Vec<String>,

    /// The gate's routing table.
    #[serde(default)]
    pub gate: GateConfig,
}

impl EdgeConfig {
    fn default_listen_addr() -> String {
        "0.0.0.0:3000".to_string()
    }

    const fn default_max_body() -> usize {
        1024 * 1024 // 1 MB
    }

    const fn default_request_timeout() -> u64 {
        30
    }

    fn default_gate_bypass_prefixes() -> Vec<String> {
        vec![
            "/api/".to_string(),
            "/health".to_string(),
            "/_static/".to_string(),
            "/favicon.ico".to_string(),
            "/favicon.svg".to_string(),
            "/assets/".to_string(),
            "/icons/".to_string(),
        ]
    }

    /// Whether `path` skips gate evaluation entirely.
    #[must_use]
    pub fn bypasses_gate(&self, path: &str) -> bool {
        self.gate_bypass_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            listen_addr: Self::default_listen_addr(),
            cors_origins: vec!["*".to_string()],
            max_body_bytes: Self::default_max_body(),
            request_timeout_seconds: Self::default_request_timeout(),
            gate_bypass_prefixes: Self::default_gate_bypass_prefixes(),
            gate: GateConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EdgeConfig::default();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.gate.sign_up_path, "/signUp");
    }

    #[test]
    fn bypass_covers_api_and_internals() {
        let config = EdgeConfig::default();
        assert!(config.bypasses_gate("/api/auth/signIn"));
        assert!(config.bypasses_gate("/health"));
        assert!(config.bypasses_gate("/favicon.ico"));
        assert!(config.bypasses_gate("/assets/app.css"));

        assert!(!config.bypasses_gate("/profile"));
        assert!(!config.bypasses_gate("/signUp"));
        assert!(!config.bypasses_gate("/verify/abc"));
    }

    #[test]
    fn timeout_duration() {
        let config = EdgeConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: EdgeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert!(config.bypasses_gate("/api/anything"));
    }
}
