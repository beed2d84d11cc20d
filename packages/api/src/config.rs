//! Service configuration from environment variables.

use std::time::Duration;

use access::DEFAULT_SUPER_ADMIN_ROLE;

use crate::error::ConfigError;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the identity service and the REST backend live, and how to talk to them.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub identity_url: String,
    pub backend_url: String,
    pub super_admin_role: String,
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Load from the process environment (after reading `.env`).
    #[cfg(feature = "server")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    ///
    /// `IDENTITY_SERVICE_URL` is required. `BACKEND_API_URL` defaults to the identity
    /// URL, `SUPER_ADMIN_ROLE` to [`DEFAULT_SUPER_ADMIN_ROLE`] and
    /// `SERVICE_TIMEOUT_SECS` to 10.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let identity_url = lookup("IDENTITY_SERVICE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("IDENTITY_SERVICE_URL"))?;
        let identity_url = base_url("IDENTITY_SERVICE_URL", &identity_url)?;

        let backend_url = match lookup("BACKEND_API_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => base_url("BACKEND_API_URL", &url)?,
            None => identity_url.clone(),
        };

        let super_admin_role = lookup("SUPER_ADMIN_ROLE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SUPER_ADMIN_ROLE.to_string());

        let timeout_secs = match lookup("SERVICE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidNumber {
                    var: "SERVICE_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            identity_url,
            backend_url,
            super_admin_role,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn identity_endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.identity_url, path.trim_start_matches('/'))
    }

    pub fn backend_endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}

fn base_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl {
            var,
            value: raw.to_string(),
        });
    }
    Ok(url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ServiceConfig::from_lookup(lookup(&[("IDENTITY_SERVICE_URL", "https://id.example.com/")]))
                .unwrap();

        assert_eq!(config.identity_url, "https://id.example.com");
        assert_eq!(config.backend_url, "https://id.example.com");
        assert_eq!(config.super_admin_role, "Super Admin");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("IDENTITY_SERVICE_URL", "http://localhost:4000"),
            ("BACKEND_API_URL", "http://localhost:5000/api/"),
            ("SUPER_ADMIN_ROLE", "Owner"),
            ("SERVICE_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.backend_endpoint("/branches"), "http://localhost:5000/api/branches");
        assert_eq!(config.identity_endpoint("auth/me"), "http://localhost:4000/auth/me");
        assert_eq!(config.super_admin_role, "Owner");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_missing_identity_url() {
        assert_eq!(
            ServiceConfig::from_lookup(lookup(&[])),
            Err(ConfigError::Missing("IDENTITY_SERVICE_URL"))
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ServiceConfig::from_lookup(lookup(&[("IDENTITY_SERVICE_URL", "id.example.com")])),
            Err(ConfigError::InvalidUrl { var: "IDENTITY_SERVICE_URL", .. })
        ));
        assert!(matches!(
            ServiceConfig::from_lookup(lookup(&[
                ("IDENTITY_SERVICE_URL", "https://id.example.com"),
                ("SERVICE_TIMEOUT_SECS", "0"),
            ])),
            Err(ConfigError::InvalidNumber { .. })
        ));
    }
}
