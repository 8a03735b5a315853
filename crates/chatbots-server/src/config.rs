//! Server configuration
//!
//! Read from shuttle secrets (or any key lookup) at startup.

const DEFAULT_DATABASE: &str = "app";
const DEFAULT_PROMPT_TYPE_COUNT: i32 = 3;

/// Runtime settings for the chatbot service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Document store connection string; `None` keeps records in memory
    pub mongodb_uri: Option<String>,
    pub mongodb_database: String,
    /// Number of prompt types offered by the selector
    pub prompt_type_count: i32,
    /// Cache the rendered admin listing between writes
    pub page_cache_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            mongodb_uri: None,
            mongodb_database: DEFAULT_DATABASE.to_string(),
            prompt_type_count: DEFAULT_PROMPT_TYPE_COUNT,
            page_cache_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Build from a key lookup such as `SecretStore::get`
    pub fn from_lookup<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let prompt_type_count = match get("PROMPT_TYPE_COUNT") {
            Some(raw) => match raw.trim().parse::<i32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    tracing::warn!("⚠️  Invalid PROMPT_TYPE_COUNT {:?}, using default", raw);
                    defaults.prompt_type_count
                }
            },
            None => defaults.prompt_type_count,
        };

        let page_cache_enabled = get("ADMIN_PAGE_CACHE")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "off" | "no"))
            .unwrap_or(defaults.page_cache_enabled);

        Self {
            mongodb_uri: get("MONGODB_URI").filter(|uri| !uri.trim().is_empty()),
            mongodb_database: get("MONGODB_DATABASE")
                .filter(|db| !db.trim().is_empty())
                .unwrap_or(defaults.mongodb_database),
            prompt_type_count,
            page_cache_enabled,
        }
    }
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
    fn test_defaults_when_empty() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert!(config.mongodb_uri.is_none());
    }

    #[test]
    fn test_reads_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("MONGODB_DATABASE", "admin_app"),
            ("PROMPT_TYPE_COUNT", "5"),
            ("ADMIN_PAGE_CACHE", "off"),
        ]));
        assert_eq!(config.mongodb_uri.as_deref(), Some("mongodb://localhost:27017"));
        assert_eq!(config.mongodb_database, "admin_app");
        assert_eq!(config.prompt_type_count, 5);
        assert!(!config.page_cache_enabled);
    }

    #[test]
    fn test_invalid_prompt_type_count_falls_back() {
        let config = ServerConfig::from_lookup(lookup(&[("PROMPT_TYPE_COUNT", "zero")]));
        assert_eq!(config.prompt_type_count, 3);
        let config = ServerConfig::from_lookup(lookup(&[("PROMPT_TYPE_COUNT", "-1")]));
        assert_eq!(config.prompt_type_count, 3);
    }
}
