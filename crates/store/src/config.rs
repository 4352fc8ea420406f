//! Record store connection settings.

/// Connection settings for the hosted record store, resolved once at
/// process start.
///
/// | Env Var            | Description                                  |
/// |--------------------|----------------------------------------------|
/// | `RECORD_STORE_URL` | Base URL, e.g. `https://xyz.example.co`      |
/// | `RECORD_STORE_KEY` | API access key sent with every request       |
///
/// Both settings are required; [`StoreConfig::from_env`] returns `None`
/// when either is missing or blank, which the user interface surfaces as
/// its connectivity indicator.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the hosted store (no trailing slash expected).
    pub url: String,
    /// Access key sent as `apikey` and bearer token.
    pub key: String,
}

impl StoreConfig {
    /// Load the configuration from environment variables.
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var("RECORD_STORE_URL").ok(),
            std::env::var("RECORD_STORE_KEY").ok(),
        )
    }

    /// Build a configuration from already-resolved values.
    ///
    /// Returns `None` when either value is absent or blank after trimming.
    pub fn from_vars(url: Option<String>, key: Option<String>) -> Option<Self> {
        let url = url.map(|v| v.trim().trim_end_matches('/').to_string())?;
        let key = key.map(|v| v.trim().to_string())?;
        if url.is_empty() || key.is_empty() {
            return None;
        }
        Some(Self { url, key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_values_present_yields_config() {
        let config = StoreConfig::from_vars(
            Some("https://store.example.co".into()),
            Some("anon-key".into()),
        )
        .unwrap();
        assert_eq!(config.url, "https://store.example.co");
        assert_eq!(config.key, "anon-key");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = StoreConfig::from_vars(
            Some("https://store.example.co/".into()),
            Some("anon-key".into()),
        )
        .unwrap();
        assert_eq!(config.url, "https://store.example.co");
    }

    #[test]
    fn missing_url_yields_none() {
        assert!(StoreConfig::from_vars(None, Some("anon-key".into())).is_none());
    }

    #[test]
    fn missing_key_yields_none() {
        assert!(StoreConfig::from_vars(Some("https://x".into()), None).is_none());
    }

    #[test]
    fn blank_values_yield_none() {
        assert!(StoreConfig::from_vars(Some("   ".into()), Some("anon-key".into())).is_none());
        assert!(StoreConfig::from_vars(Some("https://x".into()), Some("".into())).is_none());
    }
}
