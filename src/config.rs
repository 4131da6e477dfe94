use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the movie catalog CSV file
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of recommendations returned when the request omits a limit
    #[serde(default = "default_recommendation_limit")]
    pub default_recommendation_limit: usize,

    /// Upper bound accepted for a requested limit
    #[serde(default = "default_max_recommendation_limit")]
    pub max_recommendation_limit: usize,

    /// Fixed seed for the shuffle RNG; OS entropy when unset
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_catalog_path() -> String {
    "imdb_top_1000.csv".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_recommendation_limit() -> usize {
    5
}

fn default_max_recommendation_limit() -> usize {
    25
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the recommendation limits are usable together
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_recommendation_limit == 0 {
            anyhow::bail!("DEFAULT_RECOMMENDATION_LIMIT must be at least 1");
        }
        if self.default_recommendation_limit > self.max_recommendation_limit {
            anyhow::bail!(
                "DEFAULT_RECOMMENDATION_LIMIT ({}) exceeds MAX_RECOMMENDATION_LIMIT ({})",
                self.default_recommendation_limit,
                self.max_recommendation_limit
            );
        }
        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        envy::from_iter(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.catalog_path, "imdb_top_1000.csv");
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.default_recommendation_limit, 5);
        assert_eq!(config.max_recommendation_limit, 25);
        assert_eq!(config.rng_seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CATALOG_PATH", "/data/movies.csv"),
            ("PORT", "8080"),
            ("RNG_SEED", "42"),
        ]);
        assert_eq!(config.catalog_path, "/data/movies.csv");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rng_seed, Some(42));
    }

    #[test]
    fn test_validate_rejects_zero_default_limit() {
        let config = config_from(&[("DEFAULT_RECOMMENDATION_LIMIT", "0")]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_default_above_max() {
        let config = config_from(&[
            ("DEFAULT_RECOMMENDATION_LIMIT", "10"),
            ("MAX_RECOMMENDATION_LIMIT", "3"),
        ]);
        assert!(config.validate().is_err());
    }
}
