//! CLI configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use tourney_draw::draw::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_TABLES, DEFAULT_ROUNDS_PER_BLOCK, DEFAULT_SWAP_PASSES,
    DEFAULT_TABLE_SIZE, DrawConfig,
};

/// Values given on the command line, taking priority over the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub max_tables: Option<usize>,
    pub rounds_per_block: Option<u32>,
    pub max_attempts: Option<u32>,
    pub swap_passes: Option<u32>,
    pub seed: Option<u64>,
}

/// Complete CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Draw engine configuration
    pub draw: DrawConfig,
    /// Seed for reproducible draws, `None` for a fresh random draw
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        let draw = DrawConfig {
            max_tables: match overrides.max_tables {
                Some(value) => value,
                None => parse_env_strict("DRAW_MAX_TABLES", DEFAULT_MAX_TABLES)?,
            },
            table_size: parse_env_strict("DRAW_TABLE_SIZE", DEFAULT_TABLE_SIZE)?,
            rounds_per_block: match overrides.rounds_per_block {
                Some(value) => value,
                None => parse_env_strict("DRAW_ROUNDS_PER_BLOCK", DEFAULT_ROUNDS_PER_BLOCK)?,
            },
            max_attempts: match overrides.max_attempts {
                Some(value) => value,
                None => parse_env_strict("DRAW_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?,
            },
            swap_passes: match overrides.swap_passes {
                Some(value) => value,
                None => parse_env_strict("DRAW_SWAP_PASSES", DEFAULT_SWAP_PASSES)?,
            },
        };

        let seed = match overrides.seed {
            Some(seed) => Some(seed),
            None => match std::env::var("DRAW_SEED") {
                Ok(raw) => Some(raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: "DRAW_SEED".to_string(),
                    reason: format!("'{raw}' is not an unsigned integer"),
                })?),
                Err(_) => None,
            },
        };

        Ok(CliConfig { draw, seed })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.draw.validate().map_err(|e| ConfigError::Invalid {
            var: "DRAW_*".to_string(),
            reason: e.to_string(),
        })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required input: {var}\nHint: {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Parse an environment variable, falling back to `default` when unset.
///
/// A set but unparsable value is an error.
fn parse_env_strict<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    parse_value(key, std::env::var(key).ok().as_deref(), default)
}

fn parse_value<T>(key: &str, raw: Option<&str>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match raw {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("cannot parse '{raw}'"),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingRequired {
            var: "--input".to_string(),
            hint: "Pass a JSON request file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("--input"));
        assert!(msg.contains("JSON request"));
    }

    #[test]
    fn test_overrides_win() {
        let config = CliConfig::from_env(Overrides {
            max_tables: Some(7),
            rounds_per_block: Some(2),
            max_attempts: Some(5),
            swap_passes: Some(0),
            seed: Some(42),
        })
        .unwrap();

        assert_eq!(config.draw.max_tables, 7);
        assert_eq!(config.draw.rounds_per_block, 2);
        assert_eq!(config.draw.max_attempts, 5);
        assert_eq!(config.draw.swap_passes, 0);
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_tables() {
        let config = CliConfig {
            draw: DrawConfig {
                max_tables: 0, // Invalid
                ..Default::default()
            },
            seed: None,
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_unset_variable_falls_back() {
        let value: u32 = parse_env_strict("TD_CLI_TEST_UNSET_VARIABLE", 9).unwrap();
        assert_eq!(value, 9);
    }

    #[test]
    fn test_unparsable_value_is_rejected() {
        let err = parse_value::<u32>("DRAW_SWAP_PASSES", Some("lots"), 8).unwrap_err();
        match err {
            ConfigError::Invalid { var, reason } => {
                assert_eq!(var, "DRAW_SWAP_PASSES");
                assert!(reason.contains("lots"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let value: u32 = parse_value("DRAW_SWAP_PASSES", Some(" 3 "), 8).unwrap();
        assert_eq!(value, 3);
    }
}
