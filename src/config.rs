use crate::error::{config::ConfigError, AppError};

/// Port the health endpoint listens on when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub discord_bot_token: String,
    /// Application id the `sign` command is registered under.
    pub discord_client_id: u64,
    /// The single guild the bot serves and registers its command in.
    pub discord_guild_id: u64,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => parse_port("PORT", &value)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            discord_bot_token: required_var("DISCORD_BOT_TOKEN")?,
            discord_client_id: parse_snowflake(
                "DISCORD_CLIENT_ID",
                &required_var("DISCORD_CLIENT_ID")?,
            )?,
            discord_guild_id: parse_snowflake(
                "DISCORD_GUILD_ID",
                &required_var("DISCORD_GUILD_ID")?,
            )?,
            port,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parses a Discord snowflake id from an environment variable value.
///
/// # Arguments
/// - `name` - Environment variable name, used in the error
/// - `value` - Raw variable value
///
/// # Returns
/// - `Ok(u64)` - Parsed non-zero id
/// - `Err(ConfigError::InvalidEnvVar)` - Value is not a positive integer
fn parse_snowflake(name: &str, value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid("id must be non-zero".to_string())),
        Ok(id) => Ok(id),
        Err(e) => Err(invalid(e.to_string())),
    }
}

fn parse_port(name: &str, value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflake() {
        assert_eq!(
            parse_snowflake("DISCORD_GUILD_ID", "123456789012345678").unwrap(),
            123456789012345678
        );
    }

    #[test]
    fn rejects_zero_snowflake() {
        let result = parse_snowflake("DISCORD_GUILD_ID", "0");

        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }

    #[test]
    fn rejects_non_numeric_snowflake() {
        let result = parse_snowflake("DISCORD_CLIENT_ID", "my-bot");

        match result {
            Err(ConfigError::InvalidEnvVar { name, value, .. }) => {
                assert_eq!(name, "DISCORD_CLIENT_ID");
                assert_eq!(value, "my-bot");
            }
            other => panic!("expected InvalidEnvVar, got {:?}", other),
        }
    }

    #[test]
    fn parses_port() {
        assert_eq!(parse_port("PORT", "8080").unwrap(), 8080);
        assert!(parse_port("PORT", "80808").is_err());
    }
}
