//! Connection settings shared by the GUI and the terminal client.

use url::Url;

pub const DEFAULT_URL: &str = "ws://localhost:8080";
pub const MAX_NAME_LEN: usize = 20;

#[derive(Debug, Clone, clap::Args)]
pub struct ClientConfig {
    /// Websocket address of the game server
    #[arg(long, env = "SCHAFKOPF_URL", default_value = DEFAULT_URL)]
    pub url: String,
    /// Display name sent on login; asked for interactively when absent
    #[arg(long, env = "SCHAFKOPF_NAME")]
    pub name: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            name: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid server url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("server url must use ws:// or wss://, got {0}://")]
    UnsupportedScheme(String),
    #[error("please enter a name")]
    EmptyName,
    #[error("name must be {} characters or less", MAX_NAME_LEN)]
    NameTooLong,
}

impl ClientConfig {
    pub fn server_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.url)?;
        match url.scheme() {
            "ws" | "wss" => Ok(url),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// The configured name, if one was given and it is usable.
    pub fn player_name(&self) -> Option<Result<String, ConfigError>> {
        self.name.as_deref().map(validate_name)
    }
}

pub fn validate_name(raw: &str) -> Result<String, ConfigError> {
    let name = raw.trim();
    if name.is_empty() {
        Err(ConfigError::EmptyName)
    } else if name.chars().count() > MAX_NAME_LEN {
        Err(ConfigError::NameTooLong)
    } else {
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> ClientConfig {
        ClientConfig { url: url.into(), name: None }
    }

    #[test]
    fn test_default_url_is_valid() {
        let url = ClientConfig::default().server_url().unwrap();
        assert_eq!(url.scheme(), "ws");
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_rejects_non_websocket_urls() {
        assert!(matches!(
            config("http://localhost:8080").server_url(),
            Err(ConfigError::UnsupportedScheme(s)) if s == "http"
        ));
        assert!(matches!(config("not a url").server_url(), Err(ConfigError::InvalidUrl(_))));
        assert!(config("wss://example.org/table").server_url().is_ok());
    }

    #[test]
    fn test_name_validation() {
        assert_eq!(validate_name("  Anna ").unwrap(), "Anna");
        assert!(matches!(validate_name("   "), Err(ConfigError::EmptyName)));
        assert!(matches!(validate_name(&"x".repeat(21)), Err(ConfigError::NameTooLong)));
        assert_eq!(validate_name("Müller-Lüdenscheidt").unwrap(), "Müller-Lüdenscheidt");
    }

    #[test]
    fn test_player_name_from_config() {
        assert!(ClientConfig::default().player_name().is_none());
        let with_name = ClientConfig { name: Some("Bert".into()), ..ClientConfig::default() };
        assert_eq!(with_name.player_name().unwrap().unwrap(), "Bert");
    }
}
