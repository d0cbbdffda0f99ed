use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Base url of the external identity provider that exchanges bearer
    /// tokens for verified user identities
    pub identity_provider_url: Option<String>,
    /// Api key sent along with every identity provider request
    pub identity_provider_key: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        Self {
            port,
            identity_provider_url: std::env::var("IDENTITY_PROVIDER_URL").ok(),
            identity_provider_key: std::env::var("IDENTITY_PROVIDER_KEY").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
