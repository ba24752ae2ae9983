//! Environment-driven configuration for the gateway process.

/// Runtime settings, all read from the environment with local-dev defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the todoservice REST API.
    pub todoservice_url: String,
    /// Address the GraphQL server binds to.
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        let todoservice_url = std::env::var("TODOSERVICE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        Self {
            todoservice_url,
            bind_addr: format!("{host}:{port}"),
        }
    }
}
