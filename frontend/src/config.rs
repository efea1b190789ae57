use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

/// Backend used when the page is served from a loopback host.
pub const LOCAL_API_URL: &str = match option_env!("TIBOT_LOCAL_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8001",
};

/// Deployed backend used everywhere else.
pub const PRODUCTION_API_URL: &str = match option_env!("TIBOT_PRODUCTION_API_URL") {
    Some(url) => url,
    None => "https://ti-7c8k.onrender.com/",
};

const LOCAL_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Anything other than a loopback hostname counts as production.
    pub fn from_hostname(hostname: &str) -> Self {
        if LOCAL_HOSTNAMES.contains(&hostname) {
            Environment::Development
        } else {
            Environment::Production
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "Development"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Development),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

/// Backend endpoint configuration for one page load.
///
/// The environment is decided when the value is built and never changes
/// afterwards. Pass it to whatever needs to build request URLs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EndpointConfig {
    local_base_url: String,
    production_base_url: String,
    environment: Environment,
}

impl EndpointConfig {
    pub fn new(
        local_base_url: impl Into<String>,
        production_base_url: impl Into<String>,
        hostname: &str,
    ) -> Self {
        let config = Self {
            local_base_url: local_base_url.into(),
            production_base_url: production_base_url.into(),
            environment: Environment::from_hostname(hostname),
        };

        info!("Environment: {}", config.environment);
        info!("API URL: {}", config.resolve_base_url());

        config
    }

    /// Uses the built-in base URLs.
    pub fn for_hostname(hostname: &str) -> Self {
        Self::new(LOCAL_API_URL, PRODUCTION_API_URL, hostname)
    }

    /// Reads `window.location.hostname` and builds the page configuration.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> shared::Result<Self> {
        use shared::SharedError;

        let window = web_sys::window()
            .ok_or_else(|| SharedError::Environment("window is not available".to_string()))?;
        let hostname = window.location().hostname().map_err(|e| {
            SharedError::Environment(format!("failed to read hostname: {:?}", e))
        })?;

        Ok(Self::for_hostname(&hostname))
    }

    pub fn local_base_url(&self) -> &str {
        &self.local_base_url
    }

    pub fn production_base_url(&self) -> &str {
        &self.production_base_url
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn resolve_base_url(&self) -> &str {
        if self.is_production() {
            &self.production_base_url
        } else {
            &self.local_base_url
        }
    }

    /// Appends `path` to the selected base URL as-is. Slashes at the join are
    /// not normalized, so a base ending in `/` plus a path starting with `/`
    /// yields `//`.
    pub fn resolve_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolve_base_url(), path)
    }
}
