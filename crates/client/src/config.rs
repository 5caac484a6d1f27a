//! Connection configuration.

use std::collections::HashSet;
use std::time::Duration;

use url::Url;

use cascade_ws_core::errors::{Error, Result};
use cascade_ws_core::operations::Operation;

/// Default timeout for service requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_ENDPOINT: &str = "CASCADE_ENDPOINT";
const ENV_USERNAME: &str = "CASCADE_USERNAME";
const ENV_PASSWORD: &str = "CASCADE_PASSWORD";

/// Where and how to talk to a Cascade instance.
///
/// The endpoint is the instance root (e.g. `https://cms.example.edu`);
/// the `/api/v1` prefix is appended per request. Individual operations
/// can be switched off for a connection, which makes the client refuse
/// them locally instead of surfacing a server error.
#[derive(Debug, Clone)]
pub struct CascadeConfig {
    endpoint: Url,
    username: String,
    password: String,
    timeout: Duration,
    disabled_operations: HashSet<Operation>,
}

impl CascadeConfig {
    pub fn new(endpoint: &str, username: &str, password: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::InvalidConfigValue(format!("endpoint: {e}")))?;
        if username.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "username must not be empty".to_string(),
            ));
        }
        Ok(CascadeConfig {
            endpoint,
            username: username.to_string(),
            password: password.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            disabled_operations: HashSet::new(),
        })
    }

    /// Reads `CASCADE_ENDPOINT`, `CASCADE_USERNAME` and `CASCADE_PASSWORD`
    /// from the environment, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let endpoint = require_env(ENV_ENDPOINT)?;
        let username = require_env(ENV_USERNAME)?;
        let password = require_env(ENV_PASSWORD)?;
        CascadeConfig::new(&endpoint, &username, &password)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disables an operation for this connection.
    pub fn disable_operation(mut self, operation: Operation) -> Self {
        self.disabled_operations.insert(operation);
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_disabled(&self, operation: Operation) -> bool {
        self.disabled_operations.contains(&operation)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| Error::MissingConfigKey(key.to_string()))
}
