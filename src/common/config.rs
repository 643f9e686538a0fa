//! # Configuration Utilities
//!
//! Client configuration and the TOML loader shared by the binaries.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error
///
/// # Example
/// ```ignore
/// let config: ClientConfig = load_config("config/client.toml")?;
/// ```
pub fn load_config<T>(path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Client configuration loaded from TOML file.
///
/// # Example TOML
///
/// ```toml
/// [client]
/// name = "Attacker"
/// endpoint = "http://127.0.0.1:8080/cgi-bin/ticket"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Client identity and endpoint
    pub client: ClientInfo,
}

/// Client identity and the ticket endpoint it talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Name used in log output
    #[serde(default = "default_name")]
    pub name: String,
    /// URL receiving both login and auth POSTs
    pub endpoint: String,
}

fn default_name() -> String {
    "client".to_string()
}

impl ClientConfig {
    /// Loads client configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse as a `ClientConfig`.
    pub fn from_file(path: &str) -> Result<Self> {
        load_config(path)
    }
}
