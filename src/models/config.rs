//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the page host.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the REST backend serving `/customers`.
    pub backend_url: String,
    /// Glob passed to `Tera::new`.
    pub templates_dir: String,
}

impl ServerConfig {
    /// Reads `config/default.yaml`, the optional `config/{profile}.yaml` and
    /// `APP_*` environment variables, later sources winning.
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
