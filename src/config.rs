use config::{ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub address: String,
    pub database_url: String,
    pub s3_url: String,
    pub s3_region: String,
    pub s3_access_key: String,
    pub s3_secret_key: String,
    pub s3_bucket: String,
    /// Base under which uploaded objects are reachable by browsers.
    /// Falls back to `s3_url` when unset (path-style endpoints).
    pub public_url_base: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_builder(config::Config::builder())
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let s = builder
            .set_default("log_level", "info")?
            .set_default("address", "0.0.0.0:8080")?
            .set_default("s3_region", "us-east-1")?
            .set_default("s3_access_key", "none")?
            .set_default("s3_secret_key", "none")?
            .set_default("s3_bucket", "cms-uploads")?
            .add_source(Environment::with_prefix("CMS"))
            .build()?;

        s.try_deserialize()
    }

    pub fn public_url_base(&self) -> &str {
        self.public_url_base.as_deref().unwrap_or(&self.s3_url)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
