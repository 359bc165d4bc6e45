use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::pkg::internal::search::pagination::PaginationMode;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: u16,
    pub database_url: String,
    pub database_pool_max_connections: u32,
    //uploads
    pub cv_dir: String,
    pub resources_dir: String,
    pub body_limit_mb: usize,
    //search
    pub pagination_mode: PaginationMode,
}

impl Settings {
    /// Reads settings from the process environment. Built once at startup
    /// and handed to whoever needs it.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(Environment::default().try_parsing(true)))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .set_default("service_name", "jobboard")?
            .set_default("listen_port", 8800_i64)?
            .set_default("database_pool_max_connections", 5_i64)?
            .set_default("cv_dir", "CVs")?
            .set_default("resources_dir", "applicationresumes")?
            .set_default("body_limit_mb", 30_i64)?
            .set_default("pagination_mode", "windowed")?
            .build()?
            .try_deserialize()
    }

    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb.saturating_mul(1024 * 1024)
    }
}
