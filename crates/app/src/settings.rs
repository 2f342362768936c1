//! Handles settings for the application.
//!
//! Values come from an optional `settings.toml` in the working directory,
//! then from `COST_MANAGER_*` environment variables (nested keys separated
//! by `__`, e.g. `COST_MANAGER_SERVER__PORT`). The plain `PORT` and
//! `DATABASE_URL` variables are honored last.
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

const DEFAULT_SQLITE_PATH: &str = "./cost_manager.db";

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

/// Where the store lives.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
    /// Any connection string sea-orm understands.
    Url(String),
}

impl Default for Database {
    fn default() -> Self {
        Self::Sqlite(DEFAULT_SQLITE_PATH.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    #[serde(default)]
    pub database: Database,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("settings").required(false))
            .add_source(
                Environment::with_prefix("COST_MANAGER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?;

        Self::build(builder, std::env::var("DATABASE_URL").ok())
    }

    /// Apply defaults, deserialize, then let `database_url` replace whatever
    /// database the sources configured.
    fn build(
        builder: ConfigBuilder<DefaultState>,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut settings: Self = builder
            .set_default("app.level", "info")?
            .set_default("server.port", 3000)?
            .build()?
            .try_deserialize()?;

        if let Some(url) = database_url {
            settings.server.database = Database::Url(url);
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    const SQLITE_SETTINGS: &str = r#"
        [server]
        port = 8080

        [server.database]
        sqlite = "./costs.db"
    "#;

    fn from_toml(toml: &str) -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(toml, FileFormat::Toml))
    }

    #[test]
    fn defaults_apply_without_sources() {
        let settings = Settings::build(Config::builder(), None).unwrap();
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.port, 3000);
        assert!(settings.server.bind.is_none());
        assert!(
            matches!(settings.server.database, Database::Sqlite(ref path) if path == DEFAULT_SQLITE_PATH)
        );
    }

    #[test]
    fn file_database_is_used_without_override() {
        let settings = Settings::build(from_toml(SQLITE_SETTINGS), None).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert!(
            matches!(settings.server.database, Database::Sqlite(ref path) if path == "./costs.db")
        );
    }

    #[test]
    fn database_url_replaces_file_database() {
        let url = "sqlite:/tmp/override.db?mode=rwc".to_string();
        let settings = Settings::build(from_toml(SQLITE_SETTINGS), Some(url.clone())).unwrap();
        assert!(matches!(settings.server.database, Database::Url(ref value) if *value == url));
    }

    #[test]
    fn memory_database_is_a_plain_string() {
        let settings = Settings::build(
            from_toml("[server]\nport = 1\ndatabase = \"memory\"\n"),
            None,
        )
        .unwrap();
        assert!(matches!(settings.server.database, Database::Memory));
    }
}
