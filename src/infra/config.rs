use std::{env, path::PathBuf};

/// Process configuration, read once at startup from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    /// `None` leaves the asset store unbound; every page then fails to load.
    pub assets_dir: Option<PathBuf>,
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let assets_dir = match lookup("ASSETS_DIR") {
            Some(dir) if dir.trim().is_empty() => None,
            Some(dir) => Some(PathBuf::from(dir)),
            None => Some(PathBuf::from("public")),
        };

        Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://database.sqlite".to_string()),
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|max| max.parse().ok())
                .unwrap_or(5),
            assets_dir,
            log_json: lookup("LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
