use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app: AppConfig,
    pub layouts: LayoutConfig,
    pub database: Option<DatabaseConfig>,
    pub redis: Option<RedisConfig>,
}

// Настройки приложения
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

/// Откуда брать схемы залов и брони.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSource {
    Files,
    Postgres,
}

impl FromStr for LayoutSource {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "files" => Ok(LayoutSource::Files),
            "postgres" => Ok(LayoutSource::Postgres),
            _ => Err(ConfigError::UnknownLayoutSource(value.to_string())),
        }
    }
}

// Настройки источника схем залов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    pub source: LayoutSource,
    pub dir: PathBuf,
}

// Настройки базы данных
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

// Настройки Redis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisConfig {
    pub url: String,
    pub layout_ttl_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                environment: "development".to_string(),
                rust_log: "seat_suggestions=debug,tower_http=debug".to_string(),
            },
            layouts: LayoutConfig {
                source: LayoutSource::Files,
                dir: PathBuf::from("stubs/AuditoriumLayouts"),
            },
            database: None,
            redis: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Собирает конфигурацию из произвольного источника переменных.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let source = match lookup("LAYOUT_SOURCE") {
            Some(value) => value.parse()?,
            None => defaults.layouts.source,
        };

        let database = match lookup("DATABASE_URL") {
            Some(url) => Some(DatabaseConfig {
                url,
                pool_size: parse_or(&lookup, "DB_POOL_SIZE", 20)?,
            }),
            None => None,
        };
        if source == LayoutSource::Postgres && database.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let redis = match lookup("REDIS_URL") {
            Some(url) => Some(RedisConfig {
                url,
                layout_ttl_seconds: parse_or(&lookup, "LAYOUT_CACHE_TTL_SECONDS", 3600)?,
            }),
            None => None,
        };

        Ok(Config {
            app: AppConfig {
                host: lookup("HOST").unwrap_or(defaults.app.host),
                port: parse_or(&lookup, "PORT", defaults.app.port)?,
                environment: lookup("ENVIRONMENT").unwrap_or(defaults.app.environment),
                rust_log: lookup("RUST_LOG").unwrap_or(defaults.app.rust_log),
            },
            layouts: LayoutConfig {
                source,
                dir: lookup("LAYOUTS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.layouts.dir),
            },
            database,
            redis,
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}
