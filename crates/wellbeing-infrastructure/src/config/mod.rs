use chrono::Duration;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

const APP_DIR: &str = "wellbeing";

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Could not determine a data directory; set {0}")]
    NoDataDir(&'static str),
}

/// Runtime configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub token_ttl: Duration,
}

impl AppConfig {
    /// Load from `WELLBEING_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup. Unset variables fall back to
    /// defaults; set but unparseable ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or("WELLBEING_HOST", &lookup, IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = parse_or("WELLBEING_PORT", &lookup, DEFAULT_PORT)?;

        let ttl_minutes = parse_or(
            "WELLBEING_TOKEN_TTL_MINUTES",
            &lookup,
            DEFAULT_TOKEN_TTL_MINUTES,
        )?;
        if ttl_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                var: "WELLBEING_TOKEN_TTL_MINUTES",
                value: ttl_minutes.to_string(),
                reason: "must be positive".to_string(),
            });
        }

        let db_path = match lookup("WELLBEING_DB_PATH") {
            Some(path) => PathBuf::from(path),
            None => {
                let path = default_data_dir("WELLBEING_DB_PATH")?.join("wellbeing.db");
                log::info!("[config] WELLBEING_DB_PATH not set, using {}", path.display());
                path
            }
        };

        let log_dir = match lookup("WELLBEING_LOG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir("WELLBEING_LOG_DIR")?.join("logs"),
        };

        Ok(Self {
            host,
            port,
            db_path,
            log_dir,
            token_ttl: Duration::minutes(ttl_minutes),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T, F>(var: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => {
            log::debug!("[config] {} not set, defaulting to {}", var, default);
            Ok(default)
        }
    }
}

fn default_data_dir(var: &'static str) -> Result<PathBuf, ConfigError> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(ConfigError::NoDataDir(var))
}
