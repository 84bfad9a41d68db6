//! Runtime configuration, read from environment variables.

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;
pub const DEFAULT_ADMIN_PASSCODE: &str = "harvest-admin";
pub const DEFAULT_SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid value: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Server settings.
///
/// The admin passcode is a shared secret compared on login; it gates the
/// editing pages and nothing more. Custom `Debug` keeps it out of logs.
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub admin_passcode: String,
    pub session_ttl_secs: i64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("max_workers", &self.max_workers)
            .field("admin_passcode", &"[REDACTED]")
            .field("session_ttl_secs", &self.session_ttl_secs)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: DEFAULT_MAX_WORKERS,
            admin_passcode: DEFAULT_ADMIN_PASSCODE.to_string(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Variables:
    /// - `AGRI_BIND_ADDR` (default: `127.0.0.1:3000`)
    /// - `AGRI_MAX_WORKERS` (default: 8)
    /// - `AGRI_ADMIN_PASSCODE` (default: `harvest-admin`)
    /// - `AGRI_SESSION_TTL_SECS` (default: one week)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`AppConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_var(&lookup, "AGRI_BIND_ADDR", DEFAULT_BIND_ADDR)?;

        let max_workers: usize = parse_var(&lookup, "AGRI_MAX_WORKERS", "8")?;
        if max_workers == 0 {
            return Err(ConfigError::Invalid {
                var: "AGRI_MAX_WORKERS",
                value: "0".into(),
            });
        }

        let admin_passcode =
            lookup("AGRI_ADMIN_PASSCODE").unwrap_or_else(|| DEFAULT_ADMIN_PASSCODE.to_string());
        if admin_passcode.trim().is_empty() {
            return Err(ConfigError::Empty("AGRI_ADMIN_PASSCODE"));
        }

        let session_ttl_secs: i64 = parse_var(
            &lookup,
            "AGRI_SESSION_TTL_SECS",
            &DEFAULT_SESSION_TTL_SECS.to_string(),
        )?;
        if session_ttl_secs <= 0 {
            return Err(ConfigError::Invalid {
                var: "AGRI_SESSION_TTL_SECS",
                value: session_ttl_secs.to_string(),
            });
        }

        Ok(Self {
            bind_addr,
            max_workers,
            admin_passcode,
            session_ttl_secs,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(var).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value: raw })
}
