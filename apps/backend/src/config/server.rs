//! Server configuration read from the environment.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;
use crate::game::DEFAULT_IDLE_TIMEOUT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base RNG seed; unset means boards come from OS entropy.
    pub rng_seed: Option<u64>,
    /// Games with no channels and no commands for this long are stopped.
    pub game_idle_timeout: Duration,
    pub ws: WsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WsConfig {
    /// Per-socket outbound mailbox. A full mailbox evicts the session.
    pub mailbox_capacity: usize,
    pub heartbeat_interval: Duration,
    pub client_timeout: Duration,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 64,
            heartbeat_interval: Duration::from_secs(20),
            client_timeout: Duration::from_secs(40),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            rng_seed: None,
            game_idle_timeout: DEFAULT_IDLE_TIMEOUT,
            ws: WsConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("DUET_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = parse_var(&lookup, "DUET_PORT")?.unwrap_or(defaults.port);
        let rng_seed = parse_var(&lookup, "DUET_RNG_SEED")?;
        let game_idle_timeout = match parse_var::<_, u64>(&lookup, "DUET_GAME_IDLE_SECS")? {
            Some(0) => return Err(AppError::config("DUET_GAME_IDLE_SECS must be at least 1")),
            Some(secs) => Duration::from_secs(secs),
            None => defaults.game_idle_timeout,
        };

        let mailbox_capacity =
            parse_var(&lookup, "DUET_WS_MAILBOX")?.unwrap_or(defaults.ws.mailbox_capacity);
        if mailbox_capacity == 0 {
            return Err(AppError::config("DUET_WS_MAILBOX must be at least 1"));
        }
        let heartbeat_interval = match parse_var::<_, u64>(&lookup, "DUET_WS_HEARTBEAT_SECS")? {
            Some(0) => return Err(AppError::config("DUET_WS_HEARTBEAT_SECS must be at least 1")),
            Some(secs) => Duration::from_secs(secs),
            None => defaults.ws.heartbeat_interval,
        };
        let client_timeout = parse_var(&lookup, "DUET_WS_CLIENT_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.ws.client_timeout);
        if client_timeout <= heartbeat_interval {
            return Err(AppError::config(
                "DUET_WS_CLIENT_TIMEOUT_SECS must exceed DUET_WS_HEARTBEAT_SECS",
            ));
        }

        Ok(Self {
            host,
            port,
            rng_seed,
            game_idle_timeout,
            ws: WsConfig {
                mailbox_capacity,
                heartbeat_interval,
                client_timeout,
            },
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::config(format!("{key} has invalid value '{raw}': {e}"))),
    }
}
