use std::sync::Arc;

use crate::config::{ServerConfig, WsConfig};
use crate::game::{GameRegistry, RegistryConfig};

/// Application state shared by every worker
#[derive(Clone)]
pub struct AppState {
    /// Live games keyed by code
    pub registry: Arc<GameRegistry>,
    /// WebSocket session tuning
    pub ws: WsConfig,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            registry: Arc::new(GameRegistry::new(RegistryConfig {
                seed: config.rng_seed,
                idle_timeout: config.game_idle_timeout,
            })),
            ws: config.ws,
        }
    }

    /// State with a fixed base seed and default socket settings
    pub fn seeded(seed: u64) -> Self {
        Self::new(&ServerConfig {
            rng_seed: Some(seed),
            ..ServerConfig::default()
        })
    }
}
