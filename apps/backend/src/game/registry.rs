//! Map from game code to the actor hosting that game.

use std::sync::Arc;
use std::time::Duration;

use actix::prelude::*;
use dashmap::mapref::entry::Entry;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::domain::{derive_board_seed, derive_code_seed, GameCode, GameEngine};
use crate::error::AppError;
use crate::game::actor::{GameActor, GameMap, IdlePolicy};

/// Games with no channels and no commands for this long are stopped.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Fresh codes tried by `create` before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Base seed. When set, every game code and board is reproducible.
    pub seed: Option<u64>,
    pub idle_timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

pub struct GameRegistry {
    games: Arc<GameMap>,
    config: RegistryConfig,
    code_rng: Mutex<ChaCha8Rng>,
}

impl GameRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        let code_rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(derive_code_seed(seed)),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            games: Arc::new(GameMap::new()),
            config,
            code_rng: Mutex::new(code_rng),
        }
    }

    /// Address of the actor for `code`, starting it on first use.
    pub fn get_or_start(&self, code: &GameCode) -> Addr<GameActor> {
        self.games
            .entry(code.clone())
            .or_insert_with(|| self.spawn(code))
            .clone()
    }

    /// Address of a running actor. Never starts one.
    pub fn get(&self, code: &GameCode) -> Option<Addr<GameActor>> {
        self.games.get(code).map(|addr| addr.clone())
    }

    /// Start a game under a fresh, unused code.
    pub fn create(&self) -> Result<(GameCode, Addr<GameActor>), AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = GameCode::generate(&mut *self.code_rng.lock());
            if let Entry::Vacant(slot) = self.games.entry(code.clone()) {
                let addr = slot.insert(self.spawn(&code)).clone();
                return Ok((code, addr));
            }
        }
        warn!(games = self.games.len(), "no free game code found");
        Err(AppError::internal(format!(
            "no free game code after {MAX_CODE_ATTEMPTS} attempts"
        )))
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn spawn(&self, code: &GameCode) -> Addr<GameActor> {
        let engine = match self.config.seed {
            Some(base) => GameEngine::seeded(derive_board_seed(base, code)),
            None => GameEngine::from_entropy(),
        };
        info!(game_code = %code, seeded = self.config.seed.is_some(), "starting game");
        GameActor::new(code.clone(), engine)
            .with_idle_policy(IdlePolicy {
                timeout: self.config.idle_timeout,
                games: Arc::clone(&self.games),
            })
            .start()
    }
}
