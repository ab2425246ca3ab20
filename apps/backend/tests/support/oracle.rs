//! Reference engine seeded like the game under test, for looking up the
//! hidden layout.

use backend::domain::{derive_board_seed, CardKind, GameCode, GameEngine, Position};

pub struct Oracle {
    engine: GameEngine,
}

impl Oracle {
    /// Mirror of the engine the registry builds for `code` under `base_seed`.
    pub fn for_code(base_seed: u64, code: &GameCode) -> Self {
        Self::seeded(derive_board_seed(base_seed, code))
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            engine: GameEngine::seeded(seed),
        }
    }

    pub fn positions(&self, kind: CardKind) -> Vec<(usize, usize)> {
        self.engine
            .board()
            .positions_of(kind)
            .into_iter()
            .map(|p: Position| (p.row(), p.col()))
            .collect()
    }

    pub fn greens(&self) -> Vec<(usize, usize)> {
        self.positions(CardKind::Green)
    }

    pub fn neutrals(&self) -> Vec<(usize, usize)> {
        self.positions(CardKind::Neutral)
    }

    pub fn assassins(&self) -> Vec<(usize, usize)> {
        self.positions(CardKind::Assassin)
    }
}
