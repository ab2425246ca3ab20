//! Board layout and random generation.
//!
//! A board is a 5x5 row-major grid of cards. Its composition (15 green,
//! 3 assassin, 7 neutral) is fixed at generation; afterwards only the
//! `revealed` flags change, and only from `false` to `true`.

use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 5;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const GREEN_COUNT: usize = 15;
pub const ASSASSIN_COUNT: usize = 3;
pub const NEUTRAL_COUNT: usize = CELL_COUNT - GREEN_COUNT - ASSASSIN_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Neutral,
    Green,
    Assassin,
}

/// A cell coordinate known to lie on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Returns `None` when either coordinate is outside `0..5`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    fn from_index(index: usize) -> Self {
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    /// All 25 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Self::from_index)
    }
}

/// One word card. The true kind is visible here; the wire snapshot hides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    word: &'static str,
    kind: CardKind,
    revealed: bool,
}

impl Card {
    pub fn word(&self) -> &'static str {
        self.word
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Card>,
}

impl Board {
    /// Draw 25 distinct words from `corpus` and place 15 green and
    /// 3 assassin cards uniformly at random; the rest are neutral.
    ///
    /// Kinds are assigned from one shuffled permutation of the cells, so an
    /// assassin can never land on a green position.
    ///
    /// # Panics
    /// If `corpus` holds fewer than 25 words.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, corpus: &[&'static str]) -> Self {
        assert!(
            corpus.len() >= CELL_COUNT,
            "word corpus must hold at least {CELL_COUNT} words"
        );

        let mut cells: Vec<Card> = index::sample(rng, corpus.len(), CELL_COUNT)
            .into_iter()
            .map(|i| Card {
                word: corpus[i],
                kind: CardKind::Neutral,
                revealed: false,
            })
            .collect();

        let mut order: Vec<usize> = (0..CELL_COUNT).collect();
        order.shuffle(rng);

        for &cell in &order[..GREEN_COUNT] {
            cells[cell].kind = CardKind::Green;
        }
        for &cell in &order[GREEN_COUNT..GREEN_COUNT + ASSASSIN_COUNT] {
            cells[cell].kind = CardKind::Assassin;
        }

        Self { cells }
    }

    pub fn card(&self, pos: Position) -> &Card {
        &self.cells[pos.index()]
    }

    /// Flip a card face up. Returns its kind, or `None` if it was already
    /// revealed (the card is left untouched in that case).
    pub(crate) fn reveal(&mut self, pos: Position) -> Option<CardKind> {
        let card = &mut self.cells[pos.index()];
        if card.revealed {
            return None;
        }
        card.revealed = true;
        Some(card.kind)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Card]> {
        self.cells.chunks(BOARD_SIZE)
    }

    pub fn count_kind(&self, kind: CardKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }

    /// Positions holding `kind`, in row-major order.
    pub fn positions_of(&self, kind: CardKind) -> Vec<Position> {
        Position::all()
            .filter(|&pos| self.card(pos).kind == kind)
            .collect()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.revealed).count()
    }

    /// Build a board with a fixed layout, for scripted tests.
    #[cfg(test)]
    pub(crate) fn from_kinds(kinds: [CardKind; CELL_COUNT]) -> Self {
        let cells = kinds
            .iter()
            .zip(crate::domain::words::WORDS)
            .map(|(&kind, &word)| Card {
                word,
                kind,
                revealed: false,
            })
            .collect();
        Self { cells }
    }
}
