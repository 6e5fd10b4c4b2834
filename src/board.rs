//! Card grid: pair layout, per-card display state and board generation.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::BoardError;
use crate::shuffle::{pick, shuffle};

/// Display state of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum CardState {
    Hidden,
    Flipped,
    /// Terminal: a matched card never changes again.
    Matched,
}

/// A card on the board: its symbol and whether it is face up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card<S> {
    symbol: S,
    state: CardState,
}

impl<S> Card<S> {
    fn new(symbol: S) -> Self {
        Self {
            symbol,
            state: CardState::Hidden,
        }
    }

    /// Symbol printed on the card face.
    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// Symbol if the card is currently face up (flipped or matched).
    pub fn face(&self) -> Option<&S> {
        match self.state {
            CardState::Hidden => None,
            CardState::Flipped | CardState::Matched => Some(&self.symbol),
        }
    }
}

/// Square grid of cards where every symbol appears on exactly two cards.
#[derive(Clone, PartialEq, Eq)]
pub struct Board<S> {
    dimension: usize,
    cards: Vec<Card<S>>,
}

impl<S: Clone + PartialEq> Board<S> {
    /// Lay out a fresh, shuffled board of `dimension x dimension` cards.
    ///
    /// `dimension / 2 * dimension` distinct symbols are picked from
    /// `palette`, duplicated into pairs and shuffled into position order.
    /// Repeated palette entries count once.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        dimension: usize,
        palette: &[S],
    ) -> Result<Self, BoardError> {
        let needed = card_count(dimension)? / 2;
        let mut distinct: Vec<S> = Vec::with_capacity(palette.len().min(needed));
        for s in palette {
            if !distinct.contains(s) {
                distinct.push(s.clone());
            }
        }
        if distinct.len() < needed {
            return Err(BoardError::InsufficientSymbols {
                needed,
                available: distinct.len(),
            });
        }
        let picks = pick(rng, &distinct, needed)?;
        let mut pairs = Vec::with_capacity(needed * 2);
        pairs.extend(picks.iter().cloned());
        pairs.extend(picks);
        let items = shuffle(rng, &pairs);
        Ok(Self {
            dimension,
            cards: items.into_iter().map(Card::new).collect(),
        })
    }

    /// Build a board from an explicit layout, row by row.
    pub fn from_symbols(dimension: usize, symbols: Vec<S>) -> Result<Self, BoardError> {
        if symbols.len() != card_count(dimension)? {
            return Err(BoardError::InvalidLayout);
        }
        for s in &symbols {
            if symbols.iter().filter(|other| *other == s).count() != 2 {
                return Err(BoardError::InvalidLayout);
            }
        }
        Ok(Self {
            dimension,
            cards: symbols.into_iter().map(Card::new).collect(),
        })
    }
}

impl<S> Board<S> {
    /// Side length of the grid.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, position: usize) -> Option<&Card<S>> {
        self.cards.get(position)
    }

    pub fn cards(&self) -> &[Card<S>] {
        &self.cards
    }

    /// Positions of all cards currently in `state`, in board order.
    pub fn positions_in(&self, state: CardState) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.state == state)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns `true` once every card is matched.
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.state == CardState::Matched)
    }

    /// Convert a position index into (row, col).
    pub fn row_col(&self, position: usize) -> (usize, usize) {
        (position / self.dimension, position % self.dimension)
    }

    /// Convert (row, col) into a position index, if it lies on the board.
    pub fn position(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.dimension && col < self.dimension {
            Some(row * self.dimension + col)
        } else {
            None
        }
    }

    pub(crate) fn set_state(&mut self, position: usize, state: CardState) {
        let card = &mut self.cards[position];
        if card.state != CardState::Matched {
            card.state = state;
        }
    }
}

// number of cards on a valid board of side `dimension`
fn card_count(dimension: usize) -> Result<usize, BoardError> {
    if dimension == 0 || dimension % 2 != 0 {
        return Err(BoardError::InvalidDimension(dimension));
    }
    dimension
        .checked_mul(dimension)
        .ok_or(BoardError::InvalidDimension(dimension))
}

impl<S: fmt::Debug> fmt::Debug for Board<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ dimension: {}", self.dimension)?;
        for row in self.cards.chunks(self.dimension) {
            write!(f, "  ")?;
            for card in row {
                let mark = match card.state {
                    CardState::Hidden => ' ',
                    CardState::Flipped => '*',
                    CardState::Matched => '=',
                };
                write!(f, "{}{:?} ", mark, card.symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
