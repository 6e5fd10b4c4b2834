//! Automated players and a virtual-time driver that lets them finish a game.

use alloc::vec::Vec;
use rand::{rngs::SmallRng, Rng};

use crate::{
    board::{Board, CardState},
    game::{Game, GameEvent, GameStatus, GameSummary},
    scheduler::Scheduler,
};

/// Interface implemented by different player types.
pub trait Player<S> {
    /// Choose the next card to flip, or `None` to wait.
    fn select_card(&mut self, rng: &mut SmallRng, board: &Board<S>) -> Option<usize>;

    /// Inform the player of something that happened in the game.
    fn observe(&mut self, _event: &GameEvent<S>) {}
}

/// Player with perfect recall of every card it has seen face up.
pub struct MemoryPlayer<S> {
    seen: Vec<Option<S>>,
}

impl<S> MemoryPlayer<S> {
    pub fn new() -> Self {
        Self { seen: Vec::new() }
    }

    /// Symbol remembered at `position`, if any.
    pub fn remembered(&self, position: usize) -> Option<&S> {
        self.seen.get(position).and_then(|s| s.as_ref())
    }
}

impl<S> Default for MemoryPlayer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + PartialEq> MemoryPlayer<S> {
    fn known_partner(&self, hidden: &[usize], symbol: &S, except: usize) -> Option<usize> {
        hidden
            .iter()
            .copied()
            .find(|&p| p != except && self.remembered(p) == Some(symbol))
    }

    fn known_pair(&self, hidden: &[usize]) -> Option<usize> {
        hidden.iter().copied().find(|&p| match self.remembered(p) {
            Some(symbol) => self.known_partner(hidden, symbol, p).is_some(),
            None => false,
        })
    }

    fn explore(&self, rng: &mut SmallRng, hidden: &[usize]) -> Option<usize> {
        let unseen: Vec<usize> = hidden
            .iter()
            .copied()
            .filter(|&p| self.remembered(p).is_none())
            .collect();
        let pool = if unseen.is_empty() { hidden } else { &unseen[..] };
        if pool.is_empty() {
            return None;
        }
        Some(pool[rng.random_range(0..pool.len())])
    }
}

impl<S: Clone + PartialEq> Player<S> for MemoryPlayer<S> {
    fn select_card(&mut self, rng: &mut SmallRng, board: &Board<S>) -> Option<usize> {
        let face_up = board.positions_in(CardState::Flipped);
        let hidden = board.positions_in(CardState::Hidden);
        match face_up.as_slice() {
            [] => self
                .known_pair(&hidden)
                .or_else(|| self.explore(rng, &hidden)),
            &[first] => {
                let symbol = board.card(first)?.symbol();
                self.known_partner(&hidden, symbol, first)
                    .or_else(|| self.explore(rng, &hidden))
            }
            _ => None,
        }
    }

    fn observe(&mut self, event: &GameEvent<S>) {
        if let GameEvent::Flipped { position, symbol } = event {
            if self.seen.len() <= *position {
                self.seen.resize(*position + 1, None);
            }
            self.seen[*position] = Some(symbol.clone());
        }
    }
}

/// Let `player` play `game` to the end in virtual time.
///
/// After every decision the clock moves `think_ms` forward, so pending pairs
/// resolve and the ticker keeps counting. Returns `None` if the game is not
/// won within `max_steps` decisions.
pub fn autoplay<S, C, P>(
    game: &mut Game<S, C>,
    player: &mut P,
    rng: &mut SmallRng,
    think_ms: u64,
    max_steps: usize,
) -> Option<GameSummary>
where
    S: Clone + PartialEq,
    C: Scheduler,
    P: Player<S>,
{
    let think_ms = think_ms.max(1);
    for _ in 0..max_steps {
        for event in game.drain_events() {
            player.observe(&event);
        }
        if game.status() == GameStatus::Won {
            return game.summary();
        }
        if game.accepts_flips() {
            if let Some(position) = player.select_card(rng, game.board()) {
                game.flip(position);
            }
        }
        game.advance(think_ms);
    }
    for event in game.drain_events() {
        player.observe(&event);
    }
    game.summary()
}
