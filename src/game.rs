use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::{Board, CardState},
    common::{BoardError, FlipOutcome},
    config::GameConfig,
    scheduler::{Scheduler, Task, TimerId, VirtualClock},
};

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    NotStarted,
    Running,
    Won,
}

/// Counters and timer handle of a game in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    pub started: bool,
    /// Cards face up and waiting for resolution, `0..=2`.
    pub flipped_count: u8,
    pub total_moves: u32,
    pub elapsed_seconds: u32,
    pub ticker: Option<TimerId>,
}

/// Final result reported on win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSummary {
    pub moves: u32,
    pub elapsed_seconds: u32,
}

/// Notifications emitted by the game for renderers and players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent<S> {
    Started,
    Flipped { position: usize, symbol: S },
    Matched { first: usize, second: usize },
    Mismatched { first: usize, second: usize },
    /// Unmatched cards turned face down again.
    FlippedBack { positions: Vec<usize> },
    Tick { moves: u32, elapsed_seconds: u32 },
    Won(GameSummary),
}

/// Memory game state machine.
///
/// Owns the board, the counters and the scheduler used for the ticker and
/// the delayed resolution. Drive time forward with [`Game::advance`].
pub struct Game<S, C = VirtualClock> {
    board: Board<S>,
    config: GameConfig,
    status: GameStatus,
    state: GameState,
    in_flight: Vec<usize>,
    win_pending: bool,
    // running time accumulated from ticks
    elapsed_ms: u64,
    clock: C,
    events: Vec<GameEvent<S>>,
}

impl<S: Clone + PartialEq> Game<S, VirtualClock> {
    /// Start a game on `board` using a fresh virtual clock.
    pub fn new(board: Board<S>, config: GameConfig) -> Self {
        Self::with_scheduler(board, config, VirtualClock::new())
    }

    /// Generate a board for `config` and wrap it in a new game.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        config: GameConfig,
        palette: &[S],
    ) -> Result<Self, BoardError> {
        let board = Board::generate(rng, config.dimension, palette)?;
        Ok(Self::new(board, config))
    }
}

impl<S: Clone + PartialEq, C: Scheduler> Game<S, C> {
    /// Start a game on `board` with an injected scheduler.
    pub fn with_scheduler(board: Board<S>, config: GameConfig, clock: C) -> Self {
        Self {
            board,
            config,
            status: GameStatus::NotStarted,
            state: GameState::default(),
            in_flight: Vec::with_capacity(2),
            win_pending: false,
            elapsed_ms: 0,
            clock,
            events: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board<S> {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scheduler(&self) -> &C {
        &self.clock
    }

    /// Final summary, available once the game is won.
    pub fn summary(&self) -> Option<GameSummary> {
        match self.status {
            GameStatus::Won => Some(self.current_summary()),
            _ => None,
        }
    }

    /// Returns `true` if a flip would currently be considered.
    pub fn accepts_flips(&self) -> bool {
        self.status != GameStatus::Won && self.in_flight.len() < 2
    }

    /// Take all events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent<S>> {
        core::mem::take(&mut self.events)
    }

    /// Start the clock. Does nothing once running or won.
    pub fn start(&mut self) {
        if self.status != GameStatus::NotStarted {
            return;
        }
        self.status = GameStatus::Running;
        self.state.started = true;
        self.state.ticker = Some(
            self.clock
                .schedule_repeating(self.config.tick_interval_ms, Task::Tick),
        );
        log::debug!("game started");
        self.events.push(GameEvent::Started);
    }

    /// Turn the card at `position` face up.
    pub fn flip(&mut self, position: usize) -> FlipOutcome {
        let Some(card) = self.board.card(position) else {
            log::warn!(
                "ignoring flip at {}: board has {} cards",
                position,
                self.board.len()
            );
            return FlipOutcome::Ignored;
        };
        if card.state() != CardState::Hidden || !self.accepts_flips() {
            return FlipOutcome::Ignored;
        }
        let symbol = card.symbol().clone();

        self.start();
        self.state.total_moves += 1;
        self.in_flight.push(position);
        self.state.flipped_count = self.in_flight.len() as u8;
        self.board.set_state(position, CardState::Flipped);
        self.events.push(GameEvent::Flipped { position, symbol });

        let outcome = if let &[first, second] = self.in_flight.as_slice() {
            let cards = self.board.cards();
            let outcome = if cards[first].symbol() == cards[second].symbol() {
                self.board.set_state(first, CardState::Matched);
                self.board.set_state(second, CardState::Matched);
                log::debug!("matched cards {} and {}", first, second);
                self.events.push(GameEvent::Matched { first, second });
                FlipOutcome::Matched
            } else {
                log::debug!("cards {} and {} differ", first, second);
                self.events.push(GameEvent::Mismatched { first, second });
                FlipOutcome::Mismatched
            };
            self.clock
                .schedule(self.config.resolve_delay_ms, Task::FlipBack);
            outcome
        } else {
            FlipOutcome::Revealed
        };

        if self.board.all_matched() && !self.win_pending {
            self.win_pending = true;
            self.clock
                .schedule(self.config.resolve_delay_ms, Task::DeclareWin);
        }
        outcome
    }

    /// Move the scheduler clock forward by `elapsed_ms`, running every task
    /// that falls due on the way.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let deadline = self.clock.now() + elapsed_ms;
        while let Some(task) = self.clock.pop_due(deadline) {
            self.run_task(task);
        }
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::Tick => self.tick(),
            Task::FlipBack => self.flip_back_unmatched(),
            Task::DeclareWin => self.declare_win(),
        }
    }

    // every tick adds one interval; seconds are whole seconds of that total
    fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(self.config.tick_interval_ms);
        self.state.elapsed_seconds = u32::try_from(self.elapsed_ms / 1000).unwrap_or(u32::MAX);
        self.events.push(GameEvent::Tick {
            moves: self.state.total_moves,
            elapsed_seconds: self.state.elapsed_seconds,
        });
    }

    fn flip_back_unmatched(&mut self) {
        let positions = self.board.positions_in(CardState::Flipped);
        for &p in &positions {
            self.board.set_state(p, CardState::Hidden);
        }
        self.in_flight.clear();
        self.state.flipped_count = 0;
        if !positions.is_empty() {
            log::debug!("flipped back cards {:?}", positions);
            self.events.push(GameEvent::FlippedBack { positions });
        }
    }

    fn declare_win(&mut self) {
        if self.status == GameStatus::Won {
            return;
        }
        if let Some(id) = self.state.ticker.take() {
            self.clock.cancel(id);
        }
        self.status = GameStatus::Won;
        let summary = self.current_summary();
        log::info!(
            "game won with {} moves in {} seconds",
            summary.moves,
            summary.elapsed_seconds
        );
        self.events.push(GameEvent::Won(summary));
    }

    fn current_summary(&self) -> GameSummary {
        GameSummary {
            moves: self.state.total_moves,
            elapsed_seconds: self.state.elapsed_seconds,
        }
    }
}
