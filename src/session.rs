#![cfg(feature = "std")]

use std::fmt::Display;

use tokio::time::{interval, Duration, Instant, MissedTickBehavior};

use crate::{
    config::SESSION_POLL_MS,
    game::{Game, GameEvent, GameStatus, GameSummary},
    input::{Action, InputSource},
    render::RenderSink,
    scheduler::{Scheduler, VirtualClock},
};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub status: GameStatus,
    pub moves: u32,
    pub elapsed_seconds: u32,
    /// Present only when the game was won.
    pub summary: Option<GameSummary>,
}

enum Wakeup {
    Input(anyhow::Result<Option<Action>>),
    Poll,
}

/// Interactive game loop combining a game, an input source and a renderer.
///
/// Real time is fed into the game's virtual clock whenever an action arrives
/// and on every poll, so the ticker and delayed flip-backs follow the wall
/// clock.
pub struct Session<S, I, R, C = VirtualClock> {
    game: Game<S, C>,
    input: I,
    renderer: R,
    poll: Duration,
}

impl<S, I, R, C> Session<S, I, R, C>
where
    S: Clone + PartialEq + Display,
    I: InputSource,
    R: RenderSink<S>,
    C: Scheduler,
{
    pub fn new(game: Game<S, C>, input: I, renderer: R) -> Self {
        Self {
            game,
            input,
            renderer,
            poll: Duration::from_millis(SESSION_POLL_MS),
        }
    }

    pub fn game(&self) -> &Game<S, C> {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (Game<S, C>, I, R) {
        (self.game, self.input, self.renderer)
    }

    /// Play until the game is won, the player quits or input runs out.
    pub async fn run(&mut self) -> anyhow::Result<SessionOutcome> {
        self.renderer.render_board(self.game.board())?;
        self.renderer.render_status(0, 0)?;

        let mut ticker = interval(self.poll);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last = Instant::now();

        loop {
            let wakeup = tokio::select! {
                action = self.input.next_action() => Wakeup::Input(action),
                _ = ticker.tick() => Wakeup::Poll,
            };
            self.catch_up(&mut last);
            if let Wakeup::Input(action) = wakeup {
                match action? {
                    None => {
                        log::info!("input closed, leaving game");
                        break;
                    }
                    Some(Action::Quit) => {
                        log::info!("player quit");
                        break;
                    }
                    Some(Action::Start) => self.game.start(),
                    Some(Action::Flip(position)) => {
                        let outcome = self.game.flip(position);
                        log::debug!("flip {} -> {:?}", position, outcome);
                    }
                }
            }
            self.flush_events()?;
            if self.game.status() == GameStatus::Won {
                break;
            }
        }
        self.flush_events()?;

        let state = self.game.state();
        Ok(SessionOutcome {
            status: self.game.status(),
            moves: state.total_moves,
            elapsed_seconds: state.elapsed_seconds,
            summary: self.game.summary(),
        })
    }

    fn catch_up(&mut self, last: &mut Instant) {
        let elapsed = last.elapsed().as_millis() as u64;
        if elapsed > 0 {
            self.game.advance(elapsed);
            *last += Duration::from_millis(elapsed);
        }
    }

    fn flush_events(&mut self) -> anyhow::Result<()> {
        let mut redraw = false;
        let mut status = None;
        let mut won = None;
        for event in self.game.drain_events() {
            match event {
                GameEvent::Flipped { .. }
                | GameEvent::Matched { .. }
                | GameEvent::FlippedBack { .. } => redraw = true,
                GameEvent::Tick {
                    moves,
                    elapsed_seconds,
                } => status = Some((moves, elapsed_seconds)),
                GameEvent::Won(summary) => won = Some(summary),
                GameEvent::Started | GameEvent::Mismatched { .. } => {}
            }
        }
        if redraw {
            self.renderer.render_board(self.game.board())?;
            let state = self.game.state();
            status = Some((state.total_moves, state.elapsed_seconds));
        }
        if let Some((moves, elapsed)) = status {
            self.renderer.render_status(moves, elapsed)?;
        }
        if let Some(summary) = won {
            self.renderer.render_win(&summary)?;
        }
        Ok(())
    }
}
