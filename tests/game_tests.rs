use memory_match::{
    Board, CardState, FlipOutcome, Game, GameConfig, GameEvent, GameStatus, GameSummary,
    Scheduler, Task, TimerId, VirtualClock,
};

fn game(symbols: Vec<&'static str>) -> Game<&'static str> {
    let board = Board::from_symbols(2, symbols).unwrap();
    Game::new(board, GameConfig::with_dimension(2))
}

fn state_of(game: &Game<&'static str>, position: usize) -> CardState {
    game.board().card(position).unwrap().state()
}

#[test]
fn test_mismatch_flips_back_after_delay() {
    let mut g = game(vec!["A", "B", "A", "B"]);
    assert_eq!(g.flip(0), FlipOutcome::Revealed);
    assert_eq!(g.flip(1), FlipOutcome::Mismatched);
    assert_eq!(state_of(&g, 0), CardState::Flipped);
    assert_eq!(state_of(&g, 1), CardState::Flipped);
    assert_eq!(g.state().total_moves, 2);
    assert_eq!(g.state().flipped_count, 2);

    g.advance(999);
    assert_eq!(state_of(&g, 0), CardState::Flipped);

    g.advance(1);
    assert_eq!(state_of(&g, 0), CardState::Hidden);
    assert_eq!(state_of(&g, 1), CardState::Hidden);
    assert_eq!(g.state().flipped_count, 0);
    assert_eq!(g.state().total_moves, 2);
    assert_eq!(g.status(), GameStatus::Running);
}

#[test]
fn test_match_is_permanent() {
    let mut g = game(vec!["A", "A", "B", "B"]);
    g.flip(0);
    assert_eq!(g.flip(1), FlipOutcome::Matched);
    assert_eq!(state_of(&g, 0), CardState::Matched);
    assert_eq!(state_of(&g, 1), CardState::Matched);

    g.advance(1000);
    assert_eq!(g.flip(0), FlipOutcome::Ignored);
    assert_eq!(g.flip(1), FlipOutcome::Ignored);
    assert_eq!(state_of(&g, 0), CardState::Matched);
    assert_eq!(g.state().total_moves, 2);
}

#[test]
fn test_third_flip_waits_for_resolution() {
    let mut g = game(vec!["A", "B", "A", "B"]);
    g.flip(0);
    g.flip(1);
    assert!(!g.accepts_flips());
    assert_eq!(g.flip(2), FlipOutcome::Ignored);
    assert_eq!(state_of(&g, 2), CardState::Hidden);
    assert_eq!(g.state().total_moves, 2);

    g.advance(1000);
    assert_eq!(g.flip(2), FlipOutcome::Revealed);
    assert_eq!(g.state().total_moves, 3);
}

#[test]
fn test_flipping_a_face_up_card_is_ignored() {
    let mut g = game(vec!["A", "B", "A", "B"]);
    g.flip(0);
    assert_eq!(g.flip(0), FlipOutcome::Ignored);
    assert_eq!(g.state().total_moves, 1);
    assert_eq!(g.state().flipped_count, 1);
}

#[test]
fn test_out_of_range_flip_is_ignored() {
    let mut g = game(vec!["A", "B", "A", "B"]);
    assert_eq!(g.flip(99), FlipOutcome::Ignored);
    assert_eq!(g.status(), GameStatus::NotStarted);
    assert!(!g.state().started);
}

#[test]
fn test_first_flip_starts_game() {
    let mut g = game(vec!["A", "B", "A", "B"]);
    assert_eq!(g.status(), GameStatus::NotStarted);
    g.advance(5000);
    assert_eq!(g.state().elapsed_seconds, 0);

    g.flip(0);
    assert_eq!(g.status(), GameStatus::Running);
    assert!(g.state().started);
    assert!(g.state().ticker.is_some());
    g.advance(2000);
    assert_eq!(g.state().elapsed_seconds, 2);
}

#[test]
fn test_full_game_ends_in_win_and_stops_ticker() {
    let mut g = game(vec!["A", "A", "B", "B"]);
    g.flip(0);
    g.flip(1);
    g.advance(1000);
    g.flip(2);
    g.flip(3);
    assert!(g.board().all_matched());
    assert_eq!(g.status(), GameStatus::Running);

    g.advance(1000);
    assert_eq!(g.status(), GameStatus::Won);
    let summary = g.summary().unwrap();
    assert_eq!(
        summary,
        GameSummary {
            moves: 4,
            elapsed_seconds: 2
        }
    );
    assert!(g.state().ticker.is_none());
    assert_eq!(g.scheduler().pending(), 0);

    g.advance(10_000);
    assert_eq!(g.state().elapsed_seconds, 2);
    assert_eq!(g.flip(0), FlipOutcome::Ignored);
    g.start();
    assert_eq!(g.status(), GameStatus::Won);
    assert_eq!(g.state().total_moves, 4);
}

#[test]
fn test_win_event_carries_summary() {
    let mut g = game(vec!["A", "B", "B", "A"]);
    g.flip(0);
    g.flip(3);
    g.advance(1000);
    g.flip(1);
    g.flip(2);
    g.advance(1000);
    let events = g.drain_events();
    assert!(events.contains(&GameEvent::Started));
    assert!(events.contains(&GameEvent::Matched { first: 0, second: 3 }));
    assert_eq!(
        events.last(),
        Some(&GameEvent::Won(GameSummary {
            moves: 4,
            elapsed_seconds: 2
        }))
    );
    assert!(g.drain_events().is_empty());
}

#[test]
fn test_mismatch_events() {
    let mut g = game(vec!["A", "B", "A", "B"]);
    g.flip(0);
    g.flip(1);
    g.advance(1000);
    let events = g.drain_events();
    assert!(events.contains(&GameEvent::Flipped {
        position: 1,
        symbol: "B"
    }));
    assert!(events.contains(&GameEvent::Mismatched { first: 0, second: 1 }));
    assert!(events.contains(&GameEvent::FlippedBack {
        positions: vec![0, 1]
    }));
}

#[test]
fn test_start_is_idempotent() {
    let mut g = game(vec!["A", "B", "A", "B"]);
    g.start();
    let ticker = g.state().ticker;
    g.advance(3000);
    g.flip(0);
    assert_eq!(g.state().elapsed_seconds, 3);

    g.start();
    g.start();
    assert_eq!(g.state().ticker, ticker);
    assert_eq!(g.state().total_moves, 1);
    assert_eq!(g.state().elapsed_seconds, 3);
    assert_eq!(g.scheduler().pending(), 1);

    g.advance(1000);
    assert_eq!(g.state().elapsed_seconds, 4);
}

#[test]
fn test_ticks_report_moves_and_time() {
    let mut g = game(vec!["A", "B", "A", "B"]);
    g.start();
    g.flip(0);
    g.advance(1000);
    let ticks: Vec<_> = g
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::Tick { .. }))
        .collect();
    assert_eq!(
        ticks,
        vec![GameEvent::Tick {
            moves: 1,
            elapsed_seconds: 1
        }]
    );
}

/// Scheduler that records every request before delegating to a virtual clock.
#[derive(Default)]
struct RecordingScheduler {
    inner: VirtualClock,
    scheduled: Vec<(u64, Task)>,
    cancelled: Vec<TimerId>,
}

impl Scheduler for RecordingScheduler {
    fn now(&self) -> u64 {
        self.inner.now()
    }

    fn schedule(&mut self, delay: u64, task: Task) -> TimerId {
        self.scheduled.push((delay, task));
        self.inner.schedule(delay, task)
    }

    fn schedule_repeating(&mut self, interval: u64, task: Task) -> TimerId {
        self.scheduled.push((interval, task));
        self.inner.schedule_repeating(interval, task)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.cancelled.push(id);
        self.inner.cancel(id)
    }

    fn pop_due(&mut self, deadline: u64) -> Option<Task> {
        self.inner.pop_due(deadline)
    }
}

#[test]
fn test_injected_scheduler_sees_final_pair_tasks() {
    let board = Board::from_symbols(2, vec!["A", "A", "B", "B"]).unwrap();
    let config = GameConfig {
        dimension: 2,
        tick_interval_ms: 500,
        resolve_delay_ms: 250,
    };
    let mut g = Game::with_scheduler(board, config, RecordingScheduler::default());
    g.flip(0);
    g.flip(1);
    g.advance(250);
    g.flip(2);
    g.flip(3);
    g.advance(250);

    assert_eq!(g.status(), GameStatus::Won);
    assert_eq!(
        g.scheduler().scheduled,
        vec![
            (500, Task::Tick),
            (250, Task::FlipBack),
            (250, Task::FlipBack),
            (250, Task::DeclareWin),
        ]
    );
    assert_eq!(g.scheduler().cancelled.len(), 1);
    // one 500 ms tick is not yet a whole second
    assert_eq!(g.summary().unwrap().elapsed_seconds, 0);
}

#[test]
fn test_elapsed_seconds_follow_tick_interval() {
    let board = Board::from_symbols(2, vec!["A", "B", "A", "B"]).unwrap();
    let config = GameConfig {
        dimension: 2,
        tick_interval_ms: 500,
        resolve_delay_ms: 1000,
    };
    let mut g = Game::new(board, config);
    g.start();
    g.advance(1500);
    assert_eq!(g.state().elapsed_seconds, 1);
    g.advance(500);
    assert_eq!(g.state().elapsed_seconds, 2);
    let ticks = g
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::Tick { .. }))
        .count();
    assert_eq!(ticks, 4);
}
