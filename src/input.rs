#![cfg(feature = "std")]

//! Input side of the terminal front end: turning text lines into game
//! actions, and the sources that produce them.

use std::collections::VecDeque;
use std::string::String;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{sleep_until, Duration, Instant};

/// Abstract actions delivered to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Flip the card at a position index.
    Flip(usize),
    /// Start the clock without flipping.
    Start,
    /// Leave the session.
    Quit,
}

/// Parse one line of user input for a board with side `dimension`.
///
/// Accepts `start`, `quit`, a position index (`5`), or a coordinate made of a
/// column letter and a 1-based row (`B3`), optionally prefixed with `flip`.
pub fn parse_action(input: &str, dimension: usize) -> Result<Action, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    match input.to_ascii_lowercase().as_str() {
        "start" | "s" => return Ok(Action::Start),
        "quit" | "q" | "exit" => return Ok(Action::Quit),
        _ => {}
    }
    let target = match input.split_once(char::is_whitespace) {
        Some((cmd, rest)) if cmd.eq_ignore_ascii_case("flip") => rest.trim(),
        Some(_) => return Err(format!("Unknown command '{}'", input)),
        None => input,
    };
    let cards = dimension.saturating_mul(dimension);
    if let Ok(index) = target.parse::<usize>() {
        if index >= cards {
            return Err(format!(
                "Position {} out of bounds - must be 0-{}",
                index,
                cards.saturating_sub(1)
            ));
        }
        return Ok(Action::Flip(index));
    }
    parse_coord(target, dimension).map(|(r, c)| Action::Flip(r * dimension + c))
}

fn parse_coord(input: &str, dimension: usize) -> Result<(usize, usize), String> {
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A2)".to_string());
    }
    let last_col = (b'A' + dimension.saturating_sub(1).min(25) as u8) as char;
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= dimension {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, dimension))?;
    if row == 0 || row > dimension {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, dimension));
    }
    Ok((row - 1, col))
}

/// Source of user actions. `Ok(None)` means the input is exhausted.
///
/// Implementations must be cancellation safe: the session polls
/// `next_action` inside `tokio::select!` and may drop the future.
#[async_trait::async_trait]
pub trait InputSource: Send {
    async fn next_action(&mut self) -> anyhow::Result<Option<Action>>;
}

/// Reads actions line by line from standard input.
pub struct StdinInput {
    lines: Lines<BufReader<Stdin>>,
    dimension: usize,
}

impl StdinInput {
    pub fn new(dimension: usize) -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            dimension,
        }
    }
}

#[async_trait::async_trait]
impl InputSource for StdinInput {
    async fn next_action(&mut self) -> anyhow::Result<Option<Action>> {
        loop {
            let Some(line) = self.lines.next_line().await? else {
                return Ok(None);
            };
            match parse_action(&line, self.dimension) {
                Ok(action) => return Ok(Some(action)),
                Err(msg) => eprintln!("{}", msg),
            }
        }
    }
}

/// One entry of a scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Act(Action),
    /// Pause before the next step.
    Wait(Duration),
}

/// Replays a fixed list of steps; used for tests and demos.
pub struct ScriptedInput {
    steps: VecDeque<Step>,
    wait_until: Option<Instant>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = Step>>(steps: I) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            wait_until: None,
        }
    }

    /// Steps not yet delivered.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

#[async_trait::async_trait]
impl InputSource for ScriptedInput {
    async fn next_action(&mut self) -> anyhow::Result<Option<Action>> {
        loop {
            match self.steps.front().copied() {
                None => return Ok(None),
                Some(Step::Act(action)) => {
                    self.steps.pop_front();
                    return Ok(Some(action));
                }
                Some(Step::Wait(d)) => {
                    // deadline survives cancellation so a dropped future
                    // does not restart the wait
                    let deadline = *self.wait_until.get_or_insert_with(|| Instant::now() + d);
                    sleep_until(deadline).await;
                    self.wait_until = None;
                    self.steps.pop_front();
                }
            }
        }
    }
}
