#![cfg(feature = "std")]

//! Text rendering of the board, the move/time counters and the win summary.

use std::fmt::Display;
use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::{
    board::{Board, CardState},
    game::GameSummary,
};

/// Output side of the game: anything that can show the board and counters.
pub trait RenderSink<S> {
    fn render_board(&mut self, board: &Board<S>) -> io::Result<()>;

    fn render_status(&mut self, moves: u32, elapsed_seconds: u32) -> io::Result<()>;

    fn render_win(&mut self, summary: &GameSummary) -> io::Result<()>;
}

/// Text shown for the move counter.
pub fn moves_label(moves: u32) -> String {
    format!("{} moves", moves)
}

/// Text shown for the elapsed time.
pub fn time_label(elapsed_seconds: u32) -> String {
    format!("time: {} sec", elapsed_seconds)
}

/// Text shown when the game is won.
pub fn win_label(summary: &GameSummary) -> String {
    format!(
        "You won! with {} moves under {} seconds",
        summary.moves, summary.elapsed_seconds
    )
}

// pad to two terminal columns so emoji and ASCII palettes line up
fn cell<S: Display>(symbol: &S) -> String {
    let text = symbol.to_string();
    let pad = 2usize.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

// letters for the columns `parse_action` accepts, numbers past Z
fn column_label(col: usize) -> String {
    match u8::try_from(col) {
        Ok(c) if c < 26 => char::from(b'A' + c).to_string(),
        _ => (col + 1).to_string(),
    }
}

/// Renderer that draws boxes and labels onto any writer.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<S: Display, W: Write> RenderSink<S> for TerminalRenderer<W> {
    fn render_board(&mut self, board: &Board<S>) -> io::Result<()> {
        let n = board.dimension();
        let rule = "═".repeat(n * 4 + 4);
        writeln!(self.out, "    ╔{}╗", rule)?;
        write!(self.out, "    ║   ")?;
        for c in 0..n {
            write!(self.out, " {:>2} ", column_label(c))?;
        }
        writeln!(self.out, " ║")?;
        writeln!(self.out, "    ╠{}╣", rule)?;
        for (r, row) in board.cards().chunks(n).enumerate() {
            write!(self.out, "    ║ {:2}", r + 1)?;
            for card in row {
                match card.state() {
                    CardState::Hidden => write!(self.out, " ?? ")?,
                    CardState::Flipped => write!(self.out, " {} ", cell(card.symbol()))?,
                    CardState::Matched => write!(self.out, "[{}]", cell(card.symbol()))?,
                }
            }
            writeln!(self.out, " ║")?;
        }
        writeln!(self.out, "    ╚{}╝", rule)?;
        writeln!(self.out, "    Legend: ??=Hidden  [x]=Matched")?;
        self.out.flush()
    }

    fn render_status(&mut self, moves: u32, elapsed_seconds: u32) -> io::Result<()> {
        writeln!(
            self.out,
            "    {}  |  {}",
            moves_label(moves),
            time_label(elapsed_seconds)
        )?;
        self.out.flush()
    }

    fn render_win(&mut self, summary: &GameSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "    {}", win_label(summary))?;
        self.out.flush()
    }
}
