//! Commonly used types and utilities for ease of import.

pub use crate::{autoplay, Board, Game, GameConfig, GameStatus, MemoryPlayer, Player};

#[cfg(feature = "std")]
pub use crate::{Action, InputSource, RenderSink, Session, TerminalRenderer};
