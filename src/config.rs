/// Default side length of the square board.
pub const DEFAULT_DIMENSION: usize = 4;

/// Period of the elapsed-time ticker, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Delay before a flipped pair is resolved and before the win is declared.
pub const RESOLVE_DELAY_MS: u64 = 1000;

/// How often the terminal session feeds wall-clock time into the game.
pub const SESSION_POLL_MS: u64 = 100;

pub const EMOJI_PALETTE: [&str; 10] = [
    "🐶", "🐱", "🐻", "🐼", "🐰", "🐨", "🦁", "🦄", "🐷", "🐸",
];

/// Plain symbols for terminals without emoji support and for larger boards.
pub const ASCII_PALETTE: [&str; 36] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
];

/// Timing and size parameters of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub dimension: usize,
    pub tick_interval_ms: u64,
    pub resolve_delay_ms: u64,
}

impl GameConfig {
    /// Default timings with a custom board size.
    pub const fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            tick_interval_ms: TICK_INTERVAL_MS,
            resolve_delay_ms: RESOLVE_DELAY_MS,
        }
    }

    /// Number of symbol pairs a board of this size holds. Saturates for
    /// sizes no board can be built with.
    pub const fn pairs(&self) -> usize {
        self.dimension.saturating_mul(self.dimension) / 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_dimension(DEFAULT_DIMENSION)
    }
}
