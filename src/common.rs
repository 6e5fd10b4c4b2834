//! Common types for the memory game: board errors and flip outcomes.

/// Errors returned while building a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board dimension is odd or zero.
    InvalidDimension(usize),
    /// Palette holds fewer distinct symbols than the board needs pairs.
    InsufficientSymbols { needed: usize, available: usize },
    /// More items were requested than candidates exist.
    InvalidArgument { requested: usize, available: usize },
    /// Explicit layout does not describe a valid paired board.
    InvalidLayout,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidDimension(d) => {
                write!(f, "The dimension of the board must be a positive even number whose square fits in memory, got {}", d)
            }
            BoardError::InsufficientSymbols { needed, available } => write!(
                f,
                "Palette has {} symbols but the board needs {} pairs",
                available, needed
            ),
            BoardError::InvalidArgument {
                requested,
                available,
            } => write!(
                f,
                "Cannot pick {} items from {} candidates",
                requested, available
            ),
            BoardError::InvalidLayout => {
                write!(f, "Layout must contain every symbol exactly twice")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// What a call to `Game::flip` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The flip was not accepted (card already face up, pair pending, game won
    /// or position out of range).
    Ignored,
    /// First card of a pair turned face up.
    Revealed,
    /// Second card matched the first.
    Matched,
    /// Second card did not match; both will turn back after the delay.
    Mismatched,
}
