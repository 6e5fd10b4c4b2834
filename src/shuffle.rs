//! Random permutation and sampling helpers used to lay out a board.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::BoardError;

/// Return a uniformly shuffled copy of `items` (Fisher-Yates).
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Draw `n` items from `candidates` without replacement.
///
/// Every draw is uniform over the candidates still left. The caller's slice is
/// untouched; the draw works on a private copy.
pub fn pick<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[T],
    n: usize,
) -> Result<Vec<T>, BoardError> {
    if n > candidates.len() {
        return Err(BoardError::InvalidArgument {
            requested: n,
            available: candidates.len(),
        });
    }
    let mut pool = candidates.to_vec();
    let mut picks = Vec::with_capacity(n);
    for _ in 0..n {
        let idx = rng.random_range(0..pool.len());
        picks.push(pool.swap_remove(idx));
    }
    Ok(picks)
}
