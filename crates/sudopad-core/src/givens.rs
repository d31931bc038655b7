use rand::RngExt;
use rand::seq::SliceRandom;

use crate::board::{Board, CELL_COUNT};
use crate::conflict::conflicting_digits;

/// Number of cells pre-filled when a puzzle is generated.
pub const GIVEN_COUNT: usize = 20;

/// Uniform draws per cell before giving up and leaving it empty.
const FILL_ATTEMPTS: usize = 9;

/// Pick 20 positions uniformly without replacement and pre-fill them in
/// row-major order, each with a digit that does not conflict with what is
/// already on the board. A cell whose nine draws all conflict stays at 0
/// but is still marked given; this lossy heuristic is deliberate and does
/// not guarantee a fillable, let alone solvable, board.
pub fn place_givens<R: RngExt>(board: &mut Board, rng: &mut R) {
    let mut positions: Vec<usize> = (0..CELL_COUNT).collect();
    positions.shuffle(rng);

    let mut chosen = [false; CELL_COUNT];
    for &p in positions.iter().take(GIVEN_COUNT) {
        chosen[p] = true;
    }

    // Assignment order matters: earlier givens constrain later draws.
    for pos in 0..CELL_COUNT {
        if chosen[pos] {
            let value = random_fill_value(board, pos, rng);
            board.place_given(pos, value);
        }
    }
}

/// Nine draws with replacement; keeps the last one that does not conflict
/// at `pos`, or 0 when every draw conflicts.
fn random_fill_value<R: RngExt>(board: &Board, pos: usize, rng: &mut R) -> u8 {
    let taken = conflicting_digits(board, pos);

    let mut value = 0;
    for _ in 0..FILL_ATTEMPTS {
        let digit: u8 = rng.random_range(1..=9);
        if !taken.contains(digit) {
            value = digit;
        }
    }
    value
}
