pub mod board;
pub mod conflict;
pub mod givens;
pub mod nav;

pub use board::{Board, Cell, Layout};
pub use conflict::{DigitSet, conflicting_digits, is_conflicting};
pub use nav::{Direction, step};
