use sudopad_core::Board;
use sudopad_core::nav::{Direction, step};

/// One user input, decoupled from the terminal backend's event types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Quit,
    /// Left-button press in screen coordinates.
    Click { x: u16, y: u16 },
    Move(Direction),
    /// Digit key 1-9.
    Digit(u8),
    /// Backspace or Delete.
    Erase,
}

/// Route one input to the board. Returns true when the program should
/// quit. Entering a digit keeps the cell selected, so a value can be
/// corrected without re-selecting.
pub fn apply(board: &mut Board, input: Input) -> bool {
    match input {
        Input::Quit => return true,
        Input::Click { x, y } => match board.hit_test(x, y) {
            Some(index) => board.select(index),
            None => board.clear_selection(),
        },
        Input::Move(direction) => match board.selected() {
            Some(index) => board.select(step(index, direction)),
            None => board.select(0),
        },
        Input::Digit(digit) => {
            if let Some(index) = board.selected() {
                board.set_value(index, digit);
            }
        }
        Input::Erase => {
            if let Some(index) = board.selected() {
                board.set_value(index, 0);
            }
        }
    }
    false
}
