#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Next index when moving from `current`, wrapping at the grid edges.
/// Vertical wraps keep the column, horizontal wraps keep the row.
pub fn step(current: usize, direction: Direction) -> usize {
    debug_assert!(current < 81);
    match direction {
        Direction::Down => {
            let next = current + 9;
            if next > 80 { current % 9 } else { next }
        }
        Direction::Right => {
            let next = current + 1;
            // Crossing a row boundary lands on a multiple of 9.
            if next % 9 == 0 { next - 9 } else { next }
        }
        Direction::Up => {
            if current < 9 {
                (80 - 9) + (current % 9) + 1
            } else {
                current - 9
            }
        }
        Direction::Left => {
            // At the row start, -1 would underflow or land on the previous
            // row's last column; both wrap to this row's end.
            if current % 9 == 0 { current + 8 } else { current - 1 }
        }
    }
}
