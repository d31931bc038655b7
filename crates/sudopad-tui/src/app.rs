use std::io;

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use sudopad_core::givens::place_givens;
use sudopad_core::nav::Direction;
use sudopad_core::{Board, Layout};

use crate::editor::{Input, apply};
use crate::ui;

/// Board geometry in terminal cells.
const LAYOUT: Layout = Layout {
    cell_size: 3,
    origin_x: 2,
    origin_y: 1,
    gap: 1,
};

pub fn run(blank: bool) -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal();
            return Err(e);
        }
    };

    let mut board = Board::new(LAYOUT);
    if !blank {
        place_givens(&mut board, &mut rand::rng());
    }

    let result = run_loop(&mut terminal, &mut board);

    restore_terminal();
    let _ = terminal.show_cursor();

    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Undo raw mode, the alternate screen, and mouse capture. Runs on the
/// normal exit path, on setup failure, and from the panic hook; errors
/// are ignored.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Draw, block for one event, dispatch it, repeat. Every handled event is
/// followed by a full redraw at the top of the next iteration.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    board: &mut Board,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, board))?;

        if let Some(input) = translate(event::read()?) {
            if apply(board, input) {
                return Ok(());
            }
        }
    }
}

/// Map backend events onto editor inputs. Events that map to nothing
/// (resize, key release, unbound keys) still trigger a redraw.
fn translate(event: Event) -> Option<Input> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Input::Click { x: column, y: row }),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(Input::Move(Direction::Up)),
        KeyCode::Down => Some(Input::Move(Direction::Down)),
        KeyCode::Left => Some(Input::Move(Direction::Left)),
        KeyCode::Right => Some(Input::Move(Direction::Right)),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
        KeyCode::Char(c @ '1'..='9') => Some(Input::Digit(c as u8 - b'0')),
        KeyCode::Backspace | KeyCode::Delete => Some(Input::Erase),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn arrows_map_to_moves() {
        assert_eq!(
            translate(press(KeyCode::Up)),
            Some(Input::Move(Direction::Up))
        );
        assert_eq!(
            translate(press(KeyCode::Right)),
            Some(Input::Move(Direction::Right))
        );
    }

    #[test]
    fn digits_and_erase_keys() {
        assert_eq!(translate(press(KeyCode::Char('1'))), Some(Input::Digit(1)));
        assert_eq!(translate(press(KeyCode::Char('9'))), Some(Input::Digit(9)));
        assert_eq!(translate(press(KeyCode::Char('0'))), None);
        assert_eq!(translate(press(KeyCode::Backspace)), Some(Input::Erase));
        assert_eq!(translate(press(KeyCode::Delete)), Some(Input::Erase));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(translate(press(KeyCode::Char('q'))), Some(Input::Quit));
        assert_eq!(translate(press(KeyCode::Esc)), Some(Input::Quit));
        assert_eq!(
            translate(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(Input::Quit)
        );
    }

    #[test]
    fn unbound_input_is_ignored() {
        assert_eq!(translate(press(KeyCode::Char('x'))), None);
        assert_eq!(translate(press(KeyCode::Enter)), None);
        assert_eq!(translate(Event::Resize(80, 24)), None);
    }

    #[test]
    fn left_mouse_down_becomes_click() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(event), Some(Input::Click { x: 7, y: 3 }));

        let release = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(release), None);
    }
}
