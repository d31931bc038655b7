use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use sudopad_core::board::CELL_COUNT;
use sudopad_core::{Board, is_conflicting};

// ── Palette ──────────────────────────────────────────────────────────────────

const BORDER: Color = Color::Rgb(80, 80, 80);
const SELECTED_FILL: Color = Color::Rgb(80, 80, 80);
const GIVEN_FILL: Color = Color::Rgb(40, 40, 40);
const CONFLICT_GLYPH: Color = Color::Red;
const MATCH_GLYPH: Color = Color::Yellow;
const GLYPH: Color = Color::White;

// ── Per-cell draw description ────────────────────────────────────────────────

/// Everything the backend needs to paint one cell: its bordered rect, the
/// centered 1x1 glyph rect, an optional fill, and the glyph with its color.
struct CellDraw {
    rect: Rect,
    inner: Rect,
    fill: Option<Color>,
    glyph: char,
    glyph_color: Color,
}

fn cell_draw(board: &Board, index: usize) -> CellDraw {
    let cell = board.cell(index);
    let rect = Rect::new(cell.x(), cell.y(), cell.size(), cell.size());
    let inner = Rect::new(cell.x() + cell.size() / 2, cell.y() + cell.size() / 2, 1, 1);

    let fill = if cell.is_selected() {
        Some(SELECTED_FILL)
    } else if cell.is_given() {
        Some(GIVEN_FILL)
    } else {
        None
    };

    let mut glyph = ' ';
    let mut glyph_color = GLYPH;
    if cell.value() != 0 {
        glyph = char::from(b'0' + cell.value());
        let conflict = is_conflicting(board, index, cell.value());
        // Givens reflect the generator's placement, not user error, so they
        // are never flagged red.
        if conflict && !cell.is_given() {
            glyph_color = CONFLICT_GLYPH;
        }
        if !conflict && board.selected_value() == Some(cell.value()) {
            glyph_color = MATCH_GLYPH;
        }
    }

    CellDraw {
        rect,
        inner,
        fill,
        glyph,
        glyph_color,
    }
}

// ── Frame drawing ────────────────────────────────────────────────────────────

pub fn draw(frame: &mut Frame, board: &Board) {
    let area = frame.area();
    let extent = board.layout().extent();

    if area.width < extent || area.height < extent {
        let notice = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(" Terminal too small: sudopad needs {extent}x{extent} cells"),
                Style::default().fg(Color::Red),
            )),
        ]);
        frame.render_widget(notice, area);
        return;
    }

    for index in 0..CELL_COUNT {
        render_cell(frame, board, index);
    }

    draw_key_hints(frame, area);
}

fn render_cell(frame: &mut Frame, board: &Board, index: usize) {
    let d = cell_draw(board, index);

    let mut block = Block::bordered().border_style(Style::default().fg(BORDER));
    if let Some(fill) = d.fill {
        block = block.style(Style::default().bg(fill));
    }
    frame.render_widget(block, d.rect);

    let style = match d.fill {
        Some(fill) => Style::default().fg(d.glyph_color).bg(fill),
        None => Style::default().fg(d.glyph_color),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(d.glyph.to_string(), style))),
        d.inner,
    );
}

// ── Key hints (bottom status bar) ────────────────────────────────────────────

fn draw_key_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" click/←↑↓→", Style::default().fg(Color::Yellow)),
        Span::styled(" Select  ", Style::default().fg(Color::Gray)),
        Span::styled("1-9", Style::default().fg(Color::Yellow)),
        Span::styled(" Place  ", Style::default().fg(Color::Gray)),
        Span::styled("Del", Style::default().fg(Color::Yellow)),
        Span::styled(" Erase  ", Style::default().fg(Color::Gray)),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::styled(" Quit", Style::default().fg(Color::Gray)),
    ]);

    let bar = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray));
    let bottom = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    frame.render_widget(bar, bottom);
}
