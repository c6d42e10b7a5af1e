use crate::game::{Board, Cell};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Color used for a symbol everywhere in the UI
pub fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::X => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Cell::O => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    }
}

/// Build the grid, highlighting `cursor` if given. Empty cells show their
/// 1-based key number.
pub fn board_lines(board: &Board, cursor: Option<(usize, usize)>) -> Vec<Line<'static>> {
    let size = board.size();
    let separator = vec!["───"; size].join("┼");
    let mut lines = Vec::new();

    for row in 0..size {
        let mut spans = Vec::new();
        for col in 0..size {
            let cell = board.get(row, col);
            let text = match cell.symbol() {
                Some(symbol) => format!(" {} ", symbol),
                None => format!(" {} ", row * size + col + 1),
            };
            let mut style = cell_style(cell);
            if cursor == Some((row, col)) {
                style = style.bg(Color::Cyan).fg(Color::Black);
            }
            spans.push(Span::styled(text, style));
            if col + 1 < size {
                spans.push(Span::raw("│"));
            }
        }
        lines.push(Line::from(spans));
        if row + 1 < size {
            lines.push(Line::from(separator.clone()));
        }
    }

    lines
}
