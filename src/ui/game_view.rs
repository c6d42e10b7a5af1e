use crate::game::{Game, GameOutcome};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::board_widget;

pub fn render(
    frame: &mut Frame,
    game: &Game,
    cursor: Option<(usize, usize)>,
    message: &Option<String>,
    game_mode: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, game_mode, chunks[0]);
    render_board(frame, game, cursor, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &Game, game_mode: &str, area: Rect) {
    let current = game.current_player();
    let status = if game.is_terminal() {
        format!("Game Over  |  {}", game_mode)
    } else if current.is_ai() {
        format!("AI ({}) is thinking...  |  {}", current.symbol(), game_mode)
    } else {
        format!("Current Player: {}  |  {}", current.symbol(), game_mode)
    };

    let header = Paragraph::new(status)
        .style(
            board_widget::cell_style(current.symbol().to_cell()).add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &Game, cursor: Option<(usize, usize)>, area: Rect) {
    let mut lines = vec![Line::from("")];
    lines.extend(board_widget::board_lines(game.board(), cursor));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(
        "Arrows: Move  |  Enter: Place  |  1-9: Cell  |  R: Restart  |  Q: Quit",
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

/// Modal rematch prompt drawn over the final board.
pub fn render_prompt(frame: &mut Frame, outcome: GameOutcome) {
    let (title, text) = match outcome {
        GameOutcome::Winner(symbol) => ("Winner", format!("Player {} wins!", symbol)),
        GameOutcome::Draw => ("Draw", "The game ended in a draw!".to_string()),
    };

    let area = centered_rect(40, 6, frame.area());
    let prompt = Paragraph::new(vec![
        Line::from(text),
        Line::from(""),
        Line::from("Play again? (y/n)"),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().add_modifier(Modifier::BOLD))
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(Clear, area);
    frame.render_widget(prompt, area);
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(40, 6, Rect::new(0, 0, 100, 20));
        assert_eq!(rect, Rect::new(30, 7, 40, 6));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let rect = centered_rect(40, 6, Rect::new(2, 3, 20, 4));
        assert_eq!(rect, Rect::new(2, 3, 20, 4));
    }
}
