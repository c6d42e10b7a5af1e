use crate::game::Symbol;
use crate::player::PlayerKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

/// Which start-screen choice the arrow keys change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Opponent,
    Symbol,
}

impl SetupField {
    pub fn next(self) -> SetupField {
        match self {
            SetupField::Opponent => SetupField::Symbol,
            SetupField::Symbol => SetupField::Opponent,
        }
    }
}

pub fn render(
    frame: &mut Frame,
    history: &str,
    opponent: PlayerKind,
    symbol: Symbol,
    focus: SetupField,
    message: &Option<String>,
) {
    let history_height = history.lines().count() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Title
            Constraint::Length(history_height), // Previous results
            Constraint::Length(4),              // Choices
            Constraint::Min(1),
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let results = Paragraph::new(history.to_string())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Previous results"));
    frame.render_widget(results, chunks[1]);

    render_choices(frame, opponent, symbol, focus, chunks[2]);

    let footer = message.clone().unwrap_or_else(|| {
        "↑/↓: Select  |  ←/→: Change  |  Enter: Start Game  |  Q: Quit".to_string()
    });
    let controls = Paragraph::new(footer)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[4]);
}

fn render_choices(
    frame: &mut Frame,
    opponent: PlayerKind,
    symbol: Symbol,
    focus: SetupField,
    area: Rect,
) {
    let marker = |field: SetupField| if field == focus { "▶ " } else { "  " };
    let focused = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let label_style = |field: SetupField| if field == focus { focused } else { Style::default() };

    let lines = vec![
        Line::from(vec![
            Span::styled(marker(SetupField::Opponent), focused),
            Span::styled("Choose Player 2: ", label_style(SetupField::Opponent)),
            Span::styled(format!("< {} >", opponent), label_style(SetupField::Opponent)),
        ]),
        Line::from(vec![
            Span::styled(marker(SetupField::Symbol), focused),
            Span::styled("Choose Player 2 symbol: ", label_style(SetupField::Symbol)),
            Span::raw("< "),
            Span::styled(symbol.to_string(), board_widget::cell_style(symbol.to_cell())),
            Span::raw(" >"),
        ]),
    ];

    let choices = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(choices, area);
}
