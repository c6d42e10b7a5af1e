use crate::config::{AppConfig, GameConfig};
use crate::game::{Board, Game, GameOutcome, Symbol, TurnResult};
use crate::player::{create_player, PlayerKind};
use crate::results::{ResultLog, NO_RESULTS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use super::setup_view::SetupField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Playing,
    /// Rematch prompt over the final board
    GameOver(GameOutcome),
}

pub struct App {
    config: GameConfig,
    results: ResultLog,
    screen: Screen,
    // Start-screen choices for player 2
    opponent: PlayerKind,
    opponent_symbol: Symbol,
    focus: SetupField,
    history: String,
    game: Option<Game>,
    cursor: (usize, usize),
    ai_due: Option<Instant>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut app = App {
            config: config.game.clone(),
            results: ResultLog::new(config.results.clone()),
            screen: Screen::Setup,
            opponent: config.game.opponent,
            opponent_symbol: config.game.symbol,
            focus: SetupField::Opponent,
            history: String::new(),
            game: None,
            cursor: (1, 1),
            ai_due: None,
            should_quit: false,
            message: None,
        };
        app.refresh_history();
        app
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(Instant::now());
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Run the AI move once its visible delay has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.ai_due else {
            return;
        };
        if now < due {
            return;
        }
        self.ai_due = None;

        let Some(game) = self.game.as_mut() else {
            return;
        };
        let result = game.ai_move();
        self.after_turn(result);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.screen {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Playing => self.handle_playing_key(key),
            Screen::GameOver(_) => self.handle_prompt_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.focus = self.focus.next();
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => match self.focus {
                SetupField::Opponent => self.opponent = self.opponent.toggled(),
                SetupField::Symbol => self.opponent_symbol = self.opponent_symbol.other(),
            },
            KeyCode::Enter => {
                self.start_game();
            }
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        let size = self.game.as_ref().map_or(0, |g| g.board().size());
        let (row, col) = self.cursor;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => self.cursor.0 = row.saturating_sub(1),
            KeyCode::Down => self.cursor.0 = (row + 1).min(size.saturating_sub(1)),
            KeyCode::Left => self.cursor.1 = col.saturating_sub(1),
            KeyCode::Right => self.cursor.1 = (col + 1).min(size.saturating_sub(1)),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place(row, col);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                if idx < size * size {
                    self.cursor = (idx / size, idx % size);
                    self.place(idx / size, idx % size);
                }
            }
            KeyCode::Char('r') => {
                self.start_game();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.game = None;
                self.message = None;
                self.refresh_history();
                self.screen = Screen::Setup;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Player 1 is human and takes whichever symbol player 2 did not.
    fn start_game(&mut self) {
        let p2_symbol = self.opponent_symbol;
        let p1_symbol = p2_symbol.other();

        let players = create_player(PlayerKind::Human.tag(), p1_symbol, None).and_then(|p1| {
            create_player(self.opponent.tag(), p2_symbol, Some(p1_symbol)).map(|p2| [p1, p2])
        });
        let players = match players {
            Ok(players) => players,
            Err(e) => {
                self.message = Some(e.to_string());
                return;
            }
        };

        info!(opponent = %self.opponent, player2 = %p2_symbol, "starting game");
        let game = Game::new(players, Board::standard());
        let ai_first = game.awaiting_ai();
        self.game = Some(game);
        self.cursor = (1, 1);
        self.ai_due = None;
        self.screen = Screen::Playing;
        if ai_first {
            self.schedule_ai();
        }
    }

    fn place(&mut self, row: usize, col: usize) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        self.message = None;
        let result = game.human_move(row, col);
        self.after_turn(result);
    }

    fn after_turn(&mut self, result: TurnResult) {
        match result {
            TurnResult::Ignored => {}
            TurnResult::Advanced { .. } => {
                if self.game.as_ref().is_some_and(Game::awaiting_ai) {
                    self.schedule_ai();
                }
            }
            TurnResult::Finished(outcome) => self.finish(outcome),
        }
    }

    fn schedule_ai(&mut self) {
        self.ai_due = Some(Instant::now() + Duration::from_millis(self.config.ai_delay_ms));
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.ai_due = None;
        if let Err(e) = self.results.append(outcome) {
            warn!(error = %e, "could not record result");
            self.message = Some("Result could not be saved.".to_string());
        }
        self.screen = Screen::GameOver(outcome);
    }

    fn refresh_history(&mut self) {
        self.history = match self.results.summary() {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, "could not load previous results");
                NO_RESULTS.to_string()
            }
        };
    }

    fn mode_label(&self) -> &'static str {
        match self.opponent {
            PlayerKind::Human => "Human vs Human",
            PlayerKind::Ai => "Human vs AI",
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match (&self.screen, &self.game) {
            (Screen::Setup, _) | (_, None) => super::setup_view::render(
                frame,
                &self.history,
                self.opponent,
                self.opponent_symbol,
                self.focus,
                &self.message,
            ),
            (Screen::Playing, Some(game)) => super::game_view::render(
                frame,
                game,
                Some(self.cursor),
                &self.message,
                self.mode_label(),
            ),
            (Screen::GameOver(outcome), Some(game)) => {
                super::game_view::render(frame, game, None, &self.message, self.mode_label());
                super::game_view::render_prompt(frame, *outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use crate::results::ResultLogConfig;

    fn config_in(dir: &tempfile::TempDir, opponent: PlayerKind, symbol: Symbol) -> AppConfig {
        let mut config = AppConfig::default();
        config.game.opponent = opponent;
        config.game.symbol = symbol;
        config.results = ResultLogConfig {
            path: dir.path().join("results.txt"),
            display_limit: 5,
        };
        config
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn later() -> Instant {
        Instant::now() + Duration::from_secs(60)
    }

    #[test]
    fn test_setup_toggles_choices() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(&config_in(&dir, PlayerKind::Human, Symbol::O));
        assert_eq!(app.history, NO_RESULTS);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.opponent, PlayerKind::Ai);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.opponent_symbol, Symbol::X);
        assert_eq!(app.screen(), Screen::Setup);
    }

    #[test]
    fn test_human_vs_human_win_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(&config_in(&dir, PlayerKind::Human, Symbol::O));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Playing);

        // X: 1 2 3 along the top row, O: 4 5
        for key in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.screen(), Screen::GameOver(GameOutcome::Winner(Symbol::X)));

        let content = std::fs::read_to_string(dir.path().join("results.txt")).unwrap();
        assert_eq!(content, "Winner: X\n");

        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.screen(), Screen::Setup);
        assert_eq!(app.history, "Winner: X");
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(&config_in(&dir, PlayerKind::Human, Symbol::O));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        let game = app.game.as_ref().unwrap();
        assert_eq!(game.board().get(1, 1), Cell::X);
        assert_eq!(game.board().get_empty_cells().len(), 8);
        assert_eq!(game.current_player().symbol(), Symbol::O);
    }

    #[test]
    fn test_ai_with_x_moves_after_delay() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(&config_in(&dir, PlayerKind::Ai, Symbol::X));
        press(&mut app, KeyCode::Enter);
        assert!(app.ai_due.is_some());

        // Input during the AI's turn is dropped.
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.game.as_ref().unwrap().board().get_empty_cells().len(), 9);

        app.tick(later());
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.board().get_empty_cells().len(), 8);
        assert!(!game.awaiting_ai());
        assert!(app.ai_due.is_none());
    }

    #[test]
    fn test_ai_replies_to_human_move() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(&config_in(&dir, PlayerKind::Ai, Symbol::O));
        press(&mut app, KeyCode::Enter);
        assert!(app.ai_due.is_none());

        press(&mut app, KeyCode::Char('5'));
        assert!(app.ai_due.is_some());
        let earlier = Instant::now()
            .checked_sub(Duration::from_secs(1))
            .unwrap_or_else(Instant::now);
        app.tick(earlier);
        assert_eq!(app.game.as_ref().unwrap().board().get_empty_cells().len(), 8);

        app.tick(later());
        assert_eq!(app.game.as_ref().unwrap().board().get_empty_cells().len(), 7);
    }

    #[test]
    fn test_prompt_no_quits() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(&config_in(&dir, PlayerKind::Human, Symbol::O));
        press(&mut app, KeyCode::Enter);
        for key in ['1', '2', '4', '5', '7'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.screen(), Screen::GameOver(GameOutcome::Winner(Symbol::X)));
        press(&mut app, KeyCode::Char('n'));
        assert!(app.should_quit);
    }
}
