use tracing::{debug, info};

use super::{Board, Symbol};
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Symbol),
    Draw,
}

impl GameOutcome {
    /// The line appended to the result log for this outcome
    pub fn log_line(self) -> String {
        match self {
            GameOutcome::Winner(symbol) => format!("Winner: {}", symbol),
            GameOutcome::Draw => "Draw".to_string(),
        }
    }
}

/// What a move request did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Occupied cell, wrong player's turn, or game already over.
    Ignored,
    /// Move applied; `next` is the index of the player to move.
    Advanced { next: usize },
    Finished(GameOutcome),
}

/// One match: two players taking turns on a board the game owns.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    board: Board,
    current: usize,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a match. Whoever holds X moves first.
    pub fn new(players: [Player; 2], board: Board) -> Self {
        let current = players
            .iter()
            .position(|p| p.symbol() == Symbol::X)
            .unwrap_or(0);
        Game {
            players,
            board,
            current,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// True when the live game is waiting on an AI's move
    pub fn awaiting_ai(&self) -> bool {
        !self.is_terminal() && self.current_player().is_ai()
    }

    /// Apply a human move for the player whose turn it is.
    pub fn human_move(&mut self, row: usize, col: usize) -> TurnResult {
        if self.is_terminal() {
            return TurnResult::Ignored;
        }
        let placed = match &self.players[self.current] {
            Player::Human(human) => human.make_move(&mut self.board, row, col),
            Player::Ai(_) => false,
        };
        if !placed {
            return TurnResult::Ignored;
        }
        debug!(row, col, symbol = %self.players[self.current].symbol(), "human move");
        self.finish_turn()
    }

    /// Let the AI whose turn it is place its symbol.
    pub fn ai_move(&mut self) -> TurnResult {
        if self.is_terminal() {
            return TurnResult::Ignored;
        }
        let placed = match &mut self.players[self.current] {
            Player::Ai(ai) => ai.make_move(&mut self.board),
            Player::Human(_) => false,
        };
        if !placed {
            return TurnResult::Ignored;
        }
        self.finish_turn()
    }

    /// Apply a human move, then play out any AI turns that follow it.
    pub fn play(&mut self, row: usize, col: usize) -> TurnResult {
        match self.human_move(row, col) {
            TurnResult::Advanced { .. } => self.run_ai_turns(),
            other => other,
        }
    }

    /// Play AI turns until a human is to move or the game ends.
    pub fn run_ai_turns(&mut self) -> TurnResult {
        let mut last = TurnResult::Advanced { next: self.current };
        while self.awaiting_ai() {
            last = self.ai_move();
            if last == TurnResult::Ignored {
                break;
            }
        }
        last
    }

    fn finish_turn(&mut self) -> TurnResult {
        let outcome = if let Some(symbol) = self.board.check_winner() {
            Some(GameOutcome::Winner(symbol))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            info!(?outcome, "game over");
            self.outcome = Some(outcome);
            return TurnResult::Finished(outcome);
        }

        self.current = (self.current + 1) % self.players.len();
        TurnResult::Advanced { next: self.current }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use crate::player::{GreedyAiPlayer, HumanPlayer};

    fn human_vs_human() -> Game {
        Game::new(
            [
                HumanPlayer::new(Symbol::X).into(),
                HumanPlayer::new(Symbol::O).into(),
            ],
            Board::standard(),
        )
    }

    fn human_vs_ai(human: Symbol) -> Game {
        Game::new(
            [
                HumanPlayer::new(human).into(),
                GreedyAiPlayer::with_seed(human.other(), human, 3).into(),
            ],
            Board::standard(),
        )
    }

    #[test]
    fn test_x_moves_first() {
        assert_eq!(human_vs_human().current_index(), 0);
        assert_eq!(human_vs_ai(Symbol::O).current_index(), 1);
        assert!(human_vs_ai(Symbol::O).awaiting_ai());
        assert!(!human_vs_ai(Symbol::X).awaiting_ai());
    }

    #[test]
    fn test_legal_move_advances_turn() {
        let mut game = human_vs_human();
        assert_eq!(game.human_move(1, 1), TurnResult::Advanced { next: 1 });
        assert_eq!(game.board().get(1, 1), Cell::X);
        assert_eq!(game.human_move(0, 0), TurnResult::Advanced { next: 0 });
        assert_eq!(game.board().get(0, 0), Cell::O);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = human_vs_human();
        game.human_move(1, 1);
        assert_eq!(game.human_move(1, 1), TurnResult::Ignored);
        assert_eq!(game.current_index(), 1);
        assert_eq!(game.board().get(1, 1), Cell::X);
    }

    #[test]
    fn test_human_input_ignored_during_ai_turn() {
        let mut game = human_vs_ai(Symbol::X);
        game.human_move(0, 0);
        assert!(game.awaiting_ai());
        assert_eq!(game.human_move(2, 2), TurnResult::Ignored);
        assert_eq!(game.board().get(2, 2), Cell::Empty);
    }

    #[test]
    fn test_ai_move_ignored_on_human_turn() {
        let mut game = human_vs_ai(Symbol::X);
        assert_eq!(game.ai_move(), TurnResult::Ignored);
        assert_eq!(game.board().get_empty_cells().len(), 9);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = human_vs_human();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.human_move(row, col);
        }
        assert_eq!(
            game.human_move(0, 2),
            TurnResult::Finished(GameOutcome::Winner(Symbol::X))
        );
        assert!(game.is_terminal());
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Symbol::X)));
        // No moves after the end, and the turn index stays on the winner.
        assert_eq!(game.human_move(2, 2), TurnResult::Ignored);
        assert_eq!(game.current_index(), 0);
    }

    #[test]
    fn test_draw_ends_game() {
        let mut game = human_vs_human();
        // X O X / X O O / O X X
        let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0)];
        for (row, col) in moves {
            assert!(matches!(game.human_move(row, col), TurnResult::Advanced { .. }));
        }
        assert_eq!(game.human_move(2, 2), TurnResult::Finished(GameOutcome::Draw));
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_ai_replies_through_play() {
        let mut game = human_vs_ai(Symbol::X);
        assert_eq!(game.play(1, 1), TurnResult::Advanced { next: 0 });
        assert_eq!(game.board().get_empty_cells().len(), 7);
        assert!(!game.awaiting_ai());
    }

    #[test]
    fn test_ai_blocks_during_game() {
        let mut board = Board::standard();
        board.make_move(0, 0, Symbol::X);
        board.make_move(2, 2, Symbol::O);
        let mut game = Game::new(
            [
                HumanPlayer::new(Symbol::X).into(),
                GreedyAiPlayer::with_seed(Symbol::O, Symbol::X, 3).into(),
            ],
            board,
        );

        // Two X on the top row leave (0, 2) as the threat.
        assert_eq!(game.human_move(0, 1), TurnResult::Advanced { next: 1 });
        assert!(game.awaiting_ai());

        assert!(matches!(game.ai_move(), TurnResult::Advanced { next: 0 }));
        assert_eq!(game.board().get(0, 2), Cell::O);
    }

    #[test]
    fn test_ai_first_then_human() {
        let mut game = human_vs_ai(Symbol::O);
        assert!(matches!(game.ai_move(), TurnResult::Advanced { next: 0 }));
        assert_eq!(game.board().get_empty_cells().len(), 8);
        assert!(!game.awaiting_ai());
    }

    #[test]
    fn test_ai_vs_ai_plays_to_the_end() {
        let mut game = Game::new(
            [
                GreedyAiPlayer::with_seed(Symbol::X, Symbol::O, 1).into(),
                GreedyAiPlayer::with_seed(Symbol::O, Symbol::X, 2).into(),
            ],
            Board::standard(),
        );
        assert!(matches!(game.run_ai_turns(), TurnResult::Finished(_)));
        assert!(game.is_terminal());
    }

    #[test]
    fn test_outcome_log_line() {
        assert_eq!(GameOutcome::Winner(Symbol::O).log_line(), "Winner: O");
        assert_eq!(GameOutcome::Draw.log_line(), "Draw");
    }
}
