use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::game::{Board, Symbol};

/// One-ply greedy opponent: take a winning cell, else block the opponent's
/// winning cell, else play a random empty cell.
///
/// Every phase scans row-major, so the first qualifying cell is taken. There
/// is no deeper search; a fork (two simultaneous threats) beats it.
#[derive(Debug, Clone)]
pub struct GreedyAiPlayer {
    symbol: Symbol,
    opponent: Symbol,
    rng: StdRng,
}

impl GreedyAiPlayer {
    pub fn new(symbol: Symbol, opponent: Symbol) -> Self {
        GreedyAiPlayer {
            symbol,
            opponent,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic fallback choices, for tests and replays.
    pub fn with_seed(symbol: Symbol, opponent: Symbol, seed: u64) -> Self {
        GreedyAiPlayer {
            symbol,
            opponent,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn opponent_symbol(&self) -> Symbol {
        self.opponent
    }

    /// Place one symbol on `board`. Returns false only when the board has no
    /// empty cell.
    pub fn make_move(&mut self, board: &mut Board) -> bool {
        if let Some((row, col)) = self.find_completing_cell(board, self.symbol) {
            debug!(row, col, symbol = %self.symbol, "AI takes winning cell");
            return board.make_move(row, col, self.symbol);
        }

        if let Some((row, col)) = self.find_completing_cell(board, self.opponent) {
            debug!(row, col, symbol = %self.symbol, "AI blocks opponent");
            return board.make_move(row, col, self.symbol);
        }

        let empty = board.get_empty_cells();
        if empty.is_empty() {
            return false;
        }
        let (row, col) = empty[self.rng.random_range(0..empty.len())];
        debug!(row, col, symbol = %self.symbol, "AI plays random cell");
        board.make_move(row, col, self.symbol)
    }

    /// First empty cell (row-major) where `symbol` would win immediately.
    /// The board is left as it was found.
    fn find_completing_cell(&self, board: &mut Board, symbol: Symbol) -> Option<(usize, usize)> {
        for (row, col) in board.get_empty_cells() {
            board.make_move(row, col, symbol);
            let wins = board.check_winner() == Some(symbol);
            board.undo_move(row, col);
            if wins {
                return Some((row, col));
            }
        }
        None
    }
}
