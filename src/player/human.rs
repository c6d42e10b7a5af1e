use crate::game::{Board, Symbol};

/// A player whose moves come from outside (keyboard, tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanPlayer {
    symbol: Symbol,
}

impl HumanPlayer {
    pub fn new(symbol: Symbol) -> Self {
        HumanPlayer { symbol }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn make_move(&self, board: &mut Board, row: usize, col: usize) -> bool {
        board.make_move(row, col, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_human_places_own_symbol() {
        let mut board = Board::standard();
        let human = HumanPlayer::new(Symbol::O);
        assert!(human.make_move(&mut board, 2, 1));
        assert_eq!(board.get(2, 1), Cell::O);
    }

    #[test]
    fn test_human_move_on_taken_cell_fails() {
        let mut board = Board::standard();
        board.make_move(0, 0, Symbol::X);
        let human = HumanPlayer::new(Symbol::O);
        assert!(!human.make_move(&mut board, 0, 0));
        assert_eq!(board.get(0, 0), Cell::X);
    }
}
