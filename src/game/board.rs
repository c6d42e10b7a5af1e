use super::symbol::Symbol;
use crate::error::BoardError;

pub const STANDARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// The symbol occupying this cell, if any
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Symbol::X),
            Cell::O => Some(Symbol::O),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board where `win_length` consecutive
    /// symbols along a row, column or diagonal win.
    pub fn new(size: usize, win_length: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        if win_length == 0 || win_length > size {
            return Err(BoardError::InvalidWinLength { win_length, size });
        }
        Ok(Board {
            size,
            win_length,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// The classic 3x3 board, three in a row wins
    pub fn standard() -> Self {
        Board {
            size: STANDARD_SIZE,
            win_length: STANDARD_SIZE,
            cells: vec![Cell::Empty; STANDARD_SIZE * STANDARD_SIZE],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Get the cell at a specific position. Row 0 is the top.
    ///
    /// Panics if (row, col) is off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            self.in_bounds(row, col),
            "cell ({row}, {col}) is off a {0}x{0} board",
            self.size
        );
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Place `symbol` at (row, col). Returns false without touching the board
    /// if the cell is occupied or off the board.
    pub fn make_move(&mut self, row: usize, col: usize, symbol: Symbol) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        if self.cells[idx] != Cell::Empty {
            return false;
        }
        self.cells[idx] = symbol.to_cell();
        true
    }

    /// Reset a cell to empty whatever it held. Used for speculative lookahead.
    pub fn undo_move(&mut self, row: usize, col: usize) {
        if self.in_bounds(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = Cell::Empty;
        }
    }

    /// Scan order: row i then column i for each i, then down-right
    /// diagonals, then down-left diagonals. First complete line wins.
    pub fn check_winner(&self) -> Option<Symbol> {
        let n = self.size;
        let len = self.win_length;
        let starts = n - len;

        for i in 0..n {
            for start in 0..=starts {
                if let Some(symbol) = self.line_winner(i, start, 0, 1) {
                    return Some(symbol);
                }
            }
            for start in 0..=starts {
                if let Some(symbol) = self.line_winner(start, i, 1, 0) {
                    return Some(symbol);
                }
            }
        }

        for row in 0..=starts {
            for col in 0..=starts {
                if let Some(symbol) = self.line_winner(row, col, 1, 1) {
                    return Some(symbol);
                }
            }
        }

        for row in 0..=starts {
            for col in (len - 1)..n {
                if let Some(symbol) = self.line_winner(row, col, 1, -1) {
                    return Some(symbol);
                }
            }
        }

        None
    }

    /// The symbol filling `win_length` cells from (row, col) along
    /// (d_row, d_col), if they all match. The caller keeps the walk on the board.
    fn line_winner(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<Symbol> {
        let first = self.get(row, col).symbol()?;
        let all_match = (1..self.win_length).all(|k| {
            let r = (row as isize + d_row * k as isize) as usize;
            let c = (col as isize + d_col * k as isize) as usize;
            self.get(r, c) == first.to_cell()
        });
        all_match.then_some(first)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// All empty positions in row-major order
    pub fn get_empty_cells(&self) -> Vec<(usize, usize)> {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .filter(|&(row, col)| self.get(row, col) == Cell::Empty)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
