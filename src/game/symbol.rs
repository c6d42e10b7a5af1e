use std::fmt;
use std::str::FromStr;

use super::board::Cell;
use crate::error::SymbolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Get the other symbol
    pub fn other(self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Convert symbol to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }

    /// Get symbol name for display
    pub fn name(self) -> &'static str {
        match self {
            Symbol::X => "X",
            Symbol::O => "O",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" | "x" => Ok(Symbol::X),
            "O" | "o" => Ok(Symbol::O),
            other => Err(SymbolError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_symbol() {
        assert_eq!(Symbol::X.other(), Symbol::O);
        assert_eq!(Symbol::O.other(), Symbol::X);
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::X.to_string(), "X");
        assert_eq!(Symbol::O.name(), "O");
    }

    #[test]
    fn test_parse_symbol() {
        assert_eq!("X".parse::<Symbol>().unwrap(), Symbol::X);
        assert_eq!("o".parse::<Symbol>().unwrap(), Symbol::O);
        assert!("Z".parse::<Symbol>().is_err());
    }
}
