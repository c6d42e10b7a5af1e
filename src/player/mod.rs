//! Players: a human variant that places where it is told, a greedy one-ply AI,
//! and a factory building either from a type tag.

mod factory;
mod greedy;
mod human;

pub use factory::{create_player, PlayerKind};
pub use greedy::GreedyAiPlayer;
pub use human::HumanPlayer;

use crate::game::Symbol;

/// Either kind of participant in a match.
#[derive(Debug, Clone)]
pub enum Player {
    Human(HumanPlayer),
    Ai(GreedyAiPlayer),
}

impl Player {
    pub fn symbol(&self) -> Symbol {
        match self {
            Player::Human(p) => p.symbol(),
            Player::Ai(p) => p.symbol(),
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Human(_) => PlayerKind::Human,
            Player::Ai(_) => PlayerKind::Ai,
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Player::Ai(_))
    }
}

impl From<HumanPlayer> for Player {
    fn from(player: HumanPlayer) -> Self {
        Player::Human(player)
    }
}

impl From<GreedyAiPlayer> for Player {
    fn from(player: GreedyAiPlayer) -> Self {
        Player::Ai(player)
    }
}
