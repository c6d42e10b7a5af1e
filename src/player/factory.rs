use std::fmt;
use std::str::FromStr;

use super::{GreedyAiPlayer, HumanPlayer, Player};
use crate::error::PlayerError;
use crate::game::Symbol;

/// Player type tag, as typed by the user or written in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PlayerKind {
    #[serde(rename = "human")]
    Human,
    #[serde(rename = "AI")]
    Ai,
}

impl PlayerKind {
    pub fn tag(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Ai => "AI",
        }
    }

    /// The other kind, for toggling in the setup screen
    pub fn toggled(self) -> PlayerKind {
        match self {
            PlayerKind::Human => PlayerKind::Ai,
            PlayerKind::Ai => PlayerKind::Human,
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PlayerKind {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(PlayerKind::Human),
            "AI" => Ok(PlayerKind::Ai),
            other => Err(PlayerError::UnknownType(other.to_string())),
        }
    }
}

/// Build a player from its type tag (`"human"` or `"AI"`).
///
/// `opponent` only matters for the AI and defaults to `symbol.other()`.
pub fn create_player(
    type_tag: &str,
    symbol: Symbol,
    opponent: Option<Symbol>,
) -> Result<Player, PlayerError> {
    let player: Player = match type_tag.parse::<PlayerKind>()? {
        PlayerKind::Human => HumanPlayer::new(symbol).into(),
        PlayerKind::Ai => {
            GreedyAiPlayer::new(symbol, opponent.unwrap_or_else(|| symbol.other())).into()
        }
    };
    Ok(player)
}
