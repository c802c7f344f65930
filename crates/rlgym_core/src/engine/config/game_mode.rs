use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Match format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// 1v1
    Duel,
    /// 2v2
    Doubles,
    /// 3v3
    #[default]
    Standard,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Duel, GameMode::Doubles, GameMode::Standard];

    /// Cars per team
    pub fn team_size(self) -> usize {
        match self {
            GameMode::Duel => 1,
            GameMode::Doubles => 2,
            GameMode::Standard => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Duel => "duel",
            GameMode::Doubles => "doubles",
            GameMode::Standard => "standard",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "duel" | "1v1" => Ok(GameMode::Duel),
            "doubles" | "2v2" => Ok(GameMode::Doubles),
            "standard" | "3v3" => Ok(GameMode::Standard),
            other => Err(format!("unknown game mode: {other} (expected duel, doubles or standard)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for mode in GameMode::ALL {
            assert_eq!(mode.to_string().parse::<GameMode>().unwrap(), mode);
        }
        assert_eq!("2v2".parse::<GameMode>().unwrap(), GameMode::Doubles);
        assert_eq!("DUEL".parse::<GameMode>().unwrap(), GameMode::Duel);
        assert!("hoops".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_team_size() {
        assert_eq!(GameMode::Duel.team_size(), 1);
        assert_eq!(GameMode::Doubles.team_size(), 2);
        assert_eq!(GameMode::Standard.team_size(), 3);
    }
}
