use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Cash,
    Tournament,
}

impl GameType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            GameType::Cash => "cash",
            GameType::Tournament => "tournament",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "cash" => Some(GameType::Cash),
            "tournament" => Some(GameType::Tournament),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI ("cash", "C", "Tournament", "t", ...)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "cash" | "c" => Some(GameType::Cash),
            "tournament" | "tourney" | "mtt" | "t" => Some(GameType::Tournament),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameType::Cash => "Cash Game",
            GameType::Tournament => "Tournament",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            GameType::Cash => "Cash",
            GameType::Tournament => "Tournament",
        }
    }
}
