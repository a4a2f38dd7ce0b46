//! Divination methods and their string forms.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DivinationError;

/// A classical divination method.
///
/// The method determines only the probability distribution of line values;
/// the rest of the cast is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// The yarrow-stalk ritual: unequal odds of 1:5:7:3 sixteenths for
    /// old yin, young yang, young yin, and old yang.
    #[serde(rename = "yarrow")]
    YarrowStalks,
    /// Three coins: each of the four line values is equally likely.
    #[serde(rename = "coins")]
    ThreeCoins,
}

impl Method {
    /// Parse a method from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "yarrow" | "yarrow stalks" | "stalks" => Some(Self::YarrowStalks),
            "coins" | "coin" | "three coins" | "3 coins" => Some(Self::ThreeCoins),
            _ => None,
        }
    }

    /// The canonical wire name: `"yarrow"` or `"coins"`.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::YarrowStalks => "yarrow",
            Self::ThreeCoins => "coins",
        }
    }

    /// Both methods.
    pub fn all() -> &'static [Self] {
        &[Self::YarrowStalks, Self::ThreeCoins]
    }
}

impl FromStr for Method {
    type Err = DivinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DivinationError::InvalidMethod(s.to_string()))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YarrowStalks => write!(f, "Yarrow Stalks"),
            Self::ThreeCoins => write!(f, "Three Coins"),
        }
    }
}
