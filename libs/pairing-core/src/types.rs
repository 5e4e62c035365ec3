//! Core types for the matching game.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PairError, Result};

/// Category filter for pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    All,
    Dotnet,
    Java,
    Cloud,
    Api,
}

impl Default for Category {
    fn default() -> Self {
        Self::All
    }
}

impl Category {
    /// Categories a stored pair can belong to.
    pub const CONCRETE: [Category; 4] = [Self::Dotnet, Self::Java, Self::Cloud, Self::Api];

    /// Get the category name as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Dotnet => "dotnet",
            Self::Java => "java",
            Self::Cloud => "cloud",
            Self::Api => "api",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Dotnet => ".NET",
            Self::Java => "Java",
            Self::Cloud => "AWS & Azure",
            Self::Api => "API",
        }
    }

    /// Parse from the wire name, ignoring surrounding whitespace and case.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "dotnet" => Ok(Self::Dotnet),
            "java" => Ok(Self::Java),
            "cloud" => Ok(Self::Cloud),
            "api" => Ok(Self::Api),
            _ => Err(PairError::UnknownCategory(s.to_string())),
        }
    }

    /// Whether a pair tagged `other` passes this filter.
    pub fn includes(&self, other: Category) -> bool {
        *self == Self::All || *self == other
    }
}

impl FromStr for Category {
    type Err = PairError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Term/definition association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub term: String,
    #[serde(rename = "match")]
    pub match_text: String,
    pub category: Category,
}

impl Pair {
    pub fn new(term: impl Into<String>, match_text: impl Into<String>, category: Category) -> Self {
        Self {
            term: term.into(),
            match_text: match_text.into(),
            category,
        }
    }
}

/// Admin input for a new pair, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPair {
    pub term: String,
    #[serde(rename = "match")]
    pub match_text: String,
    pub category: String,
}

impl NewPair {
    pub fn new(
        term: impl Into<String>,
        match_text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            match_text: match_text.into(),
            category: category.into(),
        }
    }

    /// Trim the input and turn it into a storable pair.
    pub fn validate(&self) -> Result<Pair> {
        let term = self.term.trim();
        if term.is_empty() {
            return Err(PairError::EmptyTerm);
        }

        let match_text = self.match_text.trim();
        if match_text.is_empty() {
            return Err(PairError::EmptyMatch);
        }

        let category = Category::parse(&self.category)?;
        if category == Category::All {
            return Err(PairError::CategoryRequired);
        }

        Ok(Pair::new(term, match_text, category))
    }
}

/// Which half of a pair a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSide {
    Term,
    Match,
}

impl CardSide {
    /// Tag appended to the label when deriving a card id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Term => "term",
            Self::Match => "match",
        }
    }
}

/// One selectable tile of a round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub label: String,
    /// Key shared by both cards of a pair.
    #[serde(rename = "match")]
    pub match_key: String,
    pub side: CardSide,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_round_trips_through_wire_name() {
        for category in [Category::All, Category::Dotnet, Category::Java, Category::Cloud, Category::Api] {
            assert_eq!(Category::parse(category.as_str()), Ok(category));
        }
        assert_eq!(Category::parse(" Java "), Ok(Category::Java));
        assert_eq!(
            Category::parse("rust"),
            Err(PairError::UnknownCategory("rust".to_string()))
        );
    }

    #[test]
    fn test_category_filter() {
        assert!(Category::All.includes(Category::Java));
        assert!(Category::Java.includes(Category::Java));
        assert!(!Category::Java.includes(Category::Api));
    }

    #[test]
    fn test_pair_serializes_match_field() {
        let pair = Pair::new("JVM", "Java Virtual Machine", Category::Java);
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "term": "JVM",
                "match": "Java Virtual Machine",
                "category": "java"
            })
        );
    }

    #[test]
    fn test_new_pair_validation() {
        let pair = NewPair::new("  CLR ", " Common Language Runtime ", "dotnet")
            .validate()
            .unwrap();
        assert_eq!(pair, Pair::new("CLR", "Common Language Runtime", Category::Dotnet));

        assert_eq!(NewPair::new(" ", "x", "java").validate(), Err(PairError::EmptyTerm));
        assert_eq!(NewPair::new("x", "", "java").validate(), Err(PairError::EmptyMatch));
        assert_eq!(
            NewPair::new("x", "y", "all").validate(),
            Err(PairError::CategoryRequired)
        );
        assert!(matches!(
            NewPair::new("x", "y", "cobol").validate(),
            Err(PairError::UnknownCategory(_))
        ));
    }
}
