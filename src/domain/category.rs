//! Spending categories used to group transactions for charts.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Closed set of expense categories.
///
/// Stored values outside the set survive a load as [`Category::Unrecognized`]
/// so they still aggregate under their own key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Entertainment,
    Travel,
    Shopping,
    Grocery,
    Others,
    Unrecognized(String),
}

impl Category {
    /// The selectable categories, in menu order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Entertainment,
        Category::Travel,
        Category::Shopping,
        Category::Grocery,
        Category::Others,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Food => "Food",
            Category::Entertainment => "Entertainment",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Grocery => "Grocery",
            Category::Others => "Others",
            Category::Unrecognized(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unrecognized(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::ALL
            .iter()
            .find(|known| known.as_str() == value)
            .cloned()
            .unwrap_or(Category::Unrecognized(value))
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Unrecognized(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Error returned when user input names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`; expected one of Food, Entertainment, Travel, Shopping, Grocery, Others")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive lookup against the selectable categories only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(needle))
            .cloned()
            .ok_or_else(|| UnknownCategory(needle.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("grocery".parse::<Category>(), Ok(Category::Grocery));
        assert_eq!(" TRAVEL ".parse::<Category>(), Ok(Category::Travel));
        assert!("Rent".parse::<Category>().is_err());
    }

    #[test]
    fn unknown_persisted_names_are_preserved() {
        let category: Category = serde_json::from_str("\"Rent\"").unwrap();
        assert_eq!(category, Category::Unrecognized("Rent".into()));
        assert!(!category.is_known());
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"Rent\"");
    }

    #[test]
    fn known_names_serialize_as_plain_strings() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"Entertainment\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Entertainment);
    }
}
