//! Food categories

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::GroceryError;

/// Closed set of categories items are grouped under.
///
/// Declaration order is the display order of grouped views. Deserializing
/// accepts the same spellings as `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Vegetables,
    Fruits,
    Poultry,
    Meat,
    Dairy,
    Grains,
    Canned,
    Frozen,
    Snacks,
    Beverages,
    #[default]
    Other,
}

impl FoodCategory {
    /// Every category, in display order
    pub const ALL: [FoodCategory; 11] = [
        FoodCategory::Vegetables,
        FoodCategory::Fruits,
        FoodCategory::Poultry,
        FoodCategory::Meat,
        FoodCategory::Dairy,
        FoodCategory::Grains,
        FoodCategory::Canned,
        FoodCategory::Frozen,
        FoodCategory::Snacks,
        FoodCategory::Beverages,
        FoodCategory::Other,
    ];

    /// Name used on the wire and in routes
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::Vegetables => "vegetables",
            FoodCategory::Fruits => "fruits",
            FoodCategory::Poultry => "poultry",
            FoodCategory::Meat => "meat",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Grains => "grains",
            FoodCategory::Canned => "canned",
            FoodCategory::Frozen => "frozen",
            FoodCategory::Snacks => "snacks",
            FoodCategory::Beverages => "beverages",
            FoodCategory::Other => "other",
        }
    }

    /// Section heading shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Vegetables => "Vegetables",
            FoodCategory::Fruits => "Fruits",
            FoodCategory::Poultry => "Poultry",
            FoodCategory::Meat => "Meat",
            FoodCategory::Dairy => "Dairy & Eggs",
            FoodCategory::Grains => "Grains & Bread",
            FoodCategory::Canned => "Canned Goods",
            FoodCategory::Frozen => "Frozen Foods",
            FoodCategory::Snacks => "Snacks",
            FoodCategory::Beverages => "Beverages",
            FoodCategory::Other => "Other Items",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodCategory {
    type Err = GroceryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        FoodCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| GroceryError::UnknownCategory(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for FoodCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories_in_display_order() {
        let names: Vec<&str> = FoodCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "vegetables", "fruits", "poultry", "meat", "dairy", "grains",
                "canned", "frozen", "snacks", "beverages", "other",
            ]
        );
    }

    #[test]
    fn test_default_is_other() {
        assert_eq!(FoodCategory::default(), FoodCategory::Other);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Dairy".parse::<FoodCategory>(), Ok(FoodCategory::Dairy));
        assert_eq!(" frozen ".parse::<FoodCategory>(), Ok(FoodCategory::Frozen));
    }

    #[test]
    fn test_parse_unknown_category() {
        assert_eq!(
            "candy".parse::<FoodCategory>(),
            Err(GroceryError::UnknownCategory("candy".to_string()))
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(FoodCategory::Dairy.label(), "Dairy & Eggs");
        assert_eq!(FoodCategory::Other.label(), "Other Items");
    }

    #[test]
    fn test_serde_uses_wire_name() {
        let json = serde_json::to_string(&FoodCategory::Beverages).unwrap();
        assert_eq!(json, "\"beverages\"");
        let parsed: FoodCategory = serde_json::from_str("\"grains\"").unwrap();
        assert_eq!(parsed, FoodCategory::Grains);
    }

    #[test]
    fn test_deserialize_matches_parse() {
        let parsed: FoodCategory = serde_json::from_str("\"Dairy\"").unwrap();
        assert_eq!(parsed, FoodCategory::Dairy);

        let err = serde_json::from_str::<FoodCategory>("\"candy\"").unwrap_err();
        assert!(err.to_string().contains("Unknown category: candy"));
    }
}
