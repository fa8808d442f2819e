//! Grocery item and partial update structures

use serde::{Deserialize, Serialize};

use super::FoodCategory;
use crate::error::{GroceryError, Result};

/// One entry the user wants to buy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    /// Opaque identifier, assigned once at creation
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    pub quantity: f64,
    /// Absent means a plain count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Marked as purchased; the item stays on the list until removed
    #[serde(default)]
    pub is_checked: bool,
}

impl GroceryItem {
    /// Quantity with its unit, e.g. `2 lbs` or `12`
    pub fn display_quantity(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.quantity, unit),
            None => self.quantity.to_string(),
        }
    }
}

/// Field values to merge into an existing item.
///
/// `None` leaves the field untouched. A `unit` that is blank after trimming
/// clears the item's unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<FoodCategory>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub is_checked: Option<bool>,
}

impl ItemUpdate {
    pub fn quantity(quantity: f64) -> Self {
        Self { quantity: Some(quantity), ..Self::default() }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    pub fn category(category: FoodCategory) -> Self {
        Self { category: Some(category), ..Self::default() }
    }

    /// Check the supplied fields and return the update with strings trimmed
    pub(crate) fn normalized(self) -> Result<Self> {
        let name = self.name.as_deref().map(normalize_name).transpose()?;
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        Ok(Self {
            name,
            category: self.category,
            quantity: self.quantity,
            unit: self.unit.map(|unit| unit.trim().to_string()),
            is_checked: self.is_checked,
        })
    }

    /// Merge into `item`, returning whether any field actually changed
    pub(crate) fn apply_to(&self, item: &mut GroceryItem) -> bool {
        let before = item.clone();

        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(unit) = &self.unit {
            item.unit = if unit.is_empty() { None } else { Some(unit.clone()) };
        }
        if let Some(is_checked) = self.is_checked {
            item.is_checked = is_checked;
        }

        *item != before
    }
}

/// Trim a name and reject it if nothing is left
pub(crate) fn normalize_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GroceryError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Trim a unit; blank means no unit
pub(crate) fn normalize_unit(unit: Option<&str>) -> Option<String> {
    unit.map(str::trim)
        .filter(|unit| !unit.is_empty())
        .map(str::to_string)
}

pub(crate) fn validate_quantity(quantity: f64) -> Result<()> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(())
    } else {
        Err(GroceryError::InvalidQuantity(quantity))
    }
}
