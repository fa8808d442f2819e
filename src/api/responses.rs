//! API request and response structures

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::GroceryError,
    models::{CategorySection, FoodCategory, GroceryItem, ItemUpdate, ListSummary},
};

/// Text shown when the list has no items
pub const EMPTY_LIST_MESSAGE: &str = "Your grocery list is empty";

/// Body of POST /items.
///
/// `category` stays a plain string here so an unknown label surfaces as
/// [`GroceryError::UnknownCategory`] rather than a body error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

impl AddItemRequest {
    /// Requested category, `other` when none was given
    pub fn category(&self) -> Result<FoodCategory, GroceryError> {
        Ok(parse_category(self.category.as_deref())?.unwrap_or_default())
    }
}

fn default_quantity() -> f64 {
    1.0
}

/// Body of PATCH /items/:id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub is_checked: Option<bool>,
}

impl TryFrom<UpdateItemRequest> for ItemUpdate {
    type Error = GroceryError;

    fn try_from(request: UpdateItemRequest) -> Result<Self, Self::Error> {
        Ok(ItemUpdate {
            category: parse_category(request.category.as_deref())?,
            name: request.name,
            quantity: request.quantity,
            unit: request.unit,
            is_checked: request.is_checked,
        })
    }
}

fn parse_category(label: Option<&str>) -> Result<Option<FoodCategory>, GroceryError> {
    label.map(str::parse::<FoodCategory>).transpose()
}

/// API response structure for mutation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<GroceryItem>,
    pub summary: ListSummary,
}

impl ItemResponse {
    /// Create a new API response
    pub fn new(status: &str, message: String, item: Option<GroceryItem>, summary: ListSummary) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            item,
            summary,
        }
    }

    /// The list changed
    pub fn changed(message: String, item: GroceryItem, summary: ListSummary) -> Self {
        Self::new("changed", message, Some(item), summary)
    }

    /// The call was a no-op
    pub fn unchanged(message: String, summary: ListSummary) -> Self {
        Self::new("unchanged", message, None, summary)
    }
}

/// One entry of GET /categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub category: FoodCategory,
    pub label: String,
}

impl From<FoodCategory> for CategoryInfo {
    fn from(category: FoodCategory) -> Self {
        Self {
            category,
            label: category.label().to_string(),
        }
    }
}

/// Items of one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryItemsResponse {
    pub category: FoodCategory,
    pub label: String,
    pub items: Vec<GroceryItem>,
}

/// Grouped list as rendered by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupedListResponse {
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub summary: ListSummary,
    pub sections: Vec<CategorySection>,
}

impl GroupedListResponse {
    pub fn new(sections: Vec<CategorySection>, summary: ListSummary) -> Self {
        let empty = summary.total == 0;
        Self {
            empty,
            message: empty.then(|| EMPTY_LIST_MESSAGE.to_string()),
            summary,
            sections,
        }
    }
}

/// Status response with list counts and server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub summary: ListSummary,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String,
}

/// Handler error carrying the domain error it came from
#[derive(Debug)]
pub struct ApiError(pub GroceryError);

impl From<GroceryError> for ApiError {
    fn from(error: GroceryError) -> Self {
        Self(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(GroceryError::InvalidBody(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self.0 {
            GroceryError::EmptyName
            | GroceryError::InvalidQuantity(_)
            | GroceryError::InvalidBody(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            GroceryError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
            GroceryError::DuplicateId(_) => StatusCode::CONFLICT,
            GroceryError::StateUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            status: "error".to_string(),
            error: self.0.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
