//! Backend abstraction layer for the remote food service.
//!
//! This module defines the interface the dashboard uses to talk to the
//! restaurant's food service, along with the wire data types and error
//! handling.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod http;

pub use http::HttpBackend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Server returned status {status}: {message}")]
    Status { status: u16, message: String },
}

/// A menu item as persisted by the food service.
///
/// The `id` is assigned by the server on creation and never changes.
/// `price` is a textual decimal amount; the dashboard renders it verbatim
/// and never parses it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub available: bool,
    pub image: String,
}

/// Arguments for creating a new menu item.
///
/// There is no availability field: new items always go live as available,
/// and the HTTP layer sets the flag on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateFoodArgs {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

/// Field overrides for updating a menu item. `Some` fields win over the
/// fields of the record being edited.
#[derive(Clone, Debug, Default)]
pub struct UpdateFoodArgs {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
}

impl UpdateFoodArgs {
    /// Merge these overrides onto `base`, producing the full record sent to
    /// the server. Id and availability of `base` are carried over unchanged.
    pub fn merge_onto(&self, base: &Food) -> Food {
        Food {
            id: base.id,
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| base.description.clone()),
            price: self.price.clone().unwrap_or_else(|| base.price.clone()),
            available: base.available,
            image: self.image.clone().unwrap_or_else(|| base.image.clone()),
        }
    }
}

/// Interface to the remote food service.
///
/// All mutating calls return the server's view of the affected record;
/// callers mirror exactly that into local state, never a local guess.
#[async_trait]
pub trait FoodBackend: Send + Sync {
    /// Fetch the full menu.
    async fn fetch_foods(&self) -> Result<Vec<Food>, BackendError>;

    /// Create a new item. The server assigns the id; the item is created
    /// available regardless of the caller's intent.
    async fn create_food(&self, args: CreateFoodArgs) -> Result<Food, BackendError>;

    /// Replace the item identified by `id` with `food`.
    async fn update_food(&self, id: i64, food: &Food) -> Result<Food, BackendError>;

    /// Delete the item with the given id.
    async fn delete_food(&self, id: i64) -> Result<(), BackendError>;
}
