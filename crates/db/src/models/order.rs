//! Order entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

use crate::models::product::Product;
use crate::models::status::OrderStatus;

/// An order row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub customer_name: String,
    pub customer_email: String,
    pub product_id: DbId,
    pub amount: f64,
    pub status: OrderStatus,
    pub created_at: Timestamp,
}

/// An order joined with its referenced product, for the admin listing.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithProduct {
    #[serde(flatten)]
    pub order: Order,
    pub product: Option<Product>,
}

/// DTO for creating a new order. Status always starts at `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub product_id: DbId,
    pub amount: f64,
}
