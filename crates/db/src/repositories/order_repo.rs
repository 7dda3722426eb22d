//! Repository for the `orders` table.

use std::collections::HashMap;

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::order::{CreateOrder, Order, OrderWithProduct};
use crate::models::product::Product;
use crate::models::status::OrderStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_name, customer_email, product_id, amount, status, created_at";

/// Provides CRUD operations for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// List all orders, newest first, each joined with its product.
    ///
    /// Products are fetched in a second query and matched in memory; an
    /// order whose product has been deleted carries `product: None`.
    pub async fn list_with_products(pool: &PgPool) -> Result<Vec<OrderWithProduct>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders ORDER BY created_at DESC");
        let orders = sqlx::query_as::<_, Order>(&query).fetch_all(pool).await?;

        let product_ids: Vec<DbId> = orders.iter().map(|o| o.product_id).collect();
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, slug, description, price, category, image_url, in_stock, created_at
             FROM products WHERE id = ANY($1)",
        )
        .bind(&product_ids)
        .fetch_all(pool)
        .await?;

        let by_id: HashMap<DbId, Product> =
            products.into_iter().map(|p| (p.id, p)).collect();

        Ok(orders
            .into_iter()
            .map(|order| {
                let product = by_id.get(&order.product_id).cloned();
                OrderWithProduct { order, product }
            })
            .collect())
    }

    /// Find an order by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new order in the `pending` state, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateOrder) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders (customer_name, customer_email, product_id, amount)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(&input.customer_name)
            .bind(&input.customer_email)
            .bind(input.product_id)
            .bind(input.amount)
            .fetch_one(pool)
            .await
    }

    /// Set an order's status. Transition validity is the caller's concern.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: OrderStatus,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("UPDATE orders SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an order by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
