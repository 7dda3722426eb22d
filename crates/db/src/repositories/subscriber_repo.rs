//! Repository for the `subscribers` table.

use sqlx::PgPool;

use folio_core::types::DbId;

use crate::models::subscriber::{CreateSubscriber, Subscriber};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, subscribed, created_at";

/// Provides CRUD operations for newsletter subscribers.
pub struct SubscriberRepo;

impl SubscriberRepo {
    /// List all subscribers (active and unsubscribed), newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Subscriber>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subscribers ORDER BY created_at DESC");
        sqlx::query_as::<_, Subscriber>(&query)
            .fetch_all(pool)
            .await
    }

    /// Subscribe an email address.
    ///
    /// A duplicate email reactivates the existing row instead of erroring,
    /// so unsubscribe-then-resubscribe round-trips cleanly. The original
    /// signup date is kept.
    pub async fn subscribe(
        pool: &PgPool,
        input: &CreateSubscriber,
    ) -> Result<Subscriber, sqlx::Error> {
        let query = format!(
            "INSERT INTO subscribers (email, name)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_subscribers_email
             DO UPDATE SET subscribed = true,
                           name = COALESCE(EXCLUDED.name, subscribers.name)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(&input.email)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Toggle the subscribed flag. Returns the updated row, or `None` if
    /// the subscriber does not exist.
    pub async fn set_subscribed(
        pool: &PgPool,
        id: DbId,
        subscribed: bool,
    ) -> Result<Option<Subscriber>, sqlx::Error> {
        let query = format!(
            "UPDATE subscribers SET subscribed = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscriber>(&query)
            .bind(id)
            .bind(subscribed)
            .fetch_optional(pool)
            .await
    }

    /// Delete a subscriber row outright. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subscribers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
