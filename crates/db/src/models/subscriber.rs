//! Newsletter subscriber entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A subscriber row from the `subscribers` table.
///
/// Unsubscribing toggles `subscribed` off rather than deleting the row,
/// so a returning subscriber keeps their original signup date.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subscriber {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
    pub subscribed: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new subscriber.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubscriber {
    pub email: String,
    pub name: Option<String>,
}
