//! Blog post entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A blog post row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image_url: Option<String>,
    pub read_time: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub views: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new blog post.
///
/// An empty or missing `slug` is derived from `title` by the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    pub image_url: Option<String>,
    pub read_time: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

/// DTO for updating an existing blog post. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub read_time: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}
