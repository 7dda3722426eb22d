//! Portfolio project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A portfolio project row from the `projects` table.
///
/// `category` is free text; the UI branches on `"photo"` vs anything else,
/// so no enum is enforced here. `gallery` is the ordered list of image
/// URLs shown after the primary `image_url`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub project_type: Option<String>,
    pub tech_stack: Vec<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub gallery: Vec<String>,
    pub link: Option<String>,
    pub featured: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub project_type: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub link: Option<String>,
    pub featured: Option<bool>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub project_type: Option<String>,
    pub tech_stack: Option<Vec<String>>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub link: Option<String>,
    pub featured: Option<bool>,
}
