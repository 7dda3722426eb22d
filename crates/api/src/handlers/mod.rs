//! HTTP handlers, one module per resource.
//!
//! Public read handlers degrade to empty results on database failure
//! (logged once); admin reads and every mutation propagate failures as
//! error responses so the caller can react.

pub mod analytics;
pub mod auth;
pub mod contact;
pub mod media;
pub mod orders;
pub mod posts;
pub mod products;
pub mod projects;
pub mod settings;
pub mod subscribers;

use folio_core::error::CoreError;
use folio_core::slug::{is_valid_slug, slugify};

use crate::error::{AppError, AppResult};

/// Resolve the slug for a new post or project.
///
/// An explicit, non-blank slug must already be valid; otherwise the slug
/// is derived from the title. A title that derives to nothing (symbols
/// only) is a validation error.
pub(crate) fn resolve_slug(explicit: Option<&str>, title: &str) -> AppResult<String> {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) if is_valid_slug(s) => Ok(s.to_string()),
        Some(s) => Err(AppError::Core(CoreError::Validation(format!(
            "Invalid slug '{s}': use lowercase letters, digits, and single hyphens"
        )))),
        None => {
            let derived = slugify(title);
            if derived.is_empty() {
                Err(AppError::Core(CoreError::Validation(
                    "Cannot derive a slug from the title".into(),
                )))
            } else {
                Ok(derived)
            }
        }
    }
}
