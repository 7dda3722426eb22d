//! Slug derivation for public URLs.
//!
//! Posts, products, and projects are addressed by a URL-safe slug derived
//! from their title when the author does not supply one explicitly.

/// Derive a URL-safe slug from a title.
///
/// Rules: lowercase, every run of non-alphanumeric characters collapses to
/// a single hyphen, and leading/trailing hyphens are trimmed.
///
/// # Examples
///
/// ```
/// use folio_core::slug::slugify;
///
/// assert_eq!(slugify("Hello, World! 2024"), "hello-world-2024");
/// assert_eq!(slugify("  Chrome & Glass  "), "chrome-glass");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Check whether a string is already a valid slug.
///
/// Valid slugs are non-empty, contain only `[a-z0-9-]`, and have no
/// leading, trailing, or doubled hyphens.
pub fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_collapses_to_single_hyphen() {
        assert_eq!(slugify("Hello, World! 2024"), "hello-world-2024");
    }

    #[test]
    fn leading_and_trailing_separators_trimmed() {
        assert_eq!(slugify("  --Shot List--  "), "shot-list");
    }

    #[test]
    fn already_clean_title() {
        assert_eq!(slugify("darkroom-notes"), "darkroom-notes");
    }

    #[test]
    fn uppercase_lowered() {
        assert_eq!(slugify("RAW Workflow"), "raw-workflow");
    }

    #[test]
    fn non_ascii_dropped() {
        // Non-ASCII letters count as separators, never as slug content.
        assert_eq!(slugify("café crème"), "caf-cr-me");
    }

    #[test]
    fn empty_and_symbol_only_titles() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn derived_slugs_are_valid() {
        for title in ["Hello, World! 2024", "  A  B  ", "x", "Trip: Japan '23"] {
            let slug = slugify(title);
            assert!(
                is_valid_slug(&slug),
                "slugify({title:?}) produced invalid slug {slug:?}"
            );
        }
    }

    #[test]
    fn validity_rejects_bad_shapes() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("dou--ble"));
        assert!(!is_valid_slug("Upper"));
        assert!(is_valid_slug("hello-world-2024"));
    }
}
