//! GROQ queries for the content store.
//!
//! Two read-only projections exist in the whole service: the published
//! devlog listing and the single-devlog lookup. Any projected field may
//! be absent on a given record, so the models treat everything as
//! optional.

/// Fields shared by both projections. `slug` is flattened from the
/// store's `slug.current` object.
const DEVLOG_FIELDS: &str =
    r#"_id, title, "slug": slug.current, excerpt, project, publishedAt, coverImage"#;

/// Published devlogs, newest first.
pub fn published_devlogs() -> String {
    format!(
        r#"*[_type == "devlog" && status == "published"] | order(publishedAt desc) {{ {DEVLOG_FIELDS} }}"#
    )
}

/// Single published devlog matching the `$slug` parameter, with its
/// rich-content body.
pub fn devlog_by_slug() -> String {
    format!(r#"*[_type == "devlog" && slug.current == $slug][0] {{ {DEVLOG_FIELDS}, content }}"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_projects_expected_fields() {
        let query = published_devlogs();
        for field in ["_id", "title", "excerpt", "project", "publishedAt", "coverImage"] {
            assert!(query.contains(field), "missing field: {}", field);
        }
        assert!(query.contains(r#""slug": slug.current"#));
    }

    #[test]
    fn test_listing_filters_published_and_orders_descending() {
        let query = published_devlogs();
        assert!(query.contains(r#"status == "published""#));
        assert!(query.contains("order(publishedAt desc)"));
        // Body is only fetched for the single-entry view.
        assert!(!query.contains("content"));
    }

    #[test]
    fn test_single_devlog_is_parameterized_and_includes_content() {
        let query = devlog_by_slug();
        assert!(query.contains("slug.current == $slug"));
        assert!(query.contains("[0]"));
        assert!(query.contains("content"));
    }
}
