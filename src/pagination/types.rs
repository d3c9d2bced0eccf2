//! Page types
//!
//! One server response unit: an ordered item sequence plus the optional
//! follow link. The server owns the link's cursor/offset encoding; this
//! client treats it as opaque.

use serde::Deserialize;

/// One page of a paginated resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Opaque URL of the next page, if the server declared one
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items.
    ///
    /// An empty terminal page is a valid outcome, not an error: callers
    /// treat "empty page" and "no page" as the same terminal state.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the server declared a next page
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Wire shape of a page response.
///
/// `items` stays an Option so a response without the sequence can be told
/// apart from an empty sequence: the former is a malformed page, the latter
/// a valid terminal page.
#[derive(Debug, Deserialize)]
pub(crate) struct PageBody<T> {
    pub items: Option<Vec<T>>,
    pub next: Option<String>,
}

#[cfg(test)]
mod type_tests {
    use super::*;
    use crate::types::JsonValue;

    #[test]
    fn test_page_helpers() {
        let page = Page {
            items: vec![1, 2, 3],
            next: Some("https://api.example.com/?page=2".to_string()),
        };
        assert_eq!(page.len(), 3);
        assert!(!page.is_empty());
        assert!(page.has_next());

        let terminal: Page<i64> = Page {
            items: vec![],
            next: None,
        };
        assert_eq!(terminal.len(), 0);
        assert!(terminal.is_empty());
        assert!(!terminal.has_next());
    }

    #[test]
    fn test_page_body_missing_items_is_distinguishable() {
        let body: PageBody<JsonValue> = serde_json::from_str(r#"{"next": null}"#).unwrap();
        assert!(body.items.is_none());

        let body: PageBody<JsonValue> = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert_eq!(body.items, Some(vec![]));
        assert!(body.next.is_none());
    }

    #[test]
    fn test_page_body_null_next() {
        let body: PageBody<JsonValue> =
            serde_json::from_str(r#"{"items": [{"id": 1}], "next": null}"#).unwrap();
        assert_eq!(body.items.map(|i| i.len()), Some(1));
        assert!(body.next.is_none());
    }
}
