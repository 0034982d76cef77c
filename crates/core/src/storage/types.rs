use crate::item::Item;

/// Opaque continuation token returned by [`super::ItemRepository::scan_page`].
///
/// Only the repository that produced a cursor knows how to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCursor(String);

impl ScanCursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of a table scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    pub items: Vec<Item>,
    /// Cursor for the following page, `None` once the scan is exhausted.
    pub next: Option<ScanCursor>,
}

impl ScanPage {
    /// A page with no continuation.
    pub fn last(items: Vec<Item>) -> Self {
        Self { items, next: None }
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
