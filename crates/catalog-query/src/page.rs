//! Page windows over sorted results.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A page request: 1-based page number and page size.
///
/// Both fields are optional. The page defaults to 1 and the size defaults to
/// the whole result, so an empty `Pagination` returns everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<usize>,
    /// Number of records per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl Pagination {
    /// Creates a page request.
    pub fn new(current_page: usize, page_size: usize) -> Self {
        Pagination {
            current_page: Some(current_page),
            page_size: Some(page_size),
        }
    }

    /// Returns the index range of this page within `len` sorted results.
    ///
    /// The window is `[(page - 1) * size, page * size)` clamped to `len`.
    /// Page 0, and windows whose bounds overflow, are empty.
    pub fn window(&self, len: usize) -> Range<usize> {
        let page = self.current_page.unwrap_or(1);
        let size = self.page_size.unwrap_or(len);
        if page == 0 {
            return 0..0;
        }
        let Some(start) = (page - 1).checked_mul(size) else {
            return 0..0;
        };
        let end = start.saturating_add(size);
        start.min(len)..end.min(len)
    }

    /// Keeps only the items on this page.
    pub fn apply<T>(&self, mut items: Vec<T>) -> Vec<T> {
        let window = self.window(items.len());
        items.truncate(window.end);
        items.drain(..window.start);
        items
    }
}
