//! Pure derivations behind the table view: search filtering, page slicing and
//! the page-index clamp.

use crate::api::User;

/// Page sizes offered to the operator.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];
/// Page size used until the operator picks another one.
pub const DEFAULT_PAGE_SIZE: usize = PAGE_SIZE_OPTIONS[0];

/// Whether `user` matches a non-empty search term.
///
/// The stringified id is matched as-is, the display name case-insensitively.
#[must_use]
pub fn matches(user: &User, term: &str) -> bool {
    let by_id = user
        .id
        .is_some_and(|id| id.to_string().contains(term));

    by_id || user.display_name().to_lowercase().contains(&term.to_lowercase())
}

/// Records matching `term`, in their original order. An empty term keeps everything.
#[must_use]
pub fn filter<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    if term.is_empty() {
        users.iter().collect()
    } else {
        users.iter().filter(|user| matches(user, term)).collect()
    }
}

/// Page index after the clamp: out-of-range pages fall back to the first one.
#[must_use]
pub const fn clamp_page_index(page_index: usize, page_size: usize, total: usize) -> usize {
    if page_index > 0 && page_index.saturating_mul(page_size) >= total {
        0
    } else {
        page_index
    }
}

/// One page of the filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub rows: Vec<&'a User>,
    pub page_index: usize,
    pub page_size: usize,
    /// Number of records matching the search term.
    pub total: usize,
}

impl<'a> Page<'a> {
    /// Slice `filtered` at `page_index`.
    #[must_use]
    pub fn slice(filtered: &[&'a User], page_index: usize, page_size: usize) -> Self {
        let start = page_index.saturating_mul(page_size);
        let rows = filtered.iter().skip(start).take(page_size).copied().collect();

        Self {
            rows,
            page_index,
            page_size,
            total: filtered.len(),
        }
    }

    /// Number of pages needed for `total` records.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    /// 1-based first and last row shown, or `None` for an empty page.
    #[must_use]
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = self.page_index * self.page_size + 1;
        Some((first, first + self.rows.len() - 1))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
