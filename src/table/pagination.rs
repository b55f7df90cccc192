//! Page slicing and pagination control state

use serde::Serialize;

/// Rows per page on the call table.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// What the pagination controls should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    /// Controls are hidden when everything fits on one page
    pub visible: bool,
    pub page: usize,
    pub total_pages: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl PaginationState {
    /// `Page X of Y`
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// Number of pages needed for `total` rows, 0 when there are none.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Clamp a requested page into `1..=total_pages` (1 when there are no pages).
pub fn clamp_page(page: usize, total: usize, per_page: usize) -> usize {
    page.clamp(1, total_pages(total, per_page).max(1))
}

/// Control state for `total` rows on `page`.
pub fn pagination_state(total: usize, page: usize, per_page: usize) -> PaginationState {
    let pages = total_pages(total, per_page);
    PaginationState {
        visible: pages > 1,
        page,
        total_pages: pages,
        prev_disabled: page <= 1,
        next_disabled: page >= pages,
    }
}

/// Items on `page` (1-based): `[(page-1)*size, page*size)`, clipped.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}
