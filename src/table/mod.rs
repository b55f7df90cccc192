//! Call table: row formatting and pagination

pub mod cells;
pub mod pagination;

pub use cells::{
    build_row, format_local_time, format_number, token_breakdown, truncate_preview, TableCell,
    TableRow, DEFAULT_PREVIEW_CHARS, ELLIPSIS, PLACEHOLDER,
};
pub use pagination::{
    clamp_page, page_slice, pagination_state, total_pages, PaginationState, DEFAULT_PAGE_SIZE,
};
