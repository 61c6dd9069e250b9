//! Page arithmetic behind the pagination bars.
//!
//! The backend echoes `{page, page_size, total_pages, total_items}`; these
//! helpers turn that into the "Showing X - Y of Z" line and the windowed
//! page-number strip.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use crate::net::types::Pagination;

/// Pages needed for `total_items`; zero items or a zero page size give 0.
#[must_use]
pub fn total_pages(total_items: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// One-based inclusive item range shown on the current page.
#[must_use]
pub fn showing_range(p: &Pagination) -> (u32, u32) {
    if p.total_items == 0 || p.page_size == 0 {
        return (0, 0);
    }
    let page = p.page.max(1);
    let start = (page - 1).saturating_mul(p.page_size).saturating_add(1);
    let end = page.saturating_mul(p.page_size).min(p.total_items);
    (start.min(end), end)
}

#[must_use]
pub fn showing_label(p: &Pagination) -> String {
    let (start, end) = showing_range(p);
    format!("Showing {start} - {end} of {} results", p.total_items)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// First, last, and the pages either side of `page`, with gaps marked.
#[must_use]
pub fn page_window(page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    let page = page.clamp(1, total_pages);
    let mut items = vec![PageItem::Page(1)];
    if page > 3 {
        items.push(PageItem::Ellipsis);
    }
    let lo = page.saturating_sub(1).max(2);
    let hi = (page + 1).min(total_pages.saturating_sub(1));
    items.extend((lo..=hi).map(PageItem::Page));
    if page + 2 < total_pages {
        items.push(PageItem::Ellipsis);
    }
    if total_pages > 1 {
        items.push(PageItem::Page(total_pages));
    }
    items
}

#[must_use]
pub fn has_previous(page: u32) -> bool {
    page > 1
}

#[must_use]
pub fn has_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}
