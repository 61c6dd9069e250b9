use super::*;

fn at(page: u32, page_size: u32, total_items: u32) -> Pagination {
    Pagination { page, page_size, total_pages: total_pages(total_items, page_size), total_items }
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(25, 12), 3);
    assert_eq!(total_pages(24, 12), 2);
    assert_eq!(total_pages(1, 10), 1);
}

#[test]
fn total_pages_of_nothing_is_zero() {
    assert_eq!(total_pages(0, 12), 0);
    assert_eq!(total_pages(30, 0), 0);
}

#[test]
fn range_on_full_and_last_pages() {
    assert_eq!(showing_range(&at(1, 12, 25)), (1, 12));
    assert_eq!(showing_range(&at(3, 12, 25)), (25, 25));
}

#[test]
fn range_of_empty_listing_is_zero() {
    assert_eq!(showing_range(&at(1, 12, 0)), (0, 0));
}

#[test]
fn showing_label_text() {
    assert_eq!(showing_label(&at(2, 10, 35)), "Showing 11 - 20 of 35 results");
}

#[test]
fn small_listing_shows_every_page() {
    use PageItem::Page;
    assert_eq!(page_window(1, 3), [Page(1), Page(2), Page(3)]);
    assert_eq!(page_window(1, 1), [Page(1)]);
}

#[test]
fn window_marks_gaps_on_both_sides() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(page_window(5, 10), [Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]);
}

#[test]
fn window_near_edges_has_one_gap() {
    use PageItem::{Ellipsis, Page};
    assert_eq!(page_window(3, 10), [Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]);
    assert_eq!(page_window(8, 10), [Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]);
    assert_eq!(page_window(10, 10), [Page(1), Ellipsis, Page(9), Page(10)]);
}

#[test]
fn no_pages_no_window() {
    assert!(page_window(1, 0).is_empty());
}

#[test]
fn previous_and_next_gating() {
    assert!(!has_previous(1));
    assert!(has_previous(2));
    assert!(has_next(2, 3));
    assert!(!has_next(3, 3));
    assert!(!has_next(1, 0));
}
