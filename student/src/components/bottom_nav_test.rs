use super::*;

#[test]
fn home_covers_catalog_pages() {
    assert!(is_active("/", "/"));
    assert!(is_active("/unit/Bio/Cells", "/"));
    assert!(is_active("/topic/Bio/Cells/Mitosis", "/"));
    assert!(!is_active("/search", "/"));
}

#[test]
fn items_match_their_subpaths_only() {
    assert!(is_active("/chat", "/chat"));
    assert!(!is_active("/chatter", "/chat"));
    assert!(is_active("/eslce-simulator", SIMULATOR_HREF));
    assert!(!is_active("/profile", "/chat"));
}

#[test]
fn five_destinations_in_order() {
    let hrefs: Vec<&str> = LEADING.iter().chain(TRAILING.iter()).map(|(h, _, _)| *h).collect();
    assert_eq!(hrefs, ["/", "/search", "/chat", "/profile"]);
}
