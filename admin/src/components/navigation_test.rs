use super::*;

#[test]
fn dashboard_only_active_at_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/exams", "/"));
}

#[test]
fn sections_match_sub_paths() {
    assert!(is_active("/exams", "/exams"));
    assert!(is_active("/exams/bio2015", "/exams"));
    assert!(!is_active("/examsx", "/exams"));
    assert!(!is_active("/chunks", "/exams"));
}

#[test]
fn nav_lists_every_section() {
    let labels: Vec<&str> = NAV_ITEMS.iter().map(|(_, l)| *l).collect();
    assert_eq!(labels, ["Dashboard", "Documents", "Chunks", "Exams", "Query"]);
}
