use super::*;

fn sample() -> Catalog {
    Catalog::from_json(
        r#"{"courses":[{"courseName":"Biology","units":[{"unit":"Cells","topics":[{"topic":"Membranes"}]}]},{"courseName":"Physics"}]}"#,
    )
    .unwrap()
}

#[test]
fn starts_pending() {
    let state = CatalogState::loading();
    assert!(state.loading);
    assert!(state.pending());
    assert!(state.course_names().is_empty());
}

#[test]
fn finish_ok_exposes_courses_in_order() {
    let mut state = CatalogState::loading();
    state.finish(Ok(sample()));
    assert!(!state.loading);
    assert!(!state.pending());
    assert_eq!(state.course_names(), ["Biology", "Physics"]);
    assert_eq!(state.topic("Biology", "Cells", "Membranes").unwrap().topic, "Membranes");
    assert!(state.unit("Biology", "Genetics").is_none());
}

#[test]
fn failed_first_load_reports_error() {
    let mut state = CatalogState::loading();
    state.finish(Err("offline".into()));
    assert_eq!(state.error.as_deref(), Some("offline"));
    assert!(!state.pending());
    assert!(state.course("Biology").is_none());
}

#[test]
fn failed_reload_keeps_catalog() {
    let mut state = CatalogState::loading();
    state.finish(Ok(sample()));
    state.finish(Err("offline".into()));
    assert!(state.course("Physics").is_some());
    assert_eq!(state.error.as_deref(), Some("offline"));
}
