use super::*;

#[test]
fn default_points_at_local_backend() {
    assert_eq!(BackendConfig::default().base_url(), "http://localhost:8001");
}

#[test]
fn blank_origin_falls_back_to_default() {
    assert_eq!(BackendConfig::new("   "), BackendConfig::default());
}

#[test]
fn trailing_slashes_are_dropped() {
    let cfg = BackendConfig::new("https://ingest.example.org//");
    assert_eq!(cfg.base_url(), "https://ingest.example.org");
}

#[test]
fn url_joins_with_single_slash() {
    let cfg = BackendConfig::new("http://backend:9000/");
    assert_eq!(cfg.url("/api/query"), "http://backend:9000/api/query");
    assert_eq!(cfg.url("api/query"), "http://backend:9000/api/query");
}

#[test]
fn from_document_without_browser_uses_default() {
    assert_eq!(BackendConfig::from_document(), BackendConfig::default());
}
