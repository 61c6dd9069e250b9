use super::*;
use curriculum::Catalog;

fn loaded() -> CatalogState {
    let mut state = CatalogState::loading();
    state.finish(Ok(Catalog::from_json(
        r#"{"courses":[{"courseName":"Bio","units":[{"unit":"Cells","topics":[{"topic":"Osmosis","refresherNotes":{"overview":"Water movement."}}]}]}]}"#,
    )
    .unwrap()));
    state
}

#[test]
fn known_topic_uses_catalog_notes() {
    let ctx = chat_context(&loaded(), "Bio", "Cells", "Osmosis");
    assert_eq!(ctx.topic, "Osmosis");
    assert_eq!(ctx.overview.as_deref(), Some("Water movement."));
}

#[test]
fn unknown_topic_keeps_its_name() {
    let ctx = chat_context(&loaded(), "Bio", "Cells", "Diffusion");
    assert_eq!(ctx.topic, "Diffusion");
    assert_eq!(ctx.overview, None);
}

#[test]
fn missing_topic_falls_back_to_general() {
    assert_eq!(chat_context(&loaded(), "", "", " ").topic, GENERAL_TOPIC);
}
