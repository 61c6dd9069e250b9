use super::*;

#[test]
fn chunks_path_carries_page_and_size() {
    assert_eq!(
        chunks_path("bio_grade12", 2, 12),
        "/api/admin/documents/chunks/bio_grade12?page=2&page_size=12"
    );
}

#[test]
fn folder_names_are_percent_encoded() {
    assert_eq!(index_folder_path("Biology G12"), "/api/admin/documents/index/Biology%20G12");
}

#[test]
fn questions_path_omits_empty_tag_filter() {
    assert_eq!(questions_path("bio2015", 1, 10, &[]), "/api/admin/exams/bio2015/questions?page=1&page_size=10");
}

#[test]
fn questions_path_joins_tags_with_commas() {
    let tags = vec!["Unit 1".to_owned(), "Cells".to_owned()];
    assert_eq!(
        questions_path("bio2015", 3, 10, &tags),
        "/api/admin/exams/bio2015/questions?page=3&page_size=10&tags=Unit%201,Cells"
    );
}

#[test]
fn question_embedding_paths() {
    assert_eq!(question_embeddings_path("q7"), "/api/admin/exams/questions/q7/embeddings");
    assert_eq!(question_embedding_path("e1", "q7"), "/api/admin/exams/e1/questions/q7/embedding");
    assert_eq!(embedding_metadata_path("e1", "q7"), "/api/admin/exams/e1/questions/q7/embedding/metadata");
    assert_eq!(exam_embeddings_path("e1"), "/api/admin/exams/e1/embeddings");
}

#[test]
fn calls_are_unavailable_without_browser() {
    let cfg = BackendConfig::default();
    let result = futures::executor::block_on(fetch_exams(&cfg));
    assert_eq!(result, Err(ApiError::Unavailable));
}
