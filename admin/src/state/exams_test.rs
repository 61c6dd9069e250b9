use super::*;

fn question(id: &str, embedded: bool) -> Question {
    Question {
        question_id: id.into(),
        question_text: format!("Question {id}"),
        unit_tags: vec!["Unit 1".into()],
        topic_tags: vec![format!("topic-{id}")],
        has_embedding: embedded,
        ..Question::default()
    }
}

fn browser() -> QuestionBrowser {
    let mut b = QuestionBrowser::new("bio2015");
    b.load(QuestionsResponse {
        status: Some("success".into()),
        questions: vec![question("q1", false), question("q2", true)],
        pagination: Pagination { page: 3, page_size: 10, total_pages: 5, total_items: 42 },
    });
    b
}

fn embedding(id: &str) -> QuestionEmbedding {
    let mut metadata = Map::new();
    metadata.insert("subject".into(), Value::String("Biology".into()));
    metadata.insert("year".into(), serde_json::json!(2015));
    QuestionEmbedding { id: id.into(), document: "doc".into(), metadata }
}

#[test]
fn tab_labels() {
    assert_eq!(ExamTab::ALL.map(ExamTab::label), ["Exam List", "Upload Exam"]);
}

#[test]
fn exam_embed_button_hidden_once_indexed() {
    let exam = Exam { id: "e".into(), has_embeddings: true, ..Exam::default() };
    assert!(!ExamList::shows_embed_button(&exam));
    assert!(ExamList::shows_embed_button(&Exam::default()));
}

#[test]
fn exam_embedding_blocks_double_submit() {
    let mut list = ExamList::default();
    assert!(list.begin_embedding("e1"));
    assert!(!list.begin_embedding("e1"));
    assert!(list.is_processing("e1"));
    list.finish_embedding();
    assert!(!list.is_processing("e1"));
}

#[test]
fn byline_joins_subject_and_year() {
    let exam = Exam { subject: "Biology".into(), year: Some("2015".into()), ..Exam::default() };
    assert_eq!(exam_byline(&exam), "Biology • 2015");
    assert_eq!(exam_byline(&Exam { subject: "Chemistry".into(), ..Exam::default() }), "Chemistry");
}

#[test]
fn toggling_tag_resets_to_first_page() {
    let mut b = browser();
    b.toggle_tag("Unit 1");
    assert_eq!(b.pagination.page, 1);
    assert_eq!(b.selected_tags(), ["Unit 1"]);
}

#[test]
fn toggling_tag_twice_restores_selection() {
    let mut b = browser();
    b.toggle_tag("Cells");
    b.toggle_tag("Unit 1");
    b.toggle_tag("Cells");
    assert_eq!(b.selected_tags(), ["Unit 1"]);
    b.toggle_tag("Unit 1");
    assert!(b.selected_tags().is_empty());
    assert_eq!(b.pagination.page, 1);
}

#[test]
fn available_tags_keep_selected_ones_visible() {
    let mut b = browser();
    b.toggle_tag("Genetics");
    assert_eq!(b.available_tags(), ["Unit 1", "topic-q1", "topic-q2", "Genetics"]);
}

#[test]
fn search_narrows_current_page() {
    let mut b = browser();
    b.search = "topic-q2".into();
    let visible = b.visible_questions();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].question_id, "q2");
}

#[test]
fn embed_and_delete_buttons_follow_flag() {
    let b = browser();
    assert!(b.can_embed(&b.questions[0]));
    assert!(!b.can_embed(&b.questions[1]));
    assert!(!QuestionBrowser::can_delete(&b.questions[0]));
    assert!(QuestionBrowser::can_delete(&b.questions[1]));
}

#[test]
fn in_flight_embedding_disables_other_buttons() {
    let mut b = browser();
    assert!(b.begin_embedding("q1"));
    assert!(!b.can_embed(&b.questions[0]));
    assert!(b.is_processing("q1"));
}

#[test]
fn confirmed_create_flips_flag() {
    let mut b = browser();
    b.mark_embedded("q1", true);
    assert!(b.questions[0].has_embedding);
}

#[test]
fn confirmed_delete_flips_flag_and_closes_panel() {
    let mut b = browser();
    b.show_embedding(embedding("bio2015_q2"));
    assert!(b.inspecting("q2"));
    b.mark_embedded("q2", false);
    assert!(!b.questions[1].has_embedding);
    assert_eq!(b.embedding, None);
}

#[test]
fn metadata_update_sends_only_edited_keys() {
    let mut b = browser();
    b.show_embedding(embedding("bio2015_q2"));
    b.start_edit();
    assert!(b.editing);
    assert_eq!(b.field_text("year"), "2015");
    b.set_edit("subject", "Biology (revised)".into());
    assert_eq!(b.field_text("subject"), "Biology (revised)");
    let body = b.metadata_update();
    assert_eq!(body.len(), 1);
    assert_eq!(body["subject"], "Biology (revised)");
}

#[test]
fn cancel_edit_discards_changes() {
    let mut b = browser();
    b.show_embedding(embedding("bio2015_q2"));
    b.start_edit();
    b.set_edit("subject", "x".into());
    b.cancel_edit();
    assert!(!b.editing);
    assert!(!b.has_edits());
    assert_eq!(b.field_text("subject"), "Biology");
}

#[test]
fn edit_requires_open_embedding() {
    let mut b = browser();
    b.start_edit();
    assert!(!b.editing);
}

#[test]
fn pretty_metadata_is_indented_json() {
    let text = pretty_metadata(&embedding("x").metadata);
    assert!(text.contains("\n  \"subject\": \"Biology\""));
}
