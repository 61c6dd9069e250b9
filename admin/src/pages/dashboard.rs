//! Landing page linking to each management area.

use leptos::prelude::*;

const SECTIONS: [(&str, &str, &str); 4] = [
    ("/documents", "Document Management", "Upload textbook PDFs for chunking."),
    ("/chunks", "Chunk Management", "Browse extracted chunks and create embeddings."),
    ("/exams", "Exam Management", "Upload past papers and manage question embeddings."),
    ("/query", "Query Documents", "Test retrieval against the indexed collections."),
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Admin Dashboard"</h1>
            <div class="card-grid">
                {SECTIONS
                    .into_iter()
                    .map(|(href, title, blurb)| {
                        view! {
                            <a class="card dashboard-card" href=href>
                                <h3>{title}</h3>
                                <p class="muted">{blurb}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
