//! Document upload page.

use leptos::prelude::*;

use crate::components::document_upload_form::DocumentUploadForm;
use crate::util::dialog;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let on_success = Callback::new(|()| dialog::alert("Document processed successfully!"));
    view! {
        <div class="page">
            <h1>"Document Management"</h1>
            <div class="narrow">
                <DocumentUploadForm on_success=on_success/>
            </div>
        </div>
    }
}
