//! File-input access for the upload forms (browser only).

use leptos::prelude::*;

/// First file chosen in `input`, if any.
pub fn selected_file(input: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

/// Read a file's contents as UTF-8 text.
///
/// # Errors
///
/// The browser's read failure, as text.
pub async fn read_text(file: &web_sys::File) -> Result<String, String> {
    let promise: js_sys::Promise = file.text();
    let value = wasm_bindgen_futures::JsFuture::from(promise).await.map_err(|e| format!("{e:?}"))?;
    value.as_string().ok_or_else(|| "file is not text".to_owned())
}

/// Multipart body with `file` under `field` plus any extra text fields.
///
/// # Errors
///
/// The browser's `FormData` failure, as text.
pub fn form_data(file: &web_sys::File, field: &str, fields: &[(&str, &str)]) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob_and_filename(field, file, &file.name()).map_err(|e| format!("{e:?}"))?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(|e| format!("{e:?}"))?;
    }
    Ok(form)
}

/// Clear the picker after a successful upload.
pub fn reset(input: NodeRef<leptos::html::Input>) {
    if let Some(el) = input.get_untracked() {
        el.set_value("");
    }
}
