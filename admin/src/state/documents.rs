//! PDF upload form state.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentDraft {
    pub file_name: Option<String>,
    pub subject: String,
    pub grade: String,
    pub busy: bool,
    pub error: Option<String>,
}

impl DocumentDraft {
    pub fn choose_file(&mut self, name: Option<String>) {
        self.file_name = name.filter(|n| !n.is_empty());
        self.error = None;
    }

    /// Upload is allowed once a file is chosen and nothing is in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.file_name.is_some() && !self.busy
    }

    /// Text fields sent alongside the file.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 2] {
        [("subject", self.subject.trim()), ("grade", self.grade.trim())]
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.busy { "Processing..." } else { "Upload and Process" }
    }

    pub fn finish(&mut self, result: Result<(), String>) {
        self.busy = false;
        match result {
            Ok(()) => *self = Self::default(),
            Err(message) => self.error = Some(message),
        }
    }
}
