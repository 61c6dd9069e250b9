//! App-wide catalog load state.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use curriculum::{Catalog, Course, Topic, Unit};

/// The catalog is fetched once when the app mounts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub catalog: Option<Catalog>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogState {
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Store the fetch result. A failed reload keeps an already loaded catalog.
    pub fn finish(&mut self, result: Result<Catalog, String>) {
        self.loading = false;
        match result {
            Ok(catalog) => {
                self.catalog = Some(catalog);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }

    #[must_use]
    pub fn course_names(&self) -> Vec<String> {
        self.catalog
            .iter()
            .flat_map(|c| c.courses.iter().map(|course| course.course_name.clone()))
            .collect()
    }

    #[must_use]
    pub fn course(&self, name: &str) -> Option<Course> {
        self.catalog.as_ref()?.course(name).cloned()
    }

    #[must_use]
    pub fn unit(&self, course: &str, unit: &str) -> Option<Unit> {
        self.catalog.as_ref()?.unit(course, unit).cloned()
    }

    #[must_use]
    pub fn topic(&self, course: &str, unit: &str, topic: &str) -> Option<Topic> {
        self.catalog.as_ref()?.topic(course, unit, topic).cloned()
    }

    /// Still waiting for the first load to finish.
    #[must_use]
    pub fn pending(&self) -> bool {
        self.catalog.is_none() && self.error.is_none()
    }
}
