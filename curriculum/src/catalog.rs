//! Static course catalog.
//!
//! The JSON uses camelCase keys (`courseName`, `refresherNotes`, ...). Every
//! field other than the names is optional so partially written catalog
//! entries still load.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Characters kept in a unit-page overview excerpt.
pub const EXCERPT_CHARS: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub courses: Vec<Course>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub course_name: String,
    #[serde(default)]
    pub units: Vec<Unit>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub unit: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub topic: String,
    #[serde(default)]
    pub refresher_notes: RefresherNotes,
    #[serde(default)]
    pub diagrams: Vec<Diagram>,
    #[serde(default)]
    pub exam_tips: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefresherNotes {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub key_concepts: KeyConcepts,
    #[serde(default)]
    pub detailed_explanation: String,
    #[serde(default)]
    pub examples: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Concept name → explanation, in catalog order.
///
/// Stored as pairs so the page lists concepts in the order authors wrote them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyConcepts(pub Vec<(String, String)>);

impl KeyConcepts {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for KeyConcepts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KeyConcepts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedPairs;

        impl<'de> Visitor<'de> for OrderedPairs {
            type Value = KeyConcepts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of concept name to explanation")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    pairs.push((k, v));
                }
                Ok(KeyConcepts(pairs))
            }
        }

        deserializer.deserialize_map(OrderedPairs)
    }
}

/// One search match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub course: String,
    pub unit: String,
    pub topic: String,
    pub excerpt: String,
}

impl Catalog {
    /// Parse catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON or missing names.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.course_name == name)
    }

    #[must_use]
    pub fn unit(&self, course: &str, unit: &str) -> Option<&Unit> {
        self.course(course)?.unit(unit)
    }

    #[must_use]
    pub fn topic(&self, course: &str, unit: &str, topic: &str) -> Option<&Topic> {
        self.unit(course, unit)?.topic(topic)
    }

    /// Case-insensitive match over topic names and overviews.
    ///
    /// Blank queries match nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut hits = Vec::new();
        for course in &self.courses {
            for unit in &course.units {
                for topic in &unit.topics {
                    let name = topic.topic.to_lowercase();
                    let overview = topic.refresher_notes.overview.to_lowercase();
                    if name.contains(&needle) || overview.contains(&needle) {
                        hits.push(SearchHit {
                            course: course.course_name.clone(),
                            unit: unit.unit.clone(),
                            topic: topic.topic.clone(),
                            excerpt: topic.overview_excerpt(EXCERPT_CHARS),
                        });
                    }
                }
            }
        }
        hits
    }
}

impl Course {
    #[must_use]
    pub fn unit(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.unit == name)
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.units.iter().map(|u| u.topics.len()).sum()
    }
}

impl Unit {
    #[must_use]
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.topic == name)
    }
}

impl Topic {
    /// First `limit` characters of the overview, with `...` when cut short.
    #[must_use]
    pub fn overview_excerpt(&self, limit: usize) -> String {
        let overview = &self.refresher_notes.overview;
        match overview.char_indices().nth(limit) {
            Some((cut, _)) => format!("{}...", &overview[..cut]),
            None => overview.clone(),
        }
    }
}
