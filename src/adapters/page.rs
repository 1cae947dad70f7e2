use crate::domain::model::Content;
use crate::domain::ports::DomSink;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

/// In-memory page: element id to current content. Clones share the same elements.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: Arc<RwLock<HashMap<String, Content>>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an input element's value.
    pub fn with_value(self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(&id.into(), Content::Text(value.into()));
        self
    }

    pub fn content(&self, id: &str) -> Option<Content> {
        let elements = self.elements.read().unwrap_or_else(PoisonError::into_inner);
        elements.get(id).cloned()
    }

    pub fn snapshot(&self) -> BTreeMap<String, Content> {
        let elements = self.elements.read().unwrap_or_else(PoisonError::into_inner);
        elements
            .iter()
            .map(|(id, content)| (id.clone(), content.clone()))
            .collect()
    }
}

impl DomSink for MemoryPage {
    fn get(&self, id: &str) -> String {
        self.content(id)
            .map(|content| content.as_str().to_string())
            .unwrap_or_default()
    }

    fn set(&self, id: &str, content: Content) {
        let mut elements = self.elements.write().unwrap_or_else(PoisonError::into_inner);
        elements.insert(id.to_string(), content);
    }
}
