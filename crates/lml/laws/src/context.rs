use serde::{Deserialize, Serialize};

/// Supporting material laws may consult when judging a candidate.
///
/// An empty context is valid. Laws that need material which is absent rule
/// `Indeterminate`, never guess.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SupportContext {
    pub references: Vec<Reference>,
}

/// One piece of supporting material, addressable by locator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reference {
    /// How citations address this material (url, document id, paper handle).
    pub locator: String,
    /// The material itself.
    pub text: String,
}

impl SupportContext {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_reference(mut self, locator: impl Into<String>, text: impl Into<String>) -> Self {
        self.references.push(Reference {
            locator: locator.into(),
            text: text.into(),
        });
        self
    }

    /// Look up a reference by its locator.
    pub fn resolve(&self, locator: &str) -> Option<&Reference> {
        self.references.iter().find(|r| r.locator == locator)
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }
}
