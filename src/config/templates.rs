//! Message templates.
//!
//! A template is a named literal body that the operator can drop into the
//! composer with one key. The set is built once per profile and never
//! changes afterwards.

use serde::{Deserialize, Serialize};

/// One named message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub body: String,
}

impl Template {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Ordered, read-only collection of templates.
///
/// Order is the declaration order; it decides which key selects which
/// template in the terminal UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Build from `(name, body)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, body)| Template::new(name, body))
                .collect(),
        )
    }

    /// Look a template up by name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Template at a 0-based position.
    pub fn get_index(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// First name that appears more than once, if any.
    pub fn duplicate_name(&self) -> Option<&str> {
        self.templates
            .iter()
            .enumerate()
            .find(|(i, t)| self.templates[..*i].iter().any(|prev| prev.name == t.name))
            .map(|(_, t)| t.name.as_str())
    }
}
