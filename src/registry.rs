//! Template registry keyed by template id

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::error::ValidationError;
use crate::templates::{self, SlideTemplate};

/// Errors that can occur during registry operations
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// Two templates claim the same id
    #[error("duplicate template id: {id}")]
    Duplicate { id: String },

    /// No template with this id
    #[error("unknown template: {id}{}", format_suggestions(.suggestions))]
    NotFound { id: String, suggestions: Vec<String> },
}

pub(crate) fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}

/// Registry of slide templates in registration order
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: Vec<SlideTemplate>,
    index: HashMap<&'static str, usize>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the whole built-in catalog
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for template in templates::builtin() {
            registry.register(template)?;
        }
        Ok(registry)
    }

    /// Register a template; ids must be unique
    pub fn register(&mut self, template: SlideTemplate) -> Result<(), RegistryError> {
        if self.index.contains_key(template.id) {
            return Err(RegistryError::Duplicate {
                id: template.id.to_string(),
            });
        }
        debug!(template = template.id, "registered template");
        self.index.insert(template.id, self.templates.len());
        self.templates.push(template);
        Ok(())
    }

    /// Get a template by id
    pub fn get(&self, id: &str) -> Option<&SlideTemplate> {
        self.index.get(id).map(|&i| &self.templates[i])
    }

    /// Get a template by id, suggesting close ids when it is missing
    pub fn lookup(&self, id: &str) -> Result<&SlideTemplate, RegistryError> {
        self.get(id).ok_or_else(|| RegistryError::NotFound {
            id: id.to_string(),
            suggestions: self.find_similar(id, 4),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Templates in registration order
    pub fn iter(&self) -> impl Iterator<Item = &SlideTemplate> {
        self.templates.iter()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.templates.iter().map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Validate every template's defaults against its own schema
    ///
    /// Returns each failing template id with its errors.
    pub fn check(&self) -> Vec<(&'static str, Vec<ValidationError>)> {
        self.templates
            .iter()
            .filter_map(|t| t.schema.check_defaults().err().map(|errors| (t.id, errors)))
            .collect()
    }

    /// Ids within `max_distance` edits of `target`, closest first
    fn find_similar(&self, target: &str, max_distance: usize) -> Vec<String> {
        let mut candidates: Vec<(&str, usize)> = self
            .templates
            .iter()
            .filter_map(|t| {
                let dist = levenshtein_distance(t.id, target);
                if dist <= max_distance && dist > 0 {
                    Some((t.id, dist))
                } else {
                    None
                }
            })
            .collect();

        candidates.sort_by_key(|(_, d)| *d);
        candidates
            .into_iter()
            .map(|(id, _)| id.to_string())
            .take(3)
            .collect()
    }
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    // Single rolling row
    let mut row: Vec<usize> = (0..=n).collect();
    for (i, ca) in a_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for j in 1..=n {
            let cost = usize::from(*ca != b_chars[j - 1]);
            let next = (row[j] + 1).min(row[j - 1] + 1).min(diagonal + cost);
            diagonal = row[j];
            row[j] = next;
        }
    }
    row[n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("hello", "hello"), 0);
        assert_eq!(levenshtein_distance("server", "servr"), 1);
        assert_eq!(levenshtein_distance("cat", "dog"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
    }

    #[test]
    fn test_builtin_registers_catalog_in_order() {
        let registry = TemplateRegistry::builtin().expect("unique ids");
        assert_eq!(registry.len(), 16);
        assert_eq!(registry.ids()[0], "corporate-intro-slide");
        assert_eq!(registry.ids()[15], "minimal-table-of-contents");
        assert!(registry.contains("creative-timeline-slide"));
    }

    #[test]
    fn test_registry_duplicate_error() {
        let mut registry = TemplateRegistry::new();
        registry
            .register(templates::minimal::quote::template())
            .expect("first registration");
        let err = registry
            .register(templates::minimal::quote::template())
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::Duplicate {
                id: "minimal-quote-slide".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_suggests_close_ids() {
        let registry = TemplateRegistry::builtin().expect("unique ids");
        let err = registry.lookup("minimal-qoute-slide").unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"unknown template: minimal-qoute-slide (did you mean minimal-quote-slide?)");
    }

    #[test]
    fn test_lookup_without_suggestions() {
        let registry = TemplateRegistry::builtin().expect("unique ids");
        let err = registry.lookup("pie-chart").unwrap_err();
        assert_eq!(err.to_string(), "unknown template: pie-chart");
    }

    #[test]
    fn test_builtin_defaults_pass_check() {
        let registry = TemplateRegistry::builtin().expect("unique ids");
        assert!(registry.check().is_empty());
    }
}
