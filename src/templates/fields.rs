//! Read access to normalized slide data

use serde_json::Value;

use crate::assets::{IconRef, ImageRef};

static NULL: Value = Value::Null;

/// A view over one normalized record (the slide, or one list item)
///
/// Accessors never fail: a missing or mistyped value reads as empty.
/// After normalization through the template's schema that never happens.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    value: &'a Value,
}

impl<'a> Fields<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn text(&self, key: &str) -> &'a str {
        self.value.get(key).and_then(Value::as_str).unwrap_or("")
    }

    pub fn list(&self, key: &str) -> &'a [Value] {
        self.value
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// List items as records
    pub fn items(&self, key: &str) -> Vec<Fields<'a>> {
        self.list(key).iter().map(Fields::new).collect()
    }

    /// List items as plain strings
    pub fn strings(&self, key: &str) -> Vec<&'a str> {
        self.list(key)
            .iter()
            .map(|v| v.as_str().unwrap_or(""))
            .collect()
    }

    pub fn record(&self, key: &str) -> Fields<'a> {
        Fields::new(self.value.get(key).unwrap_or(&NULL))
    }

    pub fn image(&self, key: &str) -> ImageRef {
        self.value
            .get(key)
            .and_then(ImageRef::from_value)
            .unwrap_or_default()
    }

    pub fn icon(&self, key: &str) -> IconRef {
        self.value
            .get(key)
            .and_then(IconRef::from_value)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let data = json!({
            "title": "Agenda",
            "items": [{ "title": "One" }, { "title": "Two" }],
            "column": { "items": ["a", "b"] },
            "image": { "__image_url__": "x.jpg", "__image_prompt__": "x" },
        });
        let fields = Fields::new(&data);
        assert_eq!(fields.text("title"), "Agenda");
        assert_eq!(fields.items("items")[1].text("title"), "Two");
        assert_eq!(fields.record("column").strings("items"), vec!["a", "b"]);
        assert_eq!(fields.image("image").url, "x.jpg");
    }

    #[test]
    fn test_missing_reads_empty() {
        let data = json!({});
        let fields = Fields::new(&data);
        assert_eq!(fields.text("title"), "");
        assert!(fields.list("items").is_empty());
        assert_eq!(fields.record("nope").text("title"), "");
        assert_eq!(fields.icon("icon"), IconRef::default());
    }
}
