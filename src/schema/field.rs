//! Field declarations

use serde_json::Value;

/// Whether a text field holds a short label or running prose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Short,
    Long,
}

/// The semantic type of a field together with its bounds
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Text with a length range in characters
    Text {
        kind: TextKind,
        min_len: usize,
        max_len: usize,
    },
    /// An [`ImageRef`](crate::assets::ImageRef)
    Image,
    /// An [`IconRef`](crate::assets::IconRef)
    Icon,
    /// An ordered list of items of one kind
    List {
        item: Box<FieldKind>,
        min_items: usize,
        max_items: usize,
    },
    /// A nested object with its own fields
    Record(Schema),
}

impl FieldKind {
    pub fn text(min_len: usize, max_len: usize) -> Self {
        FieldKind::Text {
            kind: TextKind::Short,
            min_len,
            max_len,
        }
    }

    pub fn long_text(min_len: usize, max_len: usize) -> Self {
        FieldKind::Text {
            kind: TextKind::Long,
            min_len,
            max_len,
        }
    }

    pub fn list(item: FieldKind, min_items: usize, max_items: usize) -> Self {
        FieldKind::List {
            item: Box::new(item),
            min_items,
            max_items,
        }
    }

    pub fn record(schema: Schema) -> Self {
        FieldKind::Record(schema)
    }

    /// Name of the JSON type values of this kind must have
    pub fn json_type(&self) -> &'static str {
        match self {
            FieldKind::Text { .. } => "string",
            FieldKind::List { .. } => "array",
            FieldKind::Image | FieldKind::Icon | FieldKind::Record(_) => "object",
        }
    }
}

/// A field's kind, documentation, and default
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub description: &'static str,
    pub default: Option<Value>,
}

impl FieldSpec {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            description: "",
            default: None,
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// The value used when this field is absent
    ///
    /// A record without an explicit default is assembled from its
    /// sub-fields' defaults. `None` means the field is required.
    pub fn default_value(&self) -> Option<Value> {
        if let Some(default) = &self.default {
            return Some(default.clone());
        }
        match &self.kind {
            FieldKind::Record(schema)
                if schema.fields().all(|(_, f)| f.default_value().is_some()) =>
            {
                Some(schema.defaults())
            }
            _ => None,
        }
    }

    pub fn is_required(&self) -> bool {
        self.default_value().is_none()
    }
}

/// An ordered set of named fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    fields: Vec<(&'static str, FieldSpec)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field; declaration order is preserved
    pub fn field(mut self, name: &'static str, spec: FieldSpec) -> Self {
        self.fields.push((name, spec));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, spec)| spec)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldSpec)> + '_ {
        self.fields.iter().map(|(name, spec)| (*name, spec))
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The complete default slide data for this schema
    pub fn defaults(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (name, spec) in self.fields() {
            if let Some(default) = spec.default_value() {
                map.insert(name.to_string(), default);
            }
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn column() -> Schema {
        Schema::new()
            .field(
                "title",
                FieldSpec::new(FieldKind::text(2, 40)).with_default("Current State"),
            )
            .field(
                "items",
                FieldSpec::new(FieldKind::list(FieldKind::text(5, 80), 3, 5))
                    .with_default(json!(["aaaaa", "bbbbb", "ccccc"])),
            )
    }

    #[test]
    fn test_field_order_preserved() {
        let schema = Schema::new()
            .field("b", FieldSpec::new(FieldKind::text(1, 5)))
            .field("a", FieldSpec::new(FieldKind::text(1, 5)));
        assert_eq!(schema.field_names(), vec!["b", "a"]);
    }

    #[test]
    fn test_record_default_from_sub_fields() {
        let spec = FieldSpec::new(FieldKind::record(column()));
        assert_eq!(
            spec.default_value(),
            Some(json!({ "title": "Current State", "items": ["aaaaa", "bbbbb", "ccccc"] }))
        );
        assert!(!spec.is_required());
    }

    #[test]
    fn test_item_sub_field_without_default_is_required() {
        let spec = FieldSpec::new(FieldKind::text(3, 60)).describe("Agenda item title");
        assert!(spec.is_required());
        assert_eq!(spec.description, "Agenda item title");
    }

    #[test]
    fn test_defaults_object() {
        let schema = Schema::new()
            .field("title", FieldSpec::new(FieldKind::text(3, 40)).with_default("Agenda"))
            .field("left", FieldSpec::new(FieldKind::record(column())));
        let defaults = schema.defaults();
        assert_eq!(defaults["title"], "Agenda");
        assert_eq!(defaults["left"]["title"], "Current State");
    }
}
