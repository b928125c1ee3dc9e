//! JSON Schema export for form generation and structured generation

use serde_json::{json, Map, Value};

use crate::assets::{ICON_QUERY_KEY, ICON_URL_KEY, IMAGE_PROMPT_KEY, IMAGE_URL_KEY};

use super::field::{FieldKind, FieldSpec, Schema};

impl Schema {
    /// Describe this schema as a JSON Schema object
    pub fn to_json_schema(&self) -> Value {
        record_schema(self)
    }
}

fn record_schema(schema: &Schema) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for (name, spec) in schema.fields() {
        properties.insert(name.to_string(), field_schema(spec));
        if spec.is_required() {
            required.push(Value::String(name.to_string()));
        }
    }
    let mut out = Map::new();
    out.insert("type".into(), json!("object"));
    out.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        out.insert("required".into(), Value::Array(required));
    }
    Value::Object(out)
}

fn field_schema(spec: &FieldSpec) -> Value {
    let mut out = match kind_schema(&spec.kind) {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    if !spec.description.is_empty() {
        out.insert("description".into(), json!(spec.description));
    }
    if let Some(default) = &spec.default {
        out.insert("default".into(), default.clone());
    }
    Value::Object(out)
}

fn kind_schema(kind: &FieldKind) -> Value {
    match kind {
        FieldKind::Text {
            min_len, max_len, ..
        } => json!({
            "type": "string",
            "minLength": min_len,
            "maxLength": max_len,
        }),
        FieldKind::Image => asset_schema(IMAGE_URL_KEY, IMAGE_PROMPT_KEY),
        FieldKind::Icon => asset_schema(ICON_URL_KEY, ICON_QUERY_KEY),
        FieldKind::List {
            item,
            min_items,
            max_items,
        } => json!({
            "type": "array",
            "items": kind_schema(item),
            "minItems": min_items,
            "maxItems": max_items,
        }),
        FieldKind::Record(schema) => record_schema(schema),
    }
}

fn asset_schema(url_key: &str, text_key: &str) -> Value {
    let mut properties = Map::new();
    properties.insert(url_key.to_string(), json!({ "type": "string" }));
    properties.insert(text_key.to_string(), json!({ "type": "string" }));
    json!({
        "type": "object",
        "properties": properties,
        "required": [url_key],
    })
}
