//! Normalization of partial slide data through schema defaults
//!
//! Rendering consumes only normalized data, so the schema default is the
//! single source of every fallback value. Normalization never fails and
//! never clamps: present values of the right type are kept as given.

use serde_json::{Map, Value};
use tracing::warn;

use crate::assets::{ICON_QUERY_KEY, ICON_URL_KEY, IMAGE_PROMPT_KEY, IMAGE_URL_KEY};
use crate::error::FieldPath;

use super::field::{FieldKind, Schema};
use super::validate::json_type_name;

impl Schema {
    /// Fill every absent or wrong-typed field from its default
    ///
    /// A list item missing a sub-field takes it from the default list item
    /// at the same index, wrapping around the default list.
    pub fn normalize(&self, data: Option<&Value>) -> Value {
        let map = match data {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                warn!(
                    got = json_type_name(other),
                    "slide data is not an object, using defaults"
                );
                None
            }
        };
        normalize_record(self, map, None, &FieldPath::root())
    }
}

fn normalize_record(
    schema: &Schema,
    data: Option<&Map<String, Value>>,
    fallback: Option<&Value>,
    path: &FieldPath,
) -> Value {
    let mut out = Map::new();
    for (name, spec) in schema.fields() {
        let field_path = path.key(name);
        let value = data.and_then(|m| m.get(name)).filter(|v| !v.is_null());
        let field_fallback = fallback
            .and_then(|f| f.get(name))
            .cloned()
            .or_else(|| spec.default_value());
        let normalized = normalize_value(&spec.kind, value, field_fallback, &field_path);
        out.insert(name.to_string(), normalized);
    }
    Value::Object(out)
}

fn normalize_value(
    kind: &FieldKind,
    value: Option<&Value>,
    fallback: Option<Value>,
    path: &FieldPath,
) -> Value {
    match kind {
        FieldKind::Text { .. } => match value {
            Some(Value::String(s)) => Value::String(s.clone()),
            other => {
                report_dropped(kind, other, path);
                fallback.unwrap_or_else(|| Value::String(String::new()))
            }
        },
        FieldKind::Image => {
            normalize_asset(value, fallback, IMAGE_URL_KEY, IMAGE_PROMPT_KEY, kind, path)
        }
        FieldKind::Icon => {
            normalize_asset(value, fallback, ICON_URL_KEY, ICON_QUERY_KEY, kind, path)
        }
        FieldKind::List { item, .. } => {
            let defaults = fallback
                .as_ref()
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            let items = match value {
                Some(Value::Array(items)) => items.iter().map(Some).collect::<Vec<_>>(),
                other => {
                    report_dropped(kind, other, path);
                    defaults.iter().map(Some).collect()
                }
            };
            let normalized = items
                .into_iter()
                .enumerate()
                .map(|(i, entry)| {
                    let item_fallback = if defaults.is_empty() {
                        None
                    } else {
                        Some(defaults[i % defaults.len()].clone())
                    };
                    normalize_value(item, entry, item_fallback, &path.index(i))
                })
                .collect();
            Value::Array(normalized)
        }
        FieldKind::Record(schema) => match value {
            Some(Value::Object(map)) => {
                normalize_record(schema, Some(map), fallback.as_ref(), path)
            }
            other => {
                report_dropped(kind, other, path);
                normalize_record(schema, None, fallback.as_ref(), path)
            }
        },
    }
}

fn normalize_asset(
    value: Option<&Value>,
    fallback: Option<Value>,
    url_key: &str,
    text_key: &str,
    kind: &FieldKind,
    path: &FieldPath,
) -> Value {
    let fallback_text = |key: &str| {
        fallback
            .as_ref()
            .and_then(|f| f.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let (url, text) = match value.and_then(Value::as_object) {
        Some(map) => {
            let url = match map.get(url_key).and_then(Value::as_str) {
                Some(url) => url.to_string(),
                None => fallback_text(url_key),
            };
            let text = match map.get(text_key).and_then(Value::as_str) {
                Some(text) => text.to_string(),
                None => fallback_text(text_key),
            };
            (url, text)
        }
        None => {
            report_dropped(kind, value, path);
            (fallback_text(url_key), fallback_text(text_key))
        }
    };
    let mut out = Map::new();
    out.insert(url_key.to_string(), Value::String(url));
    out.insert(text_key.to_string(), Value::String(text));
    Value::Object(out)
}

fn report_dropped(kind: &FieldKind, value: Option<&Value>, path: &FieldPath) {
    if let Some(value) = value {
        warn!(
            field = %path,
            expected = kind.json_type(),
            got = json_type_name(value),
            "dropping value of the wrong type, using default"
        );
    }
}
