//! Strict validation of slide data against a schema

use serde_json::{Map, Value};

use crate::assets::{ICON_QUERY_KEY, ICON_URL_KEY, IMAGE_PROMPT_KEY, IMAGE_URL_KEY};
use crate::error::{FieldPath, ValidationError, ValidationErrorKind};

use super::field::{FieldKind, Schema};

impl Schema {
    /// Check slide data against every declared bound
    ///
    /// `null` counts as empty data. Absent fields that have a default are
    /// accepted; absent fields without one (sub-fields of list items) are
    /// reported. Keys the schema does not declare are ignored.
    pub fn validate(&self, data: &Value) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        match data {
            Value::Null => {}
            Value::Object(map) => validate_record(self, map, &FieldPath::root(), &mut errors),
            other => errors.push(ValidationError::type_mismatch(
                FieldPath::root(),
                "object",
                json_type_name(other),
            )),
        }
        into_result(errors)
    }

    /// Check that every declared default satisfies its own field's bounds
    pub fn check_defaults(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_defaults_in(self, &FieldPath::root(), &mut errors);
        into_result(errors)
    }
}

fn into_result(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_defaults_in(schema: &Schema, path: &FieldPath, errors: &mut Vec<ValidationError>) {
    for (name, spec) in schema.fields() {
        let field_path = path.key(name);
        if let Some(default) = &spec.default {
            validate_value(&spec.kind, default, &field_path, errors);
        }
        if let FieldKind::Record(sub) = &spec.kind {
            check_defaults_in(sub, &field_path, errors);
        }
    }
}

fn validate_record(
    schema: &Schema,
    map: &Map<String, Value>,
    path: &FieldPath,
    errors: &mut Vec<ValidationError>,
) {
    for (name, spec) in schema.fields() {
        let field_path = path.key(name);
        match map.get(name).filter(|v| !v.is_null()) {
            Some(value) => validate_value(&spec.kind, value, &field_path, errors),
            None if spec.is_required() => errors.push(ValidationError::missing(field_path)),
            None => {}
        }
    }
}

pub(crate) fn validate_value(
    kind: &FieldKind,
    value: &Value,
    path: &FieldPath,
    errors: &mut Vec<ValidationError>,
) {
    match kind {
        FieldKind::Text {
            min_len, max_len, ..
        } => {
            let Some(text) = value.as_str() else {
                errors.push(mismatch(kind, value, path));
                return;
            };
            let length = text.chars().count();
            if length < *min_len {
                errors.push(ValidationError::new(
                    path.clone(),
                    ValidationErrorKind::StringTooShort {
                        length,
                        min: *min_len,
                    },
                ));
            } else if length > *max_len {
                errors.push(ValidationError::new(
                    path.clone(),
                    ValidationErrorKind::StringTooLong {
                        length,
                        max: *max_len,
                    },
                ));
            }
        }
        FieldKind::Image => validate_asset(value, IMAGE_URL_KEY, IMAGE_PROMPT_KEY, path, errors),
        FieldKind::Icon => validate_asset(value, ICON_URL_KEY, ICON_QUERY_KEY, path, errors),
        FieldKind::List {
            item,
            min_items,
            max_items,
        } => {
            let Some(items) = value.as_array() else {
                errors.push(mismatch(kind, value, path));
                return;
            };
            let count = items.len();
            if count < *min_items {
                errors.push(ValidationError::new(
                    path.clone(),
                    ValidationErrorKind::TooFewItems {
                        count,
                        min: *min_items,
                    },
                ));
            } else if count > *max_items {
                errors.push(ValidationError::new(
                    path.clone(),
                    ValidationErrorKind::TooManyItems {
                        count,
                        max: *max_items,
                    },
                ));
            }
            for (i, entry) in items.iter().enumerate() {
                validate_value(item, entry, &path.index(i), errors);
            }
        }
        FieldKind::Record(schema) => match value.as_object() {
            Some(map) => validate_record(schema, map, path, errors),
            None => errors.push(mismatch(kind, value, path)),
        },
    }
}

fn validate_asset(
    value: &Value,
    url_key: &str,
    text_key: &str,
    path: &FieldPath,
    errors: &mut Vec<ValidationError>,
) {
    let Some(map) = value.as_object() else {
        errors.push(ValidationError::type_mismatch(
            path.clone(),
            "object",
            json_type_name(value),
        ));
        return;
    };
    match map.get(url_key) {
        Some(Value::String(_)) => {}
        None | Some(Value::Null) => errors.push(ValidationError::missing(path.key(url_key))),
        Some(other) => errors.push(ValidationError::type_mismatch(
            path.key(url_key),
            "string",
            json_type_name(other),
        )),
    }
    match map.get(text_key) {
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(other) => errors.push(ValidationError::type_mismatch(
            path.key(text_key),
            "string",
            json_type_name(other),
        )),
    }
}

fn mismatch(kind: &FieldKind, value: &Value, path: &FieldPath) -> ValidationError {
    ValidationError::type_mismatch(path.clone(), kind.json_type(), json_type_name(value))
}

/// Name of a JSON value's type, as used in error messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;
    use serde_json::json;

    fn agenda() -> Schema {
        Schema::new()
            .field("title", FieldSpec::new(FieldKind::text(3, 40)).with_default("Agenda"))
            .field(
                "items",
                FieldSpec::new(FieldKind::list(
                    FieldKind::record(
                        Schema::new()
                            .field("title", FieldSpec::new(FieldKind::text(3, 60)))
                            .field("duration", FieldSpec::new(FieldKind::text(2, 20))),
                    ),
                    3,
                    6,
                ))
                .with_default(json!([
                    { "title": "One", "duration": "5 min" },
                    { "title": "Two", "duration": "5 min" },
                    { "title": "Three", "duration": "5 min" },
                ])),
            )
    }

    #[test]
    fn test_empty_data_is_valid() {
        assert!(agenda().validate(&json!({})).is_ok());
        assert!(agenda().validate(&Value::Null).is_ok());
    }

    #[test]
    fn test_non_object_rejected() {
        let errors = agenda().validate(&json!([1, 2])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].path.is_root());
    }

    #[test]
    fn test_text_bounds() {
        let errors = agenda().validate(&json!({ "title": "Ag" })).unwrap_err();
        assert_eq!(
            errors[0].kind,
            ValidationErrorKind::StringTooShort { length: 2, min: 3 }
        );

        let long = "x".repeat(41);
        let errors = agenda().validate(&json!({ "title": long })).unwrap_err();
        assert_eq!(
            errors[0].kind,
            ValidationErrorKind::StringTooLong { length: 41, max: 40 }
        );
    }

    #[test]
    fn test_length_counts_characters() {
        // three characters, nine bytes
        assert!(agenda().validate(&json!({ "title": "日本語" })).is_ok());
    }

    #[test]
    fn test_missing_item_sub_field_reported() {
        let data = json!({
            "items": [
                { "title": "One", "duration": "5 min" },
                { "title": "Two" },
                { "title": "Three", "duration": "5 min" },
            ]
        });
        let errors = agenda().validate(&data).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path.to_string(), "items[1].duration");
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingField);
    }

    #[test]
    fn test_all_errors_reported() {
        let data = json!({
            "title": 7,
            "items": [{ "title": "x", "duration": "5 min" }],
        });
        let errors = agenda().validate(&data).unwrap_err();
        let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, vec!["title", "items", "items[0].title"]);
    }

    #[test]
    fn test_asset_shape() {
        let schema = Schema::new().field("image", FieldSpec::new(FieldKind::Image));
        assert!(schema
            .validate(&json!({ "image": { "__image_url__": "a.png" } }))
            .is_ok());
        let errors = schema
            .validate(&json!({ "image": { "__image_prompt__": "x" } }))
            .unwrap_err();
        assert_eq!(errors[0].path.to_string(), "image.__image_url__");
    }

    #[test]
    fn test_check_defaults_catches_bad_default() {
        let schema = Schema::new().field(
            "title",
            FieldSpec::new(FieldKind::text(3, 10)).with_default("far too long for this"),
        );
        let errors = schema.check_defaults().unwrap_err();
        assert_eq!(errors[0].path.to_string(), "title");
        assert!(agenda().check_defaults().is_ok());
    }
}
