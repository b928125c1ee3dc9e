//! Catalog-wide properties checked for every built-in template

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use slide_templates::schema::FieldKind;
use slide_templates::tree::BoundingBox;
use slide_templates::{catalog, Schema, SlideTemplate, Theme};

/// A list field somewhere in a schema, addressed by its key path
struct ListField {
    path: Vec<&'static str>,
    min_items: usize,
    max_items: usize,
}

fn list_fields(schema: &Schema, prefix: &[&'static str], out: &mut Vec<ListField>) {
    for (name, spec) in schema.fields() {
        let mut path = prefix.to_vec();
        path.push(name);
        match &spec.kind {
            FieldKind::List {
                min_items,
                max_items,
                ..
            } => out.push(ListField {
                path,
                min_items: *min_items,
                max_items: *max_items,
            }),
            FieldKind::Record(sub) => list_fields(sub, &path, out),
            _ => {}
        }
    }
}

fn get_path<'a>(value: &'a Value, path: &[&str]) -> &'a Value {
    path.iter().fold(value, |v, key| &v[*key])
}

fn set_path(value: &mut Value, path: &[&str], new: Value) {
    let mut target = value;
    for key in path {
        target = &mut target[*key];
    }
    *target = new;
}

/// Default data with the list at `path` resized to `count` by cycling its default items
fn with_item_count(template: &SlideTemplate, path: &[&str], count: usize) -> Value {
    let mut data = template.defaults();
    let items = get_path(&data, path)
        .as_array()
        .cloned()
        .expect("list default is an array");
    let resized: Vec<Value> = items.iter().cycle().take(count).cloned().collect();
    set_path(&mut data, path, Value::Array(resized));
    data
}

/// Text of exactly `len` characters made of short words
fn filler(len: usize) -> String {
    let mut text: String = "xo ".chars().cycle().take(len).collect();
    if text.ends_with(' ') {
        text.pop();
        text.push('x');
    }
    text
}

/// `default` with every text at its longest and every list at its longest
fn saturate(kind: &FieldKind, default: &Value) -> Value {
    match kind {
        FieldKind::Text { max_len, .. } => Value::String(filler(*max_len)),
        FieldKind::Image | FieldKind::Icon => default.clone(),
        FieldKind::List {
            item, max_items, ..
        } => {
            let items = default.as_array().cloned().unwrap_or_default();
            Value::Array(
                items
                    .iter()
                    .cycle()
                    .take(*max_items)
                    .map(|v| saturate(item, v))
                    .collect(),
            )
        }
        FieldKind::Record(schema) => Value::Object(
            schema
                .fields()
                .map(|(name, spec)| (name.to_string(), saturate(&spec.kind, &default[name])))
                .collect(),
        ),
    }
}

fn within(outer: &BoundingBox, inner: &BoundingBox) -> bool {
    const EPS: f64 = 0.5;
    inner.x >= outer.x - EPS
        && inner.y >= outer.y - EPS
        && inner.right() <= outer.right() + EPS
        && inner.bottom() <= outer.bottom() + EPS
}

#[test]
fn test_catalog_has_sixteen_unique_templates() {
    let ids = catalog().ids();
    assert_eq!(ids.len(), 16);
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), 16);
}

#[test]
fn test_defaults_satisfy_their_own_schema() {
    for template in catalog().iter() {
        assert_eq!(
            template.schema.check_defaults(),
            Ok(()),
            "defaults of {} are invalid",
            template.id
        );
        assert_eq!(template.validate(&template.defaults()), Ok(()), "{}", template.id);
    }
}

#[test]
fn test_render_without_data_matches_render_of_defaults() {
    let theme = Theme::default();
    for template in catalog().iter() {
        let from_none = template.render(None, &theme);
        let from_defaults = template.render(Some(&template.defaults()), &theme);
        assert_eq!(from_none, from_defaults, "{}", template.id);
    }
}

#[test]
fn test_empty_object_and_null_render_defaults() {
    let theme = Theme::default();
    for template in catalog().iter() {
        let from_none = template.render(None, &theme);
        assert_eq!(template.render(Some(&json!({})), &theme), from_none, "{}", template.id);
        assert_eq!(template.render(Some(&Value::Null), &theme), from_none, "{}", template.id);
    }
}

#[test]
fn test_default_render_shows_default_title() {
    let theme = Theme::default();
    for template in catalog().iter() {
        let defaults = template.defaults();
        let Some(title) = defaults.get("title").and_then(Value::as_str) else {
            continue;
        };
        let tree = template.render(None, &theme);
        assert_eq!(tree.template_id, template.id);
        let node = tree
            .find("title")
            .unwrap_or_else(|| panic!("{} has no title region", template.id));
        assert_eq!(node.text_content().as_deref(), Some(title), "{}", template.id);
    }
}

#[test]
fn test_render_is_deterministic() {
    let theme = Theme::default();
    for template in catalog().iter() {
        assert_eq!(
            template.render(None, &theme),
            template.render(None, &theme),
            "{}",
            template.id
        );
    }
}

#[test]
fn test_every_list_has_a_region() {
    let theme = Theme::default();
    for template in catalog().iter() {
        let mut lists = Vec::new();
        list_fields(&template.schema, &[], &mut lists);
        let tree = template.render(None, &theme);
        for list in &lists {
            let id = list.path.join(".");
            let defaults = template.defaults();
            let expected = get_path(&defaults, &list.path)
                .as_array()
                .map(Vec::len)
                .unwrap_or_default();
            let region = tree
                .find(&id)
                .unwrap_or_else(|| panic!("{} has no {} region", template.id, id));
            assert_eq!(region.children().len(), expected, "{} {}", template.id, id);
        }
    }
}

#[test]
fn test_boundary_item_counts_lay_out_inside_the_slide() {
    let theme = Theme::default();
    let mut checked = 0;
    for template in catalog().iter() {
        let mut lists = Vec::new();
        list_fields(&template.schema, &[], &mut lists);
        for list in &lists {
            let id = list.path.join(".");
            for count in [list.min_items, list.max_items] {
                let data = with_item_count(template, &list.path, count);
                assert_eq!(template.validate(&data), Ok(()), "{} {} x{}", template.id, id, count);

                let tree = template.render(Some(&data), &theme);
                let slide = tree.bounds();
                let region = tree.find(&id).expect("list region");
                assert_eq!(region.children().len(), count, "{} {} x{}", template.id, id, count);
                for (i, item) in region.children().iter().enumerate() {
                    assert_eq!(item.id.as_deref(), Some(format!("{}[{}]", id, i).as_str()));
                    assert!(
                        within(&slide, &item.bounds),
                        "{} {}[{}] overflows the slide: {:?}",
                        template.id,
                        id,
                        i,
                        item.bounds
                    );
                }
                checked += 1;
            }
        }
    }
    // 11 list fields, each at min and max
    assert_eq!(checked, 22);
}

#[test]
fn test_longest_content_stays_inside_the_slide() {
    let theme = Theme::default();
    for template in catalog().iter() {
        let data = saturate(
            &FieldKind::Record(template.schema.clone()),
            &template.defaults(),
        );
        assert_eq!(template.validate(&data), Ok(()), "{}", template.id);

        let tree = template.render(Some(&data), &theme);
        let slide = tree.bounds();
        let fields = template.schema.field_names();
        let mut overflows = Vec::new();
        // Only regions drawn from data; decoration may bleed off the edge
        tree.walk(&mut |region| {
            let Some(id) = region.id.as_deref() else {
                return;
            };
            let root = id.split(['.', '[']).next().unwrap_or(id);
            if !fields.iter().any(|field| *field == root) {
                return;
            }
            region.walk(&mut |node| {
                if !within(&slide, &node.bounds) {
                    overflows.push(format!("{} {:?}", id, node.bounds));
                }
            });
        });
        assert!(
            overflows.is_empty(),
            "{} overflows the slide: {:?}",
            template.id,
            overflows
        );
    }
}

#[test]
fn test_out_of_bounds_counts_fail_validation() {
    for template in catalog().iter() {
        let mut lists = Vec::new();
        list_fields(&template.schema, &[], &mut lists);
        for list in &lists {
            for count in [list.min_items - 1, list.max_items + 1] {
                let data = with_item_count(template, &list.path, count);
                let errors = template.validate(&data).unwrap_err();
                assert_eq!(errors.len(), 1, "{} x{}", template.id, count);
                assert!(errors[0].is_cardinality());
                assert_eq!(errors[0].path.to_string(), list.path.join("."));
            }
        }
    }
}

#[test]
fn test_schema_export_lists_every_field() {
    for template in catalog().iter() {
        let exported = template.schema.to_json_schema();
        assert_eq!(exported["type"], "object");
        for name in template.schema.field_names() {
            assert!(
                exported["properties"].get(name).is_some(),
                "{} export is missing {}",
                template.id,
                name
            );
        }
    }
}
