use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::QueryArgs;
use crate::log;

pub(super) fn output_descriptor(value: JsonValue, args: &QueryArgs) -> Result<()> {
    let output = if let Some(ref fields) = args.fields {
        filter_fields(value, fields, args.filter_empty)
    } else if args.filter_empty {
        prune_empty(value).unwrap_or(JsonValue::Object(Map::new()))
    } else {
        value
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Keep only the requested top-level fields, in request order.
///
/// A requested field that doesn't exist becomes `null` (unless empty
/// values are filtered), so typos stay visible.
fn filter_fields(value: JsonValue, fields: &[String], filter_empty: bool) -> JsonValue {
    let JsonValue::Object(obj) = value else {
        return value;
    };

    let mut out = Map::new();
    for field in fields {
        match obj.get(field) {
            Some(v) => {
                let v = if filter_empty {
                    prune_empty(v.clone())
                } else {
                    Some(v.clone())
                };
                if let Some(v) = v {
                    out.insert(field.clone(), v);
                }
            }
            None if !filter_empty => {
                out.insert(field.clone(), JsonValue::Null);
            }
            None => {}
        }
    }
    JsonValue::Object(out)
}

/// Recursively drop null, "", [] and {} values.
///
/// Returns `None` when the value itself collapses to empty.
fn prune_empty(value: JsonValue) -> Option<JsonValue> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) if s.is_empty() => None,
        JsonValue::Array(arr) => {
            let pruned: Vec<JsonValue> = arr.into_iter().filter_map(prune_empty).collect();
            (!pruned.is_empty()).then_some(JsonValue::Array(pruned))
        }
        JsonValue::Object(obj) => {
            let pruned: Map<String, JsonValue> = obj
                .into_iter()
                .filter_map(|(k, v)| prune_empty(v).map(|v| (k, v)))
                .collect();
            (!pruned.is_empty()).then_some(JsonValue::Object(pruned))
        }
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prune_empty() {
        let value = json!({
            "title": "Test",
            "description": "",
            "logo": null,
            "nav": [],
            "sidebar": [{ "text": "A", "items": [] }],
        });

        let pruned = prune_empty(value).unwrap();
        assert_eq!(
            pruned,
            json!({ "title": "Test", "sidebar": [{ "text": "A" }] })
        );
    }

    #[test]
    fn test_prune_keeps_scalars() {
        // false and 0 are values, not "empty"
        let value = json!({ "enable": false, "count": 0 });
        assert_eq!(prune_empty(value.clone()), Some(value));
    }

    #[test]
    fn test_filter_fields() {
        let value = json!({ "site": { "title": "T" }, "nav": [], "search": {} });

        let out = filter_fields(value.clone(), &["site".into(), "missing".into()], false);
        assert_eq!(out, json!({ "site": { "title": "T" }, "missing": null }));

        let out = filter_fields(value, &["nav".into(), "missing".into()], true);
        assert_eq!(out, json!({}));
    }
}
