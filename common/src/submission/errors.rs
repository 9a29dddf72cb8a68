use serde_json::Value;

/// Flattens a field-keyed error body into one comma separated line.
///
/// `{"email_address": ["Enter a valid email."], "detail": "Bad"}` becomes
/// `"Enter a valid email., Bad"`. Field values that are arrays contribute
/// each element; any other value contributes itself. A top-level array is
/// treated like the values of an object.
pub fn flatten_error_body(body: &Value) -> String {
    let values: Vec<&Value> = match body {
        Value::Object(fields) => fields.values().collect(),
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    values
        .into_iter()
        .flat_map(|value| match value {
            Value::Array(items) => items.iter().map(render).collect::<Vec<_>>(),
            other => vec![render(other)],
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_field_single_message() {
        let body = json!({"email_address": ["Enter a valid email."]});
        assert_eq!(flatten_error_body(&body), "Enter a valid email.");
    }

    #[test]
    fn arrays_and_plain_strings_mix() {
        let body = json!({"a": ["x", "y"], "b": "z"});
        assert_eq!(flatten_error_body(&body), "x, y, z");
    }

    #[test]
    fn preserves_field_order_of_body() {
        let body: Value = serde_json::from_str(
            r#"{"phone_number": ["Too long."], "company_name": ["Required."]}"#,
        )
        .unwrap();
        assert_eq!(flatten_error_body(&body), "Too long., Required.");
    }

    #[test]
    fn only_one_level_is_flattened() {
        let body = json!({"a": [["x", "y"], "z"]});
        assert_eq!(flatten_error_body(&body), "x,y, z");
    }

    #[test]
    fn scalars_are_rendered() {
        assert_eq!(flatten_error_body(&json!({"code": 42, "ok": false})), "42, false");
        assert_eq!(flatten_error_body(&json!("Server exploded")), "Server exploded");
        assert_eq!(flatten_error_body(&json!({})), "");
    }

    #[test]
    fn top_level_array() {
        assert_eq!(flatten_error_body(&json!(["one", ["two"]])), "one, two");
    }
}
