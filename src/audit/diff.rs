//! Human-readable change summaries for audit entries

use serde_json::Value;

/// Describe the difference between two JSON values.
///
/// Objects are compared field by field (top level only); anything else is
/// shown as `before -> after`. Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    if before == after {
        return None;
    }

    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return Some(format!("{} -> {}", format_value(before), format_value(after)));
    };

    let changed_or_removed = before_obj.iter().filter_map(|(key, old)| match after_obj.get(key) {
        Some(new) if new == old => None,
        Some(new) => Some(format!("{}: {} -> {}", key, format_value(old), format_value(new))),
        None => Some(format!("{}: {} -> (removed)", key, format_value(old))),
    });

    let added = after_obj
        .iter()
        .filter(|(key, _)| !before_obj.contains_key(*key))
        .map(|(key, new)| format!("{}: (added) -> {}", key, format_value(new)));

    let changes: Vec<String> = changed_or_removed.chain(added).collect();
    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            format!("\"{}...\"", s.chars().take(47).collect::<String>())
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_change() {
        assert_eq!(
            generate_diff(&json!(8000), &json!(5000)),
            Some("8000 -> 5000".to_string())
        );
        assert_eq!(
            generate_diff(&json!(null), &json!(5000)),
            Some("null -> 5000".to_string())
        );
    }

    #[test]
    fn test_object_field_changes() {
        let before = json!({"category": "food", "limit": 8000, "old": true});
        let after = json!({"category": "food", "limit": 5000, "new": 1});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("limit: 8000 -> 5000"));
        assert!(diff.contains("old: true -> (removed)"));
        assert!(diff.contains("new: (added) -> 1"));
        assert!(!diff.contains("category"));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"category": "food", "limit": 100});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_long_string_truncation() {
        let before = json!({"note": "a".repeat(100)});
        let after = json!({"note": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }
}
