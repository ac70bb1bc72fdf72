//! Shapes an arbitrary JSON value into rows and columns.
//!
//! # Design
//! `normalize` is a pure function: an array is taken as-is, a single object
//! becomes a one-element list, anything else becomes an empty table. Column
//! headers come from the first row's keys only, in insertion order (the
//! crate enables serde_json's `preserve_order` for exactly this) — later
//! rows may carry different keys, and the resulting sparse or misaligned
//! cells are preserved behavior, not corrected here.

use serde::Serialize;
use serde_json::Value;

/// Rows and columns derived from a JSON response, ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TabularResult {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// One table row: (column-name, rendered-value) pairs in the source
/// object's own key order, which need not match `TabularResult::columns`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    pub cells: Vec<(String, String)>,
}

/// Convert a decoded JSON value into a `TabularResult`.
pub fn normalize(value: &Value) -> TabularResult {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![value],
        _ => Vec::new(),
    };

    let columns = match items.first() {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    };

    let rows = items.into_iter().map(row_from).collect();

    TabularResult { columns, rows }
}

fn row_from(value: &Value) -> Row {
    match value {
        Value::Object(map) => Row {
            cells: map
                .iter()
                .map(|(key, cell)| (key.clone(), render_cell(cell)))
                .collect(),
        },
        // Non-object list elements get a single unlabeled cell with their
        // literal rendering.
        other => Row {
            cells: vec![(String::new(), render_cell(other))],
        },
    }
}

/// Objects and arrays serialize to their JSON text; strings render without
/// quotes; numbers, booleans, and null render as their JSON literals.
fn render_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_wraps_into_single_row() {
        let table = normalize(&json!({"a": 1, "b": "x"}));
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(
            table.rows[0].cells,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "x".to_string()),
            ]
        );
    }

    #[test]
    fn columns_come_from_first_row_only() {
        let table = normalize(&json!([{"a": 1}, {"a": 2, "b": 3}]));
        assert_eq!(table.columns, vec!["a"]);
        assert_eq!(table.rows.len(), 2);
        // The second row still carries its extra cell; it simply has no
        // matching column header.
        assert_eq!(
            table.rows[1].cells,
            vec![
                ("a".to_string(), "2".to_string()),
                ("b".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn scalar_normalizes_to_empty_table() {
        for value in [json!("hello"), json!(42), json!(true), Value::Null] {
            let table = normalize(&value);
            assert!(table.columns.is_empty());
            assert!(table.rows.is_empty());
        }
    }

    #[test]
    fn empty_array_has_no_columns_and_no_rows() {
        let table = normalize(&json!([]));
        assert!(table.columns.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn nested_values_serialize_to_json_text() {
        let table = normalize(&json!({"tags": ["a", "b"], "meta": {"k": 1}}));
        assert_eq!(
            table.rows[0].cells,
            vec![
                ("tags".to_string(), r#"["a","b"]"#.to_string()),
                ("meta".to_string(), r#"{"k":1}"#.to_string()),
            ]
        );
    }

    #[test]
    fn null_and_bool_cells_render_as_json_literals() {
        let table = normalize(&json!({"gone": null, "ok": false}));
        assert_eq!(
            table.rows[0].cells,
            vec![
                ("gone".to_string(), "null".to_string()),
                ("ok".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn non_object_list_element_becomes_unlabeled_cell() {
        let table = normalize(&json!([{"a": 1}, 7]));
        assert_eq!(table.columns, vec!["a"]);
        assert_eq!(
            table.rows[1].cells,
            vec![(String::new(), "7".to_string())]
        );
    }

    #[test]
    fn normalize_is_pure() {
        let value = json!([{"a": 1, "b": {"nested": true}}, {"a": 2}]);
        assert_eq!(normalize(&value), normalize(&value));
    }

    #[test]
    fn column_order_follows_key_insertion_order() {
        let value: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let table = normalize(&value);
        assert_eq!(table.columns, vec!["z", "a", "m"]);
    }
}
