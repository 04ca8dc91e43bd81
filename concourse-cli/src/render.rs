/// Table and JSON formatting for command results using comfy-table

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::DateTime;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use concourse_client::{AddResult, BrowseResult, GetResult, RemoveResult, Value};
use serde_json::json;

/// Output format for command results
#[derive(Clone, Copy, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format a value for display in a table cell
fn format_value(value: &Value) -> String {
    value.to_string()
}

/// Map a value to JSON. Links and tags keep their display decoration so
/// they stay distinguishable from plain strings.
fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Boolean(b) => json!(b),
        Value::Integer(n) => json!(n),
        Value::Double(d) => json!(d),
        Value::String(s) => json!(s),
        Value::Tag(s) => json!(format!("`{}`", s)),
        Value::Link(record) => json!(format!("@{}", record)),
        Value::Timestamp(micros) => json!(micros),
    }
}

/// Render a microsecond instant as a human readable UTC time
pub fn format_micros(micros: i64) -> String {
    DateTime::from_timestamp_micros(micros)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S%.6f UTC").to_string())
        .unwrap_or_else(|| micros.to_string())
}

pub fn add_result(result: &AddResult) -> String {
    match result {
        AddResult::Created(record) => format!("Created record {}", record),
        AddResult::Applied(true) => "Added".to_string(),
        AddResult::Applied(false) => "Value already present".to_string(),
        AddResult::PerRecord(results) => flag_table(results, "added"),
    }
}

pub fn remove_result(result: &RemoveResult) -> String {
    match result {
        RemoveResult::Applied(true) => "Removed".to_string(),
        RemoveResult::Applied(false) => "Value was not present".to_string(),
        RemoveResult::PerRecord(results) => flag_table(results, "removed"),
    }
}

pub fn set_result(created: Option<i64>) -> String {
    match created {
        Some(record) => format!("Created record {}", record),
        None => "Set".to_string(),
    }
}

fn flag_table(results: &BTreeMap<i64, bool>, heading: &str) -> String {
    let mut table = new_table();
    table.set_header(vec![Cell::new("record"), Cell::new(heading)]);
    for (record, flag) in results {
        table.add_row(vec![Cell::new(record), Cell::new(flag)]);
    }
    table.to_string()
}

pub fn get_result(result: &GetResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => get_table(result),
        OutputFormat::Json => get_json(result),
    }
}

fn get_table(result: &GetResult) -> String {
    match result {
        GetResult::Value(None) => "(no data)".to_string(),
        GetResult::Value(Some(value)) => format_value(value),
        GetResult::PerRecord(values) => {
            if values.is_empty() {
                return "(no data)".to_string();
            }
            let mut table = new_table();
            table.set_header(vec![Cell::new("record"), Cell::new("value")]);
            for (record, value) in values {
                table.add_row(vec![Cell::new(record), Cell::new(format_value(value))]);
            }
            table.to_string()
        }
        GetResult::PerKey(values) => {
            if values.is_empty() {
                return "(no data)".to_string();
            }
            let mut table = new_table();
            table.set_header(vec![Cell::new("key"), Cell::new("value")]);
            for key in sorted_keys(values) {
                table.add_row(vec![Cell::new(&key), Cell::new(format_value(&values[&key]))]);
            }
            table.to_string()
        }
        GetResult::PerKeyRecord(records) => {
            if records.is_empty() {
                return "(no data)".to_string();
            }
            let mut table = new_table();
            table.set_header(vec![
                Cell::new("record"),
                Cell::new("key"),
                Cell::new("value"),
            ]);
            for (record, values) in records {
                for key in sorted_keys(values) {
                    table.add_row(vec![
                        Cell::new(record),
                        Cell::new(&key),
                        Cell::new(format_value(&values[&key])),
                    ]);
                }
            }
            table.to_string()
        }
    }
}

fn get_json(result: &GetResult) -> String {
    let json = match result {
        GetResult::Value(value) => value
            .as_ref()
            .map(value_to_json)
            .unwrap_or(serde_json::Value::Null),
        GetResult::PerRecord(values) => serde_json::Value::Object(
            values
                .iter()
                .map(|(record, value)| (record.to_string(), value_to_json(value)))
                .collect(),
        ),
        GetResult::PerKey(values) => serde_json::Value::Object(
            sorted_keys(values)
                .into_iter()
                .map(|key| {
                    let value = value_to_json(&values[&key]);
                    (key, value)
                })
                .collect(),
        ),
        GetResult::PerKeyRecord(records) => serde_json::Value::Object(
            records
                .iter()
                .map(|(record, values)| {
                    let inner = sorted_keys(values)
                        .into_iter()
                        .map(|key| {
                            let value = value_to_json(&values[&key]);
                            (key, value)
                        })
                        .collect();
                    (record.to_string(), serde_json::Value::Object(inner))
                })
                .collect(),
        ),
    };
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
}

pub fn browse_result(result: &BrowseResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => browse_table(result),
        OutputFormat::Json => browse_json(result),
    }
}

fn browse_table(result: &BrowseResult) -> String {
    match result {
        BrowseResult::Index(index) => {
            if index.is_empty() {
                return "(no data)".to_string();
            }
            let mut table = new_table();
            table.set_header(vec![Cell::new("value"), Cell::new("records")]);
            for (value, records) in index {
                table.add_row(vec![
                    Cell::new(format_value(value)),
                    Cell::new(record_list(records)),
                ]);
            }
            table.to_string()
        }
        BrowseResult::PerKey(entries) => {
            if entries.is_empty() {
                return "(no data)".to_string();
            }
            let mut table = new_table();
            table.set_header(vec![
                Cell::new("key"),
                Cell::new("value"),
                Cell::new("records"),
            ]);
            for key in sorted_keys(entries) {
                for (value, records) in &entries[&key] {
                    table.add_row(vec![
                        Cell::new(&key),
                        Cell::new(format_value(value)),
                        Cell::new(record_list(records)),
                    ]);
                }
            }
            table.to_string()
        }
    }
}

fn browse_json(result: &BrowseResult) -> String {
    let index_json = |index: &BTreeMap<Value, BTreeSet<i64>>| {
        serde_json::Value::Object(
            index
                .iter()
                .map(|(value, records)| {
                    (
                        value.to_string(),
                        json!(records.iter().copied().collect::<Vec<_>>()),
                    )
                })
                .collect(),
        )
    };
    let json = match result {
        BrowseResult::Index(index) => index_json(index),
        BrowseResult::PerKey(entries) => serde_json::Value::Object(
            sorted_keys(entries)
                .into_iter()
                .map(|key| {
                    let inner = index_json(&entries[&key]);
                    (key, inner)
                })
                .collect(),
        ),
    };
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
}

pub fn audit_log(log: &BTreeMap<i64, String>) -> String {
    if log.is_empty() {
        return "(no revisions)".to_string();
    }
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("timestamp"),
        Cell::new("time"),
        Cell::new("revision"),
    ]);
    for (micros, revision) in log {
        table.add_row(vec![
            Cell::new(micros),
            Cell::new(format_micros(*micros)),
            Cell::new(revision),
        ]);
    }
    table.to_string()
}

pub fn describe_keys(keys: &BTreeSet<String>) -> String {
    if keys.is_empty() {
        return "(no data)".to_string();
    }
    let mut table = new_table();
    table.set_header(vec![Cell::new("key")]);
    for key in keys {
        table.add_row(vec![Cell::new(key)]);
    }
    table.to_string()
}

fn record_list(records: &BTreeSet<i64>) -> String {
    let items: Vec<String> = records.iter().map(|r| r.to_string()).collect();
    items.join(", ")
}

fn sorted_keys<V>(map: &HashMap<String, V>) -> Vec<String> {
    let mut keys: Vec<String> = map.keys().cloned().collect();
    keys.sort();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_result_lines() {
        assert_eq!(add_result(&AddResult::Created(7)), "Created record 7");
        assert_eq!(add_result(&AddResult::Applied(true)), "Added");
        assert_eq!(
            add_result(&AddResult::Applied(false)),
            "Value already present"
        );
    }

    #[test]
    fn test_flag_table_lists_each_record() {
        let mut results = BTreeMap::new();
        results.insert(1, true);
        results.insert(2, false);
        let output = add_result(&AddResult::PerRecord(results));

        assert!(output.contains("record"));
        assert!(output.contains("added"));
        assert!(output.contains("true"));
        assert!(output.contains("false"));
    }

    #[test]
    fn test_get_table_shapes() {
        assert_eq!(get_table(&GetResult::Value(None)), "(no data)");
        assert_eq!(
            get_table(&GetResult::Value(Some(Value::string("jeff")))),
            "jeff"
        );

        let mut per_record = BTreeMap::new();
        per_record.insert(1, Value::integer(17));
        let output = get_table(&GetResult::PerRecord(per_record));
        assert!(output.contains("17"));
        assert!(output.contains("record"));
    }

    #[test]
    fn test_get_json_nests_by_record_and_key() {
        let mut values = HashMap::new();
        values.insert("name".to_string(), Value::string("jeff"));
        let mut records = BTreeMap::new();
        records.insert(1, values);

        let output = get_json(&GetResult::PerKeyRecord(records));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["1"]["name"], "jeff");
    }

    #[test]
    fn test_value_json_keeps_link_and_tag_decoration() {
        assert_eq!(value_to_json(&Value::link(5)), json!("@5"));
        assert_eq!(value_to_json(&Value::tag("vip")), json!("`vip`"));
        assert_eq!(value_to_json(&Value::integer(3)), json!(3));
    }

    #[test]
    fn test_audit_log_renders_utc_time() {
        let mut log = BTreeMap::new();
        log.insert(0, "ADD name AS jeff IN 1".to_string());
        let output = audit_log(&log);

        assert!(output.contains("1970-01-01 00:00:00"));
        assert!(output.contains("ADD name AS jeff IN 1"));
    }

    #[test]
    fn test_browse_table_joins_records() {
        let mut index = BTreeMap::new();
        let mut records = BTreeSet::new();
        records.insert(1);
        records.insert(2);
        index.insert(Value::integer(30), records);

        let output = browse_table(&BrowseResult::Index(index));
        assert!(output.contains("30"));
        assert!(output.contains("1, 2"));
    }

    #[test]
    fn test_empty_results_say_so() {
        assert_eq!(get_table(&GetResult::PerRecord(BTreeMap::new())), "(no data)");
        assert_eq!(audit_log(&BTreeMap::new()), "(no revisions)");
        assert_eq!(describe_keys(&BTreeSet::new()), "(no data)");
    }
}
