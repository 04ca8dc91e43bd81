/// Type conversions between protobuf and driver types
///
/// Due to Rust's orphan rules, these are conversion functions instead of
/// trait implementations. Responses use maps ordered by record id or by
/// value, so map-shaped proto payloads land in `BTreeMap`s.
use std::collections::{BTreeMap, BTreeSet, HashMap};

use concourse_proto::{self as proto, value::Value as ProtoValueEnum};

use crate::error::{ClientError, Result};
use crate::value::Value;

// ============================================================================
// Value Conversions
// ============================================================================

/// Convert a driver Value to a protobuf Value
pub fn value_to_proto(value: &Value) -> proto::Value {
    let value_enum = match value {
        Value::Boolean(b) => ProtoValueEnum::BooleanValue(*b),
        Value::Integer(n) => ProtoValueEnum::IntegerValue(*n),
        Value::Double(d) => ProtoValueEnum::DoubleValue(*d),
        Value::String(s) => ProtoValueEnum::StringValue(s.clone()),
        Value::Tag(s) => ProtoValueEnum::TagValue(s.clone()),
        Value::Link(record) => ProtoValueEnum::LinkValue(*record),
        Value::Timestamp(micros) => ProtoValueEnum::TimestampValue(*micros),
    };

    proto::Value {
        value: Some(value_enum),
    }
}

/// Convert a protobuf Value to a driver Value
pub fn value_from_proto(value: proto::Value) -> Result<Value> {
    let value_enum = value
        .value
        .ok_or_else(|| ClientError::Server("value field is missing".to_string()))?;

    Ok(match value_enum {
        ProtoValueEnum::BooleanValue(b) => Value::Boolean(b),
        ProtoValueEnum::IntegerValue(n) => Value::Integer(n),
        ProtoValueEnum::DoubleValue(d) => Value::Double(d),
        ProtoValueEnum::StringValue(s) => Value::String(s),
        ProtoValueEnum::TagValue(s) => Value::Tag(s),
        ProtoValueEnum::LinkValue(record) => Value::Link(record),
        ProtoValueEnum::TimestampValue(micros) => Value::Timestamp(micros),
    })
}

// ============================================================================
// Map Conversions
// ============================================================================

/// Values keyed by record id
pub fn record_values(values: HashMap<i64, proto::Value>) -> Result<BTreeMap<i64, Value>> {
    values
        .into_iter()
        .map(|(record, value)| Ok((record, value_from_proto(value)?)))
        .collect()
}

/// Values keyed by key name
pub fn key_values(values: HashMap<String, proto::Value>) -> Result<HashMap<String, Value>> {
    values
        .into_iter()
        .map(|(key, value)| Ok((key, value_from_proto(value)?)))
        .collect()
}

/// Key-to-value maps keyed by record id
pub fn record_key_values(
    records: HashMap<i64, proto::KeyValues>,
) -> Result<BTreeMap<i64, HashMap<String, Value>>> {
    records
        .into_iter()
        .map(|(record, kv)| Ok((record, key_values(kv.values)?)))
        .collect()
}

/// One key's index: every stored value and the records that hold it
pub fn value_index(entries: Vec<proto::ValueRecords>) -> Result<BTreeMap<Value, BTreeSet<i64>>> {
    let mut index = BTreeMap::new();
    for entry in entries {
        let value = entry
            .value
            .ok_or_else(|| ClientError::Server("index entry is missing its value".to_string()))?;
        index.insert(
            value_from_proto(value)?,
            entry.records.into_iter().collect(),
        );
    }
    Ok(index)
}

/// Indexes keyed by key name
pub fn keyed_value_index(
    entries: HashMap<String, proto::ValueIndex>,
) -> Result<HashMap<String, BTreeMap<Value, BTreeSet<i64>>>> {
    entries
        .into_iter()
        .map(|(key, index)| Ok((key, value_index(index.entries)?)))
        .collect()
}

/// Per-record outcome flags, ordered by record id
pub fn bool_results(results: HashMap<i64, bool>) -> BTreeMap<i64, bool> {
    results.into_iter().collect()
}

/// Revision log ordered by commit timestamp
pub fn audit_log(log: HashMap<i64, String>) -> BTreeMap<i64, String> {
    log.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_roundtrip() {
        let values = vec![
            Value::boolean(true),
            Value::integer(-7),
            Value::double(2.5),
            Value::string("jeff"),
            Value::tag("jeff"),
            Value::link(42),
            Value::timestamp(1609459200000000),
        ];
        for value in values {
            let converted = value_from_proto(value_to_proto(&value)).unwrap();
            assert_eq!(converted, value);
        }
    }

    #[test]
    fn test_missing_oneof_is_an_error() {
        let result = value_from_proto(proto::Value { value: None });
        assert!(matches!(result, Err(ClientError::Server(_))));
    }

    #[test]
    fn test_value_index_orders_by_value() {
        let entries = vec![
            proto::ValueRecords {
                value: Some(value_to_proto(&Value::string("zed"))),
                records: vec![3],
            },
            proto::ValueRecords {
                value: Some(value_to_proto(&Value::string("ann"))),
                records: vec![1, 2],
            },
        ];
        let index = value_index(entries).unwrap();
        let first = index.keys().next().unwrap();
        assert_eq!(first, &Value::string("ann"));
        assert_eq!(
            index.get(&Value::string("ann")),
            Some(&BTreeSet::from([1, 2]))
        );
    }

    #[test]
    fn test_record_values_ordered_by_record() {
        let mut values = HashMap::new();
        values.insert(9i64, value_to_proto(&Value::integer(90)));
        values.insert(1i64, value_to_proto(&Value::integer(10)));

        let converted = record_values(values).unwrap();
        let records: Vec<i64> = converted.keys().copied().collect();
        assert_eq!(records, vec![1, 9]);
    }
}
