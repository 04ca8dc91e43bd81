//! Operation results whose shape depends on the dispatched variant.
//!
//! Operations like `add` answer with a different payload for each wire
//! variant (a new record id, a flag, or a per-record map), so their
//! results are enums tagged the same way the arguments were.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::value::Value;

/// Result of [`Concourse::add`](crate::Concourse::add).
#[derive(Debug, Clone, PartialEq)]
pub enum AddResult {
    /// The data went into a brand new record with this id.
    Created(i64),
    /// Whether the data was added to the one requested record.
    Applied(bool),
    /// Whether the data was added, per requested record.
    PerRecord(BTreeMap<i64, bool>),
}

impl AddResult {
    /// Id of the freshly created record, if one was created.
    pub fn created(&self) -> Option<i64> {
        match self {
            AddResult::Created(record) => Some(*record),
            _ => None,
        }
    }

    /// Whether the write applied to a single requested record.
    pub fn applied(&self) -> Option<bool> {
        match self {
            AddResult::Applied(applied) => Some(*applied),
            _ => None,
        }
    }
}

/// Result of [`Concourse::remove`](crate::Concourse::remove).
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveResult {
    /// Whether the data was removed from the one requested record.
    Applied(bool),
    /// Whether the data was removed, per requested record.
    PerRecord(BTreeMap<i64, bool>),
}

impl RemoveResult {
    pub fn applied(&self) -> Option<bool> {
        match self {
            RemoveResult::Applied(removed) => Some(*removed),
            _ => None,
        }
    }
}

/// Result of [`Concourse::browse`](crate::Concourse::browse).
///
/// An index maps every stored value to the set of records holding it.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseResult {
    /// Index for the one requested key.
    Index(BTreeMap<Value, BTreeSet<i64>>),
    /// Index per requested key.
    PerKey(HashMap<String, BTreeMap<Value, BTreeSet<i64>>>),
}

impl BrowseResult {
    pub fn index(&self) -> Option<&BTreeMap<Value, BTreeSet<i64>>> {
        match self {
            BrowseResult::Index(index) => Some(index),
            _ => None,
        }
    }
}

/// Result of [`Concourse::get`](crate::Concourse::get).
#[derive(Debug, Clone, PartialEq)]
pub enum GetResult {
    /// The value stored under one key in one record, if any.
    Value(Option<Value>),
    /// One key's value per requested record.
    PerRecord(BTreeMap<i64, Value>),
    /// Each requested key's value in one record.
    PerKey(HashMap<String, Value>),
    /// Each requested key's value, per requested record.
    PerKeyRecord(BTreeMap<i64, HashMap<String, Value>>),
}

impl GetResult {
    /// The single value, when one key and one record were requested.
    pub fn value(&self) -> Option<&Value> {
        match self {
            GetResult::Value(value) => value.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_result_accessors() {
        assert_eq!(AddResult::Created(7).created(), Some(7));
        assert_eq!(AddResult::Created(7).applied(), None);
        assert_eq!(AddResult::Applied(true).applied(), Some(true));
    }

    #[test]
    fn test_get_result_value() {
        let result = GetResult::Value(Some(Value::string("jeff")));
        assert_eq!(result.value(), Some(&Value::string("jeff")));

        let empty = GetResult::Value(None);
        assert_eq!(empty.value(), None);
    }
}
