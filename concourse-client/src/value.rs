use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Concourse typed value
///
/// A record stores a set of values under each key. Values are totally
/// ordered (by type, then by payload) so they can serve as map keys in
/// browse results. Doubles are ordered with [`f64::total_cmp`].
#[derive(Debug, Clone)]
pub enum Value {
    /// Boolean
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// Double precision float
    Double(f64),
    /// UTF-8 string
    String(String),
    /// String that is excluded from full-text indexing
    Tag(String),
    /// Pointer to another record
    Link(i64),
    /// Instant in microseconds since the Unix epoch
    Timestamp(i64),
}

impl Value {
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    pub fn integer(n: i64) -> Self {
        Value::Integer(n)
    }

    pub fn double(d: f64) -> Self {
        Value::Double(d)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn tag(s: impl Into<String>) -> Self {
        Value::Tag(s.into())
    }

    pub fn link(record: i64) -> Self {
        Value::Link(record)
    }

    pub fn timestamp(micros: i64) -> Self {
        Value::Timestamp(micros)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Tag(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<i64> {
        match self {
            Value::Link(record) => Some(*record),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<i64> {
        match self {
            Value::Timestamp(micros) => Some(*micros),
            _ => None,
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            Value::Boolean(_) => 0,
            Value::Integer(_) => 1,
            Value::Double(_) => 2,
            Value::String(_) => 3,
            Value::Tag(_) => 4,
            Value::Link(_) => 5,
            Value::Timestamp(_) => 6,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Double(a), Value::Double(b)) => a.total_cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Tag(a), Value::Tag(b)) => a.cmp(b),
            (Value::Link(a), Value::Link(b)) => a.cmp(b),
            (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }
}

// Hash agrees with Eq: total_cmp equality means identical bits.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_rank().hash(state);
        match self {
            Value::Boolean(b) => b.hash(state),
            Value::Integer(n) => n.hash(state),
            Value::Double(d) => d.to_bits().hash(state),
            Value::String(s) | Value::Tag(s) => s.hash(state),
            Value::Link(record) => record.hash(state),
            Value::Timestamp(micros) => micros.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Double(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "{}", s),
            Value::Tag(s) => write!(f, "`{}`", s),
            Value::Link(record) => write!(f, "@{}", record),
            Value::Timestamp(micros) => write!(f, "|{}|", micros),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_value_accessors() {
        let s = Value::string("hello");
        assert_eq!(s.as_str(), Some("hello"));
        assert_eq!(s.as_i64(), None);

        let n = Value::integer(17);
        assert_eq!(n.as_i64(), Some(17));

        let link = Value::link(42);
        assert_eq!(link.as_link(), Some(42));
        assert_eq!(link.as_i64(), None);
    }

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(5i32), Value::Integer(5));
        assert_eq!(Value::from(5i64), Value::Integer(5));
        assert_eq!(Value::from(2.5), Value::Double(2.5));
        assert_eq!(Value::from("jeff"), Value::String("jeff".to_string()));
    }

    #[test]
    fn test_value_ordering() {
        // Same type orders by payload
        assert!(Value::integer(1) < Value::integer(2));
        assert!(Value::string("a") < Value::string("b"));

        // Doubles use a total order, so NaN is comparable
        assert!(Value::double(1.0) < Value::double(2.0));
        assert_eq!(
            Value::double(f64::NAN).cmp(&Value::double(f64::NAN)),
            Ordering::Equal
        );

        // Different types order by type rank
        assert!(Value::boolean(true) < Value::integer(0));
        assert!(Value::integer(100) < Value::string(""));
    }

    #[test]
    fn test_value_as_map_key() {
        let mut index: BTreeMap<Value, Vec<i64>> = BTreeMap::new();
        index.insert(Value::string("jeff"), vec![1, 2]);
        index.insert(Value::integer(30), vec![3]);

        assert_eq!(index.get(&Value::string("jeff")), Some(&vec![1, 2]));
        // Integers sort before strings
        let first = index.keys().next();
        assert_eq!(first, Some(&Value::integer(30)));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::string("jeff").to_string(), "jeff");
        assert_eq!(Value::tag("jeff").to_string(), "`jeff`");
        assert_eq!(Value::link(7).to_string(), "@7");
        assert_eq!(Value::boolean(false).to_string(), "false");
    }
}
