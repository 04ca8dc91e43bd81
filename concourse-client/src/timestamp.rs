use std::time::{SystemTime, UNIX_EPOCH};

/// A point in time for historical reads.
///
/// Concourse accepts either an exact instant in microseconds since the Unix
/// epoch or a natural language phrase (for example `"yesterday"` or
/// `"3 weeks ago"`). Phrases are resolved by the server, so each carries its
/// own wire method variant and the driver never parses them locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Timestamp {
    /// Microseconds since the Unix epoch
    Micros(i64),
    /// Natural language description, resolved server side
    Phrase(String),
}

impl Timestamp {
    pub fn micros(micros: i64) -> Self {
        Timestamp::Micros(micros)
    }

    pub fn phrase(phrase: impl Into<String>) -> Self {
        Timestamp::Phrase(phrase.into())
    }

    pub fn is_phrase(&self) -> bool {
        matches!(self, Timestamp::Phrase(_))
    }
}

impl From<i64> for Timestamp {
    fn from(micros: i64) -> Self {
        Timestamp::Micros(micros)
    }
}

impl From<&str> for Timestamp {
    fn from(phrase: &str) -> Self {
        Timestamp::Phrase(phrase.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(phrase: String) -> Self {
        Timestamp::Phrase(phrase)
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        let micros = match time.duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_micros() as i64,
            Err(before) => -(before.duration().as_micros() as i64),
        };
        Timestamp::Micros(micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timestamp_from_micros() {
        let ts = Timestamp::from(1609459200000000i64);
        assert_eq!(ts, Timestamp::Micros(1609459200000000));
        assert!(!ts.is_phrase());
    }

    #[test]
    fn test_timestamp_from_phrase() {
        let ts = Timestamp::from("3 weeks ago");
        assert_eq!(ts, Timestamp::Phrase("3 weeks ago".to_string()));
        assert!(ts.is_phrase());
    }

    #[test]
    fn test_timestamp_from_system_time() {
        let epoch_plus_one = UNIX_EPOCH + Duration::from_micros(1_000_000);
        assert_eq!(Timestamp::from(epoch_plus_one), Timestamp::Micros(1_000_000));

        let before_epoch = UNIX_EPOCH - Duration::from_micros(500);
        assert_eq!(Timestamp::from(before_epoch), Timestamp::Micros(-500));
    }
}
