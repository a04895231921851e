//! Server-side user id generation.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use domain::DomainError;
use uuid::Uuid;

/// How new user ids are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Decimal Unix time in nanoseconds, bumped to stay strictly increasing
    #[default]
    Timestamp,
    /// Random UUID v4
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timestamp" => Ok(IdStrategy::Timestamp),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(DomainError::validation(format!(
                "unknown id strategy '{}', expected 'timestamp' or 'uuid'",
                other
            ))),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Timestamp => write!(f, "timestamp"),
            IdStrategy::Uuid => write!(f, "uuid"),
        }
    }
}

/// Thread-safe id source. Ids never repeat for the lifetime of a generator,
/// even when many threads ask within the same clock tick.
#[derive(Debug, Default)]
pub struct IdGenerator {
    strategy: IdStrategy,
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            last: AtomicU64::new(0),
        }
    }

    /// Produce the next unique id.
    pub fn next_id(&self) -> String {
        match self.strategy {
            IdStrategy::Timestamp => self.next_timestamp().to_string(),
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
        }
    }

    fn next_timestamp(&self) -> u64 {
        let now = Utc::now()
            .timestamp_nanos_opt()
            .and_then(|nanos| u64::try_from(nanos).ok())
            .unwrap_or(0);

        // The closure never declines, so both arms carry the previous value.
        let prev = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);

        now.max(prev + 1)
    }
}
