use std::sync::{Arc, RwLock};

use chrono::{DateTime, NaiveDate, Utc};

/// Time source seam for everything in the crate that needs "now" or
/// "today". Domain code never reads the wall clock directly; it receives
/// one of these, which keeps the advisory and intake paths deterministic
/// under test.
pub trait Clock: std::fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production clock backed by the system time.
#[derive(Debug, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant. The instant can be moved forward by
/// tests that exercise timestamp ordering without sleeping.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Arc<RwLock<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> FixedClock {
        FixedClock { instant: Arc::new(RwLock::new(instant)) }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.write().expect("RwLock poisoned") = instant;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.read().expect("RwLock poisoned")
    }
}
