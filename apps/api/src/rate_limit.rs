//! Fixed-window request counter, keyed by client and hour bucket.
//!
//! Owned by `AppState` and handed to handlers; there is no global counter.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

const WINDOW_SECS: i64 = 3600;

pub struct RateLimiter {
    max_per_window: u32,
    counts: Mutex<HashMap<(String, i64), u32>>,
}

impl RateLimiter {
    pub fn new(max_per_window: u32) -> Self {
        Self {
            max_per_window,
            counts: Mutex::new(HashMap::new()),
        }
    }

    /// Records a request from `client` and returns whether it is allowed.
    pub fn check(&self, client: &str) -> bool {
        self.check_at(client, Utc::now())
    }

    pub fn check_at(&self, client: &str, now: DateTime<Utc>) -> bool {
        let bucket = now.timestamp().div_euclid(WINDOW_SECS);
        let mut counts = self.counts.lock().unwrap_or_else(|e| e.into_inner());

        // Earlier windows can never be hit again.
        counts.retain(|(_, b), _| *b >= bucket);

        let count = counts.entry((client.to_string(), bucket)).or_insert(0);
        if *count >= self.max_per_window {
            return false;
        }
        *count += 1;
        true
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.counts.lock().unwrap().len()
    }
}
