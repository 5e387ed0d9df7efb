//! Rolling-window request quota.
//!
//! At most [`MAX_REQUESTS`] accepted requests within any trailing
//! [`WINDOW_MS`] milliseconds. Timestamps are milliseconds since the Unix
//! epoch. Expired entries are pruned lazily on every check.

use std::collections::VecDeque;

/// Requests admitted per window.
pub const MAX_REQUESTS: usize = 5;

/// Window length in milliseconds.
pub const WINDOW_MS: i64 = 60_000;

/// Timestamps of accepted requests, oldest first.
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    timestamps: VecDeque<i64>,
}

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop expired entries and report whether a new request may proceed.
    ///
    /// An entry is live while `now - t < WINDOW_MS`; one exactly a window
    /// old is expired. Pruning happens whether or not the request is
    /// admitted. Admission does not record anything: call [`record`] once the
    /// request is actually dispatched.
    ///
    /// [`record`]: RequestLog::record
    pub fn check(&mut self, now: i64) -> bool {
        self.timestamps.retain(|&t| now - t < WINDOW_MS);
        self.timestamps.len() < MAX_REQUESTS
    }

    /// Record an accepted request.
    pub fn record(&mut self, now: i64) {
        self.timestamps.push_back(now);
    }

    /// Entries currently held (as of the last prune).
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(times: &[i64]) -> RequestLog {
        let mut log = RequestLog::new();
        for &t in times {
            log.record(t);
        }
        log
    }

    #[test]
    fn admits_until_quota_is_reached() {
        let mut log = RequestLog::new();
        for i in 0..MAX_REQUESTS as i64 {
            assert!(log.check(i * 1_000));
            log.record(i * 1_000);
        }
        assert!(!log.check(5_000));
        assert_eq!(log.len(), MAX_REQUESTS);
    }

    #[test]
    fn entry_exactly_one_window_old_is_expired() {
        let mut log = filled(&[0, 1, 2, 3, 4]);
        assert!(!log.check(WINDOW_MS - 1));
        assert!(log.check(WINDOW_MS));
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn pruning_happens_even_when_rejected() {
        let mut log = filled(&[0, 10_000, 20_000, 30_000, 40_000, 50_000]);
        // 0 has expired, five remain live
        assert!(!log.check(WINDOW_MS + 5));
        assert_eq!(log.len(), MAX_REQUESTS);
        // the oldest survivor is 10_000
        assert!(log.check(10_000 + WINDOW_MS));
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn check_does_not_record() {
        let mut log = RequestLog::new();
        assert!(log.check(0));
        assert!(log.check(0));
        assert!(log.is_empty());
    }

    #[test]
    fn fully_expired_window_admits_again() {
        let mut log = filled(&[0, 1_000, 2_000, 3_000, 4_000]);
        assert!(log.check(4_000 + WINDOW_MS + 1_000));
        assert!(log.is_empty());
    }
}
