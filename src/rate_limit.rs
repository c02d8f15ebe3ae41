use std::net::IpAddr;
use std::time::{Duration, Instant};

use dashmap::DashMap;

const MAX_FAILURES: u32 = 5;
const WINDOW_SECS: u64 = 15 * 60;
/// Expired entries are swept once the map grows past this many IPs.
const CLEANUP_THRESHOLD: usize = 1024;

/// Per-client-IP admin login brute force limiter.
pub struct LoginRateLimiter {
    /// ip -> (failed_count, window_start)
    entries: DashMap<IpAddr, (u32, Instant)>,
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginRateLimiter {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Check if a login attempt is allowed. 5 failures per 15 minutes.
    /// Does NOT increment the counter; call `record_failure()` on a bad password.
    pub fn check(&self, ip: IpAddr) -> Result<(), u64> {
        let window = Duration::from_secs(WINDOW_SECS);
        let now = Instant::now();

        let Some(entry) = self.entries.get(&ip) else {
            return Ok(());
        };

        let (count, start) = entry.value();

        if now.duration_since(*start) > window {
            return Ok(());
        }

        if *count >= MAX_FAILURES {
            let elapsed = now.duration_since(*start).as_secs();
            return Err(WINDOW_SECS.saturating_sub(elapsed));
        }

        Ok(())
    }

    pub fn record_failure(&self, ip: IpAddr) {
        let window = Duration::from_secs(WINDOW_SECS);
        let now = Instant::now();

        if self.entries.len() >= CLEANUP_THRESHOLD {
            self.cleanup(window);
        }

        let mut entry = self.entries.entry(ip).or_insert((0, now));
        let (count, start) = entry.value_mut();

        if now.duration_since(*start) > window {
            *count = 1;
            *start = now;
        } else {
            *count += 1;
        }
    }

    pub fn clear(&self, ip: IpAddr) {
        self.entries.remove(&ip);
    }

    /// Drop entries whose window started more than `max_age` ago.
    pub fn cleanup(&self, max_age: Duration) {
        let now = Instant::now();
        self.entries.retain(|_, (_, start)| now.duration_since(*start) < max_age);
    }
}
