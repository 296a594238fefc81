use std::{sync::Arc, time::Duration};

use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::infrastructure::utils::clock::now_ms;

/// Per-client counter for one fixed window.
///
/// `reset_time` is set once at window creation and only ever changes by
/// wholesale replacement when a later request finds the window expired.
#[derive(Debug, Clone, Copy)]
struct RateLimitEntry {
    count: u32,
    reset_time: i64,
}

/// Read-only snapshot of a client's remaining quota, suitable for
/// `X-RateLimit-Remaining` / `X-RateLimit-Reset` headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    pub remaining: u32,
    pub reset_time: i64,
}

/// In-memory fixed-window rate limiter keyed by client identifier.
///
/// State is scoped to one process: horizontally scaled deployments each carry
/// an independent limiter, which is an accepted limitation of this design.
/// The expired-entry sweep is a memory bound, not a correctness mechanism,
/// and never runs unless [`start_sweeper`](RateLimiter::start_sweeper) is
/// called explicitly; tests simply never start it.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<RateLimiterInner>,
}

struct RateLimiterInner {
    limit: u32,
    window_ms: i64,
    entries: DashMap<String, RateLimitEntry>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        RateLimiter {
            inner: Arc::new(RateLimiterInner {
                limit,
                window_ms: window.as_millis() as i64,
                entries: DashMap::new(),
                sweeper: Mutex::new(None),
            }),
        }
    }

    /// Records a request from `client_id` and returns whether it is allowed.
    ///
    /// Allowed requests mutate state (fresh window or increment); a denied
    /// request leaves the entry untouched, so the stored count never exceeds
    /// the limit.
    pub fn check(&self, client_id: &str) -> bool {
        self.check_at(client_id, now_ms())
    }

    pub fn check_at(&self, client_id: &str, now: i64) -> bool {
        // The entry guard holds the shard lock for this key, making the
        // read-modify-write atomic under actix's multi-threaded runtime.
        match self.inner.entries.entry(client_id.to_string()) {
            dashmap::mapref::entry::Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                if now > entry.reset_time {
                    *entry = self.fresh_entry(now);
                    true
                } else if entry.count >= self.inner.limit {
                    false
                } else {
                    entry.count += 1;
                    true
                }
            }
            dashmap::mapref::entry::Entry::Vacant(vacant) => {
                vacant.insert(self.fresh_entry(now));
                true
            }
        }
    }

    /// Remaining quota for `client_id` without mutating any state.
    pub fn info(&self, client_id: &str) -> RateLimitInfo {
        self.info_at(client_id, now_ms())
    }

    pub fn info_at(&self, client_id: &str, now: i64) -> RateLimitInfo {
        match self.inner.entries.get(client_id) {
            Some(entry) if now <= entry.reset_time => RateLimitInfo {
                remaining: self.inner.limit.saturating_sub(entry.count),
                reset_time: entry.reset_time,
            },
            _ => RateLimitInfo {
                remaining: self.inner.limit,
                reset_time: now + self.inner.window_ms,
            },
        }
    }

    /// Unconditionally forgets `client_id`. A no-op for unknown clients.
    pub fn reset(&self, client_id: &str) {
        self.inner.entries.remove(client_id);
    }

    /// Drops every entry whose window has fully expired. Expired entries are
    /// indistinguishable from absent ones to `check`, so sweeping them
    /// concurrently with request handling cannot change any outcome.
    pub fn sweep_expired(&self) {
        self.sweep_expired_at(now_ms());
    }

    pub fn sweep_expired_at(&self, now: i64) {
        self.inner.entries.retain(|_, entry| now <= entry.reset_time);
    }

    /// Starts the periodic expired-entry sweep. Called once from process
    /// startup; calling it again while a sweeper is running is a no-op.
    pub fn start_sweeper(&self, every: Duration) {
        let mut sweeper = self.inner.sweeper.lock();
        if sweeper.is_some() {
            return;
        }
        let limiter = self.clone();
        *sweeper = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                limiter.sweep_expired();
            }
        }));
    }

    /// Stops the sweep task, for graceful shutdown.
    pub fn stop_sweeper(&self) {
        if let Some(handle) = self.inner.sweeper.lock().take() {
            handle.abort();
        }
    }

    fn fresh_entry(&self, now: i64) -> RateLimitEntry {
        RateLimitEntry {
            count: 1,
            reset_time: now + self.inner.window_ms,
        }
    }

    #[cfg(test)]
    fn entry_count(&self) -> usize {
        self.inner.entries.len()
    }
}
