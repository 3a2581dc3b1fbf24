use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{AdmissionControl, Operation};

struct WindowSlot {
    started_at: Instant,
    count: u32,
}

/// In-process fixed-window rate limiter, keyed by caller identity and
/// operation. Counters reset when a window elapses; state is process-local
/// only, matching the gateway's stateless deployment model.
pub struct FixedWindowLimiter {
    max_per_window: u32,
    window: Duration,
    counters: Mutex<HashMap<(String, Operation), WindowSlot>>,
}

impl FixedWindowLimiter {
    pub fn new(max_per_window: u32, window: Duration) -> Self {
        Self {
            max_per_window,
            window,
            counters: Mutex::new(HashMap::new()),
        }
    }

    pub fn per_minute(max_per_minute: u32) -> Self {
        Self::new(max_per_minute, Duration::from_secs(60))
    }
}

#[async_trait]
impl AdmissionControl for FixedWindowLimiter {
    async fn allow(&self, caller: &str, operation: Operation) -> bool {
        let mut counters = self.counters.lock().await;
        let now = Instant::now();

        let slot = counters
            .entry((caller.to_string(), operation))
            .or_insert(WindowSlot {
                started_at: now,
                count: 0,
            });

        if now.duration_since(slot.started_at) >= self.window {
            slot.started_at = now;
            slot.count = 0;
        }

        if slot.count >= self.max_per_window {
            return false;
        }

        slot.count += 1;
        true
    }
}

/// No-op admission control for deployments that gate traffic upstream.
pub struct UnlimitedAdmission;

#[async_trait]
impl AdmissionControl for UnlimitedAdmission {
    async fn allow(&self, _caller: &str, _operation: Operation) -> bool {
        true
    }
}
