use std::time::Duration;

/// Drops wheel events that arrive within `window` of the last accepted one.
/// Dropped events are discarded, never queued.
#[derive(Debug, Clone)]
pub struct WheelThrottle {
    window_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl WheelThrottle {
    pub fn new(window: Duration) -> Self {
        Self {
            window_ms: u64::try_from(window.as_millis()).unwrap_or(u64::MAX),
            last_accepted_ms: None,
        }
    }

    pub fn from_millis(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Event times are caller-supplied milliseconds on a monotonic clock.
    /// An event earlier than the last accepted one is dropped.
    pub fn try_accept(&mut self, now_ms: u64) -> bool {
        let accept = match self.last_accepted_ms {
            None => true,
            Some(last) => now_ms
                .checked_sub(last)
                .is_some_and(|elapsed| elapsed >= self.window_ms),
        };
        if accept {
            self.last_accepted_ms = Some(now_ms);
        }
        accept
    }

    pub fn reset(&mut self) {
        self.last_accepted_ms = None;
    }
}
