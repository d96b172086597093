//! # Debouncer
//!
//! Trailing-edge debounce for user input, shaped for an immediate-mode UI:
//! instead of wrapping a callback in a timer, the debouncer owns one
//! deadline and is polled once per frame from the app tick. `notify`
//! re-arms the deadline (last call wins); `poll_ready` yields the pending
//! value once the wait has elapsed with no further calls.

use std::time::{Duration, Instant};

/// Debounces a stream of values down to the last one per quiet period.
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
            deadline: None,
        }
    }

    /// Record a value and re-arm the deadline.
    pub fn notify(&mut self, value: T) {
        self.notify_at(value, Instant::now());
    }

    /// Yield the pending value if the quiet period has elapsed.
    pub fn poll_ready(&mut self) -> Option<T> {
        self.poll_ready_at(Instant::now())
    }

    /// Whether a value is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Clock-explicit form of [`Self::notify`].
    pub fn notify_at(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.deadline = Some(now + self.wait);
    }

    /// Clock-explicit form of [`Self::poll_ready`].
    pub fn poll_ready_at(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(300);

    #[test]
    fn five_rapid_calls_emit_once_with_last_value() {
        let mut debouncer = Debouncer::new(WAIT);
        let start = Instant::now();

        for (i, value) in ["a", "ab", "abc", "abcd", "abcde"].iter().enumerate() {
            debouncer.notify_at(value.to_string(), start + Duration::from_millis(i as u64 * 50));
        }
        let last_call = start + Duration::from_millis(200);

        // Still quiet-period: nothing emitted yet
        assert_eq!(debouncer.poll_ready_at(last_call + Duration::from_millis(299)), None);

        // Deadline passed: exactly one emission, with the last value
        assert_eq!(
            debouncer.poll_ready_at(last_call + WAIT),
            Some("abcde".to_string())
        );
        assert_eq!(debouncer.poll_ready_at(last_call + WAIT), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn a_new_call_rearms_the_deadline() {
        let mut debouncer = Debouncer::new(WAIT);
        let start = Instant::now();

        debouncer.notify_at(1, start);
        debouncer.notify_at(2, start + Duration::from_millis(250));

        // The first deadline has passed but was re-armed by the second call
        assert_eq!(debouncer.poll_ready_at(start + Duration::from_millis(400)), None);
        assert_eq!(
            debouncer.poll_ready_at(start + Duration::from_millis(550)),
            Some(2)
        );
    }

    #[test]
    fn empty_debouncer_never_emits() {
        let mut debouncer: Debouncer<String> = Debouncer::new(WAIT);
        assert_eq!(debouncer.poll_ready(), None);
        assert!(!debouncer.is_pending());
    }
}
