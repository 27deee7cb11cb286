use std::time::Duration;

/// Identifies one repeating timer registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Source of repeating ticks for the animation player
///
/// The host owns the event loop. After `schedule_repeating` returns, the host
/// calls [`Player::on_tick`](super::Player::on_tick) with the handle every
/// `interval` until the handle is cancelled.
pub trait Timer {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle;

    fn cancel(&mut self, handle: TimerHandle);
}

/// Timer that only records registrations; the host fires ticks itself
///
/// Used by the terminal player loop and by tests.
#[derive(Debug, Default)]
pub struct ManualTimer {
    next_id: u64,
    active: Vec<(TimerHandle, Duration)>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live registration, if any
    pub fn active(&self) -> Option<(TimerHandle, Duration)> {
        self.active.last().copied()
    }

    /// Number of live registrations
    pub fn live_count(&self) -> usize {
        self.active.len()
    }

    /// Total registrations made so far, including cancelled ones
    pub fn scheduled_count(&self) -> u64 {
        self.next_id
    }
}

impl Timer for ManualTimer {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        let handle = TimerHandle::new(self.next_id);
        self.next_id += 1;
        self.active.push((handle, interval));
        tracing::trace!(handle = handle.id(), ?interval, "timer scheduled");
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.active.retain(|(h, _)| *h != handle);
        tracing::trace!(handle = handle.id(), "timer cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_timer_tracks_live_handles() {
        let mut timer = ManualTimer::new();
        let first = timer.schedule_repeating(Duration::from_millis(100));
        let second = timer.schedule_repeating(Duration::from_millis(50));

        assert_ne!(first, second);
        assert_eq!(timer.live_count(), 2);
        assert_eq!(timer.active(), Some((second, Duration::from_millis(50))));

        timer.cancel(second);
        assert_eq!(timer.active(), Some((first, Duration::from_millis(100))));
        timer.cancel(first);
        assert_eq!(timer.active(), None);
        assert_eq!(timer.scheduled_count(), 2);
    }

    #[test]
    fn test_cancel_unknown_handle_is_noop() {
        let mut timer = ManualTimer::new();
        let handle = timer.schedule_repeating(Duration::from_millis(10));
        timer.cancel(TimerHandle::new(99));
        assert_eq!(timer.active(), Some((handle, Duration::from_millis(10))));
    }
}
