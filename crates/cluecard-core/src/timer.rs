//! Countdown state, clock text, and the one-second tick schedule.

use core::fmt::Write;

use heapless::String as HeaplessString;

pub const TICK_INTERVAL_MS: u64 = 1_000;
pub const CLOCK_TEXT_BYTES: usize = 8;

/// Zero-padded `mm:ss`.
pub type ClockText = HeaplessString<CLOCK_TEXT_BYTES>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimerState {
    pub remaining: u32,
    pub duration: u32,
    pub paused: bool,
}

impl TimerState {
    pub const fn start(duration: u32) -> Self {
        Self {
            remaining: duration,
            duration,
            paused: false,
        }
    }

    /// Decrement unless paused. Returns whether `remaining` changed.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn expire(&mut self) {
        self.remaining = 0;
        self.paused = false;
    }

    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn clock_text(&self) -> ClockText {
        format_clock(self.remaining)
    }
}

pub fn format_clock(total_secs: u32) -> ClockText {
    let mut text = ClockText::new();
    // Fits as long as minutes stay below 100_000.
    let _ = write!(text, "{:02}:{:02}", total_secs / 60, total_secs % 60);
    text
}

/// Cancellable periodic deadline.
///
/// Armed on entering a running round and cancelled on leaving it. Missed
/// deadlines are reported one at a time so a slow host loop catches up tick by
/// tick instead of skipping seconds.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TickSchedule {
    next_due_ms: Option<u64>,
}

impl TickSchedule {
    pub const fn new() -> Self {
        Self { next_due_ms: None }
    }

    pub fn arm(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(TICK_INTERVAL_MS));
    }

    pub fn cancel(&mut self) {
        self.next_due_ms = None;
    }

    pub const fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub const fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Consume one elapsed deadline, re-arming one interval later.
    pub fn take_due(&mut self, now_ms: u64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(due.saturating_add(TICK_INTERVAL_MS));
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_zero_padded_minutes_and_seconds() {
        assert_eq!(format_clock(0).as_str(), "00:00");
        assert_eq!(format_clock(3).as_str(), "00:03");
        assert_eq!(format_clock(75).as_str(), "01:15");
        assert_eq!(format_clock(5_999).as_str(), "99:59");
    }

    #[test]
    fn paused_timer_does_not_decrement() {
        let mut timer = TimerState::start(4);
        timer.paused = true;
        assert!(!timer.tick());
        assert_eq!(timer.remaining, 4);

        timer.paused = false;
        assert!(timer.tick());
        assert_eq!(timer.remaining, 3);
    }

    #[test]
    fn timer_stops_at_zero() {
        let mut timer = TimerState::start(1);
        assert!(timer.tick());
        assert!(timer.is_expired());
        assert!(!timer.tick());
        assert_eq!(timer.remaining, 0);
    }

    #[test]
    fn schedule_fires_once_per_interval_and_catches_up() {
        let mut schedule = TickSchedule::new();
        assert!(!schedule.take_due(5_000));

        schedule.arm(1_000);
        assert!(!schedule.take_due(1_999));
        assert!(schedule.take_due(2_000));
        assert!(!schedule.take_due(2_500));

        // Loop stalled for 2.5 seconds.
        assert!(schedule.take_due(5_000));
        assert!(schedule.take_due(5_000));
        assert!(schedule.take_due(5_000));
        assert!(!schedule.take_due(5_000));
        assert_eq!(schedule.next_due_ms(), Some(6_000));
    }

    #[test]
    fn cancelled_schedule_never_fires() {
        let mut schedule = TickSchedule::new();
        schedule.arm(0);
        schedule.cancel();
        assert!(!schedule.is_armed());
        assert!(!schedule.take_due(10_000));
    }
}
