use std::time::{Duration, Instant};

/// Countdown presets offered by the focus pane, in minutes
pub const FOCUS_PRESETS_MIN: [u32; 3] = [5, 10, 20];

/// Phase of the focus countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// No countdown has been started yet
    Idle,
    /// Counting down
    Running,
    /// Reached 0:00; stays displayed until a new start overwrites it
    Expired,
}

/// Wall-clock countdown for focus sessions.
///
/// Caller-driven: there is no internal thread. The event loop calls
/// `tick()` once per loop iteration and the timer converts whole elapsed
/// seconds into decrements, re-anchoring so the sub-second remainder
/// carries over to the next tick. Starting a new countdown drops the old
/// anchor, so a replaced countdown can never decrement the new one.
#[derive(Debug, Clone)]
pub struct FocusTimer {
    remaining_secs: Option<u32>,
    active: bool,
    anchor: Option<Instant>,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTimer {
    pub fn new() -> Self {
        Self {
            remaining_secs: None,
            active: false,
            anchor: None,
        }
    }

    /// Start a countdown of `minutes`, replacing any prior countdown
    /// regardless of its phase.
    pub fn start(&mut self, minutes: u32) {
        self.remaining_secs = Some(minutes * 60);
        self.active = true;
        self.anchor = Some(Instant::now());
    }

    /// Stop the countdown without clearing the display. Used on teardown.
    pub fn stop(&mut self) {
        self.active = false;
        self.anchor = None;
    }

    /// Advance by however much wall-clock time has passed since the last
    /// tick. Returns true exactly once, on the tick that reaches 0:00.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        if let Some(anchor) = self.anchor {
            let whole = anchor.elapsed().as_secs();
            if whole == 0 {
                return false;
            }
            self.anchor = Some(anchor + Duration::from_secs(whole));
            self.advance(whole)
        } else {
            false
        }
    }

    /// Decrement by `secs` whole seconds. Expiry forces `active` off and
    /// pins the display at 0 rather than clearing it.
    fn advance(&mut self, secs: u64) -> bool {
        if !self.active || secs == 0 {
            return false;
        }
        let remaining = self.remaining_secs.unwrap_or(0);
        let next = remaining.saturating_sub(secs.min(u32::MAX as u64) as u32);
        self.remaining_secs = Some(next);
        if next == 0 {
            self.active = false;
            self.anchor = None;
            return true;
        }
        false
    }

    pub fn phase(&self) -> TimerPhase {
        match self.remaining_secs {
            None => TimerPhase::Idle,
            Some(_) if self.active => TimerPhase::Running,
            Some(_) => TimerPhase::Expired,
        }
    }

    pub fn remaining_secs(&self) -> Option<u32> {
        self.remaining_secs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Remaining time as `M:SS`, if a countdown exists
    pub fn display(&self) -> Option<String> {
        self.remaining_secs.map(format_countdown)
    }
}

/// Format a second count as `M:SS` -- minutes unpadded, seconds padded.
/// Sessions of an hour or more just show a large minute count.
pub fn format_countdown(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
