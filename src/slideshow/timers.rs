//! Generation-tagged timer slots.
//!
//! There is no real task cancellation in the browser event loop, so a
//! cancelled timer may still fire. Every armed timer carries the generation
//! it was armed with; `claim` only accepts the token currently armed for
//! its kind, which turns late or superseded callbacks into no-ops.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Delay between retiring the old element and attaching the new one.
    Transition,
    /// Advance to the next item after a static item's display time.
    AutoAdvance,
    /// Debounce before an unexpected media pause is taken seriously.
    PauseGrace,
    /// Auto-hide of the controls overlay.
    ControlsHide,
}

impl TimerKind {
    pub const ALL: [TimerKind; 4] = [
        TimerKind::Transition,
        TimerKind::AutoAdvance,
        TimerKind::PauseGrace,
        TimerKind::ControlsHide,
    ];

    fn slot(self) -> usize {
        match self {
            TimerKind::Transition => 0,
            TimerKind::AutoAdvance => 1,
            TimerKind::PauseGrace => 2,
            TimerKind::ControlsHide => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
}

/// A timer the controller wants the host to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub delay: Duration,
}

#[derive(Debug, Default)]
pub struct TimerSlots {
    next_generation: u64,
    armed: [Option<u64>; 4],
}

impl TimerSlots {
    /// Arm `kind`, superseding whatever was armed for it before.
    pub fn arm(&mut self, kind: TimerKind) -> TimerToken {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.armed[kind.slot()] = Some(generation);
        TimerToken { kind, generation }
    }

    /// Returns true when something was armed.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.armed[kind.slot()].take().is_some()
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.armed[kind.slot()].is_some()
    }

    /// Consume a fired token. False for stale or cancelled tokens.
    pub fn claim(&mut self, token: TimerToken) -> bool {
        let slot = &mut self.armed[token.kind.slot()];
        if *slot == Some(token.generation) {
            *slot = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_accepts_only_the_armed_token() {
        let mut timers = TimerSlots::default();
        let first = timers.arm(TimerKind::AutoAdvance);
        let second = timers.arm(TimerKind::AutoAdvance);
        assert!(!timers.claim(first));
        assert!(timers.claim(second));
        assert!(!timers.claim(second));
    }

    #[test]
    fn cancelled_token_is_a_no_op() {
        let mut timers = TimerSlots::default();
        let token = timers.arm(TimerKind::PauseGrace);
        assert!(timers.cancel(TimerKind::PauseGrace));
        assert!(!timers.is_armed(TimerKind::PauseGrace));
        assert!(!timers.claim(token));
        assert!(!timers.cancel(TimerKind::PauseGrace));
    }

    #[test]
    fn kinds_are_independent() {
        let mut timers = TimerSlots::default();
        let advance = timers.arm(TimerKind::AutoAdvance);
        let hide = timers.arm(TimerKind::ControlsHide);
        timers.cancel(TimerKind::ControlsHide);
        assert!(timers.claim(advance));
        assert!(!timers.claim(hide));
    }
}
