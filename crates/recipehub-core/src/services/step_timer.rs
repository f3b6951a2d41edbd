//! Step timer state machine
//!
//! At most one timer is active. Starting or resetting always leaves it
//! running; reaching zero clears it and reports `TickOutcome::Elapsed`.

use recipehub_shared::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTimer {
    pub step_id: EntityId,
    pub total_seconds: u64,
    pub remaining_seconds: u64,
    pub is_running: bool,
}

impl ActiveTimer {
    /// Elapsed fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        (self.total_seconds - self.remaining_seconds) as f64 / self.total_seconds as f64
    }

    pub fn clock(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// No running timer; the tick was dropped.
    Ignored,
    Ticked { remaining_seconds: u64 },
    Elapsed { step_id: EntityId },
}

#[derive(Debug, Default)]
pub struct StepTimer {
    active: Option<ActiveTimer>,
}

impl StepTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever timer was active, without warning.
    pub fn start(&mut self, step_id: EntityId, minutes: u32) {
        let total = u64::from(minutes) * 60;
        self.active = Some(ActiveTimer {
            step_id,
            total_seconds: total,
            remaining_seconds: total,
            is_running: true,
        });
    }

    /// Back to the full duration, running.
    pub fn reset(&mut self, step_id: EntityId, minutes: u32) {
        self.start(step_id, minutes);
    }

    /// Flip running/paused. Returns the new running flag, or `None` when idle.
    pub fn toggle(&mut self) -> Option<bool> {
        self.active.as_mut().map(|t| {
            t.is_running = !t.is_running;
            t.is_running
        })
    }

    pub fn tick(&mut self) -> TickOutcome {
        let Some(timer) = self.active.as_mut().filter(|t| t.is_running) else {
            return TickOutcome::Ignored;
        };
        timer.remaining_seconds = timer.remaining_seconds.saturating_sub(1);
        if timer.remaining_seconds == 0 {
            let step_id = timer.step_id;
            self.active = None;
            TickOutcome::Elapsed { step_id }
        } else {
            TickOutcome::Ticked {
                remaining_seconds: timer.remaining_seconds,
            }
        }
    }

    pub fn active(&self) -> Option<&ActiveTimer> {
        self.active.as_ref()
    }

    pub fn state(&self) -> TimerState {
        match &self.active {
            None => TimerState::Idle,
            Some(t) if t.is_running => TimerState::Running,
            Some(_) => TimerState::Paused,
        }
    }

    /// State as seen from one step: every step but the active one is idle.
    pub fn state_for(&self, step_id: EntityId) -> TimerState {
        match &self.active {
            Some(t) if t.step_id == step_id => self.state(),
            _ => TimerState::Idle,
        }
    }
}

/// `M:SS`, seconds zero-padded.
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipehub_shared::new_id;

    #[test]
    fn test_start_two_minutes() {
        let mut timer = StepTimer::new();
        let step = new_id();
        timer.start(step, 2);

        let active = timer.active().unwrap();
        assert_eq!(active.remaining_seconds, 120);
        assert_eq!(active.clock(), "2:00");
        assert_eq!(timer.state_for(step), TimerState::Running);
    }

    #[test]
    fn test_sixty_five_ticks() {
        let mut timer = StepTimer::new();
        timer.start(new_id(), 2);
        for _ in 0..65 {
            timer.tick();
        }
        let active = timer.active().unwrap();
        assert_eq!(active.remaining_seconds, 55);
        assert_eq!(active.clock(), "0:55");
        assert!((active.progress() - 65.0 / 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_pause_preserves_and_resume_continues() {
        let mut timer = StepTimer::new();
        let step = new_id();
        timer.start(step, 1);
        timer.tick();
        timer.tick();

        assert_eq!(timer.toggle(), Some(false));
        assert_eq!(timer.state_for(step), TimerState::Paused);
        for _ in 0..10 {
            assert_eq!(timer.tick(), TickOutcome::Ignored);
        }
        assert_eq!(timer.active().unwrap().remaining_seconds, 58);

        assert_eq!(timer.toggle(), Some(true));
        assert_eq!(timer.tick(), TickOutcome::Ticked { remaining_seconds: 57 });
    }

    #[test]
    fn test_reaching_zero_clears() {
        let mut timer = StepTimer::new();
        let step = new_id();
        timer.start(step, 1);
        for _ in 0..59 {
            assert!(matches!(timer.tick(), TickOutcome::Ticked { .. }));
        }
        assert_eq!(timer.tick(), TickOutcome::Elapsed { step_id: step });
        assert!(timer.active().is_none());
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.tick(), TickOutcome::Ignored);
    }

    #[test]
    fn test_reset_runs_from_full_duration() {
        let mut timer = StepTimer::new();
        let step = new_id();
        timer.start(step, 3);
        timer.tick();
        timer.toggle();

        timer.reset(step, 3);
        let active = timer.active().unwrap();
        assert_eq!(active.remaining_seconds, 180);
        assert!(active.is_running);
    }

    #[test]
    fn test_new_timer_replaces_previous() {
        let mut timer = StepTimer::new();
        let first = new_id();
        let second = new_id();
        timer.start(first, 5);
        timer.start(second, 1);

        assert_eq!(timer.state_for(first), TimerState::Idle);
        assert_eq!(timer.state_for(second), TimerState::Running);
        assert_eq!(timer.active().unwrap().remaining_seconds, 60);
    }

    #[test]
    fn test_toggle_when_idle() {
        let mut timer = StepTimer::new();
        assert_eq!(timer.toggle(), None);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(600), "10:00");
        assert_eq!(format_clock(14_400), "240:00");
    }
}
