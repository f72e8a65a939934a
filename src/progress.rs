//! Timed progress steps shown while a conversion runs

/// Labels of the animated steps, in order
pub const PROGRESS_STEPS: [&str; 3] = [
    "Analyzing TIBCO BW Source Code",
    "Generating Spring Boot Code",
    "Preparing Output for Download",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Pending,
    Active,
    Completed,
}

/// Counts completed steps out of a fixed total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressTracker {
    completed: usize,
    total: usize,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        Self { completed: 0, total }
    }

    /// Index of the step currently animating
    pub fn active_step(&self) -> Option<usize> {
        (self.completed < self.total).then_some(self.completed)
    }

    /// Mark the active step as elapsed. Saturates at `total`.
    pub fn advance(&mut self) {
        if self.completed < self.total {
            self.completed += 1;
        }
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed as f32 / self.total as f32).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }

    pub fn step_state(&self, idx: usize) -> StepState {
        if idx < self.completed {
            StepState::Completed
        } else if Some(idx) == self.active_step() {
            StepState::Active
        } else {
            StepState::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_never_exceeds_one() {
        let mut p = ProgressTracker::new(PROGRESS_STEPS.len());
        for _ in 0..10 {
            p.advance();
            assert!(p.fraction() <= 1.0);
        }
        assert!(p.is_complete());
        assert_eq!(p.fraction(), 1.0);
    }

    #[test]
    fn complete_only_after_every_step() {
        let mut p = ProgressTracker::new(3);
        assert_eq!(p.active_step(), Some(0));
        p.advance();
        p.advance();
        assert!(!p.is_complete());
        assert_eq!(p.active_step(), Some(2));
        p.advance();
        assert!(p.is_complete());
        assert_eq!(p.active_step(), None);
    }

    #[test]
    fn step_states_follow_progress() {
        let mut p = ProgressTracker::new(3);
        p.advance();
        assert_eq!(p.step_state(0), StepState::Completed);
        assert_eq!(p.step_state(1), StepState::Active);
        assert_eq!(p.step_state(2), StepState::Pending);
    }

    #[test]
    fn empty_tracker_is_never_complete() {
        let mut p = ProgressTracker::default();
        p.advance();
        assert_eq!(p.fraction(), 0.0);
        assert!(!p.is_complete());
    }
}
