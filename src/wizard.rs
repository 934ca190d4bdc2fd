//! Step wizard position.
//!
//! Tracks which page of the six-step setup flow is showing. The tracker
//! does not read the registries; each page asks its registry for the valid
//! subset itself.

use std::fmt;

/// One page of the setup flow, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Objectives,
    Problem,
    Configuration,
    Constraints,
    Algorithm,
    Optimize,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Objectives,
        Step::Problem,
        Step::Configuration,
        Step::Constraints,
        Step::Algorithm,
        Step::Optimize,
    ];

    /// 1-based position.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Objectives => "Objectives",
            Step::Problem => "Problem",
            Step::Configuration => "Configuration",
            Step::Constraints => "Constraints",
            Step::Algorithm => "Algorithm",
            Step::Optimize => "Optimize",
        }
    }

    fn index(self) -> usize {
        match self {
            Step::Objectives => 0,
            Step::Problem => 1,
            Step::Configuration => 2,
            Step::Constraints => 3,
            Step::Algorithm => 4,
            Step::Optimize => 5,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Current position in the setup flow.
///
/// # Examples
///
/// ```
/// use u_conslay::wizard::{Step, StepTracker};
///
/// let mut tracker = StepTracker::new();
/// assert!(!tracker.prev());
/// assert!(tracker.next());
/// assert_eq!(tracker.current(), Step::Problem);
/// assert_eq!(tracker.current().number(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepTracker {
    index: usize,
}

impl StepTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Step {
        Step::ALL[self.index]
    }

    pub fn steps(&self) -> &'static [Step] {
        &Step::ALL
    }

    /// Advances one step. Returns `false` at the last step.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Goes back one step. Returns `false` at the first step.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jumps straight to `step`.
    pub fn go_to(&mut self, step: Step) {
        self.index = step.index();
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == Step::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_forward_clamps_at_end() {
        let mut tracker = StepTracker::new();
        let mut visited = vec![tracker.current()];
        while tracker.next() {
            visited.push(tracker.current());
        }
        assert_eq!(visited, Step::ALL.to_vec());
        assert!(tracker.is_last());
        assert!(!tracker.next());
        assert_eq!(tracker.current(), Step::Optimize);
    }

    #[test]
    fn test_walk_back_clamps_at_start() {
        let mut tracker = StepTracker::new();
        tracker.go_to(Step::Constraints);
        assert!(tracker.prev());
        assert!(tracker.prev());
        assert!(tracker.prev());
        assert!(tracker.is_first());
        assert!(!tracker.prev());
    }

    #[test]
    fn test_numbering_and_display() {
        assert_eq!(Step::Objectives.number(), 1);
        assert_eq!(Step::Optimize.number(), 6);
        assert_eq!(Step::Configuration.to_string(), "3. Configuration");
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.number(), i + 1);
        }
    }
}
