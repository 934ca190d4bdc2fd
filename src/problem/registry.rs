//! Problem registry.

use super::types::{ProblemConfigRef, ProblemConfigs, ProblemKind};
use crate::objective::{ObjectiveKind, ObjectiveRegistry};
use crate::selection::{CategoryKey, SingleSelection};
use tracing::debug;

/// Whether `kind` may be chosen given the selected objectives.
///
/// Construction Cost is only defined over predetermined candidate
/// locations, so selecting it collapses the choice to that layout and any
/// other objective set excludes it.
fn is_allowed(kind: ProblemKind, objectives: &ObjectiveRegistry) -> bool {
    let needs_predetermined = objectives.is_selected(ObjectiveKind::ConstructionCost);
    match kind {
        ProblemKind::Continuous | ProblemKind::Grid => !needs_predetermined,
        ProblemKind::Predetermined => needs_predetermined,
    }
}

/// Single-choice registry of layout problem types.
///
/// `select` does not check legality: the valid subset is advisory and
/// callers are expected to offer only valid keys. Use
/// [`stale_selection`](Self::stale_selection) to detect a choice that the
/// objective selection has since invalidated.
#[derive(Debug, Clone)]
pub struct ProblemRegistry {
    configs: ProblemConfigs,
    selection: SingleSelection<ProblemKind>,
}

impl ProblemRegistry {
    pub fn new(configs: ProblemConfigs) -> Self {
        Self {
            configs,
            selection: SingleSelection::new(),
        }
    }

    /// Replaces the current problem type, returning the previous one.
    pub fn select(&mut self, kind: ProblemKind) -> Option<ProblemKind> {
        let previous = self.selection.select(kind);
        debug!(problem = %kind, previous = ?previous, "problem selected");
        previous
    }

    /// Clears the current problem type.
    pub fn reset_selection(&mut self) -> Option<ProblemKind> {
        let previous = self.selection.reset();
        if let Some(kind) = previous {
            debug!(problem = %kind, "problem selection reset");
        }
        previous
    }

    pub fn current(&self) -> Option<ProblemKind> {
        self.selection.current()
    }

    /// The record of the current problem type, if any.
    pub fn current_config(&self) -> Option<ProblemConfigRef> {
        self.current().map(|k| self.configs.get(k))
    }

    pub fn get_config(&self, kind: ProblemKind) -> ProblemConfigRef {
        self.configs.get(kind)
    }

    pub fn configs(&self) -> &ProblemConfigs {
        &self.configs
    }

    pub fn catalog(&self) -> &'static [ProblemKind] {
        ProblemKind::all()
    }

    /// Problem types legal under the current objective selection, in
    /// catalog order.
    pub fn valid_subset(&self, objectives: &ObjectiveRegistry) -> Vec<ProblemKind> {
        self.catalog()
            .iter()
            .copied()
            .filter(|&k| is_allowed(k, objectives))
            .collect()
    }

    pub fn is_valid(&self, kind: ProblemKind, objectives: &ObjectiveRegistry) -> bool {
        is_allowed(kind, objectives)
    }

    /// The current choice if it has fallen outside the valid subset.
    ///
    /// The selection itself is left as is.
    pub fn stale_selection(&self, objectives: &ObjectiveRegistry) -> Option<ProblemKind> {
        self.current().filter(|&k| !is_allowed(k, objectives))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::ObjectiveConfigs;

    fn fixtures() -> (ObjectiveRegistry, ProblemRegistry) {
        (
            ObjectiveRegistry::new(ObjectiveConfigs::default()),
            ProblemRegistry::new(ProblemConfigs::default()),
        )
    }

    #[test]
    fn test_no_objectives_excludes_predetermined() {
        let (objectives, problems) = fixtures();
        assert_eq!(
            problems.valid_subset(&objectives),
            vec![ProblemKind::Continuous, ProblemKind::Grid]
        );
    }

    #[test]
    fn test_construction_cost_collapses_to_predetermined() {
        let (mut objectives, problems) = fixtures();
        objectives.toggle(ObjectiveKind::Risk, true);
        objectives.toggle(ObjectiveKind::ConstructionCost, true);
        assert_eq!(
            problems.valid_subset(&objectives),
            vec![ProblemKind::Predetermined]
        );

        objectives.toggle(ObjectiveKind::ConstructionCost, false);
        assert!(!problems
            .valid_subset(&objectives)
            .contains(&ProblemKind::Predetermined));
    }

    #[test]
    fn test_select_outside_valid_subset_is_permitted() {
        let (objectives, mut problems) = fixtures();
        assert!(!problems.is_valid(ProblemKind::Predetermined, &objectives));
        problems.select(ProblemKind::Predetermined);
        assert_eq!(problems.current(), Some(ProblemKind::Predetermined));
        assert_eq!(
            problems.stale_selection(&objectives),
            Some(ProblemKind::Predetermined)
        );
    }

    #[test]
    fn test_objective_change_does_not_clear_problem() {
        let (mut objectives, mut problems) = fixtures();
        objectives.toggle(ObjectiveKind::ConstructionCost, true);
        problems.select(ProblemKind::Predetermined);
        assert_eq!(problems.stale_selection(&objectives), None);

        objectives.toggle(ObjectiveKind::ConstructionCost, false);
        assert_eq!(problems.current(), Some(ProblemKind::Predetermined));
        assert_eq!(
            problems.stale_selection(&objectives),
            Some(ProblemKind::Predetermined)
        );
    }

    #[test]
    fn test_select_replaces_and_reset_clears() {
        let (_, mut problems) = fixtures();
        assert_eq!(problems.select(ProblemKind::Grid), None);
        assert_eq!(
            problems.select(ProblemKind::Continuous),
            Some(ProblemKind::Grid)
        );
        assert_eq!(
            problems.current_config().map(|c| c.kind()),
            Some(ProblemKind::Continuous)
        );
        assert_eq!(problems.reset_selection(), Some(ProblemKind::Continuous));
        assert!(problems.current_config().is_none());
    }
}
