//! Constraint registry.

use super::types::{ConstraintConfigRef, ConstraintConfigs, ConstraintKind};
use crate::objective::{ObjectiveKind, ObjectiveRegistry};
use crate::problem::{ProblemKind, ProblemRegistry};
use crate::selection::{MultiSelection, SelectableItem, SelectionEntry};
use tracing::debug;

/// A selected constraint with a live reference to its record.
pub type ConstraintEntry = SelectionEntry<ConstraintKind, ConstraintConfigRef>;

/// Whether `kind` may be checked given the chosen problem type and the
/// selected objectives.
///
/// Rules apply in order:
/// 1. a predetermined layout admits only `Size`, whatever the objectives;
/// 2. otherwise `Size` is excluded;
/// 3. `CoverInCraneRadius` requires the Hoisting objective.
///
/// No problem choice counts as "not predetermined".
fn is_allowed(
    kind: ConstraintKind,
    problem: Option<ProblemKind>,
    objectives: &ObjectiveRegistry,
) -> bool {
    if problem == Some(ProblemKind::Predetermined) {
        return kind == ConstraintKind::Size;
    }
    match kind {
        ConstraintKind::Size => false,
        ConstraintKind::CoverInCraneRadius => objectives.is_selected(ObjectiveKind::Hoisting),
        ConstraintKind::OutOfBound | ConstraintKind::Overlap | ConstraintKind::InclusiveZone => {
            true
        }
    }
}

/// Checklist of layout constraints.
///
/// # Examples
///
/// ```
/// use u_conslay::constraint::{ConstraintConfigs, ConstraintKind, ConstraintRegistry};
/// use u_conslay::objective::{ObjectiveConfigs, ObjectiveKind, ObjectiveRegistry};
/// use u_conslay::problem::{ProblemConfigs, ProblemKind, ProblemRegistry};
///
/// let mut objectives = ObjectiveRegistry::new(ObjectiveConfigs::default());
/// let mut problems = ProblemRegistry::new(ProblemConfigs::default());
/// let constraints = ConstraintRegistry::new(ConstraintConfigs::default());
///
/// objectives.toggle(ObjectiveKind::Hoisting, true);
/// problems.select(ProblemKind::Grid);
/// assert!(constraints
///     .valid_subset(&problems, &objectives)
///     .contains(&ConstraintKind::CoverInCraneRadius));
///
/// problems.select(ProblemKind::Predetermined);
/// assert_eq!(
///     constraints.valid_subset(&problems, &objectives),
///     vec![ConstraintKind::Size]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintRegistry {
    configs: ConstraintConfigs,
    selection: MultiSelection<ConstraintKind, ConstraintConfigRef>,
}

impl ConstraintRegistry {
    pub fn new(configs: ConstraintConfigs) -> Self {
        Self {
            configs,
            selection: MultiSelection::new(),
        }
    }

    /// Checks or unchecks a constraint. Legality is not enforced.
    pub fn toggle(&mut self, kind: ConstraintKind, checked: bool) -> bool {
        let configs = &self.configs;
        let changed = self.selection.toggle(kind, checked, |k| configs.get(k));
        if changed {
            debug!(
                constraint = %kind,
                checked,
                selected = self.selection.len(),
                "constraint toggled"
            );
        }
        changed
    }

    /// Unchecks every constraint.
    ///
    /// Records keep their values.
    pub fn clear_all(&mut self) {
        let cleared = self.selection.len();
        self.selection.clear();
        debug!(cleared, "constraint selection cleared");
    }

    pub fn selection(&self) -> &[ConstraintEntry] {
        self.selection.entries()
    }

    pub fn keys(&self) -> Vec<ConstraintKind> {
        self.selection.keys()
    }

    pub fn catalog(&self) -> &[SelectableItem<ConstraintKind>] {
        self.selection.catalog()
    }

    pub fn valid_subset(
        &self,
        problems: &ProblemRegistry,
        objectives: &ObjectiveRegistry,
    ) -> Vec<ConstraintKind> {
        let problem = problems.current();
        self.catalog()
            .iter()
            .map(|i| i.key)
            .filter(|&k| is_allowed(k, problem, objectives))
            .collect()
    }

    /// Valid catalog items, carrying their checked flags.
    pub fn valid_items(
        &self,
        problems: &ProblemRegistry,
        objectives: &ObjectiveRegistry,
    ) -> Vec<SelectableItem<ConstraintKind>> {
        let problem = problems.current();
        self.catalog()
            .iter()
            .filter(|i| is_allowed(i.key, problem, objectives))
            .cloned()
            .collect()
    }

    pub fn is_valid(
        &self,
        kind: ConstraintKind,
        problems: &ProblemRegistry,
        objectives: &ObjectiveRegistry,
    ) -> bool {
        is_allowed(kind, problems.current(), objectives)
    }

    /// Checked constraints that have fallen outside the valid subset, in
    /// selection order.
    pub fn stale_selections(
        &self,
        problems: &ProblemRegistry,
        objectives: &ObjectiveRegistry,
    ) -> Vec<ConstraintKind> {
        let problem = problems.current();
        self.keys()
            .into_iter()
            .filter(|&k| !is_allowed(k, problem, objectives))
            .collect()
    }

    pub fn is_selected(&self, kind: ConstraintKind) -> bool {
        self.selection.is_selected(kind)
    }

    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn get_config(&self, kind: ConstraintKind) -> ConstraintConfigRef {
        self.configs.get(kind)
    }

    pub fn configs(&self) -> &ConstraintConfigs {
        &self.configs
    }
}
