//! Setup aggregate.
//!
//! [`Setup`] owns one [`ConfigStore`] and the four registries built over
//! it, and answers the cross-registry questions (which problems,
//! algorithms, constraints are currently valid) without the caller having
//! to thread dependencies around.
//!
//! Mutations are pass-throughs. None of them cascade: changing the
//! objectives never clears a problem, algorithm, or constraint choice.
//! Use [`stale_keys`](Setup::stale_keys) to find choices that need
//! attention, then reset or clear them explicitly.

use crate::algorithm::{AlgorithmConfigRef, AlgorithmKind, AlgorithmRegistry};
use crate::constraint::{ConstraintConfigRef, ConstraintKind, ConstraintRegistry};
use crate::error::Result;
use crate::job::JobRequest;
use crate::objective::{ObjectiveConfigRef, ObjectiveKind, ObjectiveRegistry};
use crate::problem::{ProblemConfigRef, ProblemKind, ProblemRegistry};
use crate::selection::{Category, CategoryKey, SelectableItem};
use crate::store::ConfigStore;

/// A complete optimization setup.
///
/// # Examples
///
/// ```
/// use u_conslay::algorithm::AlgorithmKind;
/// use u_conslay::constraint::ConstraintKind;
/// use u_conslay::objective::ObjectiveKind;
/// use u_conslay::problem::ProblemKind;
/// use u_conslay::setup::Setup;
///
/// let mut setup = Setup::new();
/// setup.toggle_objective(ObjectiveKind::Risk, true);
/// setup.select_problem(ProblemKind::Continuous);
/// setup.select_algorithm(AlgorithmKind::Ga);
/// setup.toggle_constraint(ConstraintKind::OutOfBound, true);
///
/// let job = setup.build_job().unwrap();
/// assert_eq!(job.number_of_objectives, 1);
/// assert!(job.to_json().unwrap().contains("\"algorithmName\":\"GA\""));
/// ```
#[derive(Debug, Clone)]
pub struct Setup {
    store: ConfigStore,
    objectives: ObjectiveRegistry,
    problems: ProblemRegistry,
    algorithms: AlgorithmRegistry,
    constraints: ConstraintRegistry,
}

impl Default for Setup {
    fn default() -> Self {
        Self::new()
    }
}

impl Setup {
    /// Creates a setup with default records and nothing selected.
    pub fn new() -> Self {
        Self::with_store(ConfigStore::new())
    }

    /// Creates a setup whose registries share `store`'s records.
    pub fn with_store(store: ConfigStore) -> Self {
        Self {
            objectives: ObjectiveRegistry::new(store.objectives().clone()),
            problems: ProblemRegistry::new(store.problems().clone()),
            algorithms: AlgorithmRegistry::new(store.algorithms().clone()),
            constraints: ConstraintRegistry::new(store.constraints().clone()),
            store,
        }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn objectives(&self) -> &ObjectiveRegistry {
        &self.objectives
    }

    pub fn problems(&self) -> &ProblemRegistry {
        &self.problems
    }

    pub fn algorithms(&self) -> &AlgorithmRegistry {
        &self.algorithms
    }

    pub fn constraints(&self) -> &ConstraintRegistry {
        &self.constraints
    }

    // ---- mutations ----

    pub fn toggle_objective(&mut self, kind: ObjectiveKind, checked: bool) -> bool {
        self.objectives.toggle(kind, checked)
    }

    pub fn select_problem(&mut self, kind: ProblemKind) -> Option<ProblemKind> {
        self.problems.select(kind)
    }

    pub fn reset_problem(&mut self) -> Option<ProblemKind> {
        self.problems.reset_selection()
    }

    pub fn select_algorithm(&mut self, kind: AlgorithmKind) -> Option<AlgorithmKind> {
        self.algorithms.select(kind)
    }

    pub fn reset_algorithm(&mut self) -> Option<AlgorithmKind> {
        self.algorithms.reset_selection()
    }

    pub fn toggle_constraint(&mut self, kind: ConstraintKind, checked: bool) -> bool {
        self.constraints.toggle(kind, checked)
    }

    pub fn clear_constraints(&mut self) {
        self.constraints.clear_all();
    }

    // ---- derived reads ----

    pub fn valid_objectives(&self) -> Vec<ObjectiveKind> {
        self.objectives.valid_subset()
    }

    pub fn valid_problems(&self) -> Vec<ProblemKind> {
        self.problems.valid_subset(&self.objectives)
    }

    pub fn valid_algorithms(&self) -> Vec<AlgorithmKind> {
        self.algorithms.valid_subset(&self.objectives)
    }

    pub fn valid_constraints(&self) -> Vec<ConstraintKind> {
        self.constraints.valid_subset(&self.problems, &self.objectives)
    }

    pub fn valid_constraint_items(&self) -> Vec<SelectableItem<ConstraintKind>> {
        self.constraints.valid_items(&self.problems, &self.objectives)
    }

    /// Every choice that has fallen outside its valid subset, as
    /// `(category, wire name)` pairs: problem first, then algorithm, then
    /// constraints in selection order.
    pub fn stale_keys(&self) -> Vec<(Category, &'static str)> {
        let mut stale = Vec::new();
        if let Some(k) = self.problems.stale_selection(&self.objectives) {
            stale.push((Category::Problem, k.as_str()));
        }
        if let Some(k) = self.algorithms.stale_selection(&self.objectives) {
            stale.push((Category::Algorithm, k.as_str()));
        }
        stale.extend(
            self.constraints
                .stale_selections(&self.problems, &self.objectives)
                .into_iter()
                .map(|k| (Category::Constraint, k.as_str())),
        );
        stale
    }

    // ---- record dispatch ----

    pub fn objective_config(&self, kind: ObjectiveKind) -> ObjectiveConfigRef {
        self.objectives.get_config(kind)
    }

    pub fn problem_config(&self, kind: ProblemKind) -> ProblemConfigRef {
        self.problems.get_config(kind)
    }

    pub fn algorithm_config(&self, kind: AlgorithmKind) -> AlgorithmConfigRef {
        self.algorithms.get_config(kind)
    }

    pub fn constraint_config(&self, kind: ConstraintKind) -> ConstraintConfigRef {
        self.constraints.get_config(kind)
    }

    /// Assembles the backend payload. See [`JobRequest::build`].
    pub fn build_job(&self) -> Result<JobRequest> {
        JobRequest::build(
            &self.objectives,
            &self.problems,
            &self.algorithms,
            &self.constraints,
        )
    }
}
