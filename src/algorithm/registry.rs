//! Algorithm registry.

use super::types::{AlgorithmConfigRef, AlgorithmConfigs, AlgorithmKind, Arity};
use crate::objective::ObjectiveRegistry;
use crate::selection::{CategoryKey, SingleSelection};
use tracing::debug;

/// Arity required by a given number of selected objectives.
///
/// `None` when no objective is selected: no algorithm applies.
pub fn required_arity(objective_count: usize) -> Option<Arity> {
    match objective_count {
        0 => None,
        1 => Some(Arity::Single),
        _ => Some(Arity::Multi),
    }
}

/// Algorithms applicable to `objective_count` selected objectives, in
/// catalog order.
///
/// ```
/// use u_conslay::algorithm::{valid_algorithms, AlgorithmKind};
///
/// assert!(valid_algorithms(0).is_empty());
/// assert_eq!(
///     valid_algorithms(1),
///     vec![AlgorithmKind::Ga, AlgorithmKind::Aha, AlgorithmKind::Gwo]
/// );
/// ```
pub fn valid_algorithms(objective_count: usize) -> Vec<AlgorithmKind> {
    match required_arity(objective_count) {
        None => Vec::new(),
        Some(arity) => AlgorithmKind::all()
            .iter()
            .copied()
            .filter(|k| k.arity() == arity)
            .collect(),
    }
}

/// Single-choice registry of optimization algorithms.
///
/// The valid subset depends only on how many objectives are selected. A
/// choice made under a different objective count is kept until the caller
/// invokes [`reset_selection`](Self::reset_selection).
///
/// # Examples
///
/// ```
/// use u_conslay::algorithm::{AlgorithmConfigs, AlgorithmKind, AlgorithmRegistry};
/// use u_conslay::objective::{ObjectiveConfigs, ObjectiveKind, ObjectiveRegistry};
///
/// let mut objectives = ObjectiveRegistry::new(ObjectiveConfigs::default());
/// let mut algorithms = AlgorithmRegistry::new(AlgorithmConfigs::default());
///
/// objectives.toggle(ObjectiveKind::Risk, true);
/// algorithms.select(AlgorithmKind::Gwo);
///
/// objectives.toggle(ObjectiveKind::Safety, true);
/// assert_eq!(algorithms.current(), Some(AlgorithmKind::Gwo));
/// assert_eq!(algorithms.stale_selection(&objectives), Some(AlgorithmKind::Gwo));
/// ```
#[derive(Debug, Clone)]
pub struct AlgorithmRegistry {
    configs: AlgorithmConfigs,
    selection: SingleSelection<AlgorithmKind>,
}

impl AlgorithmRegistry {
    pub fn new(configs: AlgorithmConfigs) -> Self {
        Self {
            configs,
            selection: SingleSelection::new(),
        }
    }

    /// Replaces the current algorithm, returning the previous one.
    ///
    /// Legality is not enforced.
    pub fn select(&mut self, kind: AlgorithmKind) -> Option<AlgorithmKind> {
        let previous = self.selection.select(kind);
        debug!(algorithm = %kind, previous = ?previous, "algorithm selected");
        previous
    }

    /// Clears the current algorithm.
    pub fn reset_selection(&mut self) -> Option<AlgorithmKind> {
        let previous = self.selection.reset();
        if let Some(kind) = previous {
            debug!(algorithm = %kind, "algorithm selection reset");
        }
        previous
    }

    pub fn current(&self) -> Option<AlgorithmKind> {
        self.selection.current()
    }

    pub fn current_config(&self) -> Option<AlgorithmConfigRef> {
        self.current().map(|k| self.configs.get(k))
    }

    /// Dispatches to the live record of `kind`.
    pub fn get_config(&self, kind: AlgorithmKind) -> AlgorithmConfigRef {
        self.configs.get(kind)
    }

    pub fn configs(&self) -> &AlgorithmConfigs {
        &self.configs
    }

    pub fn catalog(&self) -> &'static [AlgorithmKind] {
        AlgorithmKind::all()
    }

    pub fn valid_subset(&self, objectives: &ObjectiveRegistry) -> Vec<AlgorithmKind> {
        valid_algorithms(objectives.len())
    }

    pub fn is_valid(&self, kind: AlgorithmKind, objectives: &ObjectiveRegistry) -> bool {
        required_arity(objectives.len()) == Some(kind.arity())
    }

    /// The current choice if the objective selection no longer admits it.
    pub fn stale_selection(&self, objectives: &ObjectiveRegistry) -> Option<AlgorithmKind> {
        self.current().filter(|&k| !self.is_valid(k, objectives))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{ObjectiveConfigs, ObjectiveKind};

    fn fixtures() -> (ObjectiveRegistry, AlgorithmRegistry) {
        (
            ObjectiveRegistry::new(ObjectiveConfigs::default()),
            AlgorithmRegistry::new(AlgorithmConfigs::default()),
        )
    }

    #[test]
    fn test_no_objectives_no_algorithms() {
        let (objectives, algorithms) = fixtures();
        assert!(algorithms.valid_subset(&objectives).is_empty());
        for &k in AlgorithmKind::all() {
            assert!(!algorithms.is_valid(k, &objectives));
        }
    }

    #[test]
    fn test_single_then_multi_scenario() {
        let (mut objectives, mut algorithms) = fixtures();
        objectives.toggle(ObjectiveKind::Risk, true);
        assert_eq!(
            algorithms.valid_subset(&objectives),
            vec![AlgorithmKind::Ga, AlgorithmKind::Aha, AlgorithmKind::Gwo]
        );
        algorithms.select(AlgorithmKind::Aha);

        objectives.toggle(ObjectiveKind::Safety, true);
        assert_eq!(
            algorithms.valid_subset(&objectives),
            vec![
                AlgorithmKind::Moaha,
                AlgorithmKind::OMoaha,
                AlgorithmKind::Mopso,
                AlgorithmKind::NsgaIi
            ]
        );
        assert_eq!(algorithms.current(), Some(AlgorithmKind::Aha));
        assert_eq!(
            algorithms.stale_selection(&objectives),
            Some(AlgorithmKind::Aha)
        );

        algorithms.reset_selection();
        assert_eq!(algorithms.current(), None);
        assert_eq!(algorithms.stale_selection(&objectives), None);
    }

    #[test]
    fn test_get_config_dispatch() {
        let (_, algorithms) = fixtures();
        algorithms.configs().mopso().update(|m| m.w = 0.9);
        match algorithms.get_config(AlgorithmKind::Mopso) {
            AlgorithmConfigRef::Mopso(h) => assert!((h.borrow().w - 0.9).abs() < 1e-10),
            other => panic!("unexpected variant {:?}", other.kind()),
        }
    }

    #[test]
    fn test_current_config_follows_selection() {
        let (_, mut algorithms) = fixtures();
        assert!(algorithms.current_config().is_none());
        algorithms.select(AlgorithmKind::NsgaIi);
        assert_eq!(
            algorithms.current_config().map(|c| c.kind()),
            Some(AlgorithmKind::NsgaIi)
        );
    }

    #[test]
    fn test_required_arity() {
        assert_eq!(required_arity(0), None);
        assert_eq!(required_arity(1), Some(Arity::Single));
        assert_eq!(required_arity(6), Some(Arity::Multi));
    }
}
