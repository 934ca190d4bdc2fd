//! Job request assembly.
//!
//! A [`JobRequest`] is the payload sent to the optimization backend: the
//! chosen problem and algorithm, the selected objectives and constraints,
//! each with its record rendered as an opaque JSON object. Records are
//! snapshotted at build time, so later edits do not reach a built request.

use crate::algorithm::{AlgorithmKind, AlgorithmRegistry};
use crate::constraint::{ConstraintKind, ConstraintRegistry};
use crate::error::{Result, SetupError};
use crate::objective::{ObjectiveKind, ObjectiveRegistry};
use crate::problem::{ProblemKind, ProblemRegistry};
use crate::selection::{Category, CategoryKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// One selected objective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveInput {
    pub objective_name: ObjectiveKind,
    pub objective_config: Value,
}

/// One selected constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintInput {
    pub constraint_name: ConstraintKind,
    pub constraint_config: Value,
}

/// Backend payload for one optimization run.
///
/// The problem is carried as `problemName` plus a nested `problemConfig`,
/// the same shape as algorithms, objectives and constraints. The Go
/// backend's `ProblemInput` spreads the layout fields flat next to the
/// name instead, so a host talking to that backend must flatten
/// `problemConfig` before sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub problem_name: ProblemKind,
    pub problem_config: Value,
    pub algorithm_name: AlgorithmKind,
    pub algorithm_config: Value,
    pub objectives: Vec<ObjectiveInput>,
    pub constraints: Vec<ConstraintInput>,
    pub number_of_objectives: usize,
}

impl JobRequest {
    /// Assembles a request from the current selections.
    ///
    /// Checks, in order: at least one objective, a problem, an algorithm,
    /// then that none of the problem, algorithm, or constraint choices has
    /// gone stale, then that every involved record is free to read and
    /// passes `validate()`. Nothing is cleared or corrected on failure.
    pub fn build(
        objectives: &ObjectiveRegistry,
        problems: &ProblemRegistry,
        algorithms: &AlgorithmRegistry,
        constraints: &ConstraintRegistry,
    ) -> Result<Self> {
        if objectives.is_empty() {
            return Err(SetupError::NoObjectives);
        }
        let problem = problems.current().ok_or(SetupError::MissingProblem)?;
        let algorithm = algorithms.current().ok_or(SetupError::MissingAlgorithm)?;

        if let Some(stale) = problems.stale_selection(objectives) {
            warn!(problem = %stale, "problem selection is stale");
            return Err(SetupError::stale(Category::Problem, stale.as_str()));
        }
        if let Some(stale) = algorithms.stale_selection(objectives) {
            warn!(
                algorithm = %stale,
                objectives = objectives.len(),
                "algorithm selection is stale"
            );
            return Err(SetupError::stale(Category::Algorithm, stale.as_str()));
        }
        let stale = constraints.stale_selections(problems, objectives);
        if let Some(&first) = stale.first() {
            warn!(constraints = ?stale, "constraint selection is stale");
            return Err(SetupError::stale(Category::Constraint, first.as_str()));
        }

        let problem_ref = problems.get_config(problem);
        ensure_free(problem.as_str(), problem_ref.in_use())?;
        problem_ref
            .validate()
            .map_err(|e| SetupError::config(problem.as_str(), e))?;
        let algorithm_ref = algorithms.get_config(algorithm);
        ensure_free(algorithm.as_str(), algorithm_ref.in_use())?;
        algorithm_ref
            .validate()
            .map_err(|e| SetupError::config(algorithm.as_str(), e))?;

        let objective_inputs = objectives
            .selection()
            .iter()
            .map(|entry| -> Result<ObjectiveInput> {
                let config = entry.config();
                ensure_free(entry.key().as_str(), config.in_use())?;
                config
                    .validate()
                    .map_err(|e| SetupError::config(entry.key().as_str(), e))?;
                Ok(ObjectiveInput {
                    objective_name: entry.key(),
                    objective_config: config.to_payload()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let constraint_inputs = constraints
            .selection()
            .iter()
            .map(|entry| -> Result<ConstraintInput> {
                let config = entry.config();
                ensure_free(entry.key().as_str(), config.in_use())?;
                config
                    .validate()
                    .map_err(|e| SetupError::config(entry.key().as_str(), e))?;
                Ok(ConstraintInput {
                    constraint_name: entry.key(),
                    constraint_config: config.to_payload()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let request = Self {
            problem_name: problem,
            problem_config: problem_ref.to_payload()?,
            algorithm_name: algorithm,
            algorithm_config: algorithm_ref.to_payload()?,
            number_of_objectives: objective_inputs.len(),
            objectives: objective_inputs,
            constraints: constraint_inputs,
        };
        info!(
            problem = %problem,
            algorithm = %algorithm,
            objectives = request.number_of_objectives,
            constraints = request.constraints.len(),
            "job request built"
        );
        Ok(request)
    }

    /// Renders the payload as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Renders the payload as an indented JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Fails with `RecordInUse` instead of letting a read of a record that is
/// mid-`update` panic.
fn ensure_free(key: &str, in_use: bool) -> Result<()> {
    if in_use {
        warn!(key, "record is being edited");
        return Err(SetupError::record_in_use(key));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::AlgorithmConfigs;
    use crate::constraint::ConstraintConfigs;
    use crate::objective::ObjectiveConfigs;
    use crate::problem::ProblemConfigs;

    struct Fixture {
        objectives: ObjectiveRegistry,
        problems: ProblemRegistry,
        algorithms: AlgorithmRegistry,
        constraints: ConstraintRegistry,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                objectives: ObjectiveRegistry::new(ObjectiveConfigs::default()),
                problems: ProblemRegistry::new(ProblemConfigs::default()),
                algorithms: AlgorithmRegistry::new(AlgorithmConfigs::default()),
                constraints: ConstraintRegistry::new(ConstraintConfigs::default()),
            }
        }

        fn build(&self) -> Result<JobRequest> {
            JobRequest::build(
                &self.objectives,
                &self.problems,
                &self.algorithms,
                &self.constraints,
            )
        }
    }

    #[test]
    fn test_missing_pieces_in_order() {
        let mut f = Fixture::new();
        assert!(matches!(f.build(), Err(SetupError::NoObjectives)));
        f.objectives.toggle(ObjectiveKind::Risk, true);
        assert!(matches!(f.build(), Err(SetupError::MissingProblem)));
        f.problems.select(ProblemKind::Grid);
        assert!(matches!(f.build(), Err(SetupError::MissingAlgorithm)));
        f.algorithms.select(AlgorithmKind::Ga);
        assert!(f.build().is_ok());
    }

    #[test]
    fn test_payload_shape() {
        let mut f = Fixture::new();
        f.objectives.toggle(ObjectiveKind::Hoisting, true);
        f.objectives.toggle(ObjectiveKind::Risk, true);
        f.problems.select(ProblemKind::Continuous);
        f.algorithms.select(AlgorithmKind::NsgaIi);
        f.constraints.toggle(ConstraintKind::Overlap, true);
        f.constraints.toggle(ConstraintKind::CoverInCraneRadius, true);

        let job = f.build().unwrap();
        let v: Value = serde_json::from_str(&job.to_json().unwrap()).unwrap();
        assert_eq!(v["problemName"], "Continuous Construction Layout");
        assert_eq!(v["problemConfig"]["layoutLength"], 120.0);
        assert_eq!(v["algorithmName"], "NSGA-II");
        assert_eq!(v["algorithmConfig"]["sigma"], 0.1);
        assert_eq!(v["numberOfObjectives"], 2);
        assert_eq!(v["objectives"][0]["objectiveName"], "Hoisting Objective");
        assert_eq!(v["objectives"][1]["objectiveName"], "Risk Objective");
        assert_eq!(v["constraints"][0]["constraintName"], "Overlap");
        assert_eq!(
            v["constraints"][1]["constraintConfig"]["AlphaCoverInCraneRadiusPenalty"],
            20_000.0
        );
    }

    #[test]
    fn test_stale_algorithm_is_reported() {
        let mut f = Fixture::new();
        f.objectives.toggle(ObjectiveKind::Risk, true);
        f.problems.select(ProblemKind::Grid);
        f.algorithms.select(AlgorithmKind::Gwo);
        f.objectives.toggle(ObjectiveKind::Safety, true);

        match f.build() {
            Err(SetupError::StaleSelection { category, key }) => {
                assert_eq!(category, Category::Algorithm);
                assert_eq!(key, "GWO");
            }
            other => panic!("expected stale algorithm, got {other:?}"),
        }
        assert_eq!(f.algorithms.current(), Some(AlgorithmKind::Gwo));
    }

    #[test]
    fn test_stale_constraint_is_reported() {
        let mut f = Fixture::new();
        f.objectives.toggle(ObjectiveKind::Risk, true);
        f.objectives.toggle(ObjectiveKind::Hoisting, true);
        f.problems.select(ProblemKind::Grid);
        f.algorithms.select(AlgorithmKind::Moaha);
        f.constraints.toggle(ConstraintKind::CoverInCraneRadius, true);
        assert!(f.build().is_ok());

        f.objectives.toggle(ObjectiveKind::Hoisting, false);
        f.objectives.toggle(ObjectiveKind::Safety, true);
        match f.build() {
            Err(SetupError::StaleSelection { category, key }) => {
                assert_eq!(category, Category::Constraint);
                assert_eq!(key, "CoverInCraneRadius");
            }
            other => panic!("expected stale constraint, got {other:?}"),
        }
    }

    #[test]
    fn test_stale_problem_is_reported() {
        let mut f = Fixture::new();
        f.objectives.toggle(ObjectiveKind::ConstructionCost, true);
        f.problems.select(ProblemKind::Predetermined);
        f.algorithms.select(AlgorithmKind::Ga);
        f.constraints.toggle(ConstraintKind::Size, true);
        assert!(f.build().is_ok());

        f.objectives.toggle(ObjectiveKind::ConstructionCost, false);
        f.objectives.toggle(ObjectiveKind::TransportCost, true);
        assert!(matches!(
            f.build(),
            Err(SetupError::StaleSelection {
                category: Category::Problem,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_record_is_reported() {
        let mut f = Fixture::new();
        f.objectives.toggle(ObjectiveKind::Safety, true);
        f.problems.select(ProblemKind::Grid);
        f.algorithms.select(AlgorithmKind::Ga);
        f.algorithms.configs().ga().update(|g| g.chromosome = 1);

        match f.build() {
            Err(SetupError::Config { key, .. }) => assert_eq!(key, "GA"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_request_is_a_snapshot() {
        let mut f = Fixture::new();
        f.objectives.toggle(ObjectiveKind::Risk, true);
        f.problems.select(ProblemKind::Grid);
        f.algorithms.select(AlgorithmKind::Ga);
        let job = f.build().unwrap();

        f.objectives.configs().risk().update(|r| r.delta = 0.9);
        assert_eq!(job.objectives[0].objective_config["Delta"], 0.01);
    }

    #[test]
    fn test_record_being_edited_is_an_error() {
        let mut f = Fixture::new();
        f.objectives.toggle(ObjectiveKind::Risk, true);
        f.problems.select(ProblemKind::Grid);
        f.algorithms.select(AlgorithmKind::Ga);

        let mut result = None;
        f.objectives.configs().risk().update(|_| result = Some(f.build()));
        match result {
            Some(Err(SetupError::RecordInUse { key })) => assert_eq!(key, "Risk Objective"),
            other => panic!("expected record in use, got {other:?}"),
        }

        let mut result = None;
        f.problems.configs().grid().update(|_| result = Some(f.build()));
        assert!(matches!(result, Some(Err(SetupError::RecordInUse { .. }))));

        assert!(f.build().is_ok());
    }

    #[test]
    fn test_pretty_json_matches_compact() {
        let mut f = Fixture::new();
        f.objectives.toggle(ObjectiveKind::SafetyHazard, true);
        f.problems.select(ProblemKind::Continuous);
        f.algorithms.select(AlgorithmKind::Gwo);
        let job = f.build().unwrap();

        let pretty = job.to_json_pretty().unwrap();
        assert!(pretty.contains('\n'));
        let a: Value = serde_json::from_str(&pretty).unwrap();
        let b: Value = serde_json::from_str(&job.to_json().unwrap()).unwrap();
        assert_eq!(a, b);
        let back: JobRequest = serde_json::from_str(&pretty).unwrap();
        assert_eq!(back, job);
    }
}
