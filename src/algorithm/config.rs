//! Algorithm configuration records.
//!
//! Swarm algorithms (AHA, GWO, MOAHA, oMOAHA, MOPSO) are sized by
//! `iterations` × `population`; evolutionary ones (GA, NSGA-II) by
//! `generation` × `chromosome`.

use crate::entity::{check_positive, check_rate};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

fn check_swarm(iterations: usize, population: usize) -> Result<(), ConfigError> {
    if iterations == 0 {
        return Err(ConfigError::out_of_range("iterations", "must be at least 1"));
    }
    if population < 2 {
        return Err(ConfigError::out_of_range("population", "must be at least 2"));
    }
    Ok(())
}

fn check_evolutionary(generation: usize, chromosome: usize) -> Result<(), ConfigError> {
    if generation == 0 {
        return Err(ConfigError::out_of_range("generation", "must be at least 1"));
    }
    if chromosome < 2 {
        return Err(ConfigError::out_of_range("chromosome", "must be at least 2"));
    }
    Ok(())
}

fn check_archive(archive_size: usize) -> Result<(), ConfigError> {
    if archive_size == 0 {
        return Err(ConfigError::out_of_range("archiveSize", "must be at least 1"));
    }
    Ok(())
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_conslay::algorithm::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.chromosome, 100);
/// assert_eq!(config.generation, 300);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_conslay::algorithm::GaConfig;
///
/// let config = GaConfig::default()
///     .with_chromosome(200)
///     .with_crossover_rate(0.8)
///     .with_elitism_count(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GaConfig {
    /// Number of chromosomes in the population.
    pub chromosome: usize,

    /// Number of generations to evolve.
    pub generation: usize,

    /// Probability of recombining a pair of parents (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of mutating an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of best chromosomes copied unchanged into the next generation.
    ///
    /// Must stay below `chromosome`.
    pub elitism_count: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            chromosome: 100,
            generation: 300,
            crossover_rate: 0.7,
            mutation_rate: 0.1,
            elitism_count: 5,
        }
    }
}

impl GaConfig {
    pub fn with_chromosome(mut self, n: usize) -> Self {
        self.chromosome = n;
        self
    }

    pub fn with_generation(mut self, n: usize) -> Self {
        self.generation = n;
        self
    }

    /// Sets the crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_evolutionary(self.generation, self.chromosome)?;
        check_rate("crossoverRate", self.crossover_rate)?;
        check_rate("mutationRate", self.mutation_rate)?;
        if self.elitism_count >= self.chromosome {
            return Err(ConfigError::out_of_range(
                "elitismCount",
                "elites fill entire population",
            ));
        }
        Ok(())
    }
}

/// Configuration for the Artificial Hummingbird Algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AhaConfig {
    pub iterations: usize,
    /// Number of hummingbirds.
    pub population: usize,
}

impl Default for AhaConfig {
    fn default() -> Self {
        Self {
            iterations: 300,
            population: 100,
        }
    }
}

impl AhaConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_population(mut self, n: usize) -> Self {
        self.population = n;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_swarm(self.iterations, self.population)
    }
}

/// Configuration for the Grey Wolf Optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GwoConfig {
    pub iterations: usize,
    pub population: usize,
    /// Initial value of the linearly decreasing `a` coefficient.
    pub a_param: f64,
}

impl Default for GwoConfig {
    fn default() -> Self {
        Self {
            iterations: 300,
            population: 100,
            a_param: 2.0,
        }
    }
}

impl GwoConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_population(mut self, n: usize) -> Self {
        self.population = n;
        self
    }

    pub fn with_a_param(mut self, a: f64) -> Self {
        self.a_param = a;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_swarm(self.iterations, self.population)?;
        check_positive("aParam", self.a_param)
    }
}

/// Configuration for the multi-objective AHA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MoahaConfig {
    pub iterations: usize,
    pub population: usize,
    /// Capacity of the external Pareto archive.
    pub archive_size: usize,
}

impl Default for MoahaConfig {
    fn default() -> Self {
        Self {
            iterations: 300,
            population: 100,
            archive_size: 100,
        }
    }
}

impl MoahaConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_population(mut self, n: usize) -> Self {
        self.population = n;
        self
    }

    pub fn with_archive_size(mut self, n: usize) -> Self {
        self.archive_size = n;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_swarm(self.iterations, self.population)?;
        check_archive(self.archive_size)
    }
}

/// Configuration for the opposition-based multi-objective AHA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OMoahaConfig {
    pub iterations: usize,
    pub population: usize,
    pub archive_size: usize,
}

impl Default for OMoahaConfig {
    fn default() -> Self {
        Self {
            iterations: 300,
            population: 100,
            archive_size: 100,
        }
    }
}

impl OMoahaConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_archive_size(mut self, n: usize) -> Self {
        self.archive_size = n;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_swarm(self.iterations, self.population)?;
        check_archive(self.archive_size)
    }
}

/// Configuration for multi-objective particle swarm optimization.
///
/// `c1`/`c2` are the cognitive and social acceleration coefficients, `w`
/// the inertia weight. The archive is partitioned into `number_of_grids`
/// hypercubes per objective for leader selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MopsoConfig {
    pub iterations: usize,
    pub population: usize,
    pub archive_size: usize,
    pub number_of_grids: usize,
    pub mutation_rate: f64,
    pub max_velocity: f64,
    pub c1: f64,
    pub c2: f64,
    pub w: f64,
}

impl Default for MopsoConfig {
    fn default() -> Self {
        Self {
            iterations: 300,
            population: 100,
            archive_size: 100,
            number_of_grids: 20,
            mutation_rate: 0.5,
            max_velocity: 5.0,
            c1: 2.0,
            c2: 2.0,
            w: 0.4,
        }
    }
}

impl MopsoConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_population(mut self, n: usize) -> Self {
        self.population = n;
        self
    }

    pub fn with_archive_size(mut self, n: usize) -> Self {
        self.archive_size = n;
        self
    }

    pub fn with_number_of_grids(mut self, n: usize) -> Self {
        self.number_of_grids = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_coefficients(mut self, c1: f64, c2: f64, w: f64) -> Self {
        self.c1 = c1;
        self.c2 = c2;
        self.w = w;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_swarm(self.iterations, self.population)?;
        check_archive(self.archive_size)?;
        if self.number_of_grids == 0 {
            return Err(ConfigError::out_of_range(
                "numberOfGrids",
                "must be at least 1",
            ));
        }
        check_rate("mutationRate", self.mutation_rate)?;
        check_positive("maxVelocity", self.max_velocity)
    }
}

/// Configuration for NSGA-II.
///
/// `mutation_strength` scales the Gaussian perturbation of a mutated gene;
/// `sigma` is its standard deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NsgaIiConfig {
    pub chromosome: usize,
    pub generation: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub mutation_strength: f64,
    pub sigma: f64,
}

impl Default for NsgaIiConfig {
    fn default() -> Self {
        Self {
            chromosome: 100,
            generation: 300,
            crossover_rate: 0.7,
            mutation_rate: 0.4,
            mutation_strength: 0.01,
            sigma: 0.1,
        }
    }
}

impl NsgaIiConfig {
    pub fn with_chromosome(mut self, n: usize) -> Self {
        self.chromosome = n;
        self
    }

    pub fn with_generation(mut self, n: usize) -> Self {
        self.generation = n;
        self
    }

    /// Sets the crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_evolutionary(self.generation, self.chromosome)?;
        check_rate("crossoverRate", self.crossover_rate)?;
        check_rate("mutationRate", self.mutation_rate)?;
        check_positive("sigma", self.sigma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ga_defaults() {
        let config = GaConfig::default();
        assert_eq!(config.chromosome, 100);
        assert_eq!(config.generation, 300);
        assert!((config.crossover_rate - 0.7).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.elitism_count, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_all_defaults_validate() {
        assert!(AhaConfig::default().validate().is_ok());
        assert!(GwoConfig::default().validate().is_ok());
        assert!(MoahaConfig::default().validate().is_ok());
        assert!(OMoahaConfig::default().validate().is_ok());
        assert!(MopsoConfig::default().validate().is_ok());
        assert!(NsgaIiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);
        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);

        let config = MopsoConfig::default().with_mutation_rate(1.5);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_elitism_too_high() {
        let config = GaConfig::default()
            .with_chromosome(10)
            .with_elitism_count(10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(AhaConfig::default().with_population(1).validate().is_err());
        assert!(NsgaIiConfig::default().with_chromosome(1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(GwoConfig::default().with_iterations(0).validate().is_err());
        assert!(GaConfig::default().with_generation(0).validate().is_err());
    }

    #[test]
    fn test_validate_zero_archive() {
        assert!(MoahaConfig::default().with_archive_size(0).validate().is_err());
        assert!(OMoahaConfig::default().with_archive_size(0).validate().is_err());
    }

    #[test]
    fn test_mopso_grids() {
        let config = MopsoConfig::default().with_number_of_grids(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_directly_assigned_rate_is_rejected() {
        let mut config = NsgaIiConfig::default();
        config.crossover_rate = 1.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_wire_names() {
        let v = serde_json::to_value(MopsoConfig::default()).unwrap();
        assert_eq!(v["archiveSize"], 100);
        assert_eq!(v["numberOfGrids"], 20);
        assert_eq!(v["maxVelocity"], 5.0);

        let v = serde_json::to_value(GaConfig::default()).unwrap();
        assert_eq!(v["elitismCount"], 5);
        assert_eq!(v["crossoverRate"], 0.7);

        let v = serde_json::to_value(GwoConfig::default()).unwrap();
        assert_eq!(v["aParam"], 2.0);
    }
}
