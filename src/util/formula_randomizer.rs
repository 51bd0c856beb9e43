use fastrand::Rng;

use crate::formulas::Formula;

/// A configuration for randomizing formulas.
///
/// The following things can be configured:
/// - the seed -- the same seed always yields the same formula sequence
/// - the variables -- chosen uniformly at random
/// - the maximum nesting depth -- at depth 0 only literals are generated
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FormulaRandomizerConfig {
    pub(crate) seed: u64,
    pub(crate) variables: Vec<String>,
    pub(crate) max_depth: u32,
}

impl FormulaRandomizerConfig {
    /// Builds a configuration with `num_vars` generated variables
    /// (`v0, v1, …`) and the given maximum nesting depth.
    pub fn default_with_num_vars(num_vars: usize, max_depth: u32) -> Self {
        Self {
            seed: 42,
            variables: (0..num_vars).map(|i| format!("v{i}")).collect(),
            max_depth,
        }
    }

    /// Sets the seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A randomizer for formulas, driven by a seeded [`fastrand::Rng`] so that
/// test runs are reproducible.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::util::formula_randomizer::{FormulaRandomizer, FormulaRandomizerConfig};
///
/// let config = FormulaRandomizerConfig::default_with_num_vars(4, 3);
/// let mut randomizer = FormulaRandomizer::new(config);
///
/// let formula = randomizer.formula();
/// assert!(!formula.variables().is_empty());
/// ```
pub struct FormulaRandomizer {
    config: FormulaRandomizerConfig,
    rng: Rng,
}

impl FormulaRandomizer {
    /// Creates a new randomizer for the given configuration.
    pub fn new(config: FormulaRandomizerConfig) -> Self {
        let rng = Rng::with_seed(config.seed);
        Self { config, rng }
    }

    /// Generates a random formula of at most the configured depth.
    pub fn formula(&mut self) -> Formula {
        let max_depth = self.config.max_depth;
        self.formula_rec(max_depth)
    }

    /// Generates a random variable.
    pub fn variable(&mut self) -> Formula {
        let index = self.rng.usize(..self.config.variables.len());
        Formula::var(self.config.variables[index].clone())
    }

    /// Generates a random literal.
    pub fn literal(&mut self) -> Formula {
        let variable = self.variable();
        if self.rng.bool() {
            Formula::not(variable)
        } else {
            variable
        }
    }

    fn formula_rec(&mut self, depth: u32) -> Formula {
        if depth == 0 {
            return self.literal();
        }
        match self.rng.u32(0..6) {
            0 => self.literal(),
            1 => Formula::not(self.formula_rec(depth - 1)),
            2 => Formula::and(self.formula_rec(depth - 1), self.formula_rec(depth - 1)),
            3 => Formula::or(self.formula_rec(depth - 1), self.formula_rec(depth - 1)),
            4 => Formula::implication(self.formula_rec(depth - 1), self.formula_rec(depth - 1)),
            _ => Formula::equivalence(self.formula_rec(depth - 1), self.formula_rec(depth - 1)),
        }
    }
}
