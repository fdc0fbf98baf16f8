//! Alignment Calculator - mutual information between goals and state
//!
//! The calculator treats a goal vector and a state vector as weight vectors,
//! normalizes each into a distribution, and scores their alignment as
//!
//! ```text
//! I(G;Z) = H(G) + H(Z) - H(G,Z)
//! ```
//!
//! where `H(G,Z)` is taken over the outer product of the two vectors. The
//! score is then compared against `log2(n_states) * alpha`.
//!
//! The outer product of two marginals is an independent joint distribution,
//! so in exact arithmetic the score is always 0. What comes back is that 0
//! plus floating point residue, which can be slightly negative. Callers that
//! need a score driven by paired observations should not rely on this.
//!
//! # Usage
//!
//! ```
//! use alignment_core::alignment::AlignmentCalculator;
//!
//! # fn example() -> alignment_core::error::Result<()> {
//! let calc = AlignmentCalculator::default();
//!
//! let goals = [0.8, 0.6, 0.9];
//! let state = [0.7, 0.65, 0.85];
//!
//! let score = calc.mutual_information(&goals, &state)?;
//! let threshold = calc.alignment_threshold(goals.len() as i64)?;
//!
//! println!("Alignment score: {:.3}", score);
//! println!("System aligned: {}", calc.is_aligned(score, threshold));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use super::config::{AlignmentConfig, DEFAULT_ALPHA};
use super::entropy;
use super::report::AlignmentReport;
use crate::error::{AlignmentError, Result};
use tracing::{debug, trace};

const GOALS: &str = "goals";
const STATE: &str = "state";

/// Scores goal/state alignment with a fixed sensitivity parameter
///
/// Immutable after construction; share it by reference across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentCalculator {
    alpha: f64,
}

impl Default for AlignmentCalculator {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl AlignmentCalculator {
    /// Create a calculator with the given sensitivity parameter
    ///
    /// Fails with [`AlignmentError::InvalidAlpha`] unless alpha is finite
    /// and strictly positive.
    pub fn new(alpha: f64) -> Result<Self> {
        Self::from_config(&AlignmentConfig::new().with_alpha(alpha))
    }

    /// Create from a configuration
    pub fn from_config(config: &AlignmentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            alpha: config.alpha,
        })
    }

    /// Sensitivity parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Shannon entropy of a weight vector, in bits
    pub fn entropy(&self, weights: &[f64]) -> Result<f64> {
        entropy::entropy(weights, "vector")
    }

    /// Joint entropy of the outer product of two weight vectors, in bits
    pub fn joint_entropy(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        entropy::joint_entropy(x, y, "x", "y")
    }

    /// Mutual information I(G;Z) between a goal vector and a state vector
    ///
    /// Lengths are not required to match. Fails with
    /// [`AlignmentError::DegenerateInput`] if either vector has zero total
    /// weight.
    pub fn mutual_information(&self, goals: &[f64], state: &[f64]) -> Result<f64> {
        let joint = entropy::joint_entropy(goals, state, GOALS, STATE)?;
        let goal_entropy = entropy::entropy(goals, GOALS)?;
        let state_entropy = entropy::entropy(state, STATE)?;

        trace!(goal_entropy, state_entropy, joint, "Entropy terms");

        let mi = goal_entropy + state_entropy - joint;
        debug!(
            goals = goals.len(),
            state = state.len(),
            mutual_information = mi,
            "Computed mutual information"
        );
        Ok(mi)
    }

    /// Minimum mutual information for a system with `n_states` possible states
    ///
    /// `log2(n_states) * alpha`. Fails with
    /// [`AlignmentError::InvalidStateCount`] when `n_states <= 0`.
    pub fn alignment_threshold(&self, n_states: i64) -> Result<f64> {
        if n_states <= 0 {
            return Err(AlignmentError::InvalidStateCount(n_states));
        }

        let threshold = (n_states as f64).log2() * self.alpha;
        debug!(n_states, alpha = self.alpha, threshold, "Computed alignment threshold");
        Ok(threshold)
    }

    /// True iff `mutual_info >= threshold`
    pub fn is_aligned(&self, mutual_info: f64, threshold: f64) -> bool {
        mutual_info >= threshold
    }

    /// Score a goal/state pair against the threshold for `goals.len()` states
    pub fn evaluate(&self, goals: &[f64], state: &[f64]) -> Result<AlignmentReport> {
        self.evaluate_with_states(goals, state, goals.len() as i64)
    }

    /// Score a goal/state pair against the threshold for `n_states` states
    pub fn evaluate_with_states(
        &self,
        goals: &[f64],
        state: &[f64],
        n_states: i64,
    ) -> Result<AlignmentReport> {
        let mutual_information = self.mutual_information(goals, state)?;
        let threshold = self.alignment_threshold(n_states)?;

        Ok(AlignmentReport {
            mutual_information,
            threshold,
            n_states,
            aligned: self.is_aligned(mutual_information, threshold),
        })
    }
}
