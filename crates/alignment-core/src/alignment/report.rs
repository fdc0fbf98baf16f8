//! Alignment Report - result of scoring a goal/state pair

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one alignment evaluation
///
/// # Examples
///
/// ```
/// use alignment_core::alignment::AlignmentReport;
///
/// let report = AlignmentReport {
///     mutual_information: 1.1,
///     threshold: 0.8,
///     n_states: 3,
///     aligned: true,
/// };
///
/// assert!((report.margin() - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentReport {
    /// I(G;Z) in bits
    pub mutual_information: f64,

    /// Minimum mutual information required, `log2(n_states) * alpha`
    pub threshold: f64,

    /// State count the threshold was derived from
    pub n_states: i64,

    /// `mutual_information >= threshold`
    pub aligned: bool,
}

impl AlignmentReport {
    /// Distance above (positive) or below (negative) the threshold
    pub fn margin(&self) -> f64 {
        self.mutual_information - self.threshold
    }
}

impl fmt::Display for AlignmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alignment score: {:.3}", self.mutual_information)?;
        writeln!(f, "Threshold: {:.3}", self.threshold)?;
        write!(f, "System aligned: {}", self.aligned)
    }
}
