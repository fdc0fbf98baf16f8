//! Alignment scoring
//!
//! Measures how much a system's state tells us about its goals, using
//! Shannon entropy and mutual information, and compares the result against a
//! threshold derived from the number of possible states.
//!
//! ```text
//!   goals ---+                     +--> H(G) ---+
//!            +--> normalize ------>|            |
//!   state ---+                     +--> H(Z) ---+--> I(G;Z) --+
//!            |                     |            |             |
//!            +--> outer product ---+--> H(G,Z) -+             +--> is_aligned
//!                                                             |
//!   n_states ---------> log2(n_states) * alpha ---------------+
//! ```
//!
//! ## Components
//!
//! - [`entropy`]: normalization and Shannon entropy helpers
//! - [`AlignmentCalculator`]: mutual information, threshold and decision
//! - [`AlignmentConfig`]: the sensitivity parameter, loadable from TOML
//! - [`AlignmentReport`]: one evaluation's score, threshold and verdict

pub mod calculator;
pub mod config;
pub mod entropy;
pub mod report;

// Re-export main types for convenience
pub use calculator::AlignmentCalculator;
pub use config::{AlignmentConfig, DEFAULT_ALPHA};
pub use report::AlignmentReport;
