//! Alignment Core - information-theoretic alignment between goals and state
//!
//! Computes an alignment score as the mutual information between a goal
//! vector and a system-state vector, then checks it against a threshold
//! scaled by a sensitivity parameter `alpha` and the number of states.
//!
//! # Quick Start
//!
//! ```
//! use alignment_core::AlignmentCalculator;
//!
//! let calc = AlignmentCalculator::new(0.5).unwrap();
//!
//! let report = calc
//!     .evaluate(&[0.8, 0.6, 0.9], &[0.7, 0.65, 0.85])
//!     .unwrap();
//!
//! println!("{report}");
//! assert_eq!(report.aligned, report.mutual_information >= report.threshold);
//! ```
//!
//! # Errors
//!
//! Inputs outside the formulas' domain fail fast instead of producing NaN:
//! a vector with zero total weight, a negative or non-finite weight, a state
//! count `<= 0`, or an alpha that is not strictly positive. See
//! [`error::AlignmentError`].

#![deny(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod alignment;
pub mod error;

pub use alignment::{AlignmentCalculator, AlignmentConfig, AlignmentReport};
pub use error::{AlignmentError, Result};
