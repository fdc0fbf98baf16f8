//! Shannon entropy over weight vectors
//!
//! Weight vectors are not required to sum to 1. Each helper normalizes by the
//! total first, drops cells that end up exactly zero, and sums `-p·log2(p)`
//! over what is left. All results are in bits.

use crate::error::{AlignmentError, Result};

/// Check every entry and return the total weight.
///
/// Entries must be finite and non-negative, and the total must be positive
/// and finite.
pub fn total_weight(weights: &[f64], label: &str) -> Result<f64> {
    if let Some((index, &value)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(AlignmentError::InvalidWeight {
            label: label.to_string(),
            index,
            value,
        });
    }

    let total: f64 = weights.iter().sum();
    check_total(total, label)?;
    Ok(total)
}

fn check_total(total: f64, label: &str) -> Result<()> {
    if !total.is_finite() {
        return Err(AlignmentError::NonFiniteTotal {
            label: label.to_string(),
        });
    }
    if total <= 0.0 {
        return Err(AlignmentError::DegenerateInput {
            label: label.to_string(),
        });
    }
    Ok(())
}

/// Divide every entry by the total, producing a probability distribution
pub fn normalize(weights: &[f64], label: &str) -> Result<Vec<f64>> {
    let total = total_weight(weights, label)?;
    Ok(weights.iter().map(|w| w / total).collect())
}

/// `-Σ p·log2(p)` over the non-zero cells of an already-normalized distribution
fn entropy_bits(probabilities: impl IntoIterator<Item = f64>) -> f64 {
    -probabilities
        .into_iter()
        .filter(|&p| p > 0.0)
        .map(|p| p * p.log2())
        .sum::<f64>()
}

/// Shannon entropy H(X) of a single weight vector
///
/// ```
/// use alignment_core::alignment::entropy::entropy;
///
/// // Uniform over four outcomes = 2 bits
/// let h = entropy(&[1.0, 1.0, 1.0, 1.0], "x").unwrap();
/// assert!((h - 2.0).abs() < 1e-12);
/// ```
pub fn entropy(weights: &[f64], label: &str) -> Result<f64> {
    let p = normalize(weights, label)?;
    Ok(entropy_bits(p))
}

/// Joint entropy H(X,Y) of the outer product `x[i]·y[j]`
///
/// The two vectors may differ in length. The outer product is normalized by
/// its own grand total, not by the product of the marginal totals.
pub fn joint_entropy(x: &[f64], y: &[f64], x_label: &str, y_label: &str) -> Result<f64> {
    total_weight(x, x_label)?;
    total_weight(y, y_label)?;

    let joint: Vec<f64> = x
        .iter()
        .flat_map(|&xi| y.iter().map(move |&yj| xi * yj))
        .collect();

    // Both marginals passed, so only underflow or overflow of the products
    // can trip this
    let total: f64 = joint.iter().sum();
    check_total(total, &format!("{x_label} x {y_label}"))?;

    Ok(entropy_bits(joint.into_iter().map(|c| c / total)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_element_has_zero_entropy() {
        assert_eq!(entropy(&[1.0], "x").unwrap(), 0.0);
        assert_eq!(entropy(&[42.5], "x").unwrap(), 0.0);
    }

    #[test]
    fn test_certainty_with_zeros() {
        let h = entropy(&[0.0, 3.0, 0.0], "x").unwrap();
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_uniform_entropy() {
        let h = entropy(&[2.0, 2.0], "x").unwrap();
        assert!((h - 1.0).abs() < 1e-12);

        let h = entropy(&[0.3; 8], "x").unwrap();
        assert!((h - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_sums_to_one() {
        let p = normalize(&[1.0, 3.0], "x").unwrap();
        assert_eq!(p, vec![0.25, 0.75]);
    }

    #[test]
    fn test_zero_sum_is_degenerate() {
        let err = entropy(&[0.0, 0.0, 0.0], "goals").unwrap_err();
        match err {
            AlignmentError::DegenerateInput { label } => assert_eq!(label, "goals"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_is_degenerate() {
        assert!(matches!(
            entropy(&[], "x"),
            Err(AlignmentError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_negative_and_nan_weights_rejected() {
        match entropy(&[0.5, -0.1, 0.2], "state").unwrap_err() {
            AlignmentError::InvalidWeight { label, index, value } => {
                assert_eq!(label, "state");
                assert_eq!(index, 1);
                assert_eq!(value, -0.1);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            entropy(&[f64::NAN, 1.0], "x"),
            Err(AlignmentError::InvalidWeight { index: 0, .. })
        ));
        assert!(matches!(
            entropy(&[1.0, f64::INFINITY], "x"),
            Err(AlignmentError::InvalidWeight { index: 1, .. })
        ));
    }

    #[test]
    fn test_overflowing_total_is_not_reported_as_zero() {
        match entropy(&[1e308, 1e308], "goals").unwrap_err() {
            AlignmentError::NonFiniteTotal { label } => assert_eq!(label, "goals"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_joint_entropy_overflowing_products() {
        match joint_entropy(&[1e200], &[1e200], "goals", "state").unwrap_err() {
            AlignmentError::NonFiniteTotal { label } => assert_eq!(label, "goals x state"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_joint_entropy_underflowing_products() {
        match joint_entropy(&[1e-200], &[1e-200], "goals", "state").unwrap_err() {
            AlignmentError::DegenerateInput { label } => assert_eq!(label, "goals x state"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_joint_entropy_of_uniforms() {
        // 2 x 4 uniform grid = 3 bits
        let h = joint_entropy(&[1.0, 1.0], &[5.0; 4], "x", "y").unwrap();
        assert!((h - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_joint_entropy_names_the_degenerate_side() {
        match joint_entropy(&[1.0, 2.0], &[0.0, 0.0], "goals", "state").unwrap_err() {
            AlignmentError::DegenerateInput { label } => assert_eq!(label, "state"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_joint_entropy_with_zero_row() {
        // A zero entry wipes out a whole row of the grid
        let h = joint_entropy(&[0.0, 1.0, 1.0], &[1.0, 1.0], "x", "y").unwrap();
        assert!((h - 2.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn entropy_nonnegative(v in prop::collection::vec(0.001f64..100.0, 1..64)) {
            let h = entropy(&v, "v").unwrap();
            prop_assert!(h >= -1e-12);
        }

        #[test]
        fn entropy_bounded_by_log_len(v in prop::collection::vec(0.001f64..100.0, 1..64)) {
            let h = entropy(&v, "v").unwrap();
            prop_assert!(h <= (v.len() as f64).log2() + 1e-9);
        }

        #[test]
        fn entropy_scale_invariant(
            v in prop::collection::vec(0.001f64..100.0, 1..64),
            k in 0.01f64..1000.0,
        ) {
            let scaled: Vec<f64> = v.iter().map(|x| x * k).collect();
            let h = entropy(&v, "v").unwrap();
            let hk = entropy(&scaled, "v").unwrap();
            prop_assert!((h - hk).abs() < 1e-9);
        }

        #[test]
        fn joint_entropy_is_additive_for_outer_product(
            x in prop::collection::vec(0.001f64..100.0, 1..16),
            y in prop::collection::vec(0.001f64..100.0, 1..16),
        ) {
            let hx = entropy(&x, "x").unwrap();
            let hy = entropy(&y, "y").unwrap();
            let hxy = joint_entropy(&x, &y, "x", "y").unwrap();
            prop_assert!((hx + hy - hxy).abs() < 1e-9);
        }
    }
}
