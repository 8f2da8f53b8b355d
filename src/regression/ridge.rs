//! Closed-form ridge regression via the regularized normal equations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::math::{dot, invert, mat_mul, mat_vec, mean, transpose};
use crate::regression::logistic::validate_training_set;

/// A fitted ridge model. Immutable after training.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RidgeModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Fit `coefficients = (XᵀX + λI)⁻¹ Xᵀy`.
///
/// The intercept is the unconditional mean of the targets and is independent
/// of the coefficient solve — no bias column is appended to `X` and neither
/// features nor targets are centered. Training on a constant target `c`
/// therefore always yields `intercept == c`, whatever the features look like.
pub fn train_ridge(features: &[Vec<f64>], targets: &[f64], lambda: f64) -> Result<RidgeModel> {
    let feature_count = validate_training_set(features, targets)?;

    let xt = transpose(features);
    let mut xtx = mat_mul(&xt, features);
    for (i, row) in xtx.iter_mut().enumerate() {
        row[i] += lambda;
    }
    let inv = invert(&xtx).ok_or_else(|| {
        ModelError::InvalidInput("normal equations are singular; features are degenerate".into())
    })?;
    let xty = mat_vec(&xt, targets);
    let coefficients = mat_vec(&inv, &xty);
    let intercept = mean(targets);

    debug!(
        examples = features.len(),
        features = feature_count,
        lambda,
        intercept,
        "trained ridge model"
    );

    Ok(RidgeModel {
        coefficients,
        intercept,
    })
}

pub fn predict_ridge(model: &RidgeModel, features: &[f64]) -> f64 {
    debug_assert_eq!(
        features.len(),
        model.coefficients.len(),
        "feature length does not match trained model"
    );
    model.intercept + dot(&model.coefficients, features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_length_mismatch() {
        let err = train_ridge(&[vec![1.0]], &[1.0, 2.0], 0.1);
        assert!(matches!(err, Err(ModelError::InvalidInput(_))));
    }

    #[test]
    fn rejects_empty_training_set() {
        let err = train_ridge(&[], &[], 0.1);
        assert!(matches!(err, Err(ModelError::InvalidInput(_))));
    }

    #[test]
    fn constant_target_pins_intercept() {
        // The intercept is always mean(targets), so a constant target c gives
        // intercept == c no matter what the features are.
        let features = vec![vec![1.0, -3.0], vec![4.0, 2.0], vec![-2.0, 7.0]];
        let targets = vec![5.5, 5.5, 5.5];
        let model = train_ridge(&features, &targets, 0.1).unwrap();
        assert_relative_eq!(model.intercept, 5.5, epsilon = 1e-12);
    }

    #[test]
    fn recovers_centered_linear_relationship() {
        // y = 2x over zero-mean x: intercept = mean(y) = 0, so the quirky
        // intercept and the standard one coincide and the slope is exact
        // (up to regularization shrinkage).
        let features: Vec<Vec<f64>> = (-5..=5).map(|i| vec![i as f64]).collect();
        let targets: Vec<f64> = (-5..=5).map(|i| 2.0 * i as f64).collect();
        let model = train_ridge(&features, &targets, 1e-9).unwrap();
        assert_relative_eq!(model.coefficients[0], 2.0, epsilon = 1e-6);
        assert_relative_eq!(model.intercept, 0.0, epsilon = 1e-12);
        assert_relative_eq!(predict_ridge(&model, &[3.0]), 6.0, epsilon = 1e-5);
    }

    #[test]
    fn lambda_shrinks_coefficients() {
        let features: Vec<Vec<f64>> = (1..=10).map(|i| vec![i as f64]).collect();
        let targets: Vec<f64> = (1..=10).map(|i| 3.0 * i as f64).collect();
        let loose = train_ridge(&features, &targets, 1e-6).unwrap();
        let tight = train_ridge(&features, &targets, 100.0).unwrap();
        assert!(tight.coefficients[0].abs() < loose.coefficients[0].abs());
    }

    #[test]
    fn duplicate_feature_columns_stay_solvable_with_lambda() {
        // Perfectly collinear columns: XᵀX is singular but λI restores rank.
        let features = vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]];
        let targets = vec![2.0, 4.0, 6.0];
        let model = train_ridge(&features, &targets, 0.1).unwrap();
        assert!(model.coefficients.iter().all(|c| c.is_finite()));
    }
}
