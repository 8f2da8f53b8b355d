//! Binary logistic classifier trained by full-batch gradient descent.
//!
//! Deliberately simple: fixed learning rate, fixed epoch count, no line
//! search, no early stopping. Convergence is the caller's responsibility via
//! `LogisticOptions`; the defaults are tuned for the small, well-scaled
//! feature sets this core is fed (a few hundred examples, single-digit
//! feature counts).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::math::{dot, sigmoid};

/// Training hyperparameters for [`train_logistic`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogisticOptions {
    /// L2 penalty strength (applied as `lambda * w / n` per coordinate).
    pub lambda: f64,
    pub learning_rate: f64,
    pub iterations: usize,
}

impl Default for LogisticOptions {
    fn default() -> Self {
        Self {
            lambda: 0.1,
            learning_rate: 0.3,
            iterations: 4000,
        }
    }
}

/// A fitted logistic model. Immutable after training.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub bias: f64,
}

pub(crate) fn validate_training_set(features: &[Vec<f64>], targets: &[f64]) -> Result<usize> {
    if features.len() != targets.len() {
        return Err(ModelError::InvalidInput(format!(
            "feature rows ({}) and targets ({}) differ in length",
            features.len(),
            targets.len()
        )));
    }
    if features.is_empty() {
        return Err(ModelError::InvalidInput("training set is empty".into()));
    }
    let feature_count = features[0].len();
    if feature_count == 0 {
        return Err(ModelError::InvalidInput(
            "feature vectors must have at least one dimension".into(),
        ));
    }
    for (i, row) in features.iter().enumerate() {
        if row.len() != feature_count {
            return Err(ModelError::InvalidInput(format!(
                "feature row {} has length {} but expected {}",
                i,
                row.len(),
                feature_count
            )));
        }
    }
    Ok(feature_count)
}

/// Fit a logistic model on binary targets (0.0 / 1.0).
///
/// Minimizes the L2-regularized log-loss by plain batch gradient descent:
/// each epoch computes the full gradient over all examples and takes one
/// fixed-size step on both weights and bias (the bias is not penalized).
pub fn train_logistic(
    features: &[Vec<f64>],
    targets: &[f64],
    options: &LogisticOptions,
) -> Result<LogisticModel> {
    let feature_count = validate_training_set(features, targets)?;
    let n = features.len() as f64;

    let mut weights = vec![0.0; feature_count];
    let mut bias = 0.0;
    let mut grad_w = vec![0.0; feature_count];

    for _ in 0..options.iterations {
        grad_w.iter_mut().for_each(|g| *g = 0.0);
        let mut grad_b = 0.0;

        for (row, &y) in features.iter().zip(targets) {
            let err = sigmoid(dot(&weights, row) + bias) - y;
            for (g, &x) in grad_w.iter_mut().zip(row) {
                *g += err * x;
            }
            grad_b += err;
        }

        for (w, g) in weights.iter_mut().zip(&grad_w) {
            let grad = g / n + options.lambda * *w / n;
            *w -= options.learning_rate * grad;
        }
        bias -= options.learning_rate * (grad_b / n);
    }

    debug!(
        examples = features.len(),
        features = feature_count,
        iterations = options.iterations,
        bias,
        "trained logistic model"
    );

    Ok(LogisticModel { weights, bias })
}

/// Predicted probability of the positive class, strictly inside (0, 1) for
/// finite inputs.
pub fn predict_logistic(model: &LogisticModel, features: &[f64]) -> f64 {
    debug_assert_eq!(
        features.len(),
        model.weights.len(),
        "feature length does not match trained model"
    );
    sigmoid(dot(&model.weights, features) + model.bias)
}
