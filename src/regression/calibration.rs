//! Platt scaling: post-hoc recalibration of a probabilistic classifier.
//!
//! The model is `p_calibrated = sigmoid(a * logit(p_raw) + b)`, fit by
//! maximum likelihood with Newton's method. An identity transform
//! (`a = 1, b = 0`) means the raw probabilities were already calibrated.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::math::{safe_logit, sigmoid};

const MAX_NEWTON_STEPS: usize = 50;
const TOLERANCE: f64 = 1e-6;
/// Small ridge added to the Hessian diagonal so near-separable data keeps
/// the 2x2 solve well conditioned.
const HESSIAN_RIDGE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlattParams {
    pub a: f64,
    pub b: f64,
}

/// Fit the two Platt parameters on held-out `(prediction, target)` pairs.
///
/// Runs up to 50 Newton steps on the scalar logistic log-likelihood,
/// stopping early once both parameter updates fall below 1e-6. Requires at
/// least one example of each class; a single-class sample has no maximum
/// likelihood solution.
pub fn fit_platt(predictions: &[f64], targets: &[f64]) -> Result<PlattParams> {
    if predictions.len() != targets.len() {
        return Err(ModelError::InvalidInput(format!(
            "predictions ({}) and targets ({}) differ in length",
            predictions.len(),
            targets.len()
        )));
    }
    if predictions.is_empty() {
        return Err(ModelError::InvalidInput("nothing to calibrate".into()));
    }
    if predictions.iter().chain(targets).any(|v| !v.is_finite()) {
        return Err(ModelError::InvalidInput(
            "predictions and targets must be finite".into(),
        ));
    }
    let positives = targets.iter().filter(|&&y| y >= 0.5).count();
    if positives == 0 || positives == targets.len() {
        return Err(ModelError::InvalidInput(
            "calibration requires both classes to be present".into(),
        ));
    }

    let logits: Vec<f64> = predictions.iter().map(|&p| safe_logit(p)).collect();
    let mut a = 1.0;
    let mut b = 0.0;
    let mut steps = 0;

    for step in 0..MAX_NEWTON_STEPS {
        let mut grad_a = 0.0;
        let mut grad_b = 0.0;
        let mut h_aa = HESSIAN_RIDGE;
        let mut h_ab = 0.0;
        let mut h_bb = HESSIAN_RIDGE;

        for (&z, &y) in logits.iter().zip(targets) {
            let q = sigmoid(a * z + b);
            let r = q - y;
            let w = q * (1.0 - q);
            grad_a += r * z;
            grad_b += r;
            h_aa += w * z * z;
            h_ab += w * z;
            h_bb += w;
        }

        let det = h_aa * h_bb - h_ab * h_ab;
        if det.abs() < 1e-18 {
            break;
        }
        let delta_a = (h_bb * grad_a - h_ab * grad_b) / det;
        let delta_b = (h_aa * grad_b - h_ab * grad_a) / det;
        a -= delta_a;
        b -= delta_b;
        steps = step + 1;

        if delta_a.abs() < TOLERANCE && delta_b.abs() < TOLERANCE {
            break;
        }
    }

    debug!(a, b, steps, "fitted Platt scaling");
    Ok(PlattParams { a, b })
}

/// Apply a fitted transform to a raw probability.
pub fn apply_platt(params: &PlattParams, p: f64) -> f64 {
    sigmoid(params.a * safe_logit(p) + params.b)
}
