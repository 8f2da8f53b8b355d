//! Classifier evaluation: log-loss, Brier score, accuracy, rank-based AUC,
//! and the binned reliability curve used to judge calibration.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::math::clamp_prob;

/// Summary metrics for a set of probabilistic predictions against binary
/// targets. Lower is better for `log_loss` and `brier`; higher for the rest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub log_loss: f64,
    pub brier: f64,
    pub accuracy: f64,
    pub auc: f64,
}

/// One bin of the reliability curve: mean predicted probability vs. observed
/// positive rate over the samples falling into `[bucket_start, bucket_end)`
/// (the last bucket also includes 1.0).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliabilityBucket {
    pub bucket_start: f64,
    pub bucket_end: f64,
    pub predicted: f64,
    pub actual: f64,
    pub count: usize,
}

fn validate_pairs(targets: &[f64], predictions: &[f64]) -> Result<()> {
    if targets.len() != predictions.len() {
        return Err(ModelError::InvalidInput(format!(
            "targets ({}) and predictions ({}) differ in length",
            targets.len(),
            predictions.len()
        )));
    }
    if targets.is_empty() {
        return Err(ModelError::InvalidInput("nothing to evaluate".into()));
    }
    // Out-of-range values are clamped later, but NaN/infinity cannot be: a
    // NaN compares false against everything, which would poison the metrics
    // and stall the tied-score sweep in the AUC pass.
    if targets.iter().chain(predictions).any(|v| !v.is_finite()) {
        return Err(ModelError::InvalidInput(
            "targets and predictions must be finite".into(),
        ));
    }
    Ok(())
}

/// Score `predictions` against binary `targets`.
///
/// Predictions are clamped away from 0 and 1 before the log terms so a
/// confidently wrong model produces a large-but-finite log-loss rather than
/// infinity. Non-finite values are rejected up front as `InvalidInput`.
/// Accuracy uses a 0.5 decision threshold.
pub fn evaluate(targets: &[f64], predictions: &[f64]) -> Result<EvaluationResult> {
    validate_pairs(targets, predictions)?;
    let n = targets.len() as f64;

    let mut log_loss = 0.0;
    let mut brier = 0.0;
    let mut correct = 0usize;
    for (&y, &p_raw) in targets.iter().zip(predictions) {
        let p = clamp_prob(p_raw);
        log_loss -= y * p.ln() + (1.0 - y) * (1.0 - p).ln();
        brier += (p - y) * (p - y);
        let label = if p_raw >= 0.5 { 1.0 } else { 0.0 };
        if (label - y).abs() < 0.5 {
            correct += 1;
        }
    }

    Ok(EvaluationResult {
        log_loss: log_loss / n,
        brier: brier / n,
        accuracy: correct as f64 / n,
        auc: rank_auc(targets, predictions),
    })
}

/// Area under the ROC curve by a single descending-score sweep.
///
/// Ties are handled by advancing the (TP, FP) counts through the whole
/// plateau of equal scores and applying the trapezoid rule between plateau
/// endpoints. Returns 0.5 when either class is absent (AUC is undefined
/// there; 0.5 is the no-skill convention).
fn rank_auc(targets: &[f64], predictions: &[f64]) -> f64 {
    let pos = targets.iter().filter(|&&y| y >= 0.5).count() as f64;
    let neg = targets.len() as f64 - pos;
    if pos == 0.0 || neg == 0.0 {
        return 0.5;
    }

    let mut order: Vec<usize> = (0..targets.len()).collect();
    order.sort_by(|&a, &b| {
        predictions[b]
            .partial_cmp(&predictions[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut tp = 0.0;
    let mut fp = 0.0;
    let mut prev_tp = 0.0;
    let mut prev_fp = 0.0;
    let mut area = 0.0;
    let mut i = 0;
    while i < order.len() {
        let score = predictions[order[i]];
        // Consume the full plateau of tied scores before integrating.
        while i < order.len() && predictions[order[i]] == score {
            if targets[order[i]] >= 0.5 {
                tp += 1.0;
            } else {
                fp += 1.0;
            }
            i += 1;
        }
        area += (fp - prev_fp) * (tp + prev_tp) / 2.0;
        prev_tp = tp;
        prev_fp = fp;
    }

    area / (pos * neg)
}

/// Partition `[0, 1]` into `bins` equal-width buckets and report the mean
/// predicted probability vs. observed positive rate per bucket. Buckets with
/// no samples are omitted.
pub fn reliability_curve(
    predictions: &[f64],
    targets: &[f64],
    bins: usize,
) -> Result<Vec<ReliabilityBucket>> {
    validate_pairs(targets, predictions)?;
    if bins == 0 {
        return Err(ModelError::InvalidInput("bins must be at least 1".into()));
    }

    let mut pred_sum = vec![0.0; bins];
    let mut actual_sum = vec![0.0; bins];
    let mut counts = vec![0usize; bins];
    let width = 1.0 / bins as f64;

    for (&p, &y) in predictions.iter().zip(targets) {
        // p == 1.0 lands in the final bucket rather than one past the end.
        let idx = ((p / width) as usize).min(bins - 1);
        pred_sum[idx] += p;
        actual_sum[idx] += y;
        counts[idx] += 1;
    }

    Ok((0..bins)
        .filter(|&b| counts[b] > 0)
        .map(|b| ReliabilityBucket {
            bucket_start: b as f64 * width,
            bucket_end: (b + 1) as f64 * width,
            predicted: pred_sum[b] / counts[b] as f64,
            actual: actual_sum[b] / counts[b] as f64,
            count: counts[b],
        })
        .collect())
}
