pub mod calibration;
pub mod evaluation;
pub mod logistic;
pub mod ridge;

pub use calibration::{apply_platt, fit_platt, PlattParams};
pub use evaluation::{evaluate, reliability_curve, EvaluationResult, ReliabilityBucket};
pub use logistic::{predict_logistic, train_logistic, LogisticModel, LogisticOptions};
pub use ridge::{predict_ridge, train_ridge, RidgeModel};

#[cfg(test)]
mod tests {
    //! End-to-end: train, score, inspect calibration, refit.

    use super::*;

    #[test]
    fn train_evaluate_calibrate_pipeline() {
        // Two features with a known separating direction plus a nuisance
        // dimension; labels follow the first feature, with a few deliberate
        // flips so the data is not linearly separable.
        let features: Vec<Vec<f64>> = (0..60)
            .map(|i| {
                let x = (i as f64 - 30.0) / 6.0;
                vec![x, ((i * 7) % 11) as f64 / 11.0]
            })
            .collect();
        let targets: Vec<f64> = features
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let label = if row[0] > 0.0 { 1.0 } else { 0.0 };
                if i % 17 == 0 {
                    1.0 - label
                } else {
                    label
                }
            })
            .collect();

        let model = train_logistic(&features, &targets, &LogisticOptions::default()).unwrap();
        let predictions: Vec<f64> = features
            .iter()
            .map(|row| predict_logistic(&model, row))
            .collect();

        let metrics = evaluate(&targets, &predictions).unwrap();
        assert!(metrics.accuracy > 0.85, "accuracy {}", metrics.accuracy);
        assert!(metrics.auc > 0.85, "auc {}", metrics.auc);
        assert!(metrics.log_loss < 0.5, "log_loss {}", metrics.log_loss);

        let curve = reliability_curve(&predictions, &targets, 5).unwrap();
        assert!(!curve.is_empty());
        let total: usize = curve.iter().map(|b| b.count).sum();
        assert_eq!(total, targets.len());

        // A well-fit model's refit transform should be close to identity.
        let platt = fit_platt(&predictions, &targets).unwrap();
        assert!(platt.a > 0.0, "slope flipped: {}", platt.a);
        let recalibrated: Vec<f64> = predictions
            .iter()
            .map(|&p| apply_platt(&platt, p))
            .collect();
        let after = evaluate(&targets, &recalibrated).unwrap();
        assert!(after.log_loss <= metrics.log_loss + 1e-6);
    }
}
