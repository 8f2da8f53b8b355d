//! Statistical prediction and simulation core for sports outcomes.
//!
//! Four pure, synchronous computation units, no I/O and no shared state:
//!
//! - [`regression`]: a binary logistic classifier (batch gradient descent,
//!   L2 penalty), a closed-form ridge regressor, evaluation metrics
//!   (log-loss, Brier, accuracy, rank-based AUC, reliability curve), and
//!   Platt-scaling calibration.
//! - [`win_probability`]: sport-parameterized pre-game Pythagorean
//!   expectancy plus in-game situational adjustments for football, baseball,
//!   and basketball.
//! - [`simulation`]: a Monte Carlo playoff-field simulator producing
//!   per-team inclusion odds, seed distributions, and volatility.
//!
//! Every public input and output is a plain `serde`-serializable struct; the
//! HTTP layer that feeds this crate lives elsewhere and just shuttles JSON.
//! Calls either fully succeed or fail up front with
//! [`ModelError::InvalidInput`]; out-of-range numeric parameters are clamped
//! into valid ranges rather than rejected.

pub mod error;
mod math;
pub mod regression;
pub mod simulation;
pub mod win_probability;

pub use error::{ModelError, Result};
pub use regression::{
    apply_platt, evaluate, fit_platt, predict_logistic, predict_ridge, reliability_curve,
    train_logistic, train_ridge, EvaluationResult, LogisticModel, LogisticOptions, PlattParams,
    ReliabilityBucket, RidgeModel,
};
pub use simulation::{
    run_scenario_simulation, run_scenario_simulation_with_rng, ScenarioAdjustment,
    ScenarioSimulationRequest, ScenarioSimulationResponse, Team, TeamResult,
};
pub use win_probability::{
    calculate_win_probability, GameState, ProbabilityFactors, ProbabilityInput, ProbabilityResult,
    Sport, TeamStrength,
};
