//! Monte Carlo playoff-field simulator.
//!
//! Each trial re-scores the whole roster with Gaussian noise and any manual
//! scenario adjustments, selects the top four as the playoff field, and
//! accumulates per-team inclusion/seed/score statistics. Thousands of trials
//! turn one set of ratings into a probabilistic field projection.
//!
//! Malformed parameters are sanitized, never rejected: out-of-range iteration
//! counts and chaos factors are clamped, adjustment deltas are clamped, and
//! adjustments naming unknown teams are dropped. The iteration cap exists to
//! bound wall-clock time when this is called from a request handler.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ── Request / response types ─────────────────────────────────────────────────

/// A team as the simulator sees it. `stability` is inverse volatility: a team
/// at 1.0 produces the same composite score every trial, a team at 0.0 swings
/// the full noise range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    pub power_rating: f64,
    pub resume_score: f64,
    pub playoff_probability: f64,
    pub projected_seed: u32,
    pub stability: f64,
}

/// A manual what-if lever applied to one named team in every trial.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAdjustment {
    pub team: String,
    #[serde(default)]
    pub win_probability_delta: f64,
    #[serde(default)]
    pub resume_bonus: f64,
    #[serde(default)]
    pub auto_bid: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSimulationRequest {
    pub teams: Vec<Team>,
    #[serde(default)]
    pub iterations: Option<u32>,
    #[serde(default)]
    pub chaos_factor: Option<f64>,
    #[serde(default)]
    pub adjustments: Vec<ScenarioAdjustment>,
    #[serde(default)]
    pub protect_seeds: Vec<String>,
}

/// Per-team output of a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResult {
    pub team: String,
    pub playoff_odds: f64,
    pub avg_seed: f64,
    pub top_two_odds: f64,
    pub median_seed: f64,
    pub volatility_index: f64,
    pub inclusion_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSimulationResponse {
    pub iterations: u32,
    pub scenario_hash: String,
    pub generated_at: DateTime<Utc>,
    pub projected_field: Vec<String>,
    pub teams: Vec<TeamResult>,
    pub bubble_watch: Vec<String>,
    pub narrative: String,
}

// ── Tuning constants ─────────────────────────────────────────────────────────

/// Number of teams selected per trial.
pub const FIELD_SIZE: usize = 4;

const MIN_ITERATIONS: u32 = 500;
const MAX_ITERATIONS: u32 = 20_000;
const DEFAULT_ITERATIONS: u32 = 2_500;
const MIN_CHAOS: f64 = 0.25;
const MAX_CHAOS: f64 = 2.5;
const DEFAULT_CHAOS: f64 = 1.0;

const RESUME_WEIGHT: f64 = 0.46;
const PROBABILITY_WEIGHT: f64 = 18.0;
const BASELINE_WEIGHT: f64 = 0.52;
const NOISE_SCALE: f64 = 8.0;
const DELTA_WEIGHT: f64 = 20.0;
const AUTO_BID_BONUS: f64 = 12.0;
const PROTECTED_SEED_WEIGHT: f64 = 4.0;

const MAX_DELTA: f64 = 0.4;
const MAX_RESUME_BONUS: f64 = 8.0;

/// Seed reported for a team that never makes the field.
const UNSEEDED_DEFAULT: f64 = 6.5;

const BUBBLE_LOW: f64 = 0.1;
const BUBBLE_HIGH: f64 = 0.7;

// ── Normalization ────────────────────────────────────────────────────────────

/// The request after sanitization: clamped parameters, adjustments filtered
/// to known teams and sorted, protected seeds deduplicated and sorted. Also
/// the exact payload the scenario hash is computed over, so two requests that
/// sanitize identically share a hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NormalizedRequest<'a> {
    teams: &'a [Team],
    iterations: u32,
    chaos_factor: f64,
    adjustments: Vec<ScenarioAdjustment>,
    protect_seeds: Vec<&'a str>,
}

fn normalize<'a>(request: &'a ScenarioSimulationRequest) -> NormalizedRequest<'a> {
    let raw_iterations = request.iterations.unwrap_or(DEFAULT_ITERATIONS);
    let iterations = raw_iterations.clamp(MIN_ITERATIONS, MAX_ITERATIONS);
    if iterations != raw_iterations {
        debug!(requested = raw_iterations, clamped = iterations, "iteration count clamped");
    }

    let raw_chaos = request.chaos_factor.unwrap_or(DEFAULT_CHAOS);
    let chaos_factor = if raw_chaos.is_finite() {
        raw_chaos.clamp(MIN_CHAOS, MAX_CHAOS)
    } else {
        DEFAULT_CHAOS
    };
    if chaos_factor != raw_chaos {
        debug!(requested = raw_chaos, clamped = chaos_factor, "chaos factor clamped");
    }

    let mut adjustments: Vec<ScenarioAdjustment> = request
        .adjustments
        .iter()
        .filter(|adj| {
            let known = request.teams.iter().any(|t| t.name == adj.team);
            if !known {
                warn!(team = %adj.team, "dropping adjustment for unknown team");
            }
            known
        })
        .map(|adj| ScenarioAdjustment {
            team: adj.team.clone(),
            win_probability_delta: adj.win_probability_delta.clamp(-MAX_DELTA, MAX_DELTA),
            resume_bonus: adj.resume_bonus.clamp(-MAX_RESUME_BONUS, MAX_RESUME_BONUS),
            auto_bid: adj.auto_bid,
        })
        .collect();
    adjustments.sort_by(|a, b| a.team.cmp(&b.team));

    let mut protect_seeds: Vec<&str> = request
        .protect_seeds
        .iter()
        .map(String::as_str)
        .filter(|name| request.teams.iter().any(|t| &t.name == name))
        .collect();
    protect_seeds.sort_unstable();
    protect_seeds.dedup();

    NormalizedRequest {
        teams: &request.teams,
        iterations,
        chaos_factor,
        adjustments,
        protect_seeds,
    }
}

/// 32-bit rolling hash (djb2 xor variant) over the canonical JSON of the
/// normalized request. Used for caching/dedup by the consuming layer; not
/// cryptographic.
fn scenario_hash(normalized: &NormalizedRequest<'_>) -> String {
    let payload = serde_json::to_string(normalized).unwrap_or_default();
    let mut hash: u32 = 5381;
    for byte in payload.bytes() {
        hash = hash.wrapping_mul(33) ^ u32::from(byte);
    }
    format!("{hash:08x}")
}

// ── Simulation core ──────────────────────────────────────────────────────────

/// Per-team tallies for one run. Seeds only ever land in 1..=FIELD_SIZE, so
/// the distribution is a fixed array rather than a map.
#[derive(Debug, Default, Clone)]
struct TeamAccumulator {
    inclusion_count: u64,
    seed_total: u64,
    top_two_count: u64,
    score_sum: f64,
    score_sq_sum: f64,
    seed_counts: [u64; FIELD_SIZE],
}

/// Standard-normal draw via the Box–Muller transform.
fn gaussian<R: Rng>(rng: &mut R) -> f64 {
    let u1 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let u2 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Run the simulation with an ambient (thread-local) random source.
pub fn run_scenario_simulation(request: &ScenarioSimulationRequest) -> ScenarioSimulationResponse {
    let mut rng = rand::thread_rng();
    run_scenario_simulation_with_rng(request, &mut rng)
}

/// Run the simulation drawing from the supplied generator. Callers wanting
/// reproducible output pass a seeded `StdRng`; the test suite does the same.
pub fn run_scenario_simulation_with_rng<R: Rng>(
    request: &ScenarioSimulationRequest,
    rng: &mut R,
) -> ScenarioSimulationResponse {
    let normalized = normalize(request);
    let hash = scenario_hash(&normalized);
    let teams = normalized.teams;
    let n = teams.len();

    let mut accumulators = vec![TeamAccumulator::default(); n];
    let mut trial_scores: Vec<(usize, f64)> = Vec::with_capacity(n);

    for _ in 0..normalized.iterations {
        trial_scores.clear();
        for (idx, team) in teams.iter().enumerate() {
            let baseline = team.power_rating
                + team.resume_score * RESUME_WEIGHT
                + team.playoff_probability * PROBABILITY_WEIGHT;

            let stability = team.stability.clamp(0.0, 1.0);
            let noise =
                gaussian(rng) * (1.0 - stability) * NOISE_SCALE * normalized.chaos_factor;

            let adjustment_bonus: f64 = normalized
                .adjustments
                .iter()
                .filter(|adj| adj.team == team.name)
                .map(|adj| {
                    let mut bonus = adj.win_probability_delta * DELTA_WEIGHT + adj.resume_bonus;
                    if adj.auto_bid {
                        bonus += AUTO_BID_BONUS;
                    }
                    bonus
                })
                .sum();

            let protected_bonus = if normalized.protect_seeds.contains(&team.name.as_str()) {
                PROTECTED_SEED_WEIGHT * stability
            } else {
                0.0
            };

            let score = baseline * BASELINE_WEIGHT + noise + adjustment_bonus + protected_bonus;
            trial_scores.push((idx, score));

            let acc = &mut accumulators[idx];
            acc.score_sum += score;
            acc.score_sq_sum += score * score;
        }

        trial_scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        for (rank0, &(idx, _)) in trial_scores.iter().take(FIELD_SIZE).enumerate() {
            let seed = rank0 as u64 + 1;
            let acc = &mut accumulators[idx];
            acc.inclusion_count += 1;
            acc.seed_total += seed;
            acc.seed_counts[rank0] += 1;
            if seed <= 2 {
                acc.top_two_count += 1;
            }
        }
    }

    let mut results: Vec<TeamResult> = teams
        .iter()
        .zip(&accumulators)
        .map(|(team, acc)| finalize(team, acc, normalized.iterations))
        .collect();

    results.sort_by(|a, b| {
        b.playoff_odds
            .partial_cmp(&a.playoff_odds)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                a.avg_seed
                    .partial_cmp(&b.avg_seed)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });

    let projected_field: Vec<String> = results
        .iter()
        .take(FIELD_SIZE)
        .map(|r| r.team.clone())
        .collect();
    let bubble_watch: Vec<String> = results
        .iter()
        .filter(|r| r.playoff_odds > BUBBLE_LOW && r.playoff_odds < BUBBLE_HIGH)
        .map(|r| r.team.clone())
        .collect();
    let narrative = build_narrative(&results, &bubble_watch);

    debug!(
        iterations = normalized.iterations,
        teams = n,
        hash = %hash,
        "scenario simulation complete"
    );

    ScenarioSimulationResponse {
        iterations: normalized.iterations,
        scenario_hash: hash,
        generated_at: Utc::now(),
        projected_field,
        teams: results,
        bubble_watch,
        narrative,
    }
}

fn finalize(team: &Team, acc: &TeamAccumulator, iterations: u32) -> TeamResult {
    let trials = iterations as f64;
    let playoff_odds = acc.inclusion_count as f64 / trials;
    let top_two_odds = acc.top_two_count as f64 / trials;

    let avg_seed = if acc.inclusion_count > 0 {
        acc.seed_total as f64 / acc.inclusion_count as f64
    } else {
        UNSEEDED_DEFAULT
    };

    let mean_score = acc.score_sum / trials;
    let variance = acc.score_sq_sum / trials - mean_score * mean_score;
    let volatility_index = variance.max(0.0).sqrt();

    TeamResult {
        team: team.name.clone(),
        playoff_odds,
        avg_seed,
        top_two_odds,
        median_seed: median_seed(acc),
        volatility_index,
        inclusion_count: acc.inclusion_count,
    }
}

/// First seed whose cumulative count reaches half the inclusions.
fn median_seed(acc: &TeamAccumulator) -> f64 {
    if acc.inclusion_count == 0 {
        return UNSEEDED_DEFAULT;
    }
    let mut cumulative = 0u64;
    for (rank0, &count) in acc.seed_counts.iter().enumerate() {
        cumulative += count;
        if cumulative * 2 >= acc.inclusion_count {
            return rank0 as f64 + 1.0;
        }
    }
    FIELD_SIZE as f64
}

fn build_narrative(results: &[TeamResult], bubble_watch: &[String]) -> String {
    let Some(leader) = results.first() else {
        return "No teams supplied; nothing to simulate.".to_string();
    };
    let mut narrative = format!(
        "{} leads the projected field, making the playoff in {:.1}% of simulations.",
        leader.team,
        leader.playoff_odds * 100.0
    );
    if bubble_watch.is_empty() {
        narrative.push_str(" The field is settled, with no true bubble teams.");
    } else {
        narrative.push_str(&format!(
            " On the bubble: {}.",
            bubble_watch.join(", ")
        ));
    }
    narrative
}

// ── Tests ────────────────────────────────────────────────────────────────────
