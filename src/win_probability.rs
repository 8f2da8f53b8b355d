//! Sport-specific win probability models.
//!
//! Two layers:
//! - **Pre-game**: ratings (0–100 scale) map to expected points and feed a
//!   Pythagorean expectancy with a sport-specific exponent, plus a fixed
//!   home-advantage bump.
//! - **In-game**: optional situational state adjusts the pre-game number.
//!   The key insight carries across sports: **not all leads are equal** — a
//!   7-point NFL lead with 5 minutes left is worth far more than at kickoff,
//!   and a 1-run MLB lead in the 8th dwarfs the same lead in the 2nd.
//!
//! Every output is hard-clamped to `[0.01, 0.99]`: this core never claims
//! certainty, whatever the scoreboard says.

use serde::{Deserialize, Serialize};

// ── Public types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    #[serde(rename = "nfl")]
    Nfl,
    #[serde(rename = "cfb")]
    CollegeFootball,
    #[serde(rename = "mlb")]
    Mlb,
    #[serde(rename = "college-baseball")]
    CollegeBaseball,
    #[serde(rename = "nba")]
    Nba,
    #[serde(rename = "college-basketball")]
    CollegeBasketball,
}

/// A team as the probability model sees it: a single power rating on a
/// 0–100 scale, where 75 is a league-average side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStrength {
    pub rating: f64,
}

/// Sport-specific in-game situation. Optional on the input; when absent the
/// result is the pure pre-game estimate (plus the current score, if any).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameState {
    #[serde(rename_all = "camelCase")]
    Football {
        /// Minutes left in regulation (60 at kickoff).
        time_remaining: f64,
        down: u8,
        /// Yards to the first-down marker.
        distance: f64,
        /// Yards between the possessing team and the end zone it attacks.
        yard_line: f64,
        home_possession: bool,
    },
    #[serde(rename_all = "camelCase")]
    Baseball {
        inning: u8,
        /// Bottom half: the home side is batting.
        bottom: bool,
        outs: u8,
        runner_on_first: bool,
        runner_on_second: bool,
        runner_on_third: bool,
    },
    #[serde(rename_all = "camelCase")]
    Basketball {
        /// Minutes left in regulation (48 NBA, 40 college).
        time_remaining: f64,
        home_possession: bool,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityInput {
    pub sport: Sport,
    pub home_team: TeamStrength,
    pub away_team: TeamStrength,
    pub home_score: i32,
    pub away_score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_state: Option<GameState>,
}

/// Breakdown of what moved the number, reported alongside the probability so
/// the consuming layer can explain the estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityFactors {
    pub rating_diff: f64,
    pub score_diff: f64,
    pub home_advantage: f64,
    pub situational_adj: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbabilityResult {
    pub home_win_probability: f64,
    pub away_win_probability: f64,
    pub confidence: f64,
    pub factors: ProbabilityFactors,
}

// ── Sport profiles ───────────────────────────────────────────────────────────
//
// `avg_points` and `rating_spread` translate a 0–100 rating into an expected
// points-for figure (linear around the league-average rating of 75). The
// Pythagorean exponents are the standard empirical values per sport, not
// derived: 2.37 for football, 1.83 for MLB, 13.91 for the NBA, and 10.25 for
// the college games (the Pomeroy exponent).

/// League-average rating; a team at this rating scores `avg_points`.
const BASELINE_RATING: f64 = 75.0;

struct SportProfile {
    avg_points: f64,
    /// Expected points gained per rating point above the baseline.
    rating_spread: f64,
    pyth_exponent: f64,
    home_advantage: f64,
}

impl Sport {
    fn profile(self) -> SportProfile {
        match self {
            Sport::Nfl => SportProfile {
                avg_points: 22.5,
                rating_spread: 0.30,
                pyth_exponent: 2.37,
                home_advantage: 0.045,
            },
            Sport::CollegeFootball => SportProfile {
                avg_points: 28.5,
                rating_spread: 0.45,
                pyth_exponent: 2.37,
                home_advantage: 0.055,
            },
            Sport::Mlb => SportProfile {
                avg_points: 4.5,
                rating_spread: 0.05,
                pyth_exponent: 1.83,
                home_advantage: 0.035,
            },
            Sport::CollegeBaseball => SportProfile {
                avg_points: 6.5,
                rating_spread: 0.09,
                pyth_exponent: 10.25,
                home_advantage: 0.04,
            },
            Sport::Nba => SportProfile {
                avg_points: 112.0,
                rating_spread: 0.65,
                pyth_exponent: 13.91,
                home_advantage: 0.04,
            },
            Sport::CollegeBasketball => SportProfile {
                avg_points: 72.0,
                rating_spread: 0.55,
                pyth_exponent: 10.25,
                home_advantage: 0.045,
            },
        }
    }

    /// Regulation clock length for the timed sports, in minutes.
    fn game_minutes(self) -> f64 {
        match self {
            Sport::Nfl | Sport::CollegeFootball => 60.0,
            Sport::Nba => 48.0,
            Sport::CollegeBasketball => 40.0,
            Sport::Mlb | Sport::CollegeBaseball => 0.0,
        }
    }
}

// ── Entry point ──────────────────────────────────────────────────────────────

/// Floor/ceiling for every probability this module emits.
const PROB_FLOOR: f64 = 0.01;
const PROB_CEIL: f64 = 0.99;

/// Estimate the home team's win probability for the given matchup and
/// (optionally) in-game situation.
pub fn calculate_win_probability(input: &ProbabilityInput) -> ProbabilityResult {
    let profile = input.sport.profile();
    let rating_diff = input.home_team.rating - input.away_team.rating;
    let score_diff = (input.home_score - input.away_score) as f64;

    let pregame = pythagorean(&profile, input.home_team.rating, input.away_team.rating);
    let base = pregame + profile.home_advantage;

    let (situational, amplified) = match input.game_state {
        Some(GameState::Football {
            time_remaining,
            down,
            distance,
            yard_line,
            home_possession,
        }) => {
            let adj = football_adjustment(
                score_diff,
                time_remaining,
                down,
                distance,
                yard_line,
                home_possession,
            );
            let p = clamp_probability(base + adj);
            (adj, football_crunch_time(p, score_diff, time_remaining))
        }
        Some(GameState::Baseball {
            inning,
            bottom,
            outs,
            runner_on_first,
            runner_on_second,
            runner_on_third,
        }) => {
            let adj = baseball_adjustment(
                score_diff,
                inning,
                bottom,
                outs,
                [runner_on_first, runner_on_second, runner_on_third],
            );
            let p = clamp_probability(base + adj);
            (adj, p)
        }
        Some(GameState::Basketball {
            time_remaining,
            home_possession,
        }) => {
            let adj = basketball_adjustment(
                score_diff,
                time_remaining,
                input.sport.game_minutes(),
                home_possession,
            );
            let p = clamp_probability(base + adj);
            (adj, p)
        }
        None => (0.0, clamp_probability(base)),
    };

    let home = clamp_probability(amplified);
    ProbabilityResult {
        home_win_probability: home,
        away_win_probability: 1.0 - home,
        confidence: (0.6 + 0.01 * rating_diff.abs()).min(0.95),
        factors: ProbabilityFactors {
            rating_diff,
            score_diff,
            home_advantage: profile.home_advantage,
            situational_adj: situational,
        },
    }
}

/// Pythagorean expectancy `pf^k / (pf^k + pa^k)` over rating-implied
/// expected points. Equal ratings cancel to exactly 0.5.
fn pythagorean(profile: &SportProfile, home_rating: f64, away_rating: f64) -> f64 {
    let pf = expected_points(profile, home_rating);
    let pa = expected_points(profile, away_rating);
    let pf_k = pf.powf(profile.pyth_exponent);
    let pa_k = pa.powf(profile.pyth_exponent);
    pf_k / (pf_k + pa_k)
}

fn expected_points(profile: &SportProfile, rating: f64) -> f64 {
    // Floor well above zero so the power term never sees a non-positive base.
    (profile.avg_points + (rating - BASELINE_RATING) * profile.rating_spread).max(1.0)
}

fn clamp_probability(p: f64) -> f64 {
    p.clamp(PROB_FLOOR, PROB_CEIL)
}

// ── Football ─────────────────────────────────────────────────────────────────
//
// Three situational pieces, all from the home team's perspective:
//   - the score differential, weighted by urgency (a lead hardens as the
//     clock drains);
//   - field position, worth up to ~5 points of probability at the goal line;
//   - down/distance: 1st-and-short is a small plus for the possessing side,
//     3rd-and-long and any 4th down are minuses.
// Under 10 minutes with a one-score margin the whole estimate is amplified
// away from 0.5 (crunch time: fewer remaining possessions, less variance).

const FOOTBALL_MINUTES: f64 = 60.0;
const FIELD_POSITION_VALUE: f64 = 0.05;
const CRUNCH_TIME_MINUTES: f64 = 10.0;
const CRUNCH_AMPLIFIER: f64 = 1.3;

fn football_adjustment(
    score_diff: f64,
    time_remaining: f64,
    down: u8,
    distance: f64,
    yard_line: f64,
    home_possession: bool,
) -> f64 {
    let urgency = (1.0 - time_remaining / FOOTBALL_MINUTES).clamp(0.0, 1.0);
    let score_adj = score_diff * 0.015 * (1.0 + urgency);

    let sign = if home_possession { 1.0 } else { -1.0 };
    let field_adj =
        sign * FIELD_POSITION_VALUE * ((100.0 - yard_line.clamp(0.0, 100.0)) / 100.0);

    let down_adj = sign
        * match down {
            1 if distance <= 3.0 => 0.02,
            3 if distance >= 7.0 => -0.015,
            4 => -0.025,
            _ => 0.0,
        };

    score_adj + field_adj + down_adj
}

fn football_crunch_time(p: f64, score_diff: f64, time_remaining: f64) -> f64 {
    if time_remaining < CRUNCH_TIME_MINUTES && score_diff.abs() <= 7.0 {
        0.5 + (p - 0.5) * CRUNCH_AMPLIFIER
    } else {
        p
    }
}

// ── Baseball ─────────────────────────────────────────────────────────────────
//
// The score differential is weighted by `inning / 9` and amplified from the
// 7th on (bullpen innings, fewer outs to play with). Trailing at home in the
// late innings gets a flat comeback bonus: the home side always bats last.
// On top of that, the base/out state nudges the estimate toward whichever
// side is batting, proportional to the run-expectancy surplus over the
// bases-empty, nobody-out baseline.

const MLB_INNINGS: f64 = 9.0;
const LATE_COMEBACK_BONUS: f64 = 0.03;

/// Expected runs for the rest of the inning, indexed by `[occupancy][outs]`
/// where occupancy treats (first, second, third) as a 3-bit number.
/// Standard run-expectancy matrix, league-average environment.
const RUN_EXPECTANCY: [[f64; 3]; 8] = [
    // outs:  0     1     2
    [0.48, 0.25, 0.10], // bases empty
    [0.85, 0.50, 0.22], // runner on 1st
    [1.06, 0.64, 0.31], // runner on 2nd
    [1.44, 0.88, 0.43], // 1st and 2nd
    [1.30, 0.90, 0.34], // runner on 3rd
    [1.74, 1.10, 0.48], // 1st and 3rd
    [1.96, 1.35, 0.56], // 2nd and 3rd
    [2.20, 1.52, 0.75], // bases loaded
];

/// Bases-empty, nobody-out expectancy; the neutral state.
const RUN_EXPECTANCY_BASELINE: f64 = 0.48;

fn baseball_adjustment(score_diff: f64, inning: u8, bottom: bool, outs: u8, runners: [bool; 3]) -> f64 {
    let inning_f = (inning as f64).max(1.0);
    let leverage = if inning >= 7 {
        1.0 + 0.15 * (inning_f - 6.0)
    } else {
        1.0
    };
    // The inning weight caps at 1.5 (inning 14) so a marathon extra-innings
    // game cannot swamp the estimate; leverage keeps growing past it.
    let score_adj = score_diff * 0.04 * (inning_f / MLB_INNINGS).min(1.5) * leverage;

    let comeback_adj = if bottom && inning >= 7 && score_diff < 0.0 {
        LATE_COMEBACK_BONUS
    } else {
        0.0
    };

    let occupancy =
        runners[0] as usize | (runners[1] as usize) << 1 | (runners[2] as usize) << 2;
    let expectancy = RUN_EXPECTANCY[occupancy][(outs as usize).min(2)];
    // Batting side: home in the bottom half, away in the top.
    let batting_sign = if bottom { 1.0 } else { -1.0 };
    let base_state_adj = batting_sign * 0.02 * (expectancy - RUN_EXPECTANCY_BASELINE);

    score_adj + comeback_adj + base_state_adj
}

// ── Basketball ───────────────────────────────────────────────────────────────
//
// High-frequency scoring means single baskets barely matter early; the score
// weight ramps with elapsed clock. In a one-possession-ish game (margin ≤ 5)
// inside the final two minutes, having the ball is worth a couple points of
// probability.

const POSSESSION_VALUE: f64 = 0.02;

fn basketball_adjustment(
    score_diff: f64,
    time_remaining: f64,
    total_minutes: f64,
    home_possession: bool,
) -> f64 {
    let elapsed = (1.0 - time_remaining / total_minutes.max(1.0)).clamp(0.0, 1.0);
    let score_adj = score_diff * 0.01 * (1.0 + 2.0 * elapsed);

    let possession_adj = if score_diff.abs() <= 5.0 && time_remaining < 2.0 {
        if home_possession {
            POSSESSION_VALUE
        } else {
            -POSSESSION_VALUE
        }
    } else {
        0.0
    };

    score_adj + possession_adj
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pregame(sport: Sport, home_rating: f64, away_rating: f64) -> ProbabilityInput {
        ProbabilityInput {
            sport,
            home_team: TeamStrength { rating: home_rating },
            away_team: TeamStrength { rating: away_rating },
            home_score: 0,
            away_score: 0,
            game_state: None,
        }
    }

    #[test]
    fn equal_nfl_ratings_leave_only_home_advantage() {
        let result = calculate_win_probability(&pregame(Sport::Nfl, 75.0, 75.0));
        assert_relative_eq!(result.home_win_probability, 0.545, epsilon = 1e-9);
        assert_relative_eq!(
            result.home_win_probability + result.away_win_probability,
            1.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(result.factors.situational_adj, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn better_rating_means_higher_probability() {
        let favorite = calculate_win_probability(&pregame(Sport::Nba, 85.0, 70.0));
        let underdog = calculate_win_probability(&pregame(Sport::Nba, 70.0, 85.0));
        assert!(favorite.home_win_probability > 0.6);
        assert!(underdog.home_win_probability < 0.5);
        assert!(favorite.home_win_probability > underdog.home_win_probability);
    }

    #[test]
    fn confidence_tracks_rating_gap_only() {
        let even = calculate_win_probability(&pregame(Sport::Mlb, 75.0, 75.0));
        let lopsided = calculate_win_probability(&pregame(Sport::Mlb, 95.0, 55.0));
        assert_relative_eq!(even.confidence, 0.6, epsilon = 1e-12);
        assert_relative_eq!(lopsided.confidence, 0.95, epsilon = 1e-12);
    }

    #[test]
    fn football_late_lead_is_worth_more_than_early_lead() {
        let state = |t: f64| GameState::Football {
            time_remaining: t,
            down: 2,
            distance: 8.0,
            yard_line: 50.0,
            home_possession: true,
        };
        let mut input = pregame(Sport::Nfl, 75.0, 75.0);
        input.home_score = 24;
        input.away_score = 14;

        let early = calculate_win_probability(&ProbabilityInput {
            game_state: Some(state(55.0)),
            ..input.clone()
        });
        let late = calculate_win_probability(&ProbabilityInput {
            game_state: Some(state(5.0)),
            ..input
        });
        assert!(
            late.home_win_probability > early.home_win_probability,
            "10-pt lead late ({:.3}) should beat early ({:.3})",
            late.home_win_probability,
            early.home_win_probability
        );
    }

    #[test]
    fn football_crunch_time_amplifies_one_score_games() {
        let mut input = pregame(Sport::Nfl, 75.0, 75.0);
        input.home_score = 21;
        input.away_score = 17;
        let state = |t: f64| GameState::Football {
            time_remaining: t,
            down: 1,
            distance: 10.0,
            yard_line: 60.0,
            home_possession: true,
        };
        let normal = calculate_win_probability(&ProbabilityInput {
            game_state: Some(state(12.0)),
            ..input.clone()
        });
        let crunch = calculate_win_probability(&ProbabilityInput {
            game_state: Some(state(8.0)),
            ..input
        });
        assert!(crunch.home_win_probability > normal.home_win_probability);
    }

    #[test]
    fn football_fourth_down_penalizes_possessing_team() {
        let mut input = pregame(Sport::Nfl, 75.0, 75.0);
        input.game_state = Some(GameState::Football {
            time_remaining: 30.0,
            down: 4,
            distance: 8.0,
            yard_line: 70.0,
            home_possession: true,
        });
        let fourth = calculate_win_probability(&input);
        input.game_state = Some(GameState::Football {
            time_remaining: 30.0,
            down: 2,
            distance: 8.0,
            yard_line: 70.0,
            home_possession: true,
        });
        let second = calculate_win_probability(&input);
        assert!(fourth.home_win_probability < second.home_win_probability);
    }

    #[test]
    fn baseball_lead_hardens_with_innings() {
        let state = |inning: u8| GameState::Baseball {
            inning,
            bottom: false,
            outs: 0,
            runner_on_first: false,
            runner_on_second: false,
            runner_on_third: false,
        };
        let mut input = pregame(Sport::Mlb, 75.0, 75.0);
        input.home_score = 3;
        input.away_score = 2;
        let third = calculate_win_probability(&ProbabilityInput {
            game_state: Some(state(3)),
            ..input.clone()
        });
        let eighth = calculate_win_probability(&ProbabilityInput {
            game_state: Some(state(8)),
            ..input
        });
        assert!(eighth.home_win_probability > third.home_win_probability);
    }

    #[test]
    fn baseball_bases_loaded_helps_the_batting_side() {
        let mut input = pregame(Sport::Mlb, 75.0, 75.0);
        input.game_state = Some(GameState::Baseball {
            inning: 6,
            bottom: true,
            outs: 0,
            runner_on_first: true,
            runner_on_second: true,
            runner_on_third: true,
        });
        let loaded = calculate_win_probability(&input);
        input.game_state = Some(GameState::Baseball {
            inning: 6,
            bottom: true,
            outs: 0,
            runner_on_first: false,
            runner_on_second: false,
            runner_on_third: false,
        });
        let empty = calculate_win_probability(&input);
        assert!(loaded.home_win_probability > empty.home_win_probability);
    }

    #[test]
    fn baseball_home_comeback_bonus_in_late_bottom_half() {
        let mut input = pregame(Sport::Mlb, 75.0, 75.0);
        input.home_score = 2;
        input.away_score = 3;
        input.game_state = Some(GameState::Baseball {
            inning: 8,
            bottom: true,
            outs: 1,
            runner_on_first: false,
            runner_on_second: false,
            runner_on_third: false,
        });
        let bottom = calculate_win_probability(&input);
        input.game_state = Some(GameState::Baseball {
            inning: 8,
            bottom: false,
            outs: 1,
            runner_on_first: false,
            runner_on_second: false,
            runner_on_third: false,
        });
        let top = calculate_win_probability(&input);
        // Bottom half: comeback bonus plus batting-side base-state nudge.
        assert!(bottom.home_win_probability > top.home_win_probability + 0.015);
    }

    #[test]
    fn basketball_possession_matters_only_late_and_close() {
        let state = |t: f64, possession: bool| GameState::Basketball {
            time_remaining: t,
            home_possession: possession,
        };
        let mut input = pregame(Sport::Nba, 75.0, 75.0);
        input.home_score = 100;
        input.away_score = 98;

        let with_ball = calculate_win_probability(&ProbabilityInput {
            game_state: Some(state(1.5, true)),
            ..input.clone()
        });
        let without_ball = calculate_win_probability(&ProbabilityInput {
            game_state: Some(state(1.5, false)),
            ..input.clone()
        });
        assert_relative_eq!(
            with_ball.home_win_probability - without_ball.home_win_probability,
            2.0 * POSSESSION_VALUE,
            epsilon = 1e-9
        );

        // Same margin at halftime: possession is irrelevant.
        let early_ball = calculate_win_probability(&ProbabilityInput {
            game_state: Some(state(24.0, true)),
            ..input.clone()
        });
        let early_no_ball = calculate_win_probability(&ProbabilityInput {
            game_state: Some(state(24.0, false)),
            ..input
        });
        assert_relative_eq!(
            early_ball.home_win_probability,
            early_no_ball.home_win_probability,
            epsilon = 1e-12
        );
    }

    #[test]
    fn college_clock_differs_from_nba() {
        // Ten minutes left is a quarter of a college game but barely a fifth
        // of an NBA game: more of the college game remains, so the same lead
        // counts for less there.
        let state = GameState::Basketball {
            time_remaining: 10.0,
            home_possession: false,
        };
        let mut nba = pregame(Sport::Nba, 75.0, 75.0);
        nba.home_score = 60;
        nba.away_score = 52;
        nba.game_state = Some(state);
        let mut college = pregame(Sport::CollegeBasketball, 75.0, 75.0);
        college.home_score = 60;
        college.away_score = 52;
        college.game_state = Some(state);

        let p_nba = calculate_win_probability(&nba);
        let p_college = calculate_win_probability(&college);
        assert!(p_nba.factors.situational_adj > p_college.factors.situational_adj);
    }

    #[test]
    fn all_sports_stay_inside_hard_clamp() {
        let sports = [
            Sport::Nfl,
            Sport::CollegeFootball,
            Sport::Mlb,
            Sport::CollegeBaseball,
            Sport::Nba,
            Sport::CollegeBasketball,
        ];
        for sport in sports {
            for (home_rating, away_rating) in [(0.0, 100.0), (100.0, 0.0), (75.0, 75.0)] {
                for (hs, aws) in [(0, 0), (120, 0), (0, 120)] {
                    let mut input = pregame(sport, home_rating, away_rating);
                    input.home_score = hs;
                    input.away_score = aws;
                    let p = calculate_win_probability(&input).home_win_probability;
                    assert!(
                        (0.01..=0.99).contains(&p),
                        "{sport:?} ({home_rating} vs {away_rating}, {hs}-{aws}) escaped: {p}"
                    );
                }
            }
        }
    }

    #[test]
    fn blowout_with_state_still_clamped() {
        let mut input = pregame(Sport::Nfl, 100.0, 0.0);
        input.home_score = 70;
        input.away_score = 0;
        input.game_state = Some(GameState::Football {
            time_remaining: 1.0,
            down: 1,
            distance: 1.0,
            yard_line: 1.0,
            home_possession: true,
        });
        let result = calculate_win_probability(&input);
        assert_relative_eq!(result.home_win_probability, 0.99, epsilon = 1e-12);
    }

    #[test]
    fn input_round_trips_through_json() {
        let input = ProbabilityInput {
            sport: Sport::CollegeBaseball,
            home_team: TeamStrength { rating: 82.0 },
            away_team: TeamStrength { rating: 71.5 },
            home_score: 4,
            away_score: 2,
            game_state: Some(GameState::Baseball {
                inning: 7,
                bottom: true,
                outs: 2,
                runner_on_first: true,
                runner_on_second: false,
                runner_on_third: true,
            }),
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"college-baseball\""));
        assert!(json.contains("\"runnerOnThird\":true"));
        let back: ProbabilityInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sport, Sport::CollegeBaseball);
        assert_eq!(back.home_score, 4);
    }
}
