use crate::random::RandomSource;
use crate::Strength;

/// highest goal count a single side can be given in one match
pub const MAX_GOALS: u32 = 7;

const BUCKETS: usize = MAX_GOALS as usize + 1;

/// Probability that a side scores at most `i` goals against an opponent of equal strength.
pub const BASE_CUMULATIVE: [f64; BUCKETS] = [0.26, 0.61, 0.845, 0.95, 0.985, 0.996, 0.999, 1.0];

/// `STRENGTH_COEFFICIENTS[for][against]` skews the base curve for a side of strength `for` playing
/// an opponent of strength `against`. Negative values move mass towards more goals. The diagonal is
/// zero and the table is antisymmetric.
pub const STRENGTH_COEFFICIENTS: [[f64; 5]; 5] = [
    [0.0, 0.08, 0.16, 0.24, 0.32],
    [-0.08, 0.0, 0.08, 0.16, 0.24],
    [-0.16, -0.08, 0.0, 0.08, 0.16],
    [-0.24, -0.16, -0.08, 0.0, 0.08],
    [-0.32, -0.24, -0.16, -0.08, 0.0],
];

/// Cumulative goal distribution for a side of strength `scoring` against `conceding`.
///
/// Each bucket of the base curve is scaled by `1 + c / ((i + 1) * 0.75)`, so the adjustment fades
/// for higher goal counts, and capped at 1. The last bucket is pinned to 1 so no probability mass
/// falls past `MAX_GOALS`.
pub fn cumulative_distribution(scoring: Strength, conceding: Strength) -> [f64; BUCKETS] {
    let coefficient = STRENGTH_COEFFICIENTS[scoring.index()][conceding.index()];
    let mut dist = [1.0; BUCKETS];
    for (i, p) in dist.iter_mut().enumerate().take(BUCKETS - 1) {
        let damping = (i + 1) as f64 * 3.0 / 4.0;
        *p = (BASE_CUMULATIVE[i] * (1.0 + coefficient / damping)).min(1.0);
    }
    dist
}

/// Smallest goal count whose cumulative probability reaches `seed`.
pub fn goals_for_seed(dist: &[f64; BUCKETS], seed: f64) -> u32 {
    dist.iter()
        .position(|p| seed <= *p)
        .map(|i| i as u32)
        .unwrap_or(MAX_GOALS)
}

/// Draws one goal count for the `scoring` side. Call once per side with the strengths swapped;
/// the two draws are independent.
pub fn sample_goals<R: RandomSource>(scoring: Strength, conceding: Strength, rng: &mut R) -> u32 {
    let dist = cumulative_distribution(scoring, conceding);
    goals_for_seed(&dist, rng.next_uniform())
}
