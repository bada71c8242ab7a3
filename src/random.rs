use rand::Rng;

/// Source of uniform draws in `[0, 1)`. Scoring and return-leg shuffling pull all of their
/// randomness through this, so a season can be replayed from a fixed draw sequence.
pub trait RandomSource {
    fn next_uniform(&mut self) -> f64;

    /// uniform index in `0..bound`; `bound` must be non-zero
    fn next_index(&mut self, bound: usize) -> usize {
        let i = (self.next_uniform() * bound as f64) as usize;
        i.min(bound - 1)
    }
}

impl<R: Rng> RandomSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end. An empty sequence always yields 0.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    draws: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(draws: Vec<f64>) -> Self {
        FixedSequence { draws, cursor: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn next_uniform(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let draw = self.draws[self.cursor];
        self.cursor = (self.cursor + 1) % self.draws.len();
        draw
    }
}
