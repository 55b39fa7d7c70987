use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::drill_engine::models::{GameMode, Problem};

/// Decoys are drawn from `answer ± DECOY_SPREAD`.
const DECOY_SPREAD: i64 = 5;

/// Offset draws in a row that may fail before a uniform fallback is tried.
const OFFSET_ATTEMPTS: u32 = 16;

/// Draw one problem with factors uniform over `1..=table_range`.
///
/// In `Simple` mode the problem carries three distinct options, one of which
/// is the answer, in shuffled order. `table_range` must be at least 1.
pub fn generate<R: Rng>(rng: &mut R, table_range: u32, mode: GameMode) -> Problem {
    let factor_a = rng.gen_range(1..=table_range);
    let factor_b = rng.gen_range(1..=table_range);
    let answer = factor_a * factor_b;

    let options = match mode {
        GameMode::Simple => Some(decoy_options(rng, answer, table_range)),
        GameMode::Normal => None,
    };

    Problem { factor_a, factor_b, answer, options }
}

/// Where decoy candidates come from. Production draws from an `Rng`; tests
/// script the sequence to reach the stall path.
trait DecoySource {
    /// Offset in `-DECOY_SPREAD..=DECOY_SPREAD`.
    fn offset(&mut self) -> i64;
    /// Value in `1..=max`.
    fn fallback(&mut self, max: u32) -> u32;
}

struct RngDecoys<'a, R>(&'a mut R);

impl<R: Rng> DecoySource for RngDecoys<'_, R> {
    fn offset(&mut self) -> i64 {
        self.0.gen_range(-DECOY_SPREAD..=DECOY_SPREAD)
    }

    fn fallback(&mut self, max: u32) -> u32 {
        self.0.gen_range(1..=max)
    }
}

/// Build `[answer, decoy, decoy]` in random order.
fn decoy_options<R: Rng>(rng: &mut R, answer: u32, table_range: u32) -> [u32; 3] {
    let mut options = collect_options(&mut RngDecoys(&mut *rng), answer, table_range);
    options.shuffle(rng);
    [options[0], options[1], options[2]]
}

/// Collect the answer plus two distinct positive decoys, unshuffled.
///
/// Decoys are "near misses" (`answer + offset`, offset non-zero). After
/// `OFFSET_ATTEMPTS` failed offsets in a row, a value uniform over
/// `1..=table_range²` is tried; offset draws resume whether or not it fits.
fn collect_options<S: DecoySource>(source: &mut S, answer: u32, table_range: u32) -> Vec<u32> {
    let mut options = Vec::with_capacity(3);
    options.push(answer);

    let mut misses = 0;
    while options.len() < 3 {
        let offset = source.offset();
        let candidate = i64::from(answer) + offset;
        if offset != 0 && candidate > 0 && !options.contains(&(candidate as u32)) {
            options.push(candidate as u32);
            misses = 0;
            continue;
        }

        misses += 1;
        if misses >= OFFSET_ATTEMPTS {
            let fallback = source.fallback(table_range * table_range);
            if !options.contains(&fallback) {
                options.push(fallback);
            }
            misses = 0;
        }
    }

    options
}

/// Owns the RNG used for one session's problems.
pub struct ProblemGenerator {
    rng: StdRng,
}

impl ProblemGenerator {
    /// Seeded generators are fully reproducible; `None` draws from entropy.
    pub fn new(rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        ProblemGenerator { rng }
    }

    pub fn generate(&mut self, table_range: u32, mode: GameMode) -> Problem {
        generate(&mut self.rng, table_range, mode)
    }
}
