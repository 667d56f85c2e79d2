/// Pattern selection.
///
/// Slides with a figure or an embedded frame always get
/// [`GridPattern::None`]. Every other slide draws one of
/// [`GridPattern::RANDOMIZED`] from a [`PatternSource`], which the processor
/// receives as a parameter so runs can be made reproducible or fully scripted.
use super::pattern::GridPattern;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of pattern choices for slides without figures.
pub trait PatternSource {
    /// Pick one of `choices`. `choices` is never empty.
    fn pick(&mut self, choices: &[GridPattern]) -> GridPattern;
}

/// Uniform choice backed by a seedable PRNG.
///
/// The generator is seeded once, so a given seed fixes the whole sequence of
/// choices for a document rather than each individual pick.
#[derive(Debug, Clone)]
pub struct SeededPatternSource {
    rng: StdRng,
}

impl SeededPatternSource {
    /// Deterministic source for `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic when `seed` is given, entropy-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl PatternSource for SeededPatternSource {
    fn pick(&mut self, choices: &[GridPattern]) -> GridPattern {
        choices[self.rng.random_range(0..choices.len())]
    }
}

/// Choose the pattern for a slide.
///
/// The source is consulted only when `has_content` is false, so figure
/// slides never shift the random sequence seen by the slides after them.
pub fn select_pattern(has_content: bool, source: &mut dyn PatternSource) -> GridPattern {
    if has_content {
        GridPattern::None
    } else {
        source.pick(&GridPattern::RANDOMIZED)
    }
}
