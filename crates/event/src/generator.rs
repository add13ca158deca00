//! Randomized event generator.

use crate::event::{Event, TYPE_CARDINALITY};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces one randomized [`Event`] per call.
///
/// The random source is created once and shared by every call for the
/// lifetime of the generator. Timestamps always come from the wall clock,
/// so only `goodness` and `type` are reproducible under a fixed seed.
pub struct EventGenerator {
    rng: StdRng,
    generated: u64,
}

impl EventGenerator {
    /// Create a generator with a seeded random source.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self { rng, generated: 0 }
    }

    /// Number of events produced so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    /// Generate the next event.
    pub fn generate(&mut self) -> Event {
        // gen::<f64>() samples [0, 1)
        let goodness: f64 = self.rng.gen();
        let event_type = self.rng.gen_range(0..TYPE_CARDINALITY);
        self.generated += 1;

        Event::from_sampled(Utc::now(), goodness, event_type)
    }
}
