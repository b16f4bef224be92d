use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Source of randomness for one obfuscation run. Seeded runs are fully
/// reproducible; unseeded runs pull a seed from OS entropy.
pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Permute a slice in place. The mangled-shuffled name generator calls
    /// this exactly once, at construction, to fix its alphabet for the run.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }
}
