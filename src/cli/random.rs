//! Random demo strings.
//!
//! Used when no `--string` is given. The random source is passed in so the
//! caller decides between a seeded and an entropy-backed generator.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of generated demo strings.
pub const DEFAULT_RANDOM_LENGTH: usize = 10;

/// Generate `length` ASCII letters and digits.
pub fn random_string<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// A generator seeded from `seed`, or from OS entropy when `None`.
pub fn demo_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
