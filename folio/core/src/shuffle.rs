//! Shuffle-on-mount
//!
//! Fisher–Yates over a copy of the input. The random source is a parameter
//! so callers pick entropy (`rand::thread_rng()`) or a seeded
//! `StdRng` for a reproducible order.

use rand::Rng;

/// Return a uniformly permuted copy of `items`
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}
