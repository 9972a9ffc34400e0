//! Uniform random permutation - used to materialize the mixed tier
//!
//! The random source is a parameter so tests can seed it and assert exact
//! permutations deterministically; production callers pass `thread_rng`.

use rand::Rng;

/// Return a uniformly shuffled copy of `items` (Fisher-Yates)
///
/// The input is never mutated; every element has equal probability of
/// landing at every output position.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Convenience wrapper over the thread-local generator
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle(&mut rand::thread_rng(), items)
}
