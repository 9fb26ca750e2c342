//! In-place Fisher-Yates shuffle.

use rand::Rng;

/// Permute `items` uniformly at random.
///
/// Walks from the last index down to 1 and swaps each slot with a uniformly
/// chosen slot in `[0, i]`. The result is deterministic for a seeded `rng`.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
