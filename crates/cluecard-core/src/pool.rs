//! Round pool: the shrinking set of not-yet-shown records.

use alloc::vec::Vec;
use core::fmt;

use heapless::Vec as HeaplessVec;
use log::debug;
use rand::Rng;

use crate::shuffle::shuffle;

/// Upper bound on records shown in one round.
pub const MAX_BATCH_SIZE: usize = 12;

/// Indices into the session's full record list.
pub type Batch = HeaplessVec<usize, MAX_BATCH_SIZE>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolError {
    InvalidBatchSize { batch_size: usize },
    InsufficientRecords { available: usize, batch_size: usize },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBatchSize { batch_size } => write!(
                f,
                "batch size {} is outside 1..={}",
                batch_size, MAX_BATCH_SIZE
            ),
            Self::InsufficientRecords {
                available,
                batch_size,
            } => write!(
                f,
                "word list has {} entries but a round needs {}",
                available, batch_size
            ),
        }
    }
}

/// Hands out fixed-size batches, reshuffling the full set when it runs dry.
///
/// Records are referenced by index, never copied. Repeats are possible across
/// a reshuffle boundary.
#[derive(Clone, Debug)]
pub struct RoundPool {
    remaining: Vec<usize>,
    full_len: usize,
    batch_size: usize,
}

impl RoundPool {
    pub fn new(full_len: usize, batch_size: usize) -> Result<Self, PoolError> {
        if batch_size == 0 || batch_size > MAX_BATCH_SIZE {
            return Err(PoolError::InvalidBatchSize { batch_size });
        }
        if full_len < batch_size {
            return Err(PoolError::InsufficientRecords {
                available: full_len,
                batch_size,
            });
        }

        Ok(Self {
            remaining: Vec::with_capacity(full_len),
            full_len,
            batch_size,
        })
    }

    /// Start a fresh cycle over the whole record set.
    pub fn init_session<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.refill(rng);
    }

    pub fn next_batch<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Batch {
        if self.remaining.len() < self.batch_size {
            debug!(
                "pool: {} left, need {}; reshuffling full set",
                self.remaining.len(),
                self.batch_size
            );
            self.refill(rng);
        }

        let mut batch = Batch::new();
        for index in self.remaining.drain(..self.batch_size) {
            // batch_size <= MAX_BATCH_SIZE is checked in `new`.
            let _ = batch.push(index);
        }
        batch
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    fn refill<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.remaining.clear();
        self.remaining.extend(0..self.full_len);
        shuffle(&mut self.remaining, rng);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn distinct(batch: &Batch) -> bool {
        let mut sorted: Vec<usize> = batch.iter().copied().collect();
        sorted.sort_unstable();
        sorted.dedup();
        sorted.len() == batch.len()
    }

    #[test]
    fn rejects_word_list_smaller_than_batch() {
        assert_eq!(
            RoundPool::new(4, 5).unwrap_err(),
            PoolError::InsufficientRecords {
                available: 4,
                batch_size: 5
            }
        );
    }

    #[test]
    fn rejects_zero_and_oversized_batches() {
        assert_eq!(
            RoundPool::new(10, 0).unwrap_err(),
            PoolError::InvalidBatchSize { batch_size: 0 }
        );
        assert_eq!(
            RoundPool::new(100, MAX_BATCH_SIZE + 1).unwrap_err(),
            PoolError::InvalidBatchSize {
                batch_size: MAX_BATCH_SIZE + 1
            }
        );
    }

    #[test]
    fn init_session_fills_pool_with_every_index() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = RoundPool::new(9, 5).unwrap();
        assert_eq!(pool.remaining(), 0);

        pool.init_session(&mut rng);
        assert_eq!(pool.remaining(), 9);

        let mut all: Vec<usize> = pool.remaining.clone();
        all.sort_unstable();
        assert_eq!(all, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn seven_records_reshuffle_on_second_batch() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = RoundPool::new(7, 5).unwrap();
        pool.init_session(&mut rng);

        let first = pool.next_batch(&mut rng);
        assert_eq!(first.len(), 5);
        assert!(distinct(&first));
        assert_eq!(pool.remaining(), 2);

        let second = pool.next_batch(&mut rng);
        assert_eq!(second.len(), 5);
        assert!(distinct(&second));
        assert_eq!(pool.remaining(), 2);
    }

    #[test]
    fn batches_within_a_cycle_never_repeat() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut pool = RoundPool::new(20, 5).unwrap();
        pool.init_session(&mut rng);

        let mut issued: Vec<usize> = Vec::new();
        for round in 0..4 {
            let batch = pool.next_batch(&mut rng);
            assert!(distinct(&batch));
            issued.extend(batch.iter().copied());
            assert_eq!(pool.remaining() + issued.len(), 20, "round {round}");
        }

        issued.sort_unstable();
        issued.dedup();
        assert_eq!(issued.len(), 20);
    }

    #[test]
    fn every_batch_is_full_and_in_range() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut pool = RoundPool::new(6, 5).unwrap();
        pool.init_session(&mut rng);

        for _ in 0..25 {
            let batch = pool.next_batch(&mut rng);
            assert_eq!(batch.len(), 5);
            assert!(distinct(&batch));
            assert!(batch.iter().all(|&index| index < 6));
        }
    }

    #[test]
    fn next_batch_without_init_still_draws() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut pool = RoundPool::new(5, 5).unwrap();
        let batch = pool.next_batch(&mut rng);
        assert_eq!(batch.len(), 5);
        assert_eq!(pool.remaining(), 0);
    }
}
