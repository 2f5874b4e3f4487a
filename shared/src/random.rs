use rand::Rng;

/// Source of winner positions. Must return a value in `[0, len)` for `len > 0`.
pub trait RandomIndex {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform draw from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngIndex;

impl RandomIndex for ThreadRngIndex {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same position (clamped to the pool). Useful for forcing a winner.
#[derive(Debug, Clone, Copy)]
pub struct FixedIndex(pub usize);

impl RandomIndex for FixedIndex {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Replays a fixed list of positions in order, wrapping each into the pool size.
#[derive(Debug, Clone)]
pub struct SequenceIndex {
    picks: Vec<usize>,
    cursor: usize,
}

impl SequenceIndex {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }
}

impl RandomIndex for SequenceIndex {
    fn pick(&mut self, len: usize) -> usize {
        if self.picks.is_empty() || len == 0 {
            return 0;
        }
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick % len
    }
}

impl<R: RandomIndex + ?Sized> RandomIndex for Box<R> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_stays_in_range() {
        let mut rng = ThreadRngIndex;
        for len in 1..20 {
            for _ in 0..50 {
                assert!(rng.pick(len) < len);
            }
        }
    }

    #[test]
    fn test_thread_rng_reaches_every_slot() {
        let mut rng = ThreadRngIndex;
        let mut seen = [false; 4];
        for _ in 0..2000 {
            seen[rng.pick(4)] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn test_fixed_index_clamps() {
        assert_eq!(FixedIndex(1).pick(3), 1);
        assert_eq!(FixedIndex(9).pick(3), 2);
    }

    #[test]
    fn test_sequence_index_wraps() {
        let mut rng = SequenceIndex::new(vec![4, 0]);
        assert_eq!(rng.pick(3), 1);
        assert_eq!(rng.pick(3), 0);
        assert_eq!(rng.pick(2), 0);
    }
}
