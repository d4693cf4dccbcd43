//! RNG module - injectable randomness for piece and color selection
//!
//! Every random draw in the core goes through [`RandomSource`], so a session
//! can run on the seeded [`SimpleRng`] in play and on a scripted
//! [`SequenceRng`] in tests.

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Return a value in `[0, bound)`. A `bound` of 0 yields 0.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would be a fixed point of the high bits we sample
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits cycle quickly; sample from the high half.
        (self.next_u32() >> 16) % max
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.next_range(bound as u32) as usize
    }
}

/// Scripted random source that replays a fixed list of values, cycling.
///
/// Each value is reduced modulo the requested bound, so `SequenceRng::new(vec![1, 0])`
/// asked for a piece kind then a color yields kind index 1 (`O`) and color index 0 (red).
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<usize>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, pos: 0 }
    }

    /// Number of draws made so far
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for SequenceRng {
    fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 || self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for bound in 1..20 {
            for _ in 0..50 {
                assert!(rng.next_below(bound) < bound);
            }
        }
        assert_eq!(rng.next_below(0), 0);
    }

    #[test]
    fn test_next_below_covers_every_index() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[rng.next_below(7)] = true;
        }
        assert!(seen.iter().all(|&s| s), "{:?}", seen);
    }

    #[test]
    fn test_sequence_rng_cycles_and_wraps() {
        let mut rng = SequenceRng::new(vec![3, 9]);
        assert_eq!(rng.next_below(7), 3);
        assert_eq!(rng.next_below(5), 4);
        assert_eq!(rng.next_below(7), 3);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut rng = SequenceRng::new(vec![2]);
        let mut by_ref = &mut rng;
        assert_eq!(by_ref.next_below(10), 2);
        assert_eq!(rng.draws(), 1);
    }
}
