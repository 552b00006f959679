//! Secure random source and unbiased sampling primitives.

use rand_core::RngCore;

/// A cryptographically secure source of uniformly distributed random bytes.
///
/// Every draw the generator makes goes through this trait, so the whole
/// security argument rests on the implementation. Backing it with anything
/// other than a CSPRNG (a seeded PRNG, a counter, a replayed byte stream)
/// voids the unpredictability guarantees of every password produced through
/// it. Deterministic sources belong in tests only.
pub trait RandomSource {
    /// Fills `dest` with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Draws a uniformly distributed `u32`.
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    /// Draws a uniform index in `[0, max)` via rejection sampling.
    ///
    /// Raw 32-bit draws at or above the largest multiple of `max` that fits
    /// in the 32-bit range are discarded, so the accepted value mod `max` is
    /// exactly uniform. A plain `raw % max` would skew toward small indices
    /// whenever `max` does not divide 2^32.
    ///
    /// # Panics
    ///
    /// Panics if `max` is zero.
    fn uniform(&mut self, max: usize) -> usize {
        assert!(max > 0, "uniform upper bound must be non-zero");
        debug_assert!(max <= u32::MAX as usize);

        let max = max as u64;
        let range = 1u64 << 32;
        let zone = range - (range % max);
        loop {
            let raw = u64::from(self.next_u32());
            if raw < zone {
                return (raw % max) as usize;
            }
        }
    }
}

/// Operating-system entropy (`OsRng`), the production [`RandomSource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl RandomSource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand::rngs::OsRng.fill_bytes(dest);
    }
}

/// Unbiased in-place Fisher–Yates shuffle.
pub fn shuffle<T>(source: &mut impl RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = source.uniform(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed byte sequence, cycling. Test-only; see the trait docs.
    struct ReplaySource {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl ReplaySource {
        fn new(bytes: Vec<u8>) -> Self {
            Self { bytes, pos: 0 }
        }
    }

    impl RandomSource for ReplaySource {
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for b in dest.iter_mut() {
                *b = self.bytes[self.pos % self.bytes.len()];
                self.pos += 1;
            }
        }
    }

    #[test]
    fn test_uniform_stays_in_bounds() {
        let mut source = OsEntropy;
        for max in [1, 2, 3, 7, 10, 26, 94, 1000] {
            for _ in 0..200 {
                assert!(source.uniform(max) < max);
            }
        }
    }

    #[test]
    fn test_uniform_max_one_is_zero() {
        let mut source = OsEntropy;
        for _ in 0..16 {
            assert_eq!(source.uniform(1), 0);
        }
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_uniform_zero_panics() {
        OsEntropy.uniform(0);
    }

    #[test]
    fn test_uniform_rejects_biased_region() {
        // max = 3: zone is 2^32 - (2^32 mod 3) = 4294967295. A raw draw of
        // u32::MAX (all 0xFF bytes) falls in the rejected sliver and the next
        // draw (all zeros) must be the one returned.
        let mut source = ReplaySource::new(vec![
            0xFF, 0xFF, 0xFF, 0xFF, // rejected
            0x00, 0x00, 0x00, 0x00, // accepted -> 0
        ]);
        assert_eq!(source.uniform(3), 0);
    }

    #[test]
    fn test_uniform_rough_distribution() {
        let mut source = OsEntropy;
        let mut counts = [0usize; 10];
        let draws = 20_000;
        for _ in 0..draws {
            counts[source.uniform(10)] += 1;
        }
        // Expected 2000 per bucket; allow a wide margin (~10 sigma).
        for (i, &c) in counts.iter().enumerate() {
            assert!(
                (1550..=2450).contains(&c),
                "bucket {i} count {c} far from uniform"
            );
        }
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut source = OsEntropy;
        let mut items: Vec<u8> = (0..50).collect();
        shuffle(&mut source, &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u8>>());
    }

    #[test]
    fn test_shuffle_handles_tiny_slices() {
        let mut source = OsEntropy;
        let mut empty: [u8; 0] = [];
        shuffle(&mut source, &mut empty);
        let mut one = [7u8];
        shuffle(&mut source, &mut one);
        assert_eq!(one, [7]);
    }
}
