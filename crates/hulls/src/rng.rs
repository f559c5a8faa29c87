//! Seeded SplitMix64 stream of unit floats.
//!
//! Model
//! - 64-bit state advanced by the golden-ratio increment, then avalanche-mixed
//!   (xor-shift / odd multiply, twice). All arithmetic wraps in `u64`, so the
//!   stream is bit-identical across runs and platforms.
//! - Unit floats take the top 53 bits: `(z >> 11) / 2^53` in `[0, 1)`.
//! - A seed of `0` starts from the increment itself instead of the zero state.
//!
//! The generator also implements `rand::RngCore`, so `rand` helpers
//! (`gen_range`, `gen::<f64>()`, ...) can draw from the same stream.

use rand::{Error, RngCore, SeedableRng};

const GOLDEN: u64 = 0x9e37_79b9_7f4a_7c15;
const UNIT: f64 = (1u64 << 53) as f64;

#[inline]
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// SplitMix64 generator with instance-local state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { GOLDEN } else { seed },
        }
    }

    /// Signed seeds (as handed over by collaborators) map by two's complement.
    pub fn from_signed(seed: i64) -> Self {
        Self::new(seed as u64)
    }

    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN);
        mix(self.state)
    }

    /// Next float in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_raw() >> 11) as f64 / UNIT
    }
}

impl Iterator for SplitMix64 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_raw() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_raw()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn mix_matches_reference_splitmix64() {
        // First output of the reference SplitMix64 started from state 0.
        assert_eq!(mix(GOLDEN), 0xe220_a839_7b1d_cdaf);
    }

    #[test]
    fn same_seed_same_stream() {
        let a: Vec<f64> = SplitMix64::new(42).take(64).collect();
        let b: Vec<f64> = SplitMix64::new(42).take(64).collect();
        assert_eq!(a, b);
        let c: Vec<f64> = SplitMix64::new(43).take(64).collect();
        assert_ne!(a, c);
    }

    #[test]
    fn zero_seed_starts_from_increment() {
        let mut zero = SplitMix64::new(0);
        let mut golden = SplitMix64::new(GOLDEN);
        assert_eq!(zero.next_raw(), golden.next_raw());
    }

    #[test]
    fn unit_floats_stay_in_range() {
        let mut rng = SplitMix64::new(7);
        for _ in 0..10_000 {
            let u = rng.next_f64();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn rand_float_draw_agrees_with_next_f64() {
        // rand's `Standard` f64 uses the same top-53-bit mapping.
        let mut a = SplitMix64::seed_from_u64(99);
        let mut b = SplitMix64::seed_from_u64(99);
        for _ in 0..16 {
            let x: f64 = a.gen();
            assert_eq!(x, b.next_f64());
        }
    }

    #[test]
    fn negative_seeds_wrap() {
        let mut a = SplitMix64::from_signed(-1);
        let mut b = SplitMix64::new(u64::MAX);
        assert_eq!(a.next_raw(), b.next_raw());
    }
}
