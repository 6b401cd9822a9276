//! Seeded pseudo-random engine for reproducible trait generation.
//!
//! A 128-bit-state xorshift generator. Every cat owns one instance seeded
//! from its genotype, and every higher-level draw (weighted scans, coin
//! flips, shuffles) routes through [`SeededRng::next_u32`] in a documented
//! per-call pattern. Two engines built from the same seed and driven through
//! the same call sequence stay in lockstep forever — that contract is what
//! makes appearances reproducible from a single integer.

use crate::error::{Error, Result};
use rand::{RngCore, SeedableRng};

/// `1 / 2^32`, maps a full word onto `[0, 1)`.
const REAL_UNIT_UINT: f64 = 1.0 / 4_294_967_296.0;
/// `1 / 2^31`, maps a 31-bit value onto `[0, 1)`.
const REAL_UNIT_INT: f64 = 1.0 / 2_147_483_648.0;
/// Knuth/MT19937 multiplier used to expand a 32-bit seed into full state.
const SEED_MULTIPLIER: u32 = 1_812_433_253;

/// Deterministic xorshift128 engine with a bit buffer for cheap coin flips.
///
/// The state recurrence and the per-operation draw counts are part of the
/// public contract: reordering or coalescing draws changes every downstream
/// outcome for a given seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
    bit_buffer: u32,
    bit_mask: u32,
}

impl SeededRng {
    /// Create an engine from a 32-bit seed.
    ///
    /// The seed becomes the first state word; the remaining words are
    /// expanded with the fixed multiplier recurrence `s' = M * s + 1`.
    pub fn new(seed: u32) -> Self {
        let x = seed;
        let y = SEED_MULTIPLIER.wrapping_mul(x).wrapping_add(1);
        let z = SEED_MULTIPLIER.wrapping_mul(y).wrapping_add(1);
        let w = SEED_MULTIPLIER.wrapping_mul(z).wrapping_add(1);
        Self {
            x,
            y,
            z,
            w,
            bit_buffer: 0,
            bit_mask: 1,
        }
    }

    /// Advance the state and return the next uniform word.
    ///
    /// The exact recurrence: `t = x ^ (x << 11); x = y; y = z; z = w;
    /// w ^= (w >> 19) ^ t ^ (t >> 8)`.
    pub fn next_u32(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w ^= (self.w >> 19) ^ t ^ (t >> 8);
        self.w
    }

    /// Uniform double in `[0, 1)`. Consumes one word.
    pub fn next_float01(&mut self) -> f64 {
        f64::from(self.next_u32()) * REAL_UNIT_UINT
    }

    /// Uniform double in `[0, 1)` built from the low 31 bits of one word.
    ///
    /// The weighted scan, shuffle and exclusion draws use this variant, so
    /// it must stay distinct from [`Self::next_float01`].
    fn next_float01_31(&mut self) -> f64 {
        f64::from(self.next_u32() & 0x7FFF_FFFF) * REAL_UNIT_INT
    }

    /// Biased coin: true with probability `p`. Consumes one word.
    ///
    /// `p >= 1` is always true and `p <= 0` is always false, but the word is
    /// consumed regardless so call sequences stay aligned.
    pub fn chance(&mut self, p: f64) -> bool {
        f64::from(self.next_u32()) < p * 4_294_967_296.0
    }

    /// "1 in 2^exponent" rarity coin. Consumes one word.
    ///
    /// `exponent == 0` is always true; exponents of 32 or more test the full
    /// word.
    pub fn chance_pow2(&mut self, exponent: u32) -> bool {
        let word = self.next_u32();
        if exponent == 0 {
            return true;
        }
        let mask = if exponent >= 32 {
            u32::MAX
        } else {
            (1u32 << exponent) - 1
        };
        word & mask == 0
    }

    /// True with probability `1 / max(n, 1)`. Consumes one word.
    pub fn inverse_chance(&mut self, n: u32) -> bool {
        self.chance(1.0 / f64::from(n.max(1)))
    }

    /// Fair coin from a 32-entry bit buffer.
    ///
    /// Refills the buffer from one word when exhausted; the intervening 31
    /// calls consume no state.
    pub fn next_bool(&mut self) -> bool {
        if self.bit_mask == 1 {
            self.bit_buffer = self.next_u32();
            self.bit_mask = 0x8000_0000;
        } else {
            self.bit_mask >>= 1;
        }
        self.bit_buffer & self.bit_mask == 0
    }

    /// Uniform index into a table of length `len`. Consumes one word.
    pub fn index(&mut self, len: usize) -> Result<usize> {
        if len == 0 {
            return Err(Error::EmptyInput);
        }
        Ok((f64::from(self.next_u32()) * REAL_UNIT_UINT * len as f64) as usize)
    }

    /// Uniform pick from a slice. Consumes one word.
    pub fn choose<'a, T>(&mut self, sample: &'a [T]) -> Result<&'a T> {
        let idx = self.index(sample.len())?;
        Ok(&sample[idx])
    }

    /// Uniform pick from a group-of-groups: one word for the outer group,
    /// one for the inner item.
    pub fn choose_nested<'a, T>(&mut self, groups: &[&'a [T]]) -> Result<&'a T> {
        let outer = self.index(groups.len())?;
        self.choose(groups[outer])
    }

    /// Weighted index selection by front-to-back scan.
    ///
    /// Sums the weights, draws a uniform point in `[0, sum)` and subtracts
    /// weights from the front until the remainder goes negative. The first
    /// index that drives it negative wins; if float rounding lets the scan
    /// run off the end, index 0 is returned. Consumes one word.
    pub fn choose_index_weighted(&mut self, weights: &[u32]) -> Result<usize> {
        if weights.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut total = 0.0f64;
        for &w in weights {
            total += f64::from(w);
        }
        let mut remaining = total * self.next_float01_31();
        for (i, &w) in weights.iter().enumerate() {
            remaining -= f64::from(w);
            if remaining < 0.0 {
                return Ok(i);
            }
        }
        Ok(0)
    }

    /// Weighted pick from parallel item/weight slices. Consumes one word.
    pub fn choose_weighted<'a, T>(&mut self, sample: &'a [T], weights: &[u32]) -> Result<&'a T> {
        if sample.is_empty() {
            return Err(Error::EmptyInput);
        }
        if sample.len() != weights.len() {
            return Err(Error::Configuration(format!(
                "weights length {} does not match sample length {}",
                weights.len(),
                sample.len()
            )));
        }
        let idx = self.choose_index_weighted(weights)?;
        Ok(&sample[idx])
    }

    /// Weighted outer-group pick followed by a uniform inner pick.
    /// Consumes two words.
    pub fn choose_nested_weighted<'a, T>(
        &mut self,
        groups: &[&'a [T]],
        weights: &[u32],
    ) -> Result<&'a T> {
        if groups.is_empty() {
            return Err(Error::EmptyInput);
        }
        if groups.len() != weights.len() {
            return Err(Error::Configuration(format!(
                "weights length {} does not match group count {}",
                weights.len(),
                groups.len()
            )));
        }
        let outer = self.choose_index_weighted(weights)?;
        self.choose(groups[outer])
    }

    /// `population` independent uniform picks, one word each.
    pub fn choose_many<'a, T>(&mut self, sample: &'a [T], population: usize) -> Result<Vec<&'a T>> {
        if sample.is_empty() {
            return Err(Error::EmptyInput);
        }
        if population == 0 {
            return Err(Error::Configuration(
                "population must be non-zero".to_owned(),
            ));
        }
        let mut picks = Vec::with_capacity(population);
        for _ in 0..population {
            picks.push(self.choose(sample)?);
        }
        Ok(picks)
    }

    /// Uniform pick excluding one known member.
    ///
    /// Draws an index over `len - 1` slots and remaps a collision with the
    /// excluded member onto the final slot. Consumes one word unless the
    /// slice has a single element.
    pub fn choose_except<'a, T: PartialEq>(
        &mut self,
        sample: &'a [T],
        exception: &T,
    ) -> Result<&'a T> {
        if sample.is_empty() {
            return Err(Error::EmptyInput);
        }
        let excluded = sample
            .iter()
            .position(|item| item == exception)
            .ok_or_else(|| {
                Error::Configuration("exclusion target is not a member of the sample".to_owned())
            })?;
        if sample.len() == 1 {
            return Ok(&sample[0]);
        }
        let mut idx = (self.next_float01_31() * (sample.len() - 1) as f64) as usize;
        if idx == excluded {
            idx = sample.len() - 1;
        }
        Ok(&sample[idx])
    }

    /// In-place Fisher-Yates shuffle, one word per element except the last.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        if items.len() < 2 {
            return;
        }
        for i in 0..items.len() - 1 {
            let j = i + (self.next_float01_31() * (items.len() - i) as f64) as usize;
            items.swap(i, j);
        }
    }

    /// Fill a buffer with random bytes, one word per four bytes
    /// (little-endian), tail handled byte-wise.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        let mut chunks = buf.chunks_exact_mut(4);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u32().to_le_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let word = self.next_u32().to_le_bytes();
            tail.copy_from_slice(&word[..tail.len()]);
        }
    }
}

// The inherent methods intentionally shadow the trait methods so call sites
// inside the workspace always hit the documented draw pattern.
impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        SeededRng::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(SeededRng::next_u32(self));
        let hi = u64::from(SeededRng::next_u32(self));
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        SeededRng::fill_bytes(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        SeededRng::fill_bytes(self, dest);
        Ok(())
    }
}

impl SeedableRng for SeededRng {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let x = u32::from_le_bytes([seed[0], seed[1], seed[2], seed[3]]);
        let y = u32::from_le_bytes([seed[4], seed[5], seed[6], seed[7]]);
        let z = u32::from_le_bytes([seed[8], seed[9], seed[10], seed[11]]);
        let w = u32::from_le_bytes([seed[12], seed[13], seed[14], seed[15]]);
        if x == 0 && y == 0 && z == 0 && w == 0 {
            // All-zero state would be a fixed point of the recurrence.
            return SeededRng::new(0);
        }
        Self {
            x,
            y,
            z,
            w,
            bit_buffer: 0,
            bit_mask: 1,
        }
    }
}
