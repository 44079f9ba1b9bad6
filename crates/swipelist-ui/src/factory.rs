//! Random item generation.
//!
//! Labels are drawn from the 96 code points starting at the ASCII space,
//! variants uniformly from `[0, Variant::COUNT)`.

use crate::item::{ItemRecord, Variant};
use crate::options::ListScreenOptions;
use crate::Error;

/// First code point a label character can take.
pub const LABEL_FIRST_CHAR: u8 = 32;

/// Number of distinct label characters.
pub const LABEL_CHAR_SPAN: u32 = 96;

/// Source of uniformly distributed bits.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform value in `[0, bound)`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32 {
        // Multiply-shift keeps the bias below 2^-32 without a rejection loop.
        let high = self.next_u64() >> 32;
        ((high * u64::from(bound)) >> 32) as u32
    }
}

/// SplitMix64 generator.
///
/// Deterministic for a given seed; [`SeededRandom::from_entropy`] seeds it
/// from the operating system for production use.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn from_entropy() -> Result<Self, Error> {
        let seed = getrandom::u64().map_err(Error::Entropy)?;
        Ok(Self::new(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

pub struct ItemFactory {
    random: Box<dyn RandomSource>,
    short_label_len: usize,
    long_label_len: usize,
}

impl ItemFactory {
    pub fn new(random: impl RandomSource + 'static, options: &ListScreenOptions) -> Self {
        Self {
            random: Box::new(random),
            short_label_len: options.short_label_len,
            long_label_len: options.long_label_len,
        }
    }

    /// Factory backed by an OS-seeded generator.
    pub fn from_entropy(options: &ListScreenOptions) -> Result<Self, Error> {
        Ok(Self::new(SeededRandom::from_entropy()?, options))
    }

    pub fn create_item(&mut self) -> ItemRecord {
        let short_label = self.random_label(self.short_label_len);
        let long_label = self.random_label(self.long_label_len);
        let variant = Variant::wrapping(self.random.next_below(u32::from(Variant::COUNT)) as u8);
        ItemRecord::new(short_label, long_label, variant)
    }

    fn random_label(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| char::from(LABEL_FIRST_CHAR + self.random.next_below(LABEL_CHAR_SPAN) as u8))
            .collect()
    }
}

impl std::fmt::Debug for ItemFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemFactory")
            .field("short_label_len", &self.short_label_len)
            .field("long_label_len", &self.long_label_len)
            .finish_non_exhaustive()
    }
}
