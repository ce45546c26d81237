use std::fmt;

use orrery_math::Real;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::Label;

/// Width of a seed in bytes.
pub const SEED_BYTES: usize = 32;

/// Number of low bits of the secondary hash read by [`Seed::get_real`].
const REAL_BITS: u32 = orrery_math::FRAC_BITS;

/// A 256-bit node in the derivation tree.
///
/// Seeds are plain values: two seeds reached by the same path from the same
/// root are equal, on any machine and in any order of evaluation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seed([u8; SEED_BYTES]);

impl Seed {
    /// Root seed from a human-readable phrase: SHA-256 of its UTF-8 bytes.
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Wrap raw bytes as a seed.
    pub const fn from_bytes(bytes: [u8; SEED_BYTES]) -> Self {
        Self(bytes)
    }

    /// The raw seed bytes.
    pub const fn as_bytes(&self) -> &[u8; SEED_BYTES] {
        &self.0
    }

    // -----------------------------------------------------------------------
    // Derivation
    // -----------------------------------------------------------------------

    /// Child seed: SHA-256 of this seed's bytes followed by the label's
    /// canonical encoding.
    pub fn derive<'a>(&self, label: impl Into<Label<'a>>) -> Seed {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        label.into().encode(&mut |chunk| hasher.update(chunk));
        Seed(hasher.finalize().into())
    }

    /// Follow several labels in order.
    pub fn derive_path<'a, I>(&self, labels: I) -> Seed
    where
        I: IntoIterator,
        I::Item: Into<Label<'a>>,
    {
        labels
            .into_iter()
            .fold(*self, |seed, label| seed.derive(label))
    }

    // -----------------------------------------------------------------------
    // Scalar getters
    // -----------------------------------------------------------------------

    fn secondary_hash(&self) -> [u8; SEED_BYTES] {
        Sha256::digest(self.0).into()
    }

    /// A fair coin: the lowest bit of the secondary hash.
    pub fn get_bool(&self) -> bool {
        self.secondary_hash()[SEED_BYTES - 1] & 1 == 1
    }

    /// Raw 128-bit integer: the low 16 bytes of the secondary hash, big
    /// endian, as a signed value.
    pub fn get_int(&self) -> i128 {
        let hash = self.secondary_hash();
        let mut low = [0u8; 16];
        low.copy_from_slice(&hash[SEED_BYTES - 16..]);
        i128::from_be_bytes(low)
    }

    /// Uniform value in `[0, 1)`: the bottom 40 bits of the secondary hash
    /// taken as the fractional part of a [`Real`].
    pub fn get_real(&self) -> Real {
        let hash = self.secondary_hash();
        let mut tail = [0u8; 16];
        tail[16 - 5..].copy_from_slice(&hash[SEED_BYTES - 5..]);
        let raw = i128::from_be_bytes(tail) & ((1 << REAL_BITS) - 1);
        Real::from_raw(raw)
    }

    /// Uniform integer in `[low, high)`, as `low + floor(get_real · (high − low))`.
    ///
    /// `high` must be greater than `low`.
    pub fn get_int_between(&self, low: i128, high: i128) -> i128 {
        debug_assert!(high > low, "empty range [{low}, {high})");
        low + (self.get_real() * Real::from_int(high - low)).to_int()
    }

    /// Uniform [`Real`] in `[low, high)`.
    pub fn get_real_between(&self, low: Real, high: Real) -> Real {
        low + self.get_real() * (high - low)
    }

    /// Sum of `count` dice with `size` faces, plus `bonus`.
    ///
    /// Each die reads its own sub-seed: the pool splits in half on `"left"`
    /// and `"right"` until single dice remain, and the bonus travels with
    /// the right half.
    pub fn dice_roll(&self, count: u32, size: u32, bonus: i128) -> i128 {
        match count {
            0 => bonus,
            1 => self.get_int_between(1, size as i128 + 1) + bonus,
            _ => {
                let left = count / 2;
                self.derive("left").dice_roll(left, size, 0)
                    + self.derive("right").dice_roll(count - left, size, bonus)
            }
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fred() -> Seed {
        Seed::from_phrase("fred")
    }

    #[test]
    fn test_from_phrase_is_sha256() {
        assert_eq!(
            fred().to_string(),
            "d0cfc2e5319b82cdc71a33873e826c93d7ee11363f8ac91c4fa3a2cfcd2286e5"
        );
    }

    #[test]
    fn test_derive_matches_reference_hash() {
        assert_eq!(
            fred().derive("mass").to_string(),
            "6a1950a5a39d776f4d743b920ea0fafea8bb5da998a884396ab659069f7143e9"
        );
        assert_eq!(
            fred().derive(3u64).to_string(),
            "9276c25047ddf58e2487283a4015632f9ed9b2c8c55ba7aab444933bffcf4cc9"
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = fred().derive(-4i16).derive("class");
        let b = fred().derive(-4i16).derive("class");
        assert_eq!(a, b, "same path must give same seed");
    }

    #[test]
    fn test_derive_path_matches_chained_derive() {
        let chained = fred().derive(1i16).derive(2i16).derive(3i16);
        assert_eq!(fred().derive_path([1i16, 2, 3]), chained);
    }

    #[test]
    fn test_different_labels_give_different_seeds() {
        assert_ne!(fred().derive("x"), fred().derive("y"));
        assert_ne!(fred().derive(1u64), fred().derive(2u64));
        assert_ne!(fred().derive("1"), fred().derive(1u64));
    }

    #[test]
    fn test_signed_and_unsigned_labels_meet() {
        assert_eq!(fred().derive(9i16), fred().derive(9u64));
    }

    #[test]
    fn test_get_real_matches_reference() {
        assert_eq!(fred().get_real().to_raw(), 720_828_640_554);
    }

    #[test]
    fn test_get_int_matches_reference() {
        assert_eq!(fred().get_int(), -97_668_243_607_663_930_788_734_295_841_274_319_574);
    }

    #[test]
    fn test_get_int_is_deterministic_and_shares_real_bits() {
        let seed = fred().derive("raw");
        assert_eq!(seed.get_int(), seed.get_int());
        assert_ne!(seed.get_int(), fred().get_int());
        assert_eq!(
            seed.get_int() & ((1 << REAL_BITS) - 1),
            seed.get_real().to_raw(),
            "get_real reads the bottom bits of the same hash"
        );
    }

    #[test]
    fn test_get_real_in_unit_interval() {
        let mut seed = fred();
        for index in 0u64..500 {
            seed = seed.derive(index);
            let value = seed.get_real();
            assert!(value >= Real::ZERO, "{value} below zero");
            assert!(value < Real::ONE, "{value} not below one");
        }
    }

    #[test]
    fn test_get_int_between_in_range() {
        for index in 0u64..500 {
            let value = fred().derive(index).get_int_between(-3, 4);
            assert!((-3..4).contains(&value), "{value} outside [-3, 4)");
        }
    }

    #[test]
    fn test_get_int_between_covers_range() {
        let mut seen = [false; 6];
        for index in 0u64..300 {
            let value = fred().derive(index).get_int_between(0, 6);
            seen[value as usize] = true;
        }
        assert!(seen.iter().all(|&hit| hit), "every face must appear: {seen:?}");
    }

    #[test]
    fn test_get_bool_takes_both_values() {
        let trues = (0u64..200).filter(|&i| fred().derive(i).get_bool()).count();
        assert!(trues > 50 && trues < 150, "suspicious coin: {trues}/200");
    }

    #[test]
    fn test_get_real_between_bounds() {
        let low = Real::fraction(1, 10);
        let high = Real::fraction(9, 10);
        for index in 0u64..200 {
            let value = fred().derive(index).get_real_between(low, high);
            assert!(value >= low && value < high, "{value} outside bounds");
        }
    }

    #[test]
    fn test_dice_roll_bounds() {
        for index in 0u64..200 {
            let roll = fred().derive(index).dice_roll(3, 50, 0);
            assert!((3..=150).contains(&roll), "3d50 rolled {roll}");
            let with_bonus = fred().derive(index).dice_roll(2, 5, -2);
            assert!((0..=8).contains(&with_bonus), "2d5-2 rolled {with_bonus}");
        }
    }

    #[test]
    fn test_dice_roll_base_cases() {
        let seed = fred();
        assert_eq!(seed.dice_roll(0, 6, 4), 4, "no dice is just the bonus");
        assert_eq!(
            seed.dice_roll(1, 6, 2),
            seed.get_int_between(1, 7) + 2,
            "one die reads the seed directly"
        );
        assert_eq!(
            seed.dice_roll(2, 6, 1),
            seed.derive("left").get_int_between(1, 7)
                + seed.derive("right").get_int_between(1, 7)
                + 1
        );
    }

    #[test]
    fn test_debug_and_display() {
        let seed = Seed::from_bytes([0xab; SEED_BYTES]);
        assert_eq!(seed.to_string(), "ab".repeat(SEED_BYTES));
        assert!(format!("{seed:?}").starts_with("Seed(abab"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let seed = fred().derive("terrain");
        let json = serde_json::to_string(&seed).unwrap();
        let back: Seed = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);
    }
}
