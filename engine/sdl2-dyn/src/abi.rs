//! Word-width marshaling for 64-bit values.
//!
//! On a 32-bit target a 64-bit quantity occupies two machine words, low word
//! first. Everything that has to lay out or recover such a value by hand goes
//! through [`split_u64`] and [`join_u64`] so the two targets share one path.

use std::fmt::Debug;

pub trait Word: Copy + Default + Eq + Debug + 'static {
    const BITS: u32;
    /// Words needed to carry one 64-bit value.
    const PER_U64: usize = (u64::BITS / Self::BITS) as usize;
    const SIZE: usize = (Self::BITS / 8) as usize;

    fn truncate(value: u64) -> Self;
    fn widen(self) -> u64;
    fn read_ne(bytes: &[u8]) -> Self;
    fn write_ne(self, bytes: &mut [u8]);
}

impl Word for u32 {
    const BITS: u32 = u32::BITS;

    #[inline(always)]
    fn truncate(value: u64) -> Self {
        value as u32
    }

    #[inline(always)]
    fn widen(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    fn read_ne(bytes: &[u8]) -> Self {
        let mut word = [0; 4];
        word.copy_from_slice(&bytes[..4]);
        u32::from_ne_bytes(word)
    }

    #[inline(always)]
    fn write_ne(self, bytes: &mut [u8]) {
        bytes[..4].copy_from_slice(&self.to_ne_bytes())
    }
}

impl Word for u64 {
    const BITS: u32 = u64::BITS;

    #[inline(always)]
    fn truncate(value: u64) -> Self {
        value
    }

    #[inline(always)]
    fn widen(self) -> u64 {
        self
    }

    #[inline(always)]
    fn read_ne(bytes: &[u8]) -> Self {
        let mut word = [0; 8];
        word.copy_from_slice(&bytes[..8]);
        u64::from_ne_bytes(word)
    }

    #[inline(always)]
    fn write_ne(self, bytes: &mut [u8]) {
        bytes[..8].copy_from_slice(&self.to_ne_bytes())
    }
}

#[cfg(target_pointer_width = "64")]
pub type NativeWord = u64;
#[cfg(target_pointer_width = "32")]
pub type NativeWord = u32;

/// Split `value` into words, low word first. Unused trailing words are zero.
#[inline]
pub fn split_u64<W: Word>(value: u64) -> [W; 2] {
    let mut words = [W::default(); 2];
    for (i, word) in words.iter_mut().take(W::PER_U64).enumerate() {
        *word = W::truncate(value >> (i as u32 * W::BITS));
    }
    words
}

#[inline]
pub fn join_u64<W: Word>(words: &[W]) -> u64 {
    debug_assert!(words.len() >= W::PER_U64);
    words
        .iter()
        .take(W::PER_U64)
        .enumerate()
        .fold(0, |value, (i, word)| {
            value | word.widen() << (i as u32 * W::BITS)
        })
}

#[inline]
pub fn split_i64<W: Word>(value: i64) -> [W; 2] {
    split_u64(value as u64)
}

#[inline]
pub fn join_i64<W: Word>(words: &[W]) -> i64 {
    join_u64(words) as i64
}

#[inline]
pub fn split_f64<W: Word>(value: f64) -> [W; 2] {
    split_u64(value.to_bits())
}

#[inline]
pub fn join_f64<W: Word>(words: &[W]) -> f64 {
    f64::from_bits(join_u64(words))
}

/// Store `value` into the first eight bytes of `bytes` the way the target
/// lays out a 64-bit integer in memory.
pub fn store_u64<W: Word>(bytes: &mut [u8], value: u64) {
    let words = split_u64::<W>(value);
    #[cfg(target_endian = "big")]
    let words = {
        let mut words = words;
        words[..W::PER_U64].reverse();
        words
    };
    for (i, word) in words.iter().take(W::PER_U64).enumerate() {
        word.write_ne(&mut bytes[i * W::SIZE..]);
    }
}

pub fn load_u64<W: Word>(bytes: &[u8]) -> u64 {
    let mut words = [W::default(); 2];
    for (i, word) in words.iter_mut().take(W::PER_U64).enumerate() {
        *word = W::read_ne(&bytes[i * W::SIZE..]);
    }
    #[cfg(target_endian = "big")]
    words[..W::PER_U64].reverse();
    join_u64(&words)
}

#[inline]
pub fn store_i64<W: Word>(bytes: &mut [u8], value: i64) {
    store_u64::<W>(bytes, value as u64)
}

#[inline]
pub fn load_i64<W: Word>(bytes: &[u8]) -> i64 {
    load_u64::<W>(bytes) as i64
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const BOUNDARY: [i64; 5] = [
        0,
        -1,
        i64::MAX,
        i64::MIN,
        0x1234_5678_9abc_def0,
    ];

    #[test]
    fn narrow_split_is_low_then_high() {
        let words = split_u64::<u32>(0x0000_0001_ffff_fffe);
        assert_eq!(words, [0xffff_fffe, 0x0000_0001]);
        assert_eq!(split_u64::<u64>(7), [7, 0]);
    }

    #[test]
    fn boundary_values_round_trip() {
        for value in BOUNDARY {
            assert_eq!(join_i64(&split_i64::<u32>(value)), value);
            assert_eq!(join_i64(&split_i64::<u64>(value)), value);

            let mut bytes = [0; 8];
            store_i64::<u32>(&mut bytes, value);
            assert_eq!(bytes, value.to_ne_bytes());
            assert_eq!(load_i64::<u32>(&bytes), value);
            assert_eq!(load_i64::<u64>(&bytes), value);
        }
    }

    #[test]
    fn independent_halves() {
        let value = join_u64::<u32>(&[0xdead_beef, 0x0bad_f00d]);
        assert_eq!(value, 0x0bad_f00d_dead_beef);
        let value = join_u64::<u32>(&[0, 0x8000_0000]);
        assert_eq!(value as i64, i64::MIN);
    }

    proptest! {
        #[test]
        fn split_join_round_trips(value: i64) {
            prop_assert_eq!(join_i64(&split_i64::<u32>(value)), value);
            prop_assert_eq!(join_i64(&split_i64::<NativeWord>(value)), value);
        }

        #[test]
        fn float_bits_round_trip(value: f64) {
            let joined = join_f64(&split_f64::<u32>(value));
            prop_assert_eq!(joined.to_bits(), value.to_bits());
        }

        #[test]
        fn store_matches_native_layout(value: u64) {
            let mut narrow = [0; 8];
            let mut wide = [0; 8];
            store_u64::<u32>(&mut narrow, value);
            store_u64::<u64>(&mut wide, value);
            prop_assert_eq!(narrow, value.to_ne_bytes());
            prop_assert_eq!(wide, narrow);
        }
    }
}
