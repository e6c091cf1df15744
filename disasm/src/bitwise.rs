use std::ops::RangeInclusive;

/// Bit helpers over an instruction word,
/// the index (`bit_idx`) goes from lsb to msb (right to left).
pub trait Bits: Copy {
    fn get_bit(self, bit_idx: u8) -> bool;

    /// Extracts the bits in `bits_range` (inclusive) and moves them to the 0 position.
    fn get_bits(self, bits_range: RangeInclusive<u8>) -> Self;

    /// Returns `0` or `1` for the bit at `bit_idx`.
    fn bit_char(self, bit_idx: u8) -> char {
        if self.get_bit(bit_idx) { '1' } else { '0' }
    }
}

impl Bits for u32 {
    fn get_bit(self, bit_idx: u8) -> bool {
        debug_assert!(bit_idx < 32);
        (self >> bit_idx) & 1 == 1
    }

    fn get_bits(self, bits_range: RangeInclusive<u8>) -> Self {
        let start = u32::from(*bits_range.start());
        let end = u32::from(*bits_range.end());
        debug_assert!(start <= end && end < 32);

        // `length` ones, computed in 64 bits so a full 32 bit range doesn't overflow.
        let length = end - start + 1;
        let mask = ((1_u64 << length) - 1) as Self;

        (self >> start) & mask
    }
}

/// Rotates `value` right by `by` bits, `by` is taken modulo 32.
///
/// Bits shifted out of the bottom reappear at the top. A rotation of 0 (or any
/// multiple of 32) leaves the value untouched and never shifts by 32.
#[must_use]
pub const fn rotate_right(value: u32, by: u32) -> u32 {
    let by = by % 32;
    if by == 0 {
        return value;
    }

    let mask = (1 << by) - 1;
    (value >> by) | ((value & mask) << (32 - by))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn get_bit() {
        let b = 0b1011001110_u32;
        assert!(b.get_bit(1));
        assert!(!b.get_bit(0));
        assert!(b.get_bit(2));
        assert!(!b.get_bit(31));
    }

    #[test]
    #[should_panic]
    fn invalid_index() {
        let b = 0u32;
        b.get_bit(32);
    }

    #[test]
    fn get_bits() {
        let b = 0b1011001110_u32;
        assert_eq!(b.get_bits(0..=3), 0b1110);
        assert_eq!(b.get_bits(1..=1), 0b1);
        assert_eq!(b.get_bits(4..=7), 0b1100);
        assert_eq!(b.get_bits(8..=9), 0b10);
        assert_eq!(b.get_bits(0..=31), 0b10_1100_1110);
        assert_eq!(b.get_bits(28..=31), 0b0);
        assert_eq!(0xE3A0_1001_u32.get_bits(28..=31), 0xE);
        assert_eq!(0xE3A0_1001_u32.get_bits(21..=24), 0b1101);
    }

    #[test]
    fn bit_char() {
        let b = 0x8000_0001_u32;
        assert_eq!(b.bit_char(31), '1');
        assert_eq!(b.bit_char(30), '0');
        assert_eq!(b.bit_char(0), '1');
    }

    #[test]
    fn rotate_by_zero() {
        assert_eq!(rotate_right(0, 0), 0);
        assert_eq!(rotate_right(0xFF, 0), 0xFF);
        assert_eq!(rotate_right(u32::MAX, 0), u32::MAX);
    }

    #[test]
    fn rotate_is_modulo_32() {
        assert_eq!(rotate_right(0x1234_5678, 32), 0x1234_5678);
        assert_eq!(rotate_right(0xFF, 36), rotate_right(0xFF, 4));
    }

    #[test]
    fn rotate_wraps_low_bits_to_the_top() {
        assert_eq!(rotate_right(0xFF, 4), 0xF000_000F);
        assert_eq!(rotate_right(0x1, 2), 0x4000_0000);
        assert_eq!(rotate_right(0x3F, 30), 0xFC);
    }

    #[test]
    fn rotate_matches_std() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let value = rng.gen_range(0..=u32::MAX);
            let by = rng.gen_range(0..=64);
            assert_eq!(rotate_right(value, by), value.rotate_right(by));
        }
    }
}
