//! # ARM Condition Field
//!
//! Every ARM instruction carries a 4-bit condition in bits 31-28. The
//! disassembler appends its mnemonic right after the operation name:
//!
//! ```text
//! ┌───────┬────────┬─────────────────────┐
//! │ Code  │ Suffix │     Meaning         │
//! ├───────┼────────┼─────────────────────┤
//! │ 0000  │   EQ   │ Equal               │
//! │ 0001  │   NE   │ Not equal           │
//! │ 0010  │   CS   │ Carry set           │
//! │ 0011  │   CC   │ Carry clear         │
//! │ 0100  │   MI   │ Minus / negative    │
//! │ 0101  │   PL   │ Plus / non-negative │
//! │ 0110  │   VS   │ Overflow set        │
//! │ 0111  │   VC   │ Overflow clear      │
//! │ 1000  │   HI   │ Higher (unsigned)   │
//! │ 1001  │   LS   │ Lower/same (unsig)  │
//! │ 1010  │   GE   │ ≥ (signed)          │
//! │ 1011  │   LT   │ < (signed)          │
//! │ 1100  │   GT   │ > (signed)          │
//! │ 1101  │   LE   │ ≤ (signed)          │
//! │ 1110  │        │ Always              │
//! │ 1111  │   --   │ Reserved            │
//! └───────┴────────┴─────────────────────┘
//! ```
//!
//! `AL` is never printed: `MOV R0, #0x1` and `MOVAL R0, #0x1` are the same
//! instruction. `1111` was "never" on `ARMv1`/`ARMv2` and is reserved from
//! `ARMv3` on, so the disassembler refuses to go past it.

use serde::{Deserialize, Serialize};

/// Condition codes, the discriminant is the value of bits 31-28.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub enum Condition {
    /// Equal (Z=1)
    EQ = 0x0,

    /// Not equal (Z=0)
    NE = 0x1,

    /// Carry set / unsigned higher or same (C=1)
    CS = 0x2,

    /// Carry clear / unsigned lower (C=0)
    CC = 0x3,

    /// Minus / negative (N=1)
    MI = 0x4,

    /// Plus / positive or zero (N=0)
    PL = 0x5,

    /// Overflow set (V=1)
    VS = 0x6,

    /// Overflow clear (V=0)
    VC = 0x7,

    /// Unsigned higher (C=1 AND Z=0)
    HI = 0x8,

    /// Unsigned lower or same (C=0 OR Z=1)
    LS = 0x9,

    /// Signed greater or equal (N=V)
    GE = 0xA,

    /// Signed less than (N≠V)
    LT = 0xB,

    /// Signed greater than (Z=0 AND N=V)
    GT = 0xC,

    /// Signed less than or equal (Z=1 OR N≠V)
    LE = 0xD,

    /// Always, printed as no suffix.
    AL = 0xE,

    /// Reserved. Decoding stops when it shows up.
    NV = 0xF,
}

impl Condition {
    /// Reads the condition out of bits 31-28 of `op_code`.
    #[must_use]
    pub const fn of(op_code: u32) -> Self {
        Self::from_nibble((op_code >> 28) as u8)
    }

    const fn from_nibble(item: u8) -> Self {
        match item & 0xF {
            0x0 => Self::EQ,
            0x1 => Self::NE,
            0x2 => Self::CS,
            0x3 => Self::CC,
            0x4 => Self::MI,
            0x5 => Self::PL,
            0x6 => Self::VS,
            0x7 => Self::VC,
            0x8 => Self::HI,
            0x9 => Self::LS,
            0xA => Self::GE,
            0xB => Self::LT,
            0xC => Self::GT,
            0xD => Self::LE,
            0xE => Self::AL,
            _ => Self::NV,
        }
    }

    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::NV)
    }

    /// Suffix appended to the mnemonic.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::EQ => "EQ",
            Self::NE => "NE",
            Self::CS => "CS",
            Self::CC => "CC",
            Self::MI => "MI",
            Self::PL => "PL",
            Self::VS => "VS",
            Self::VC => "VC",
            Self::HI => "HI",
            Self::LS => "LS",
            Self::GE => "GE",
            Self::LT => "LT",
            Self::GT => "GT",
            Self::LE => "LE",
            Self::AL => "",
            Self::NV => "ERROR",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn condition(field: u8) -> Condition {
        Condition::of(u32::from(field) << 28)
    }

    #[test]
    fn table_order_matches_encoding() {
        let suffixes: Vec<String> = (0..=0xF_u8)
            .map(|c| condition(c).to_string())
            .collect();

        assert_eq!(
            suffixes,
            vec![
                "EQ", "NE", "CS", "CC", "MI", "PL", "VS", "VC", "HI", "LS", "GE", "LT", "GT",
                "LE", "", "ERROR",
            ]
        );
    }

    #[test]
    fn discriminant_is_field_value() {
        for c in 0..=0xF_u8 {
            assert_eq!(condition(c) as u8, c);
        }
    }

    #[test]
    fn read_from_op_code() {
        assert_eq!(Condition::of(0xE3A0_1001), Condition::AL);
        assert_eq!(Condition::of(0x0590_1000), Condition::EQ);
        assert_eq!(Condition::of(0xD000_0000), Condition::LE);
    }

    #[test]
    fn only_nv_is_reserved() {
        assert!(Condition::of(0xF000_0000).is_reserved());
        for c in 0..0xF_u8 {
            assert!(!condition(c).is_reserved());
        }
    }
}
