//! # ARM Instruction Decoding
//!
//! Classifies a 32-bit ARM word and pulls out the fields the listing needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Bits 27-26 (mask 0x0C000000) pick the class:                           │
//! │                                                                         │
//! │  01  →  Single Data Transfer (LDR, STR)                                 │
//! │  00  →  Data Processing / PSR Transfer (AND, ADD, CMP, MOV, ...)        │
//! │  1x  →  not decoded (branch, block transfer, coprocessor, SWI)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Multiply, swap and halfword transfers share the `00` pattern and come out
//! as Data Processing; the listing doesn't tell them apart.
//!
//! ## Single Data Transfer
//!
//! ```text
//! |_Cond__|0_1|I|P|U|B|W|L|__Rn___|__Rd___|________Offset_________|
//! ```
//!
//! ## Data Processing
//!
//! ```text
//! |_Cond__|0_0|I|_code__|S|__Rn___|__Rd___|_______operand2________|
//! ```

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::alu_instruction::{ArmModeAluInstruction, OperandLayout};
use crate::bitwise::{Bits, rotate_right};
use crate::condition::Condition;
use crate::flags::{Indexing, LoadStoreKind, OperandKind, Offsetting, ReadWriteKind};

/// Offset of a Single Data Transfer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SingleDataTransferOffsetInfo {
    /// 12-bit unsigned immediate, added or subtracted according to `offsetting`.
    Immediate { offset: u32, offsetting: Offsetting },

    /// Register offset with an optional shift.
    ///
    /// Not decoded: the listing prints nothing for it.
    Register,
}

/// Operand 2 of a Data Processing instruction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum AluSecondOperandInfo {
    /// 8-bit `base` rotated right by `2 * rotate`, `value` is the result.
    Immediate { base: u32, rotate: u32, value: u32 },

    /// Register with an optional shift.
    ///
    /// Not decoded: the listing prints the `reg` placeholder.
    Register,
}

impl Display for AluSecondOperandInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Immediate { value, .. } => write!(f, "#0x{value:X}"),
            Self::Register => f.write_str("reg"),
        }
    }
}

/// A classified ARM word.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum ArmModeInstruction {
    /// `LDR`/`STR`, optionally byte sized (`B`) and/or with the `T` suffix.
    SingleDataTransfer {
        condition: Condition,
        kind: LoadStoreKind,
        quantity: ReadWriteKind,
        /// Bit 21. `T` for post-indexed transfers, `!` for pre-indexed ones;
        /// the listing checks it in both places.
        write_back: bool,
        indexing: Indexing,
        rd: u32,
        base_register: u32,
        offset_info: SingleDataTransferOffsetInfo,
    },

    /// ALU operations, including the PSR transfers that share the encoding.
    DataProcessing {
        condition: Condition,
        alu_instruction: ArmModeAluInstruction,
        set_conditions: bool,
        rn: u32,
        destination: u32,
        op2: AluSecondOperandInfo,
    },

    /// Any other class. Only the header of the word ends up in the listing.
    Unhandled,
}

impl From<u32> for ArmModeInstruction {
    fn from(op_code: u32) -> Self {
        match op_code.get_bits(26..=27) {
            0b01 => Self::single_data_transfer(op_code),
            0b00 => Self::data_processing(op_code),
            class => {
                tracing::debug!("unhandled instruction class 0b{class:02b}: opcode=0x{op_code:08X}");
                Self::Unhandled
            }
        }
    }
}

impl ArmModeInstruction {
    fn single_data_transfer(op_code: u32) -> Self {
        let offset_info = match OperandKind::single_data_transfer(op_code.get_bit(25)) {
            OperandKind::Immediate => SingleDataTransferOffsetInfo::Immediate {
                offset: op_code.get_bits(0..=11),
                offsetting: op_code.get_bit(23).into(),
            },
            OperandKind::Register => {
                tracing::debug!("register offset not decoded: opcode=0x{op_code:08X}");
                SingleDataTransferOffsetInfo::Register
            }
        };

        Self::SingleDataTransfer {
            condition: Condition::of(op_code),
            kind: op_code.get_bit(20).into(),
            quantity: op_code.get_bit(22).into(),
            write_back: op_code.get_bit(21),
            indexing: op_code.get_bit(24).into(),
            rd: op_code.get_bits(12..=15),
            base_register: op_code.get_bits(16..=19),
            offset_info,
        }
    }

    fn data_processing(op_code: u32) -> Self {
        let op2 = match OperandKind::data_processing(op_code.get_bit(25)) {
            OperandKind::Immediate => {
                let base = op_code.get_bits(0..=7);
                let rotate = op_code.get_bits(8..=11);
                AluSecondOperandInfo::Immediate {
                    base,
                    rotate,
                    value: rotate_right(base, rotate * 2),
                }
            }
            OperandKind::Register => {
                tracing::debug!("register operand 2 not decoded: opcode=0x{op_code:08X}");
                AluSecondOperandInfo::Register
            }
        };

        Self::DataProcessing {
            condition: Condition::of(op_code),
            alu_instruction: op_code.get_bits(21..=24).into(),
            set_conditions: op_code.get_bit(20),
            rn: op_code.get_bits(16..=19),
            destination: op_code.get_bits(12..=15),
            op2,
        }
    }

    /// Assembly text for the instruction, empty when the class isn't decoded.
    #[must_use]
    pub fn disassembler(&self) -> String {
        self.to_string()
    }
}

impl Display for ArmModeInstruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingleDataTransfer {
                condition,
                kind,
                quantity,
                write_back,
                indexing,
                rd,
                base_register,
                offset_info,
            } => {
                write!(f, "{kind}{condition}")?;
                if *quantity == ReadWriteKind::Byte {
                    f.write_str("B")?;
                }
                if *write_back {
                    f.write_str("T")?;
                }
                write!(f, " R{rd}, [R{base_register}")?;
                if *indexing == Indexing::Post {
                    f.write_str("]")?;
                }
                match offset_info {
                    SingleDataTransferOffsetInfo::Immediate { offset, offsetting } => {
                        f.write_str(", #")?;
                        if *offsetting == Offsetting::Down {
                            f.write_str("-")?;
                        }
                        write!(f, "0x{offset:X}")?;
                    }
                    // Register offsets are left out of the listing.
                    SingleDataTransferOffsetInfo::Register => {}
                }
                if *indexing == Indexing::Pre {
                    f.write_str("]")?;
                    if *write_back {
                        f.write_str("!")?;
                    }
                }
                Ok(())
            }
            Self::DataProcessing {
                condition,
                alu_instruction,
                set_conditions,
                rn,
                destination,
                op2,
            } => {
                let set_string = if *set_conditions { "S" } else { "" };
                match alu_instruction.layout() {
                    OperandLayout::Move => {
                        write!(f, "{alu_instruction}{condition}{set_string} R{destination}, {op2}")
                    }
                    OperandLayout::Compare => write!(f, "{alu_instruction}{condition} R{rn}, {op2}"),
                    OperandLayout::Binary => write!(
                        f,
                        "{alu_instruction}{condition}{set_string} R{destination}, R{rn}, {op2}"
                    ),
                }
            }
            Self::Unhandled => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_mov_immediate() {
        let output = ArmModeInstruction::from(0xE3A0_1001);
        assert_eq!(
            output,
            ArmModeInstruction::DataProcessing {
                condition: Condition::AL,
                alu_instruction: ArmModeAluInstruction::Mov,
                set_conditions: false,
                rn: 0,
                destination: 1,
                op2: AluSecondOperandInfo::Immediate {
                    base: 1,
                    rotate: 0,
                    value: 1
                },
            }
        );
        assert_eq!("MOV R1, #0x1", output.disassembler());
    }

    #[test]
    fn decode_movs_with_condition() {
        // MOVNES R2, #0x3F000000
        let output = ArmModeInstruction::from(0b0001_0011_1011_0000_0010_0100_0011_1111);
        assert_eq!("MOVNES R2, #0x3F000000", output.disassembler());
    }

    #[test]
    fn decode_mvn_register_placeholder() {
        // MVN R0, R1
        let output = ArmModeInstruction::from(0xE1E0_0001);
        assert_eq!("MVN R0, reg", output.disassembler());
    }

    #[test]
    fn decode_compare_ignores_s_bit() {
        // CMP R3, #0x10
        let output = ArmModeInstruction::from(0xE353_0010);
        assert_eq!("CMP R3, #0x10", output.disassembler());

        // TSTEQ R1, R2
        let output = ArmModeInstruction::from(0x0111_0002);
        assert_eq!("TSTEQ R1, reg", output.disassembler());
    }

    #[test]
    fn decode_binary_operation() {
        // ADDS R0, R1, #0xFF0
        let output = ArmModeInstruction::from(0xE291_0EFF);
        assert_eq!("ADDS R0, R1, #0xFF0", output.disassembler());

        // SUBGT R4, R5, R6
        let output = ArmModeInstruction::from(0xC045_4006);
        assert_eq!("SUBGT R4, R5, reg", output.disassembler());
    }

    #[test]
    fn decode_ldr_pre_indexed() {
        let output = ArmModeInstruction::from(0xE590_1000);
        assert_eq!(
            output,
            ArmModeInstruction::SingleDataTransfer {
                condition: Condition::AL,
                kind: LoadStoreKind::Load,
                quantity: ReadWriteKind::Word,
                write_back: false,
                indexing: Indexing::Pre,
                rd: 1,
                base_register: 0,
                offset_info: SingleDataTransferOffsetInfo::Immediate {
                    offset: 0,
                    offsetting: Offsetting::Up
                },
            }
        );
        assert_eq!("LDR R1, [R0, #0x0]", output.disassembler());
    }

    #[test]
    fn decode_str_pre_indexed_write_back() {
        // STR R2, [R3, #-0x4]!
        let output = ArmModeInstruction::from(0xE523_2004);
        assert_eq!("STRT R2, [R3, #-0x4]!", output.disassembler());
    }

    #[test]
    fn decode_ldrb_post_indexed() {
        // LDRB R0, [R1], #0x1
        let output = ArmModeInstruction::from(0xE4D1_0001);
        assert_eq!("LDRB R0, [R1], #0x1", output.disassembler());
    }

    #[test]
    fn decode_strbt_post_indexed_negative() {
        let output = ArmModeInstruction::from(0x1466_5ABC);
        assert_eq!("STRNEBT R5, [R6], #-0xABC", output.disassembler());
    }

    #[test]
    fn decode_register_offset_is_left_out() {
        // LDR R0, [R1, R2]
        let output = ArmModeInstruction::from(0xE791_0002);
        assert_eq!("LDR R0, [R1]", output.disassembler());

        // LDR R0, [R1], R2
        let output = ArmModeInstruction::from(0xE691_0002);
        assert_eq!("LDR R0, [R1]", output.disassembler());
    }

    #[test]
    fn decode_unhandled_classes() {
        // B, LDM, SWI
        for op_code in [0xEA00_0000, 0xE891_0003, 0xEF00_0000] {
            let output = ArmModeInstruction::from(op_code);
            assert_eq!(output, ArmModeInstruction::Unhandled);
            assert_eq!("", output.disassembler());
        }
    }
}
