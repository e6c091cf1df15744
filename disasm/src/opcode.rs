use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::bitwise::Bits;
use crate::condition::Condition;
use crate::error::DecodeError;
use crate::instruction::ArmModeInstruction;

/// Raw word as printed at the start of every listing line: the hex value
/// followed by the bits, msb first, in groups of 8.
///
/// ```text
/// E3A01001 11100011 10100000 00010000 00000001
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header(pub u32);

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08X} ", self.0)?;
        for i in (0..32_u8).rev() {
            write!(f, "{}", self.0.bit_char(i))?;
            if i % 8 == 0 {
                f.write_str(" ")?;
            }
        }
        Ok(())
    }
}

/// A decoded word and where it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmModeOpcode {
    pub offset: usize,
    pub raw: u32,
    pub condition: Condition,
    pub instruction: ArmModeInstruction,
}

impl ArmModeOpcode {
    /// Decodes `op_code`, found at byte `offset`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidCondition`] when the condition field is `0xF`.
    pub fn decode(op_code: u32, offset: usize) -> Result<Self, DecodeError> {
        let condition = Condition::of(op_code);
        if condition.is_reserved() {
            return Err(DecodeError::InvalidCondition {
                word: op_code,
                offset,
            });
        }

        Ok(Self {
            offset,
            raw: op_code,
            condition,
            instruction: ArmModeInstruction::from(op_code),
        })
    }

    #[must_use]
    pub const fn header(&self) -> Header {
        Header(self.raw)
    }

    /// Text after the header, empty for words whose class isn't decoded.
    #[must_use]
    pub fn mnemonic(&self) -> String {
        self.instruction.disassembler()
    }
}

impl Deref for ArmModeOpcode {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

/// One listing line, without the trailing newline.
impl Display for ArmModeOpcode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.header(), self.instruction)
    }
}
