//! Disassembler for 32-bit ARM instruction words.
//!
//! Decodes Single Data Transfer and Data Processing instructions; any other
//! class shows up in the listing with its raw word only.
//!
//! ```
//! let code = 0xE3A0_1001_u32.to_le_bytes();
//! let listing = disasm::disassemble(&code).unwrap();
//! assert_eq!(listing, "E3A01001 11100011 10100000 00010000 00000001 MOV R1, #0x1\n");
//! ```

#[allow(clippy::cast_possible_truncation)]
pub mod bitwise;

pub mod alu_instruction;

#[allow(clippy::cast_possible_truncation)]
pub mod condition;

mod disassembler;
mod error;
pub mod flags;

#[allow(clippy::similar_names)]
pub mod instruction;

pub mod opcode;
pub mod word;

pub use disassembler::{Disassembler, disassemble, disassemble_at};
pub use error::{DecodeError, Error};
