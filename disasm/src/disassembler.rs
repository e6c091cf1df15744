use std::fmt::Write;

use crate::error::{DecodeError, Error};
use crate::opcode::{ArmModeOpcode, Header};
use crate::word::Words;

/// Decodes a buffer word by word.
///
/// Stops for good after the first [`DecodeError`].
#[derive(Debug, Clone)]
pub struct Disassembler<'a> {
    words: Words<'a>,
    failed: bool,
}

impl<'a> Disassembler<'a> {
    #[must_use]
    pub fn new(code: &'a [u8]) -> Self {
        Self::with_base_offset(code, 0)
    }

    /// Decodes `code` found at byte `base` of a larger buffer (e.g. a file whose
    /// header was skipped), reported offsets count from the start of that buffer.
    #[must_use]
    pub fn with_base_offset(code: &'a [u8], base: usize) -> Self {
        let words = Words::with_base_offset(code, base);
        if !words.remainder().is_empty() {
            tracing::debug!(
                "dropping {} trailing bytes, not a full word",
                words.remainder().len()
            );
        }

        Self {
            words,
            failed: false,
        }
    }
}

impl Iterator for Disassembler<'_> {
    type Item = Result<ArmModeOpcode, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let (offset, word) = self.words.next()?;
        let decoded = ArmModeOpcode::decode(word, offset);
        if let Err(e) = &decoded {
            tracing::warn!("{e}, stopping");
            self.failed = true;
        }

        Some(decoded)
    }
}

impl std::iter::FusedIterator for Disassembler<'_> {}

/// Disassembles `code` into a listing, one line per 32-bit little-endian word.
///
/// Each line is the [`Header`] of the word followed by the instruction text (if
/// its class is decoded) and a newline.
///
/// # Errors
///
/// [`Error::InvalidCondition`] as soon as a word has the reserved `0xF`
/// condition. The listing carried by the error ends with that word's header,
/// with no newline after it.
pub fn disassemble(code: &[u8]) -> Result<String, Error> {
    disassemble_at(code, 0)
}

/// Same as [`disassemble`] for a `code` found at byte `base` of a larger buffer,
/// the offset in the error counts from the start of that buffer.
///
/// # Errors
///
/// See [`disassemble`].
pub fn disassemble_at(code: &[u8], base: usize) -> Result<String, Error> {
    let mut listing = String::new();

    for decoded in Disassembler::with_base_offset(code, base) {
        match decoded {
            Ok(op_code) => {
                tracing::trace!("0x{:08X}: {op_code}", op_code.offset);
                // Writing to a `String` doesn't fail.
                let _ = writeln!(listing, "{op_code}");
            }
            Err(e) => {
                let DecodeError::InvalidCondition { word, .. } = e;
                let _ = write!(listing, "{}", Header(word));
                return Err(Error::with_listing(e, listing));
            }
        }
    }

    Ok(listing)
}
