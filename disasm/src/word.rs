use std::slice::ChunksExact;

/// Size in bytes of an ARM instruction.
pub const SIZE_OF_ARM_INSTRUCTION: usize = 4;

/// Reads little-endian 32-bit words out of a byte buffer.
///
/// Yields `(offset, word)` where `offset` is the position of the word's first
/// byte. A trailing partial word (1 to 3 bytes) is dropped.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    chunks: ChunksExact<'a, u8>,
    offset: usize,
}

impl<'a> Words<'a> {
    #[must_use]
    pub fn new(code: &'a [u8]) -> Self {
        Self::with_base_offset(code, 0)
    }

    /// Like [`Words::new`] for a `code` found at `base` in a larger buffer, offsets
    /// count from the start of that buffer.
    #[must_use]
    pub fn with_base_offset(code: &'a [u8], base: usize) -> Self {
        Self {
            chunks: code.chunks_exact(SIZE_OF_ARM_INSTRUCTION),
            offset: base,
        }
    }

    /// Bytes left at the end of the buffer that don't make up a full word.
    #[must_use]
    pub fn remainder(&self) -> &'a [u8] {
        self.chunks.remainder()
    }
}

impl Iterator for Words<'_> {
    type Item = (usize, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        let word = u32::from(chunk[0])
            | u32::from(chunk[1]) << 8
            | u32::from(chunk[2]) << 16
            | u32::from(chunk[3]) << 24;

        let offset = self.offset;
        self.offset += SIZE_OF_ARM_INSTRUCTION;

        Some((offset, word))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Words<'_> {}
