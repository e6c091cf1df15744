/// Failure to decode a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Condition field (bits 31-28) set to the reserved `0xF`.
    #[error("invalid condition 0xF in word 0x{word:08X} at offset 0x{offset:X}")]
    InvalidCondition { word: u32, offset: usize },
}

/// Failure to disassemble a whole buffer.
///
/// Keeps the listing produced up to the failing word, whose header is the last
/// thing in it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid condition 0xF in word 0x{word:08X} at offset 0x{offset:X}")]
    InvalidCondition {
        word: u32,
        offset: usize,
        listing: String,
    },
}

impl Error {
    pub(crate) fn with_listing(error: DecodeError, listing: String) -> Self {
        match error {
            DecodeError::InvalidCondition { word, offset } => Self::InvalidCondition {
                word,
                offset,
                listing,
            },
        }
    }

    /// Listing produced before decoding stopped.
    #[must_use]
    pub fn listing(&self) -> &str {
        match self {
            Self::InvalidCondition { listing, .. } => listing,
        }
    }

    #[must_use]
    pub fn into_listing(self) -> String {
        match self {
            Self::InvalidCondition { listing, .. } => listing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message() {
        let error = DecodeError::InvalidCondition {
            word: 0xF000_0000,
            offset: 4,
        };
        assert_eq!(
            error.to_string(),
            "invalid condition 0xF in word 0xF0000000 at offset 0x4"
        );

        let error = Error::with_listing(error, "partial".to_owned());
        assert_eq!(
            error.to_string(),
            "invalid condition 0xF in word 0xF0000000 at offset 0x4"
        );
        assert_eq!(error.listing(), "partial");
        assert_eq!(error.into_listing(), "partial");
    }
}
