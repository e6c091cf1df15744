use serde::{Deserialize, Serialize};

/// Word or byte transfer, bit 22 (B) of a Single Data Transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadWriteKind {
    Word,

    /// Printed as the `B` suffix.
    Byte,
}

impl From<bool> for ReadWriteKind {
    fn from(value: bool) -> Self {
        if value { Self::Byte } else { Self::Word }
    }
}

/// Bit 20 (L) of a Single Data Transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStoreKind {
    Store,
    Load,
}

impl From<bool> for LoadStoreKind {
    fn from(b: bool) -> Self {
        if b { Self::Load } else { Self::Store }
    }
}

impl std::fmt::Display for LoadStoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store => f.write_str("STR"),
            Self::Load => f.write_str("LDR"),
        }
    }
}

/// Bit 24 (P) of a Single Data Transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indexing {
    /// Add offset after transfer.
    Post,

    /// Add offset before transfer.
    Pre,
}

impl From<bool> for Indexing {
    fn from(state: bool) -> Self {
        if state { Self::Pre } else { Self::Post }
    }
}

/// Bit 23 (U) of a Single Data Transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Offsetting {
    /// Substract the offset from base.
    Down,

    /// Add the offset to base.
    Up,
}

impl From<bool> for Offsetting {
    fn from(state: bool) -> Self {
        if state { Self::Up } else { Self::Down }
    }
}

/// Bit 25 (I). Careful: the two instruction classes read it the opposite way,
/// see [`OperandKind::data_processing`] and [`OperandKind::single_data_transfer`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OperandKind {
    Immediate,
    Register,
}

impl OperandKind {
    /// Data Processing: I=1 is a rotated immediate.
    #[must_use]
    pub const fn data_processing(bit_25: bool) -> Self {
        if bit_25 { Self::Immediate } else { Self::Register }
    }

    /// Single Data Transfer: I=1 is a (shifted) register offset.
    #[must_use]
    pub const fn single_data_transfer(bit_25: bool) -> Self {
        if bit_25 { Self::Register } else { Self::Immediate }
    }
}
