use std::io;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("ERR - source unreadable: {0}")]
    SourceUnreadable(#[from] io::Error),

    #[error("ERR - truncated region: expected {expected} bytes at offset {offset}")]
    TruncatedRegion { offset: u64, expected: usize },

    #[error("ERR - invalid file identifier: {0:02x?}")]
    InvalidFileIdentifier([u8; 8]),

    #[error("ERR - not a root directory entry: type {0:#04x}")]
    InvalidRootDirectoryType(u8),

    #[error("ERR - sector {sector} with size exponent {exponent} is out of range")]
    SectorOffsetOverflow { sector: u32, exponent: u16 },

    #[error("ERR - other: {0}")]
    Other(#[from] anyhow::Error),
}
