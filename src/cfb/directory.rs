use super::{
    endian::{decode_unsigned, decode_uuid},
    schema::{DirectoryField, DIRECTORY_ENTRY_SIZE},
};
use bytes::Bytes;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    Empty,
    Storage,
    Stream,
    LockBytes,
    Property,
    Root,
    Unknown(u8),
}

impl EntryType {
    pub fn new(byte: u8) -> Self {
        match byte {
            0x00 => Self::Empty,
            0x01 => Self::Storage,
            0x02 => Self::Stream,
            0x03 => Self::LockBytes,
            0x04 => Self::Property,
            0x05 => Self::Root,
            _ => Self::Unknown(byte),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Storage => write!(f, "storage"),
            Self::Stream => write!(f, "stream"),
            Self::LockBytes => write!(f, "lock bytes"),
            Self::Property => write!(f, "property"),
            Self::Root => write!(f, "root storage"),
            Self::Unknown(byte) => write!(f, "unknown ({byte:#04x})"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeColor {
    Red,
    Black,
}

#[derive(Debug, Clone)]
pub struct DirectoryEntry(Bytes);

impl DirectoryEntry {
    pub(super) fn new(buf: [u8; DIRECTORY_ENTRY_SIZE]) -> Self {
        Self(Bytes::copy_from_slice(&buf))
    }

    pub fn field(&self, field: DirectoryField) -> &[u8] {
        &self.0[field.spec().range()]
    }

    pub fn entry_type_byte(&self) -> u8 {
        self.field(DirectoryField::EntryType)[0]
    }

    pub fn entry_type(&self) -> EntryType {
        EntryType::new(self.entry_type_byte())
    }

    pub fn node_color(&self) -> NodeColor {
        match self.field(DirectoryField::NodeColor)[0] {
            0x00 => NodeColor::Red,
            _ => NodeColor::Black,
        }
    }

    /// The CLSID, always decoded in Microsoft's mixed-endian layout.
    pub fn clsid(&self) -> String {
        let mut clsid = [0u8; 16];
        clsid.copy_from_slice(self.field(DirectoryField::Clsid));
        decode_uuid(&clsid)
    }

    /// Entry name stored as UTF-16. The length field counts bytes and includes
    /// the terminating null.
    pub fn name(&self, little_endian: bool) -> String {
        let declared = decode_unsigned(self.field(DirectoryField::NameLength), little_endian);
        let len = (declared as usize).min(DirectoryField::EntryName.spec().length());

        let units = self.field(DirectoryField::EntryName)[..len]
            .chunks_exact(2)
            .map(|unit| decode_unsigned(unit, little_endian) as u16);

        char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .take_while(|c| *c != '\0')
            .collect()
    }
}
