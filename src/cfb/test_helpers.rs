// Synthetic compound files for tests

use super::{
    schema::{DirectoryField, HeaderField, DIRECTORY_ENTRY_SIZE, HEADER_SIZE},
    validate::FILE_IDENTIFIERS,
};

pub const WORD_CLSID: [u8; 16] = [
    0x06, 0x09, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];

#[derive(Debug, Clone)]
pub struct FixtureBuilder {
    identifier: [u8; 8],
    little_endian: bool,
    sector_exponent: u16,
    directory_sector: u32,
    entry_type: u8,
    clsid: [u8; 16],
}

impl Default for FixtureBuilder {
    fn default() -> Self {
        Self {
            identifier: FILE_IDENTIFIERS[0],
            little_endian: true,
            sector_exponent: 9,
            directory_sector: 0,
            entry_type: 0x05,
            clsid: WORD_CLSID,
        }
    }
}

impl FixtureBuilder {
    pub fn identifier(self, identifier: [u8; 8]) -> Self {
        Self { identifier, ..self }
    }

    pub fn big_endian(self) -> Self {
        Self {
            little_endian: false,
            ..self
        }
    }

    pub fn sector_exponent(self, sector_exponent: u16) -> Self {
        Self {
            sector_exponent,
            ..self
        }
    }

    pub fn directory_sector(self, directory_sector: u32) -> Self {
        Self {
            directory_sector,
            ..self
        }
    }

    pub fn entry_type(self, entry_type: u8) -> Self {
        Self { entry_type, ..self }
    }

    pub fn clsid(self, clsid: [u8; 16]) -> Self {
        Self { clsid, ..self }
    }

    /// Header followed by sectors up to and including the root entry.
    pub fn build(self) -> Vec<u8> {
        let sector_size = 1usize << self.sector_exponent;
        let root_offset = HEADER_SIZE + self.directory_sector as usize * sector_size;
        let mut buf = vec![0u8; root_offset + DIRECTORY_ENTRY_SIZE];

        let (byte_order, exponent, sector): ([u8; 2], [u8; 2], [u8; 4]) = if self.little_endian {
            (
                [0xfe, 0xff],
                self.sector_exponent.to_le_bytes(),
                self.directory_sector.to_le_bytes(),
            )
        } else {
            (
                [0xff, 0xfe],
                self.sector_exponent.to_be_bytes(),
                self.directory_sector.to_be_bytes(),
            )
        };

        put(&mut buf, 0, HeaderField::FileIdentifier.spec().range(), &self.identifier);
        put(&mut buf, 0, HeaderField::Revision.spec().range(), &[0x3e, 0x00]);
        put(&mut buf, 0, HeaderField::Version.spec().range(), &[0x03, 0x00]);
        put(&mut buf, 0, HeaderField::ByteOrder.spec().range(), &byte_order);
        put(&mut buf, 0, HeaderField::SectorSize.spec().range(), &exponent);
        put(&mut buf, 0, HeaderField::FirstDirectorySector.spec().range(), &sector);

        let mut name = [0u8; 22];
        for (i, unit) in "Root Entry".encode_utf16().enumerate() {
            let bytes = if self.little_endian {
                unit.to_le_bytes()
            } else {
                unit.to_be_bytes()
            };
            name[i * 2..i * 2 + 2].copy_from_slice(&bytes);
        }
        let name_length: [u8; 2] = if self.little_endian { [22, 0] } else { [0, 22] };

        put(&mut buf, root_offset, 0..22, &name);
        put(&mut buf, root_offset, DirectoryField::NameLength.spec().range(), &name_length);
        put(&mut buf, root_offset, DirectoryField::EntryType.spec().range(), &[self.entry_type]);
        put(&mut buf, root_offset, DirectoryField::NodeColor.spec().range(), &[0x01]);
        put(&mut buf, root_offset, DirectoryField::Clsid.spec().range(), &self.clsid);
        buf
    }
}

fn put(buf: &mut [u8], base: usize, range: std::ops::Range<usize>, bytes: &[u8]) {
    buf[base + range.start..base + range.end].copy_from_slice(bytes);
}
