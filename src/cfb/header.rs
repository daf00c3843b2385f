use super::{
    endian::{decode_unsigned, decode_uuid},
    schema::{HeaderField, HEADER_SIZE},
};
use bytes::Bytes;

const LITTLE_ENDIAN_MARK: u8 = 0xfe;

#[derive(Debug, Clone)]
pub struct Header(Bytes);

impl Header {
    pub(super) fn new(buf: [u8; HEADER_SIZE]) -> Self {
        Self(Bytes::copy_from_slice(&buf))
    }

    pub fn field(&self, field: HeaderField) -> &[u8] {
        &self.0[field.spec().range()]
    }

    pub(super) fn field_bytes(&self, field: HeaderField) -> Bytes {
        self.0.slice(field.spec().range())
    }

    pub fn file_identifier(&self) -> [u8; 8] {
        let mut id = [0u8; 8];
        id.copy_from_slice(self.field(HeaderField::FileIdentifier));
        id
    }

    pub fn is_little_endian(&self) -> bool {
        self.field(HeaderField::ByteOrder)[0] == LITTLE_ENDIAN_MARK
    }

    pub fn file_uuid(&self) -> String {
        let mut uuid = [0u8; 16];
        uuid.copy_from_slice(self.field(HeaderField::FileUuid));
        decode_uuid(&uuid)
    }

    pub fn revision(&self) -> u16 {
        self.decode(HeaderField::Revision) as u16
    }

    pub fn version(&self) -> u16 {
        self.decode(HeaderField::Version) as u16
    }

    pub fn sector_size_exponent(&self) -> u16 {
        self.decode(HeaderField::SectorSize) as u16
    }

    pub fn first_directory_sector(&self) -> u32 {
        self.decode(HeaderField::FirstDirectorySector) as u32
    }

    fn decode(&self, field: HeaderField) -> u64 {
        decode_unsigned(self.field(field), self.is_little_endian())
    }
}
