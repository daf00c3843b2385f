pub mod directory;
pub mod endian;
pub mod header;
mod info;
pub mod schema;
pub mod sector;
#[cfg(test)]
pub(crate) mod test_helpers;
pub mod validate;

use super::{mime, utils, Error, Result};
use directory::DirectoryEntry;
use header::Header;
use log::{debug, info};
use std::{
    fs::File,
    io::{Read, Seek},
    path::Path,
};

pub use info::FileInfo;
pub use schema::{DirectoryField, FieldSpec, HeaderField};

/// A structurally valid compound file: its header and root directory entry.
///
/// The source is only read while the handle is being built; the handle holds
/// no file descriptor.
#[derive(Debug, Clone)]
pub struct CompoundFile {
    filename: String,
    header: Header,
    root: DirectoryEntry,
}

impl CompoundFile {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(file, path.display().to_string())
    }

    pub fn from_reader<R: Read + Seek>(mut r: R, filename: impl Into<String>) -> Result<Self> {
        let filename = filename.into();

        let header = Header::new(utils::read_512_bytes_at(&mut r, 0)?);
        if !validate::validate_file_identifier(header.field(HeaderField::FileIdentifier)) {
            debug!("{filename}: no compound file identifier");
            return Err(Error::InvalidFileIdentifier(header.file_identifier()));
        }

        let sector = header.first_directory_sector();
        let exponent = header.sector_size_exponent();
        let offset = sector::sector_offset(sector, exponent)?;
        debug!(
            "{filename}: little endian {}, directory sector {sector}, exponent {exponent}, offset {offset}",
            header.is_little_endian()
        );

        let root = DirectoryEntry::new(utils::read_128_bytes_at(&mut r, offset)?);
        if !validate::validate_root_entry_type(root.entry_type_byte()) {
            debug!("{filename}: entry at {offset} is {}", root.entry_type());
            return Err(Error::InvalidRootDirectoryType(root.entry_type_byte()));
        }

        info!("{filename}: opened compound file with clsid {}", root.clsid());
        Ok(Self {
            filename,
            header,
            root,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn root_entry(&self) -> &DirectoryEntry {
        &self.root
    }

    pub fn header_field(&self, field: HeaderField) -> &[u8] {
        self.header.field(field)
    }

    pub fn root_field(&self, field: DirectoryField) -> &[u8] {
        self.root.field(field)
    }

    pub fn is_little_endian(&self) -> bool {
        self.header.is_little_endian()
    }

    pub fn clsid(&self) -> String {
        self.root.clsid()
    }

    pub fn mime_type(&self) -> &'static str {
        mime::mime_type(&self.clsid())
    }

    pub fn describe(&self) -> FileInfo {
        let little_endian = self.is_little_endian();
        let clsid = self.clsid();

        FileInfo {
            filename: self.filename.clone(),
            file_identifier: self.header.field_bytes(HeaderField::FileIdentifier),
            file_uuid: self.header.file_uuid(),
            revision: self.header.revision(),
            version: self.header.version(),
            little_endian,
            sector_size: 1u64 << self.header.sector_size_exponent(),
            root_entry_name: self.root.name(little_endian),
            root_entry_type: self.root.entry_type(),
            root_node_color: self.root.node_color(),
            mime_type: mime::mime_type(&clsid),
            clsid,
        }
    }
}
