use super::directory::{EntryType, NodeColor};
use bytes::Bytes;
use std::fmt;

/// Read-only snapshot of what an opened compound file declares about itself.
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub filename: String,
    pub file_identifier: Bytes,
    pub file_uuid: String,
    pub revision: u16,
    pub version: u16,
    pub little_endian: bool,
    pub sector_size: u64,
    pub root_entry_name: String,
    pub root_entry_type: EntryType,
    pub root_node_color: NodeColor,
    pub clsid: String,
    pub mime_type: &'static str,
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file identifier:")?;
        for byte in self.file_identifier.iter() {
            write!(f, " {byte:02x}")?;
        }
        writeln!(f)?;
        writeln!(f, "filename: {}", self.filename)?;
        writeln!(f, "file uuid: {}", self.file_uuid)?;
        writeln!(f, "revision: {:#06x}", self.revision)?;
        writeln!(f, "version: {}", self.version)?;
        writeln!(f, "little endian: {}", self.little_endian)?;
        writeln!(f, "sector size: {}", self.sector_size)?;
        writeln!(f, "root entry name: {}", self.root_entry_name)?;
        writeln!(f, "root entry type: {}", self.root_entry_type)?;
        writeln!(f, "root node color: {:?}", self.root_node_color)?;
        writeln!(f, "clsid: {}", self.clsid)?;
        writeln!(f, "mime type: {}", self.mime_type)
    }
}
