/// Magic bytes a compound file may start with.
pub const FILE_IDENTIFIERS: [[u8; 8]; 2] = [
    [0xd0, 0xcf, 0x11, 0xe0, 0xa1, 0xb1, 0x1a, 0xe1],
    // beta 2 files, late 1992
    [0x0e, 0x11, 0xfc, 0x0d, 0xd0, 0xcf, 0x11, 0xe0],
];

pub const ROOT_STORAGE: u8 = 0x05;

pub fn validate_file_identifier(bytes: &[u8]) -> bool {
    FILE_IDENTIFIERS.iter().any(|id| id.as_slice() == bytes)
}

pub fn validate_root_entry_type(byte: u8) -> bool {
    byte == ROOT_STORAGE
}
