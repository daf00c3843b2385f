/// Decodes an unsigned integer of 1 to 8 bytes in the given byte order.
pub fn decode_unsigned(bytes: &[u8], little_endian: bool) -> u64 {
    debug_assert!(bytes.len() <= 8, "{} bytes do not fit in a u64", bytes.len());

    let push = |acc: u64, byte: &u8| (acc << 8) | u64::from(*byte);
    if little_endian {
        bytes.iter().rev().fold(0, push)
    } else {
        bytes.iter().fold(0, push)
    }
}

/// Decodes a CLSID/UUID as stored on disk by Microsoft.
///
/// The first three components are little endian and the last two big endian,
/// whatever byte order the file itself declares.
pub fn decode_uuid(bytes: &[u8; 16]) -> String {
    format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        decode_unsigned(&bytes[0..4], true),
        decode_unsigned(&bytes[4..6], true),
        decode_unsigned(&bytes[6..8], true),
        decode_unsigned(&bytes[8..10], false),
        decode_unsigned(&bytes[10..16], false),
    )
}
