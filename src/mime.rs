//! CLSID to MIME type resolution.

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

const MIME_TYPES: &[(&str, &str)] = &[
    ("00020906-0000-0000-c000-000000000046", "application/msword"),
    ("00020900-0000-0000-c000-000000000046", "application/msword"),
    ("00020820-0000-0000-c000-000000000046", "application/vnd.ms-excel"),
    ("00020810-0000-0000-c000-000000000046", "application/vnd.ms-excel"),
    ("64818d10-4f9b-11cf-86ea-00aa00b929e8", "application/vnd.ms-powerpoint"),
    ("00020d0b-0000-0000-c000-000000000046", "application/vnd.ms-outlook"),
];

/// Looks up the MIME type registered for a CLSID. Unknown CLSIDs resolve to
/// [`DEFAULT_MIME_TYPE`].
pub fn mime_type(clsid: &str) -> &'static str {
    MIME_TYPES
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(clsid))
        .map_or(DEFAULT_MIME_TYPE, |(_, mime)| *mime)
}
