use super::{Error, Result};
use paste::paste;
use std::io::{ErrorKind, Read, Seek, SeekFrom};

fn fill_at<R: Read + Seek>(r: &mut R, offset: u64, buf: &mut [u8]) -> Result<()> {
    r.seek(SeekFrom::Start(offset))?;
    r.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => Error::TruncatedRegion {
            offset,
            expected: buf.len(),
        },
        _ => Error::SourceUnreadable(e),
    })
}

macro_rules! read_bytes_at {
    ($($num:expr),*) => {
        paste! {
            $(
                pub fn [<read_ $num _bytes_at>]<R: Read + Seek>(r: &mut R, offset: u64) -> Result<[u8; $num]> {
                    let mut buf = [0u8; $num];
                    fill_at(r, offset, &mut buf)?;
                    Ok(buf)
                }
            )*
        }
    };
}

read_bytes_at!(128, 512);
