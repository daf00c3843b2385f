use super::{schema::HEADER_SIZE, Error, Result};

/// Absolute byte offset of a sector. Sectors start right after the header.
pub fn sector_offset(sector: u32, exponent: u16) -> Result<u64> {
    2u64.checked_pow(u32::from(exponent))
        .and_then(|size| size.checked_mul(u64::from(sector)))
        .and_then(|offset| offset.checked_add(HEADER_SIZE as u64))
        .ok_or(Error::SectorOffsetOverflow { sector, exponent })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_locates_sectors() {
        assert_eq!(sector_offset(0, 9).unwrap(), 512);
        assert_eq!(sector_offset(1, 9).unwrap(), 1024);
        assert_eq!(sector_offset(3, 12).unwrap(), 512 + 3 * 4096);
        assert_eq!(sector_offset(5, 0).unwrap(), 517);
        assert_eq!(sector_offset(1, 31).unwrap(), 512 + (1 << 31));
    }

    #[test]
    fn it_fails_instead_of_wrapping() {
        assert!(matches!(
            sector_offset(u32::MAX, 40),
            Err(Error::SectorOffsetOverflow {
                sector: u32::MAX,
                exponent: 40
            })
        ));
        assert!(sector_offset(0, 64).is_err());
        assert!(sector_offset(1, 63).is_ok());
        assert!(sector_offset(2, 63).is_err());
    }
}
