//! Field layouts of the two fixed-size CFB regions.
//!
//! Every field is an enum variant, so code cannot ask for a field that does
//! not exist. The snake_case names are only parsed at the edge (the CLI), and
//! an unknown name there is an error.

use std::ops::Range;

pub const HEADER_SIZE: usize = 512;
pub const DIRECTORY_ENTRY_SIZE: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    offset: usize,
    length: usize,
}

impl FieldSpec {
    const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.length
    }
}

macro_rules! schema {
    (
        $(#[$meta:meta])*
        $name:ident within $size:expr => {
            $($variant:ident = ($offset:expr, $len:expr, $label:literal),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            pub const fn spec(self) -> FieldSpec {
                match self {
                    $(Self::$variant => FieldSpec::new($offset, $len),)+
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        const _: () = {
            $(
                assert!($len > 0 && $offset + $len <= $size, "field exceeds its region");
            )+
        };

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    _ => Err($crate::err!("Unknown {} field: {}", stringify!($name), s)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

schema! {
    /// Fields of the 512-byte file header.
    HeaderField within HEADER_SIZE => {
        FileIdentifier = (0, 8, "file_identifier"),
        FileUuid = (8, 16, "file_uuid"),
        Revision = (24, 2, "revision"),
        Version = (26, 2, "version"),
        ByteOrder = (28, 2, "byte_order"),
        SectorSize = (30, 2, "sector_size"),
        ShortSectorSize = (32, 2, "short_sector_size"),
        Reserved = (34, 10, "reserved"),
        TotalSectors = (44, 4, "total_sectors"),
        FirstDirectorySector = (48, 4, "first_directory_sector"),
        Reserved1 = (52, 4, "reserved1"),
        MinStandardStreamSize = (56, 4, "min_standard_stream_size"),
        FirstShortSector = (60, 4, "first_short_sector"),
        ShortSectorCount = (64, 4, "short_sector_count"),
        FirstMasterSector = (68, 4, "first_master_sector"),
        MasterSectorCount = (72, 4, "master_sector_count"),
        MasterAllocationTable = (76, 436, "master_allocation_table"),
    }
}

schema! {
    /// Fields of a 128-byte directory entry.
    DirectoryField within DIRECTORY_ENTRY_SIZE => {
        EntryName = (0, 64, "entry_name"),
        NameLength = (64, 2, "name_length"),
        EntryType = (66, 1, "entry_type"),
        NodeColor = (67, 1, "node_color"),
        LeftChild = (68, 4, "left_child"),
        RightChild = (72, 4, "right_child"),
        RootChild = (76, 4, "root_child"),
        Clsid = (80, 16, "clsid"),
        UserFlags = (96, 4, "user_flags"),
        Created = (100, 8, "created"),
        Modified = (108, 8, "modified"),
        FirstSector = (116, 4, "first_sector"),
        StreamSize = (120, 4, "stream_size"),
        Reserved = (124, 4, "reserved"),
    }
}
