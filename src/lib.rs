pub mod cfb;
mod cli;
mod error;
#[macro_use]
mod macros;
pub mod mime;
mod utils;

pub type Result<T> = std::result::Result<T, Error>;
pub use cfb::CompoundFile;
pub use cli::Cli;
pub use error::Error;

/// Opens `path` as a compound file and resolves its MIME type.
pub fn mime_type_of<P: AsRef<std::path::Path>>(path: P) -> Result<&'static str> {
    CompoundFile::from_path(path).map(|file| file.mime_type())
}
