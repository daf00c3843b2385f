use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    pub file_path: PathBuf,
    #[arg(default_value = ".mimetype")]
    pub command: String,
    pub field: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_defaults_to_the_mimetype_command() {
        let cli = Cli::try_parse_from(["cfb-mime", "report.doc"]).unwrap();
        assert_eq!(cli.file_path, PathBuf::from("report.doc"));
        assert_eq!(cli.command, ".mimetype");
        assert!(cli.field.is_none());
    }

    #[test]
    fn it_takes_a_field_name() {
        let cli = Cli::try_parse_from(["cfb-mime", "book.xls", ".root", "clsid"]).unwrap();
        assert_eq!(cli.command, ".root");
        assert_eq!(cli.field.as_deref(), Some("clsid"));
    }
}
