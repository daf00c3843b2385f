use anyhow::{bail, Result};
use cfb_mime::{
    cfb::{DirectoryField, HeaderField},
    Cli, CompoundFile,
};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let Cli {
        file_path,
        command,
        field,
    } = Cli::parse();

    let file = CompoundFile::from_path(&file_path)?;

    match command.as_str() {
        ".mimetype" => println!("{}", file.mime_type()),
        ".info" => print!("{}", file.describe()),
        ".header" | ".root" => {
            let Some(name) = field else {
                bail!("Missing <field> for {}", command);
            };
            let bytes = if command == ".header" {
                file.header_field(name.parse::<HeaderField>()?)
            } else {
                file.root_field(name.parse::<DirectoryField>()?)
            };
            println!("{}", hex(bytes));
        }
        _ => bail!("Missing or invalid command passed: {}", command),
    }

    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<String>>()
        .join(" ")
}
