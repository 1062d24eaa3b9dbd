//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

use crate::config::FileStorage;

#[derive(Debug, Parser)]
#[command(name = "startdeck", version, about = "Personal start-page dashboard")]
pub struct Args {
    /// Directory holding the stored settings (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub storage_dir: Option<PathBuf>,

    /// Overwrite stored settings with the defaults before launching
    #[arg(long)]
    pub reset: bool,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    pub fn storage(&self) -> FileStorage {
        let dir = self
            .storage_dir
            .clone()
            .unwrap_or_else(FileStorage::default_dir);
        FileStorage::new(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Storage;
    use std::ffi::OsString;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["startdeck"]);
        assert!(args.storage_dir.is_none());
        assert!(!args.reset);
        assert!(!args.print_config);
    }

    #[test]
    fn test_storage_dir_override() {
        let dir = TempDir::new().unwrap();
        let args = Args::parse_from([
            OsString::from("startdeck"),
            OsString::from("--storage-dir"),
            dir.path().as_os_str().to_owned(),
            OsString::from("--reset"),
        ]);
        assert!(args.reset);

        let mut storage = args.storage();
        storage.set("sample", "1").unwrap();
        assert!(dir.path().join("sample.json").exists());
    }
}
