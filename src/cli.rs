use clap::Parser;
use std::path::PathBuf;

/// BokslZip - 터미널에서 파일을 골라 zip으로 묶는 도구
#[derive(Parser, Debug)]
#[command(name = "bokslzip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder to pick files from (omit to choose one in the TUI)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Archive name without extension (defaults to the folder name)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Compression level 0-9 (0 = store)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=9))]
    pub level: Option<u8>,

    /// Directory the archive is saved to
    #[arg(short, long, value_name = "DIR", env = "BOKSLZIP_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Archive every file without the TUI and print the saved path
    #[arg(short, long, requires = "path")]
    pub batch: bool,

    /// Exclude an entry by its listed path (repeatable, directories cascade)
    #[arg(short = 'x', long, value_name = "PREFIX")]
    pub exclude: Vec<String>,

    /// Skip hidden files and directories
    #[arg(long)]
    pub skip_hidden: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_batch_flags() {
        let cli = Cli::try_parse_from([
            "bokslzip", "photos", "--batch", "-x", "photos/raw", "-x", "photos/tmp", "-l", "0",
        ])
        .expect("parse");
        assert!(cli.batch);
        assert_eq!(cli.exclude, vec!["photos/raw", "photos/tmp"]);
        assert_eq!(cli.level, Some(0));
    }

    #[test]
    fn test_rejects_invalid_level_and_batch_without_path() {
        assert!(Cli::try_parse_from(["bokslzip", "photos", "--level", "10"]).is_err());
        assert!(Cli::try_parse_from(["bokslzip", "--batch"]).is_err());
    }
}
