use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Override the default config file path
    #[arg(short = 'c', long = "config")]
    pub config_file: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Character that starts a slash command for this session
    #[arg(long = "prefix")]
    pub prefix: Option<char>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let args = CliArgs::try_parse_from([
            "slashline",
            "-c",
            "custom.toml",
            "--log-file",
            "out.log",
            "--prefix",
            ":",
        ])
        .unwrap();

        assert_eq!(args.config_file, Some(PathBuf::from("custom.toml")));
        assert_eq!(args.log_file, Some(PathBuf::from("out.log")));
        assert_eq!(args.prefix, Some(':'));
    }

    #[test]
    fn test_prefix_must_be_one_character() {
        assert!(CliArgs::try_parse_from(["slashline", "--prefix", "//"]).is_err());
    }
}
