use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalogue", bin_name = "catalogue", version)]
#[command(about = "Interactive in-memory item catalogue", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json and logs [env: CATALOGUE_HOME]
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub home: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable styled output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive menu (the default)
    #[command(alias = "shell")]
    Run,

    /// Get or set configuration
    Config {
        /// Configuration key (log-level, line-width, color)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["catalogue"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_config_key_and_value() {
        let cli = Cli::try_parse_from(["catalogue", "config", "line-width", "80"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                key: Some("line-width".into()),
                value: Some("80".into()),
            })
        );
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli =
            Cli::try_parse_from(["catalogue", "shell", "--home", "/tmp/c", "-v", "--no-color"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Run));
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/c")));
        assert!(cli.verbose);
        assert!(cli.no_color);
    }
}
