//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for quizbank
#[derive(Parser, Debug)]
#[command(name = "quizbank")]
#[command(author, version, about = "Quiz question bank with per-question keyword tagging")]
#[command(long_about = r#"
Quizbank serves a bank of quiz questions over HTTP and lets clients attach
or replace the keyword tags of individual questions.

Endpoints:
  GET  /questions                          List every question
  GET  /questions/{question_id}            Fetch one question
  POST /questions/{question_id}/keywords   Replace keywords (body: JSON array of strings)

Configuration is loaded from (in priority order):
1. Command line flags
2. QUIZBANK_* environment variables (e.g. QUIZBANK_SERVER__PORT=5001)
3. --config <path>     Explicit config file
4. ./quizbank.toml     Project-level config
5. ~/.config/quizbank/config.toml   Global config

Example:
  quizbank --data-file questions.json
  quizbank --port 8080 --audit-log keyword-audit.jsonl -v
"#)]
pub struct Cli {
    /// Address to bind the HTTP listener to
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// JSON file holding the question sets
    #[arg(short, long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// JSONL file recording every keyword update
    #[arg(long, value_name = "PATH")]
    pub audit_log: Option<PathBuf>,

    /// Directory for daily rolling log files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
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
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "quizbank",
            "--port",
            "8080",
            "--data-file",
            "questions.json",
            "-vv",
        ]);
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.data_file, Some(PathBuf::from("questions.json")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.bind.is_none());
        assert!(!cli.no_config);
    }
}
