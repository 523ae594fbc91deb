//! Command line argument parsing for the Yomigana CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Yomigana - furigana annotation for Japanese text
#[derive(Parser, Debug, Clone)]
#[command(name = "yomigana")]
#[command(about = "Annotate Japanese text with furigana readings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct YomiganaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl YomiganaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add furigana readings to a sentence
    Annotate(AnnotateArgs),

    /// Remove furigana (ruby markup and bracket notation) from a sentence
    Strip(StripArgs),
}

/// Arguments for the annotate command
#[derive(Parser, Debug, Clone)]
pub struct AnnotateArgs {
    /// Text to annotate (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Emit <ruby> markup instead of bracket notation
    #[arg(short, long)]
    pub ruby: bool,

    /// Never attach readings to kanji numerals or full-width digits
    #[arg(long)]
    pub ignore_numerals: bool,

    /// Analyzer configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub mecab_config: Option<PathBuf>,

    /// Analyzer binary, overriding the configuration file
    #[arg(long, value_name = "BINARY")]
    pub mecab: Option<PathBuf>,
}

/// Arguments for the strip command
#[derive(Parser, Debug, Clone)]
pub struct StripArgs {
    /// Text to strip (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output (just the transformed text)
    Human,
    /// JSON output with the change flag
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = YomiganaArgs::parse_from(["yomigana", "annotate", "千葉"]);
        assert_eq!(args.verbosity(), 1);

        let args = YomiganaArgs::parse_from(["yomigana", "-vv", "annotate", "千葉"]);
        assert_eq!(args.verbosity(), 2);

        let args = YomiganaArgs::parse_from(["yomigana", "-q", "-v", "annotate", "千葉"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_annotate_flags() {
        let args = YomiganaArgs::parse_from([
            "yomigana",
            "annotate",
            "--ruby",
            "--ignore-numerals",
            "彼二千三百六十円も使った。",
        ]);
        match args.command {
            Command::Annotate(annotate) => {
                assert!(annotate.ruby);
                assert!(annotate.ignore_numerals);
                assert_eq!(annotate.text.as_deref(), Some("彼二千三百六十円も使った。"));
            }
            _ => panic!("expected annotate command"),
        }
    }

    #[test]
    fn test_strip_defaults_to_stdin() {
        let args = YomiganaArgs::parse_from(["yomigana", "strip"]);
        match args.command {
            Command::Strip(strip) => assert!(strip.text.is_none()),
            _ => panic!("expected strip command"),
        }
    }
}
