//! Command implementations for the Yomigana CLI.

use std::io::Read;

use log::info;

use crate::analysis::token::ReadingOptions;
use crate::analyzer::{MecabAnalyzer, MecabConfig};
use crate::cli::args::*;
use crate::error::Result;
use crate::reading::{strip_furigana, ReadingGenerator, ReadingOutput};

/// Execute a CLI command.
pub fn execute_command(args: YomiganaArgs) -> Result<()> {
    match &args.command {
        Command::Annotate(annotate_args) => annotate(annotate_args.clone(), &args),
        Command::Strip(strip_args) => strip(strip_args.clone(), &args),
    }
}

/// Annotate one sentence with furigana.
fn annotate(args: AnnotateArgs, cli_args: &YomiganaArgs) -> Result<()> {
    let input = read_input(args.text.as_deref())?;

    let mut config = match &args.mecab_config {
        Some(path) => MecabConfig::from_json_file(path)?,
        None => MecabConfig::default(),
    };
    if let Some(binary) = args.mecab {
        config.command = binary;
    }

    let options = ReadingOptions::new()
        .with_ruby_tags(args.ruby)
        .with_ignore_numerals(args.ignore_numerals);

    let mut generator = ReadingGenerator::new(MecabAnalyzer::with_config(config));
    let output = generator.annotate(&input, &options)?;

    emit(&output, cli_args)
}

/// Remove furigana from one sentence.
fn strip(args: StripArgs, cli_args: &YomiganaArgs) -> Result<()> {
    let input = read_input(args.text.as_deref())?;
    let output = strip_furigana(&input);
    emit(&output, cli_args)
}

/// Positional text, or stdin when omitted. Trailing line terminators are
/// dropped so piped input behaves like a positional argument.
fn read_input(text: Option<&str>) -> Result<String> {
    let raw = match text {
        Some(t) => t.to_string(),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(raw.trim_end_matches(['\r', '\n']).to_string())
}

fn emit(output: &ReadingOutput, cli_args: &YomiganaArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Human => {
            println!("{}", output.text);
            if !output.changed {
                info!("no change produced");
            }
        }
        OutputFormat::Json => {
            let json = if cli_args.pretty {
                serde_json::to_string_pretty(output)?
            } else {
                serde_json::to_string(output)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
