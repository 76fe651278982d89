use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use word_grouping::{EmptyTokenPolicy, InputText, WordGrouper};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Groups the words of the input string by first character, \
                  longest words first within each group."
)]
struct Args {
    #[arg(
        allow_hyphen_values = true,
        help = "Input string, quoted as a single argument"
    )]
    inputs: Vec<String>,

    #[arg(short = 's', long, help = "Drop groups holding a single word")]
    filter_singletons: bool,

    #[arg(
        long,
        value_enum,
        default_value_t = EmptyTokens::Skip,
        help = "How to treat empty words left by consecutive spaces"
    )]
    empty_tokens: EmptyTokens,

    #[arg(short = 'v', long, help = "Print debug logs to stderr")]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum EmptyTokens {
    Skip,
    Reject,
}

impl From<EmptyTokens> for EmptyTokenPolicy {
    fn from(value: EmptyTokens) -> Self {
        match value {
            EmptyTokens::Skip => EmptyTokenPolicy::Skip,
            EmptyTokens::Reject => EmptyTokenPolicy::Reject,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let input = match args.inputs.as_slice() {
        [] => {
            writeln!(out, "no parameter, requires an input string")?;
            writeln!(out, "example:\n\"no parameter requires an input string\"")?;
            return Ok(());
        }
        [input] => input,
        _ => {
            log::debug!("got {} parameters", args.inputs.len());
            writeln!(out, "only one parameter is needed, the input string")?;
            writeln!(out, "example:\n\"only one parameter is needed the input string\"")?;
            return Ok(());
        }
    };

    writeln!(out, "\ninput string for parsing:")?;
    writeln!(out, "{}", input)?;

    let text = InputText::new(input).context("invalid input string")?;
    let grouped = WordGrouper::new(&text)
        .filter_singletons(args.filter_singletons)
        .empty_tokens(args.empty_tokens.into())
        .build()
        .context("failed to group words")?;
    writeln!(out, "{}", grouped)?;

    Ok(())
}
