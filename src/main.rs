use anyhow::Result;
use clap::{Parser, Subcommand};
use codediff::areas::comparator::Comparator;
use codediff::artifacts::core::PagerWriter;
use codediff::artifacts::diff::engine::DiffOptions;
use codediff::commands::render::OutputFormat;
use is_terminal::IsTerminal;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "codediff",
    version = "0.1.0",
    about = "A CLI tool for comparing code differences",
    long_about = "This tool compares two versions of a code document and reports \
    every line as unchanged, removed or added, as position-stable blocks that \
    preserve the original line numbering and exact text.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "file",
        about = "Compare two files",
        long_about = "This command compares the current and suggested versions of a document \
        read from two files and prints the classified difference."
    )]
    File {
        #[arg(index = 1, help = "The current code file")]
        current_file: String,
        #[arg(index = 2, help = "The suggested code file")]
        suggested_file: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
        format: OutputFormat,
        #[arg(short, long, help = "Write the output to a file instead of stdout")]
        output: Option<String>,
        #[arg(long, help = "Ignore leading and trailing whitespace when aligning lines")]
        ignore_whitespace: bool,
        #[arg(
            long,
            help = "Keep removals visible even when the removed text survives in the suggested code"
        )]
        no_collapse_moves: bool,
    },
    #[command(
        name = "text",
        about = "Compare two text arguments",
        long_about = "This command compares two literal text arguments and prints the \
        classified difference."
    )]
    Text {
        #[arg(short, long, help = "The current code text")]
        current: String,
        #[arg(short, long, help = "The suggested code text")]
        suggested: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
        format: OutputFormat,
        #[arg(long, help = "Ignore leading and trailing whitespace when aligning lines")]
        ignore_whitespace: bool,
        #[arg(
            long,
            help = "Keep removals visible even when the removed text survives in the suggested code"
        )]
        no_collapse_moves: bool,
    },
}

impl Commands {
    fn format(&self) -> OutputFormat {
        match self {
            Commands::File { format, .. } | Commands::Text { format, .. } => *format,
        }
    }

    fn options(&self) -> DiffOptions {
        match self {
            Commands::File {
                ignore_whitespace,
                no_collapse_moves,
                ..
            }
            | Commands::Text {
                ignore_whitespace,
                no_collapse_moves,
                ..
            } => DiffOptions::new(*ignore_whitespace, !*no_collapse_moves),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // long listings page through minus when a terminal is attached
    let pager = (cli.command.format() == OutputFormat::Text && std::io::stdout().is_terminal())
        .then(minus::Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let pwd = std::env::current_dir()?;
    let comparator = Comparator::new(&pwd.to_string_lossy(), cli.command.options(), writer)?;

    match &cli.command {
        Commands::File {
            current_file,
            suggested_file,
            format,
            output,
            ..
        } => {
            comparator
                .compare_files(
                    Path::new(current_file),
                    Path::new(suggested_file),
                    *format,
                    output.as_deref().map(Path::new),
                )
                .await?
        }
        Commands::Text {
            current, suggested, ..
        } => {
            comparator
                .compare_text(current, suggested, cli.command.format())
                .await?
        }
    }

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
